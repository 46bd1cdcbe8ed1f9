use crate::constants::{BACKGROUND, EDGE_STROKE, EDGE_WIDTH_PX, MARKER_RADIUS_PX};
use glam::Vec3;
use orbit_core::{
    cube_corners, project_to_screen, scene_markers, Marker, OrbitCamera, CAMERA_DISTANCE,
    CUBE_EDGES,
};
use web_sys as web;

/// Screen radius of a marker, shrinking with distance from the eye.
#[inline]
pub fn marker_radius_px(scale: f32, distance: f32) -> f32 {
    MARKER_RADIUS_PX * scale * CAMERA_DISTANCE / distance.max(1e-3)
}

/// Markers ordered far to near so closer ones paint over farther ones.
pub fn depth_sorted(markers: &[Marker], eye: Vec3) -> Vec<(f32, Marker)> {
    let mut out: Vec<(f32, Marker)> = markers
        .iter()
        .map(|m| (m.position.distance(eye), *m))
        .collect();
    out.sort_by(|a, b| b.0.total_cmp(&a.0));
    out
}

#[inline]
pub fn css_rgb(color: [f32; 3]) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({}, {}, {})", c(color[0]), c(color[1]), c(color[2]))
}

pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    camera: &OrbitCamera,
    width: f32,
    height: f32,
) {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    let view_proj = camera.view_proj(width / height.max(1.0));

    let corners = cube_corners().map(|p| project_to_screen(view_proj, p, width, height));
    ctx.set_stroke_style_str(EDGE_STROKE);
    ctx.set_line_width(EDGE_WIDTH_PX);
    ctx.begin_path();
    for (a, b) in CUBE_EDGES {
        if let (Some(pa), Some(pb)) = (corners[a], corners[b]) {
            ctx.move_to(pa.x as f64, pa.y as f64);
            ctx.line_to(pb.x as f64, pb.y as f64);
        }
    }
    ctx.stroke();

    let eye = camera.eye();
    for (distance, m) in depth_sorted(&scene_markers(), eye) {
        let Some(p) = project_to_screen(view_proj, m.position, width, height) else {
            continue;
        };
        ctx.set_fill_style_str(&css_rgb(m.color));
        ctx.begin_path();
        _ = ctx.arc(
            p.x as f64,
            p.y as f64,
            marker_radius_px(m.scale, distance) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
}
