use crate::constants::{
    AXIS_COLORS, AXIS_TIP_DISTANCE, AXIS_TIP_SCALE, CORNER_COLOR, CORNER_SCALE, CUBE_HALF_EXTENT,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// A point in the scene drawn as a round marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    pub color: [f32; 3],
    pub scale: f32,
}

// Corner indices follow the bit pattern of `cube_corners`: bit0 = x, bit1 = y, bit2 = z.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

pub fn cube_corners() -> [Vec3; 8] {
    let h = CUBE_HALF_EXTENT;
    std::array::from_fn(|i| {
        let sign = |bit: usize| if i & (1 << bit) != 0 { h } else { -h };
        Vec3::new(sign(0), sign(1), sign(2))
    })
}

/// Cube corners followed by the +x, +y, +z axis tips.
pub fn scene_markers() -> Vec<Marker> {
    let mut markers: Vec<Marker> = cube_corners()
        .into_iter()
        .map(|position| Marker {
            position,
            color: CORNER_COLOR,
            scale: CORNER_SCALE,
        })
        .collect();
    for (axis, color) in [Vec3::X, Vec3::Y, Vec3::Z].into_iter().zip(AXIS_COLORS) {
        markers.push(Marker {
            position: axis * AXIS_TIP_DISTANCE,
            color,
            scale: AXIS_TIP_SCALE,
        });
    }
    markers
}

/// Project a world-space point to screen pixels (origin top-left, y down).
///
/// Returns `None` when the point lies on or behind the camera plane.
#[inline]
pub fn project_to_screen(view_proj: Mat4, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let clip: Vec4 = view_proj * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}
