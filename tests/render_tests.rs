// Host-side tests for the canvas renderer's pure helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod render {
    include!("../src/render.rs");
}

use constants::*;
use glam::Vec3;
use orbit_core::{scene_markers, OrbitCamera, CAMERA_DISTANCE};
use render::*;

#[test]
fn marker_radius_shrinks_with_distance() {
    let near = marker_radius_px(1.0, CAMERA_DISTANCE * 0.5);
    let mid = marker_radius_px(1.0, CAMERA_DISTANCE);
    let far = marker_radius_px(1.0, CAMERA_DISTANCE * 2.0);
    assert!((mid - MARKER_RADIUS_PX).abs() < 1e-4);
    assert!(near > mid && mid > far);
}

#[test]
fn marker_radius_survives_zero_distance() {
    assert!(marker_radius_px(1.0, 0.0).is_finite());
}

#[test]
fn markers_sort_far_to_near() {
    let cam = OrbitCamera::default();
    let sorted = depth_sorted(&scene_markers(), cam.eye());
    assert_eq!(sorted.len(), scene_markers().len());
    for pair in sorted.windows(2) {
        assert!(pair[0].0 >= pair[1].0);
    }
}

#[test]
fn depth_sort_matches_eye_position() {
    let markers = scene_markers();
    let eye = Vec3::new(0.0, 0.0, 10.0);
    let sorted = depth_sorted(&markers, eye);
    // The +z axis tip is the closest marker to an eye on +z
    let (_, nearest) = sorted.last().copied().unwrap();
    assert_eq!(nearest.position, Vec3::new(0.0, 0.0, 1.8));
}

#[test]
fn css_rgb_formats_and_clamps() {
    assert_eq!(css_rgb([1.0, 0.0, 0.5]), "rgb(255, 0, 128)");
    assert_eq!(css_rgb([2.0, -1.0, 0.0]), "rgb(255, 0, 0)");
}
