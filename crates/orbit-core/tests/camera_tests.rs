// Tests for the orbit camera sink, config validation and scene projection.

use glam::{Vec2, Vec3};
use orbit_core::{
    project_to_screen, scene_markers, ConfigError, DragConfig, DragTracker, OrbitCamera,
    RotationSink, TouchEvent, CAMERA_DISTANCE, CUBE_EDGES, INITIAL_PITCH, MOVE_THRESHOLD,
    PITCH_LIMIT, ROTATION_SCALE,
};

#[test]
fn default_config_uses_constants() {
    let c = DragConfig::default();
    assert_eq!(c.rotation_scale, ROTATION_SCALE);
    assert_eq!(c.move_threshold, MOVE_THRESHOLD);
    assert_eq!(DragConfig::new(ROTATION_SCALE, MOVE_THRESHOLD), Ok(c));
}

#[test]
fn config_rejects_bad_values() {
    assert_eq!(
        DragConfig::new(f32::INFINITY, 0.5),
        Err(ConfigError::NonFiniteScale(f32::INFINITY))
    );
    assert!(matches!(
        DragConfig::new(f32::NAN, 0.5),
        Err(ConfigError::NonFiniteScale(_))
    ));
    assert_eq!(
        DragConfig::new(0.005, -1.0),
        Err(ConfigError::InvalidThreshold(-1.0))
    );
    assert!(matches!(
        DragConfig::new(0.005, f32::NAN),
        Err(ConfigError::InvalidThreshold(_))
    ));
    // Zero threshold and negative scale are legal
    assert!(DragConfig::new(-0.005, 0.0).is_ok());
}

#[test]
fn orbit_camera_default_pose() {
    let cam = OrbitCamera::default();
    assert_eq!(cam.pitch, INITIAL_PITCH);
    let eye = cam.eye();
    assert!((eye.length() - CAMERA_DISTANCE).abs() < 1e-4);
    // Looking down on the target from slightly above, along +z
    assert!(eye.y > 0.0);
    assert!(eye.z > 0.0);
    assert!(eye.x.abs() < 1e-5);
}

#[test]
fn orbit_camera_applies_yaw_and_pitch() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.3, 0.1);
    assert!((cam.yaw - 0.3).abs() < 1e-6);
    assert!((cam.pitch - (INITIAL_PITCH + 0.1)).abs() < 1e-6);
}

#[test]
fn orbit_camera_pitch_is_clamped() {
    let mut cam = OrbitCamera::default();
    for _ in 0..100 {
        cam.rotate(0.0, 0.5);
        assert!(cam.pitch <= PITCH_LIMIT);
    }
    assert_eq!(cam.pitch, PITCH_LIMIT);
    for _ in 0..100 {
        cam.rotate(0.0, -0.5);
        assert!(cam.pitch >= -PITCH_LIMIT);
    }
    assert_eq!(cam.pitch, -PITCH_LIMIT);
}

#[test]
fn orbit_camera_yaw_is_unbounded() {
    let mut cam = OrbitCamera::default();
    for _ in 0..10 {
        cam.rotate(1.0, 0.0);
    }
    assert!((cam.yaw - 10.0).abs() < 1e-5);
}

#[test]
fn orbit_camera_locks_freeze_axes() {
    let mut cam = OrbitCamera::default();
    assert!(cam.toggle_yaw_lock());
    cam.rotate(0.5, 0.2);
    assert_eq!(cam.yaw, 0.0);
    assert!((cam.pitch - (INITIAL_PITCH + 0.2)).abs() < 1e-6);

    assert!(!cam.toggle_yaw_lock());
    assert!(cam.toggle_pitch_lock());
    let pitch = cam.pitch;
    cam.rotate(0.5, 0.2);
    assert!((cam.yaw - 0.5).abs() < 1e-6);
    assert_eq!(cam.pitch, pitch);
}

#[test]
fn drag_rotates_orbit_camera() {
    let mut t = DragTracker::new(OrbitCamera::default());
    t.handle_touch_event(TouchEvent::press(100.0, 100.0));
    t.handle_touch_event(TouchEvent::moved(200.0, 100.0));
    t.handle_touch_event(TouchEvent::release(200.0, 100.0));
    let cam = t.into_sink();
    assert!((cam.yaw - 100.0 * ROTATION_SCALE).abs() < 1e-6);
    assert_eq!(cam.pitch, INITIAL_PITCH);
}

#[test]
fn target_projects_to_screen_center() {
    let cam = OrbitCamera::default();
    let vp = cam.view_proj(800.0 / 600.0);
    let p = project_to_screen(vp, cam.target, 800.0, 600.0).unwrap();
    assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-2, "got {p:?}");
}

#[test]
fn point_behind_camera_is_rejected() {
    let cam = OrbitCamera::default();
    let vp = cam.view_proj(1.0);
    // Twice as far from the target as the eye, on the eye's side
    let behind = cam.eye() * 2.0;
    assert_eq!(project_to_screen(vp, behind, 100.0, 100.0), None);
}

#[test]
fn projection_y_points_down() {
    let cam = OrbitCamera {
        pitch: 0.0,
        ..OrbitCamera::default()
    };
    let vp = cam.view_proj(1.0);
    let above = project_to_screen(vp, Vec3::new(0.0, 1.0, 0.0), 100.0, 100.0).unwrap();
    assert!(above.y < 50.0);
}

#[test]
fn scene_has_cube_corners_and_axis_tips() {
    let markers = scene_markers();
    assert_eq!(markers.len(), 11);
    for (a, b) in CUBE_EDGES {
        let d = markers[a].position - markers[b].position;
        // Each edge joins corners that differ along exactly one axis
        let differing = [d.x, d.y, d.z].iter().filter(|v| v.abs() > 1e-6).count();
        assert_eq!(differing, 1, "edge ({a},{b})");
    }
}

#[test]
fn lock_keys_map_to_axes() {
    use orbit_core::CameraLock;
    assert_eq!(CameraLock::from_key("x"), Some(CameraLock::Yaw));
    assert_eq!(CameraLock::from_key("X"), Some(CameraLock::Yaw));
    assert_eq!(CameraLock::from_key("y"), Some(CameraLock::Pitch));
    assert_eq!(CameraLock::from_key("z"), None);
    assert_eq!(CameraLock::from_key("Escape"), None);

    let mut cam = OrbitCamera::default();
    assert!(cam.toggle_lock(CameraLock::Pitch));
    assert!(cam.lock_pitch);
    assert!(!cam.lock_yaw);
}
