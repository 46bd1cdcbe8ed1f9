use glam::Vec3;

// Shared gesture/camera tuning constants used by both web and native frontends.

// Drag gesture
pub const ROTATION_SCALE: f32 = 0.005; // pixel delta -> rotation delta (radians)
pub const MOVE_THRESHOLD: f32 = 0.5; // min per-axis pixel delta before a rotation is emitted

// Orbit camera
pub const PITCH_LIMIT: f32 = 1.4; // keeps the camera from flipping over the poles
pub const INITIAL_YAW: f32 = 0.0;
pub const INITIAL_PITCH: f32 = -0.25; // slight downward tilt
pub const CAMERA_DISTANCE: f32 = 6.0;
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Scene layout
pub const CUBE_HALF_EXTENT: f32 = 1.0;
pub const CORNER_SCALE: f32 = 0.25; // billboard size of a cube corner
pub const AXIS_TIP_SCALE: f32 = 0.35;
pub const AXIS_TIP_DISTANCE: f32 = 1.8;

pub const CORNER_COLOR: [f32; 3] = [0.85, 0.85, 0.9];
pub const AXIS_COLORS: [[f32; 3]; 3] = [
    [0.9, 0.3, 0.3], // x: red-ish
    [0.3, 0.9, 0.4], // y: green-ish
    [0.3, 0.5, 0.9], // z: blue-ish
];

#[inline]
pub fn camera_target() -> Vec3 {
    Vec3::ZERO
}
