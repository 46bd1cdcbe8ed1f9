//! Camera types shared by the native and web frontends.
//!
//! These types avoid referencing platform-specific APIs. [`OrbitCamera`] is
//! the rotation sink both frontends hand to the drag tracker; each frame they
//! turn it into a [`Camera`] to build the view-projection matrix.

use crate::constants::{
    camera_target, CAMERA_DISTANCE, CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR, INITIAL_PITCH,
    INITIAL_YAW, PITCH_LIMIT,
};
use crate::sink::RotationSink;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Axis lock bound to a key in the frontends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraLock {
    Yaw,
    Pitch,
}

impl CameraLock {
    /// `x` locks yaw (horizontal drag), `y` locks pitch (vertical drag).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "x" | "X" => Some(Self::Yaw),
            "y" | "Y" => Some(Self::Pitch),
            _ => None,
        }
    }
}

/// Camera orbiting a target at a fixed distance, steered by yaw and pitch.
///
/// `pitch` is the tilt of the view direction: negative looks down on the
/// target, so the eye sits above it. Pitch is clamped to
/// `[-PITCH_LIMIT, PITCH_LIMIT]`; yaw wraps freely.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    pub lock_yaw: bool,
    pub lock_pitch: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH,
            distance: CAMERA_DISTANCE,
            target: camera_target(),
            lock_yaw: false,
            lock_pitch: false,
        }
    }
}

impl OrbitCamera {
    pub fn apply_rotation(&mut self, dx: f32, dy: f32) {
        if !self.lock_yaw {
            self.yaw += dx;
        }
        if !self.lock_pitch {
            self.pitch = (self.pitch + dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    pub fn toggle_yaw_lock(&mut self) -> bool {
        self.lock_yaw = !self.lock_yaw;
        log::info!("[camera] yaw lock {}", on_off(self.lock_yaw));
        self.lock_yaw
    }

    pub fn toggle_pitch_lock(&mut self) -> bool {
        self.lock_pitch = !self.lock_pitch;
        log::info!("[camera] pitch lock {}", on_off(self.lock_pitch));
        self.lock_pitch
    }

    pub fn toggle_lock(&mut self, lock: CameraLock) -> bool {
        match lock {
            CameraLock::Yaw => self.toggle_yaw_lock(),
            CameraLock::Pitch => self.toggle_pitch_lock(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, -sp, cp * cy) * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    #[inline]
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.camera(aspect).view_proj()
    }
}

impl RotationSink for OrbitCamera {
    fn rotate(&mut self, dx: f32, dy: f32) {
        self.apply_rotation(dx, dy);
    }
}

fn on_off(v: bool) -> &'static str {
    if v {
        "on"
    } else {
        "off"
    }
}
