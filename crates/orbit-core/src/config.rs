use crate::constants::{MOVE_THRESHOLD, ROTATION_SCALE};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("rotation scale must be finite, got {0}")]
    NonFiniteScale(f32),
    #[error("move threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f32),
}

/// Tuning for the drag-to-rotation mapping.
///
/// `move_threshold` gates on the raw pixel delta; `rotation_scale` only
/// affects the value handed to the sink. The two are independent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    pub rotation_scale: f32,
    pub move_threshold: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            rotation_scale: ROTATION_SCALE,
            move_threshold: MOVE_THRESHOLD,
        }
    }
}

impl DragConfig {
    pub fn new(rotation_scale: f32, move_threshold: f32) -> Result<Self, ConfigError> {
        if !rotation_scale.is_finite() {
            return Err(ConfigError::NonFiniteScale(rotation_scale));
        }
        if !move_threshold.is_finite() || move_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(move_threshold));
        }
        Ok(Self {
            rotation_scale,
            move_threshold,
        })
    }
}
