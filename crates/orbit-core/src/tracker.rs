//! Single-finger drag tracking.
//!
//! [`DragTracker`] turns an ordered stream of [`TouchEvent`]s into
//! `rotate(dx, dy)` calls on a [`RotationSink`]. Every move advances the
//! tracked position, so jitter below the threshold is dropped rather than
//! accumulated toward a later emission.

use crate::config::DragConfig;
use crate::event::{TouchEvent, TouchKind};
use crate::sink::RotationSink;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: Vec2,
    },
}

/// Gate a raw pixel delta and scale it into a rotation delta.
///
/// Returns `None` unless at least one axis moved strictly more than the
/// threshold. Both axes are scaled together when the gate opens.
#[inline]
pub fn rotation_delta(delta: Vec2, config: &DragConfig) -> Option<Vec2> {
    let t = config.move_threshold;
    (delta.x.abs() > t || delta.y.abs() > t).then(|| delta * config.rotation_scale)
}

pub struct DragTracker<S> {
    config: DragConfig,
    state: DragState,
    sink: S,
}

impl<S: RotationSink> DragTracker<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(DragConfig::default(), sink)
    }

    pub fn with_config(config: DragConfig, sink: S) -> Self {
        Self {
            config,
            state: DragState::Idle,
            sink,
        }
    }

    pub fn handle_touch_event(&mut self, event: TouchEvent) {
        let pos = event.position;
        match event.kind {
            TouchKind::Press => {
                if let DragState::Dragging { last } = self.state {
                    log::debug!(
                        "[drag] press while dragging from ({:.1},{:.1}); restarting",
                        last.x,
                        last.y
                    );
                }
                self.state = DragState::Dragging { last: pos };
                log::debug!("[drag] begin at ({:.1},{:.1})", pos.x, pos.y);
            }
            TouchKind::Move => {
                let DragState::Dragging { last } = self.state else {
                    return;
                };
                self.state = DragState::Dragging { last: pos };
                if let Some(rot) = rotation_delta(pos - last, &self.config) {
                    log::trace!("[drag] rotate ({:.4},{:.4})", rot.x, rot.y);
                    self.sink.rotate(rot.x, rot.y);
                }
            }
            TouchKind::Release | TouchKind::Cancel => {
                if self.is_dragging() {
                    log::debug!("[drag] end ({:?})", event.kind);
                }
                self.state = DragState::Idle;
            }
        }
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Position of the latest sample, only while a drag is active.
    pub fn last_position(&self) -> Option<Vec2> {
        match self.state {
            DragState::Dragging { last } => Some(last),
            DragState::Idle => None,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
