use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchKind {
    Press,
    Move,
    Release,
    Cancel,
}

/// One touch sample as delivered by the host, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchKind,
    pub position: Vec2,
}

impl TouchEvent {
    pub fn new(kind: TouchKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Vec2::new(x, y),
        }
    }

    pub fn press(x: f32, y: f32) -> Self {
        Self::new(TouchKind::Press, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchKind::Move, x, y)
    }

    pub fn release(x: f32, y: f32) -> Self {
        Self::new(TouchKind::Release, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchKind::Cancel, x, y)
    }
}
