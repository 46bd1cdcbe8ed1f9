/// Receiver of incremental rotation produced by a drag.
///
/// Calls are fire-and-forget: implementations must not block and have no way
/// to report failure back to the tracker.
pub trait RotationSink {
    fn rotate(&mut self, dx: f32, dy: f32);
}

impl<F> RotationSink for F
where
    F: FnMut(f32, f32),
{
    fn rotate(&mut self, dx: f32, dy: f32) {
        self(dx, dy)
    }
}
