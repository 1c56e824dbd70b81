//! Per-contact position history.

use crate::surface::SurfacePoint;

/// Current and previous position of one active contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactTracker {
    current: SurfacePoint,
    previous: SurfacePoint,
}

impl ContactTracker {
    /// Starts tracking at `pos`; the previous position equals the current.
    pub fn new(pos: SurfacePoint) -> Self {
        Self {
            current: pos,
            previous: pos,
        }
    }

    /// Records a new position, shifting the current one into previous.
    pub fn move_to(&mut self, pos: SurfacePoint) {
        self.previous = self.current;
        self.current = pos;
    }

    /// Latest position.
    pub fn current(&self) -> SurfacePoint {
        self.current
    }

    /// Position before the latest move.
    pub fn previous(&self) -> SurfacePoint {
        self.previous
    }
}
