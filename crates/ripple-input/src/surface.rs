//! Host positions and their mapping onto grid cells.

use serde::{Deserialize, Serialize};

/// A position on the rendering surface, normalized so the surface spans
/// `[0, 1]` on both axes. Values outside that range are allowed and clamp
/// to the border cells.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Horizontal position, 0 at the left edge.
    pub x: f32,
    /// Vertical position, 0 at the top edge.
    pub y: f32,
}

impl SurfacePoint {
    /// Creates a point from normalized coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalizes a pixel position on a `width × height` surface.
    /// A zero-sized surface maps everything to the origin.
    pub fn from_pixels(px: f32, py: f32, width: f32, height: f32) -> Self {
        let norm = |p: f32, size: f32| if size > 0.0 { p / size } else { 0.0 };
        Self {
            x: norm(px, width),
            y: norm(py, height),
        }
    }

    /// The grid cell under this point on a `count_x × count_y` grid.
    ///
    /// `cell = clamp(floor(u * (count - 1)), 0, count - 1)` per axis.
    pub fn to_cell(self, count_x: usize, count_y: usize) -> (i32, i32) {
        (axis_to_cell(self.x, count_x), axis_to_cell(self.y, count_y))
    }
}

fn axis_to_cell(u: f32, count: usize) -> i32 {
    let max = count.saturating_sub(1) as f32;
    let cell = (u * max).floor();
    if cell.is_nan() {
        0
    } else {
        cell.clamp(0.0, max) as i32
    }
}
