//! Integer line rasterization.
//!
//! Used to connect a contact's previous and current cell so that fast
//! motion deposits force along its whole path instead of only at the
//! sampled endpoints.

/// Iterator over the lattice points of a line segment, endpoints included.
///
/// Consecutive points are 8-connected (differ by at most one in each
/// axis). No point is repeated. A segment whose endpoints coincide
/// yields that single point. The number of points is exactly
/// `max(|x1 - x0|, |y1 - y0|) + 1`.
///
/// Error terms are carried in `i64` so the full `i32` coordinate range
/// is safe.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i64,
    dy: i64,
    step_x: i32,
    step_y: i32,
    err: i64,
    remaining: usize,
}

impl LinePoints {
    /// Creates an iterator from `(x0, y0)` to `(x1, y1)`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = -(i64::from(y1) - i64::from(y0)).abs();
        let major = dx.max(-dy);

        Self {
            x: x0,
            y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            step_x: if x0 < x1 { 1 } else { -1 },
            step_y: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            remaining: usize::try_from(major).map_or(usize::MAX, |m| m.saturating_add(1)),
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = (self.x, self.y);
        if self.x == self.end_x && self.y == self.end_y {
            self.remaining = 0;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.step_x;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.step_y;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

impl std::iter::FusedIterator for LinePoints {}

/// Visits every lattice point from `(x0, y0)` to `(x1, y1)` in order.
///
/// Callback form of [`LinePoints`].
pub fn line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: F)
where
    F: FnMut(i32, i32),
{
    for (x, y) in LinePoints::new(x0, y0, x1, y1) {
        visit(x, y);
    }
}
