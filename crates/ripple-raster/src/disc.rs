//! Filled-disc rasterization.
//!
//! Built on a midpoint-circle walk over one octant. For each octant point
//! `(x, y)` the disc emits the horizontal spans at rows `±y` and the
//! transposed spans at rows `±x`, which together fill the interior
//! without gaps.
//!
//! Spans overlap near the center and on row zero, so some cells are
//! visited more than once. [`filled_disc`] reports every visit as-is;
//! [`disc_cells`] collapses them.

use crate::line::line;

/// Visits every cell of the filled disc of `radius` around `(cx, cy)`.
///
/// Every lattice point with `dx² + dy² <= radius²` is visited at least
/// once; no visited point lies outside `(radius + 1)²`. Cells may be
/// visited more than once. A negative radius visits nothing.
///
/// Span endpoints saturate at the `i32` range.
pub fn filled_disc<F>(cx: i32, cy: i32, radius: i32, mut visit: F)
where
    F: FnMut(i32, i32),
{
    if radius < 0 {
        return;
    }

    let mut x = radius;
    let mut y = 0i32;
    let mut err = 1 - radius;

    while x >= y {
        // Horizontal spans at rows ±y.
        span(cx, cy, x, y, &mut visit);
        span(cx, cy, x, -y, &mut visit);
        // Transposed spans at rows ±x.
        span(cx, cy, y, x, &mut visit);
        span(cx, cy, y, -x, &mut visit);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn span<F>(cx: i32, cy: i32, half_width: i32, row: i32, visit: &mut F)
where
    F: FnMut(i32, i32),
{
    let y = cy.saturating_add(row);
    line(
        cx.saturating_sub(half_width),
        y,
        cx.saturating_add(half_width),
        y,
        |px, py| visit(px, py),
    );
}

/// Returns the cells of a filled disc, sorted and without duplicates.
pub fn disc_cells(cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    filled_disc(cx, cy, radius, |x, y| cells.push((x, y)));
    cells.sort_unstable();
    cells.dedup();
    cells
}
