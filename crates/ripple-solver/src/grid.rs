//! The four equal-shaped buffers the solver owns.
//!
//! Buffers are stored flat with `i` as the outer axis:
//! ```text
//! index(i, j) = i * count_y + j
//! ```
//! Dimensions are fixed at construction. A different size means a new
//! solver.

use ripple_types::{RippleError, RippleResult, Scalar};

/// One rectangular buffer of real values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    count_x: usize,
    count_y: usize,
    values: Vec<Scalar>,
}

impl ScalarField {
    /// Creates a zero-filled field. Dimensions are not validated here;
    /// [`GridState::new`] does that for the solver.
    pub fn zeros(count_x: usize, count_y: usize) -> Self {
        Self {
            count_x,
            count_y,
            values: vec![0.0; count_x * count_y],
        }
    }

    /// Number of cells along `i`.
    #[inline]
    pub fn count_x(&self) -> usize {
        self.count_x
    }

    /// Number of cells along `j`.
    #[inline]
    pub fn count_y(&self) -> usize {
        self.count_y
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.count_y + j
    }

    /// Value at an in-range cell.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Scalar {
        self.values[self.index(i, j)]
    }

    /// Overwrites an in-range cell.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Scalar) {
        let idx = self.index(i, j);
        self.values[idx] = value;
    }

    /// Adds to an in-range cell.
    #[inline]
    pub fn add(&mut self, i: usize, j: usize, amount: Scalar) {
        let idx = self.index(i, j);
        self.values[idx] += amount;
    }

    /// Value at `(i, j)` with each index clamped to the nearest valid one.
    #[inline]
    pub fn get_clamped(&self, i: isize, j: isize) -> Scalar {
        let ci = i.clamp(0, self.count_x as isize - 1) as usize;
        let cj = j.clamp(0, self.count_y as isize - 1) as usize;
        self.get(ci, cj)
    }

    /// Sum of the four axis neighbours, boundary-clamped.
    ///
    /// An edge cell sees itself in place of the missing neighbour, so the
    /// border reflects instead of acting as a zero wall.
    #[inline]
    pub fn adjacent_sum(&self, i: usize, j: usize) -> Scalar {
        let (i, j) = (i as isize, j as isize);
        self.get_clamped(i - 1, j)
            + self.get_clamped(i, j - 1)
            + self.get_clamped(i + 1, j)
            + self.get_clamped(i, j + 1)
    }

    /// Five-point box average: the cell and its four clamped neighbours.
    #[inline]
    pub fn box_average(&self, i: usize, j: usize) -> Scalar {
        (self.get(i, j) + self.adjacent_sum(i, j)) / 5.0
    }

    /// Copies every value from a field of the same shape.
    pub fn copy_from(&mut self, other: &ScalarField) {
        self.values.copy_from_slice(&other.values);
    }

    /// Raw values in `i`-major order.
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Largest absolute value in the field.
    pub fn max_abs(&self) -> Scalar {
        self.values.iter().fold(0.0, |acc: Scalar, v| acc.max(v.abs()))
    }

    /// True if no value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

/// Density and velocity buffers plus their previous-step snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    /// Current density (the visualized field).
    pub density: ScalarField,
    /// Current velocity (time derivative of density).
    pub velocity: ScalarField,
    /// Density as of the start of the last step.
    pub prev_density: ScalarField,
    /// Velocity as of the start of the last step.
    pub prev_velocity: ScalarField,
}

impl GridState {
    /// Allocates a zeroed grid. Both dimensions must be at least one.
    pub fn new(count_x: usize, count_y: usize) -> RippleResult<Self> {
        if count_x == 0 || count_y == 0 {
            return Err(RippleError::InvalidGrid(format!(
                "cell counts must be >= 1, got {count_x} x {count_y}"
            )));
        }
        let bytes = count_x
            .checked_mul(count_y)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Scalar>()));
        if !matches!(bytes, Some(b) if b <= isize::MAX as usize) {
            return Err(RippleError::InvalidGrid(format!(
                "grid of {count_x} x {count_y} cells is too large"
            )));
        }

        let field = ScalarField::zeros(count_x, count_y);
        Ok(Self {
            density: field.clone(),
            velocity: field.clone(),
            prev_density: field.clone(),
            prev_velocity: field,
        })
    }

    /// Number of cells along `i`.
    pub fn count_x(&self) -> usize {
        self.density.count_x()
    }

    /// Number of cells along `j`.
    pub fn count_y(&self) -> usize {
        self.density.count_y()
    }

    /// Snapshot current buffers into the previous-step buffers.
    pub fn save_previous(&mut self) {
        self.prev_density.copy_from(&self.density);
        self.prev_velocity.copy_from(&self.velocity);
    }
}
