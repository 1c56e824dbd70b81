//! The wave solver.
//!
//! Each step is a synchronous double-buffered update: the current buffers
//! are copied into the previous-step buffers first, and every cell of the
//! new step reads only from that snapshot. Update order therefore never
//! biases the result.
//!
//! ```text
//! laplacian = adjacent_sum(prev_density, i, j) - 4 * prev_density[i][j]
//! velocity  = friction * prev_velocity[i][j] + laplacian * speed² * dt
//! density   = prev_density[i][j] + velocity * dt
//! ```
//!
//! # Stability
//!
//! There is no CFL check. An unstable friction/speed/dt combination, or
//! sustained forcing, grows values without bound and eventually to
//! infinity. Values are never clamped; use [`WaveSolver::is_finite`] to
//! detect blow-up.

use std::f32::consts::PI;

use ripple_raster::{disc_cells, filled_disc};
use ripple_types::{RippleResult, Scalar};

use crate::config::{InjectionWeighting, WaveConfig};
use crate::grid::{GridState, ScalarField};
use crate::traits::{FieldView, ImpulseTarget};

/// Explicit 2D wave solver over a fixed-size grid.
#[derive(Debug, Clone)]
pub struct WaveSolver {
    config: WaveConfig,
    state: GridState,
    speed_sq: Scalar,
    /// Disc offsets relative to the injection center, as produced by the
    /// rasterizer for the configured weighting.
    injection_offsets: Vec<(i32, i32)>,
    per_cell_divisor: Scalar,
    step_count: u64,
}

impl WaveSolver {
    /// Creates a solver with a zeroed `count_x × count_y` grid.
    ///
    /// Fails if either dimension is zero or the configuration is out of
    /// range.
    pub fn new(count_x: usize, count_y: usize, config: WaveConfig) -> RippleResult<Self> {
        config.validate()?;
        let state = GridState::new(count_x, count_y)?;

        let radius = config.injection_radius as i32;
        let injection_offsets = match config.weighting {
            InjectionWeighting::Uniform => disc_cells(0, 0, radius),
            InjectionWeighting::PerVisit => {
                let mut offsets = Vec::new();
                filled_disc(0, 0, radius, |x, y| offsets.push((x, y)));
                offsets
            }
        };

        // A zero radius still covers one cell; don't divide by a zero area.
        let r = config.injection_radius as Scalar;
        let per_cell_divisor = if config.injection_radius == 0 { 1.0 } else { PI * r * r };

        tracing::debug!(
            count_x,
            count_y,
            friction = config.friction,
            speed = config.speed,
            disc_cells = injection_offsets.len(),
            "wave solver created"
        );

        Ok(Self {
            speed_sq: config.speed * config.speed,
            config,
            state,
            injection_offsets,
            per_cell_divisor,
            step_count: 0,
        })
    }

    /// Creates a solver with [`WaveConfig::default`].
    pub fn with_defaults(count_x: usize, count_y: usize) -> RippleResult<Self> {
        Self::new(count_x, count_y, WaveConfig::default())
    }

    /// Number of cells along `i`.
    pub fn cell_count_x(&self) -> usize {
        self.state.count_x()
    }

    /// Number of cells along `j`.
    pub fn cell_count_y(&self) -> usize {
        self.state.count_y()
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Read-only view of all four buffers.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Number of completed steps since construction.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Advances the field by `dt` seconds.
    ///
    /// `dt` is expected to be positive; it is not checked on this hot path.
    pub fn step(&mut self, dt: Scalar) {
        self.state.save_previous();

        let friction = self.config.friction;
        let speed_sq = self.speed_sq;
        let GridState {
            density,
            velocity,
            prev_density,
            prev_velocity,
        } = &mut self.state;

        for i in 0..prev_density.count_x() {
            for j in 0..prev_density.count_y() {
                let center = prev_density.get(i, j);
                let laplacian = prev_density.adjacent_sum(i, j) - 4.0 * center;
                let force = laplacian * speed_sq;

                let v = friction * prev_velocity.get(i, j) + force * dt;
                velocity.set(i, j, v);
                density.set(i, j, center + v * dt);
            }
        }

        self.step_count += 1;
    }

    /// Spreads `amount` of velocity over the injection disc around
    /// `(round(i), round(j))`.
    ///
    /// Each disc cell is clamped into the grid and receives
    /// `amount / (π · R²)`, added to what is already there. Discs hanging
    /// off an edge pile their share onto the border cells. Non-finite
    /// amounts are ignored.
    pub fn inject_impulse(&mut self, amount: Scalar, i: Scalar, j: Scalar) {
        if !amount.is_finite() {
            tracing::debug!(amount, "ignoring non-finite impulse");
            return;
        }

        let per_cell = amount / self.per_cell_divisor;
        let max_i = self.cell_count_x() - 1;
        let max_j = self.cell_count_y() - 1;
        let center_i = clamp_center(i, max_i, self.config.injection_radius);
        let center_j = clamp_center(j, max_j, self.config.injection_radius);

        for &(dx, dy) in &self.injection_offsets {
            let ci = (center_i + i64::from(dx)).clamp(0, max_i as i64) as usize;
            let cj = (center_j + i64::from(dy)).clamp(0, max_j as i64) as usize;
            self.state.velocity.add(ci, cj, per_cell);
        }
    }

    /// Density at `(i, j)` extrapolated `extrapolation` steps forward.
    ///
    /// Treats the previous step as the sample at time −1 and the current
    /// one as time 0: `curr + (curr - prev) * extrapolation`. Zero returns
    /// the current value exactly.
    pub fn query_density(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar {
        let (ci, cj) = self.cell(i, j);
        extrapolate(
            self.state.prev_density.get(ci, cj),
            self.state.density.get(ci, cj),
            extrapolation,
        )
    }

    /// Velocity at `(i, j)`, box-averaged in both buffers and then
    /// extrapolated like [`query_density`](Self::query_density).
    pub fn query_velocity_smoothed(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar {
        let (ci, cj) = self.cell(i, j);
        extrapolate(
            self.state.prev_velocity.box_average(ci, cj),
            self.state.velocity.box_average(ci, cj),
            extrapolation,
        )
    }

    /// Largest absolute current density.
    pub fn max_abs_density(&self) -> Scalar {
        self.state.density.max_abs()
    }

    /// Largest absolute current velocity.
    pub fn max_abs_velocity(&self) -> Scalar {
        self.state.velocity.max_abs()
    }

    /// True while neither current buffer holds a NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.state.density.is_finite() && self.state.velocity.is_finite()
    }

    /// Floors and clamps fractional coordinates to a cell.
    fn cell(&self, i: Scalar, j: Scalar) -> (usize, usize) {
        (
            floor_clamped(i, self.cell_count_x()),
            floor_clamped(j, self.cell_count_y()),
        )
    }

    /// Current density buffer.
    pub fn density(&self) -> &ScalarField {
        &self.state.density
    }

    /// Current velocity buffer.
    pub fn velocity(&self) -> &ScalarField {
        &self.state.velocity
    }
}

#[inline]
fn extrapolate(prev: Scalar, curr: Scalar, amount: Scalar) -> Scalar {
    curr + (curr - prev) * amount
}

/// `floor(v)` clamped to `[0, count - 1]`. NaN maps to cell zero.
#[inline]
fn floor_clamped(v: Scalar, count: usize) -> usize {
    let f = v.floor();
    if f.is_nan() || f <= 0.0 {
        0
    } else {
        (f as usize).min(count - 1)
    }
}

/// Rounds an injection center and pulls it to within `radius + 1` of the
/// grid. Every disc cell beyond that clamps to the same border cell
/// anyway, so this only keeps offsets in integer range.
#[inline]
fn clamp_center(v: Scalar, max: usize, radius: u32) -> i64 {
    let margin = i64::from(radius) + 1;
    let rounded = if v.is_nan() { 0 } else { v.round() as i64 };
    rounded.clamp(-margin, max as i64 + margin)
}

impl FieldView for WaveSolver {
    fn cell_count_x(&self) -> usize {
        WaveSolver::cell_count_x(self)
    }

    fn cell_count_y(&self) -> usize {
        WaveSolver::cell_count_y(self)
    }

    fn query_density(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar {
        WaveSolver::query_density(self, i, j, extrapolation)
    }

    fn query_velocity_smoothed(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar {
        WaveSolver::query_velocity_smoothed(self, i, j, extrapolation)
    }
}

impl ImpulseTarget for WaveSolver {
    fn cell_count_x(&self) -> usize {
        WaveSolver::cell_count_x(self)
    }

    fn cell_count_y(&self) -> usize {
        WaveSolver::cell_count_y(self)
    }

    fn inject_impulse(&mut self, amount: Scalar, i: Scalar, j: Scalar) {
        WaveSolver::inject_impulse(self, amount, i, j);
    }
}
