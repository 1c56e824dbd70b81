//! The simulation context.
//!
//! A host drives it from two callbacks:
//!
//! ```text
//! on input event:      context.on_contact_start / move / end(...)
//! on animation frame:  context.tick();
//!                      let e = context.extrapolation();
//!                      render(context.query_density(i, j, e), ...)
//! ```
//!
//! Everything runs synchronously on the calling thread. Queries and
//! mutations are not independently safe to interleave, so a
//! multi-threaded host must keep the whole context behind one lock or on
//! one owning thread.

use ripple_clock::{Clock, SystemClock, TimestepAccumulator, UpdateReport};
use ripple_input::{ContactMapper, InputSink, SurfacePoint};
use ripple_solver::{FieldView, ImpulseTarget, WaveSolver};
use ripple_telemetry::{EventBus, EventKind, SimulationEvent};
use ripple_types::{ContactId, RippleResult, Scalar};

use crate::config::{GridConfig, SimulationConfig};

/// Owns one grid and everything that drives it.
#[derive(Debug)]
pub struct SimulationContext<C: Clock = SystemClock> {
    config: SimulationConfig,
    solver: WaveSolver,
    accumulator: TimestepAccumulator<C>,
    mapper: ContactMapper,
    bus: EventBus,
    /// Set once the field has been seen holding NaN or infinity.
    non_finite_reported: bool,
}

impl SimulationContext<SystemClock> {
    /// Creates a context on the system clock.
    pub fn with_system_clock(config: SimulationConfig) -> RippleResult<Self> {
        Self::new(config, SystemClock::new())
    }
}

impl<C: Clock> SimulationContext<C> {
    /// Validates `config` and builds the solver, accumulator and mapper.
    pub fn new(config: SimulationConfig, clock: C) -> RippleResult<Self> {
        config.validate()?;
        let solver = WaveSolver::new(config.grid.count_x, config.grid.count_y, config.wave.clone())?;
        let accumulator = TimestepAccumulator::new(config.timestep.clone(), clock)?;
        let mapper = ContactMapper::new(config.input.clone())?;

        Ok(Self {
            config,
            solver,
            accumulator,
            mapper,
            bus: EventBus::new(),
            non_finite_reported: false,
        })
    }

    /// Replaces the grid with a fresh, zeroed one of the new size.
    ///
    /// The old solver is dropped and active contacts are forgotten, since
    /// their cells no longer exist. On error the current grid is kept.
    pub fn resize(&mut self, count_x: usize, count_y: usize) -> RippleResult<()> {
        let grid = GridConfig { count_x, count_y };
        grid.validate()?;
        let solver = WaveSolver::new(count_x, count_y, self.config.wave.clone())?;

        self.solver = solver;
        self.config.grid = grid;
        self.mapper.clear();
        self.non_finite_reported = false;

        tracing::debug!(count_x, count_y, "grid rebuilt");
        self.emit(EventKind::GridRebuilt { count_x, count_y });
        self.bus.flush();
        Ok(())
    }

    /// Runs the steps owed since the last tick, up to the cap, and
    /// delivers the resulting events.
    pub fn tick(&mut self) -> UpdateReport {
        let now = self.accumulator.clock().now_ms();
        self.tick_at(now)
    }

    /// [`tick`](Self::tick) at an explicit timestamp.
    pub fn tick_at(&mut self, now_ms: f64) -> UpdateReport {
        let solver = &mut self.solver;
        let bus = &self.bus;
        let report = self.accumulator.update_at(now_ms, |dt| {
            solver.step(dt as Scalar);
            bus.emit(SimulationEvent::new(
                solver.step_count(),
                EventKind::StepCompleted { dt },
            ));
        });

        if report.was_capped() {
            self.emit(EventKind::StepsCapped {
                available: u64::from(report.steps_run) + report.steps_dropped,
                executed: report.steps_run,
            });
        }

        if report.steps_run > 0 && !self.non_finite_reported && !self.solver.is_finite() {
            self.non_finite_reported = true;
            tracing::warn!(
                step = self.solver.step_count(),
                "field is no longer finite; parameters are numerically unstable"
            );
            self.emit(EventKind::NonFinite);
        }

        self.bus.flush();
        report
    }

    /// Steps since the last completed step, for query extrapolation.
    pub fn extrapolation(&self) -> Scalar {
        self.accumulator.time_since_last_step_in_timesteps() as Scalar
    }

    /// [`extrapolation`](Self::extrapolation) at an explicit timestamp.
    pub fn extrapolation_at(&self, now_ms: f64) -> Scalar {
        self.accumulator.time_since_last_step_at(now_ms) as Scalar
    }

    /// Number of cells along `i`.
    pub fn cell_count_x(&self) -> usize {
        self.solver.cell_count_x()
    }

    /// Number of cells along `j`.
    pub fn cell_count_y(&self) -> usize {
        self.solver.cell_count_y()
    }

    /// The current solver.
    pub fn solver(&self) -> &WaveSolver {
        &self.solver
    }

    /// The accumulator driving the solver.
    pub fn accumulator(&self) -> &TimestepAccumulator<C> {
        &self.accumulator
    }

    /// The contact mapper.
    pub fn mapper(&self) -> &ContactMapper {
        &self.mapper
    }

    /// The telemetry bus, for registering sinks.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// The active configuration (grid reflects the latest resize).
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn emit(&self, kind: EventKind) {
        self.bus
            .emit(SimulationEvent::new(self.solver.step_count(), kind));
    }
}

/// Solver wrapper that reports every impulse on the bus.
struct ReportingTarget<'a> {
    solver: &'a mut WaveSolver,
    bus: &'a EventBus,
}

impl ImpulseTarget for ReportingTarget<'_> {
    fn cell_count_x(&self) -> usize {
        self.solver.cell_count_x()
    }

    fn cell_count_y(&self) -> usize {
        self.solver.cell_count_y()
    }

    fn inject_impulse(&mut self, amount: Scalar, i: Scalar, j: Scalar) {
        self.solver.inject_impulse(amount, i, j);
        self.bus.emit(SimulationEvent::new(
            self.solver.step_count(),
            EventKind::ImpulseInjected {
                amount,
                cell_i: i,
                cell_j: j,
            },
        ));
    }
}

impl<C: Clock> SimulationContext<C> {
    fn reporting_target(&mut self) -> (&mut ContactMapper, ReportingTarget<'_>) {
        (
            &mut self.mapper,
            ReportingTarget {
                solver: &mut self.solver,
                bus: &self.bus,
            },
        )
    }
}

impl<C: Clock> InputSink for SimulationContext<C> {
    fn on_contact_start(&mut self, contact: ContactId, pos: SurfacePoint) {
        let (mapper, mut target) = self.reporting_target();
        if mapper.contact_start(&mut target, contact, pos) {
            self.emit(EventKind::ContactStarted { contact });
        }
        self.bus.flush();
    }

    fn on_contact_move(&mut self, contact: ContactId, pos: SurfacePoint) {
        let (mapper, mut target) = self.reporting_target();
        mapper.contact_move(&mut target, contact, pos);
        self.bus.flush();
    }

    fn on_contact_end(&mut self, contact: ContactId) {
        if self.mapper.contact_end(contact) {
            self.emit(EventKind::ContactEnded { contact });
            self.bus.flush();
        }
    }
}

impl<C: Clock> ImpulseTarget for SimulationContext<C> {
    fn cell_count_x(&self) -> usize {
        self.solver.cell_count_x()
    }

    fn cell_count_y(&self) -> usize {
        self.solver.cell_count_y()
    }

    fn inject_impulse(&mut self, amount: Scalar, i: Scalar, j: Scalar) {
        let (_, mut target) = self.reporting_target();
        target.inject_impulse(amount, i, j);
        self.bus.flush();
    }
}

impl<C: Clock> FieldView for SimulationContext<C> {
    fn cell_count_x(&self) -> usize {
        self.solver.cell_count_x()
    }

    fn cell_count_y(&self) -> usize {
        self.solver.cell_count_y()
    }

    fn query_density(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar {
        self.solver.query_density(i, j, extrapolation)
    }

    fn query_velocity_smoothed(&self, i: Scalar, j: Scalar, extrapolation: Scalar) -> Scalar {
        self.solver.query_velocity_smoothed(i, j, extrapolation)
    }
}
