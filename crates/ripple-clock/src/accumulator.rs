//! Fixed-timestep accumulator.
//!
//! Each update converts the wall-clock time since the previous update,
//! plus the fraction left over from it, into a whole number of fixed
//! steps:
//!
//! ```text
//! available = elapsed + leftover
//! steps     = floor(available / timestep)
//! leftover  = available - steps * timestep
//! steps     = min(steps, max_steps_per_call)
//! ```
//!
//! Steps beyond the cap are dropped, not deferred. After a stall the
//! simulation falls behind wall-clock time and stays behind; the last
//! update time advances regardless so the next call never tries to
//! catch up on discarded time.

use ripple_types::RippleResult;

use crate::clock::{Clock, SystemClock};
use crate::config::TimestepConfig;

/// Outcome of one [`TimestepAccumulator::update`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateReport {
    /// Steps actually run.
    pub steps_run: u32,
    /// Steps that fit in the elapsed time but were cut by the cap.
    pub steps_dropped: u64,
    /// Wall-clock time since the previous update (milliseconds).
    pub elapsed_ms: f64,
    /// Time carried into the next update (milliseconds).
    pub leftover_ms: f64,
}

impl UpdateReport {
    /// True if the cap cut this update short.
    pub fn was_capped(&self) -> bool {
        self.steps_dropped > 0
    }
}

/// Drives a step function at a fixed rate from irregular callbacks.
#[derive(Debug)]
pub struct TimestepAccumulator<C: Clock = SystemClock> {
    config: TimestepConfig,
    clock: C,
    last_update_ms: f64,
    leftover_ms: f64,
    total_steps: u64,
    total_dropped: u64,
}

impl TimestepAccumulator<SystemClock> {
    /// Creates an accumulator on the system clock.
    pub fn with_system_clock(config: TimestepConfig) -> RippleResult<Self> {
        Self::new(config, SystemClock::new())
    }
}

impl<C: Clock> TimestepAccumulator<C> {
    /// Creates an accumulator whose last update time is the clock's now.
    pub fn new(config: TimestepConfig, clock: C) -> RippleResult<Self> {
        config.validate()?;
        let now = clock.now_ms();
        Ok(Self {
            config,
            clock,
            last_update_ms: now,
            leftover_ms: 0.0,
            total_steps: 0,
            total_dropped: 0,
        })
    }

    /// Runs as many fixed steps as the time since the last update allows,
    /// up to the cap. `step` receives the step size in seconds.
    pub fn update<F>(&mut self, step: F) -> UpdateReport
    where
        F: FnMut(f64),
    {
        let now = self.clock.now_ms();
        self.update_at(now, step)
    }

    /// [`update`](Self::update) with an explicit timestamp.
    ///
    /// A timestamp earlier than the last update counts as zero elapsed
    /// time. A non-finite timestamp runs nothing and is not recorded.
    pub fn update_at<F>(&mut self, now_ms: f64, mut step: F) -> UpdateReport
    where
        F: FnMut(f64),
    {
        if !now_ms.is_finite() {
            return UpdateReport {
                steps_run: 0,
                steps_dropped: 0,
                elapsed_ms: 0.0,
                leftover_ms: self.leftover_ms,
            };
        }

        let timestep = self.config.timestep_ms;
        let elapsed = (now_ms - self.last_update_ms).max(0.0);
        let available = elapsed + self.leftover_ms;

        let whole = (available / timestep).floor();
        self.leftover_ms = (available - whole * timestep).max(0.0);

        let fitting = whole as u64;
        let cap = u64::from(self.config.max_steps_per_call);
        let steps_run = fitting.min(cap);
        let steps_dropped = fitting - steps_run;

        if steps_dropped > 0 {
            tracing::debug!(
                elapsed_ms = elapsed,
                fitting,
                steps_run,
                steps_dropped,
                "step cap reached, dropping simulation time"
            );
        }

        let dt = self.config.timestep_sec();
        for _ in 0..steps_run {
            step(dt);
        }

        self.last_update_ms = now_ms;
        self.total_steps += steps_run;
        self.total_dropped += steps_dropped;

        UpdateReport {
            steps_run: steps_run as u32,
            steps_dropped,
            elapsed_ms: elapsed,
            leftover_ms: self.leftover_ms,
        }
    }

    /// Time since the last completed step, in units of timesteps.
    ///
    /// This is the extrapolation amount a renderer passes to the solver's
    /// queries between updates.
    pub fn time_since_last_step_in_timesteps(&self) -> f64 {
        self.time_since_last_step_at(self.clock.now_ms())
    }

    /// [`time_since_last_step_in_timesteps`](Self::time_since_last_step_in_timesteps)
    /// at an explicit timestamp.
    pub fn time_since_last_step_at(&self, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.last_update_ms).max(0.0);
        (elapsed + self.leftover_ms) / self.config.timestep_ms
    }

    /// The configuration in use.
    pub fn config(&self) -> &TimestepConfig {
        &self.config
    }

    /// The clock in use.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Timestamp of the last update (milliseconds).
    pub fn last_update_ms(&self) -> f64 {
        self.last_update_ms
    }

    /// Time carried into the next update (milliseconds).
    pub fn leftover_ms(&self) -> f64 {
        self.leftover_ms
    }

    /// Steps run over the accumulator's lifetime.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Steps dropped by the cap over the accumulator's lifetime.
    pub fn total_dropped(&self) -> u64 {
        self.total_dropped
    }
}
