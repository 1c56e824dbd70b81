//! Benchmark runner: plays a scenario against a simulation context and
//! collects metrics.

use std::time::Instant;

use ripple_clock::ManualClock;
use ripple_debug::GridSnapshot;
use ripple_engine::SimulationContext;
use ripple_input::InputSink;
use ripple_solver::FieldView;
use ripple_types::{RippleResult, Scalar};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Frame, Scenario, ScenarioKind, ScriptedInput};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Each frame advances the manual clock, delivers the frame's input,
    /// ticks the context and then reads every cell with the current
    /// extrapolation, as a renderer would.
    pub fn run(scenario: &Scenario) -> RippleResult<BenchmarkMetrics> {
        let clock = ManualClock::starting_at(0.0);
        let mut ctx = SimulationContext::new(scenario.config.clone(), clock.clone())?;

        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.frames.len());
        let mut capped_frames = 0u32;
        let mut peak_density: f32 = 0.0;
        let mut peak_velocity: f32 = 0.0;

        let total_start = Instant::now();

        for frame in &scenario.frames {
            let frame_start = Instant::now();
            clock.advance_ms(frame.interval_ms);
            apply_inputs(&mut ctx, frame);

            let report = ctx.tick();
            if report.was_capped() {
                capped_frames += 1;
            }

            let (density, velocity) = sample_field(&ctx);
            peak_density = peak_density.max(density);
            peak_velocity = peak_velocity.max(velocity);

            frame_times.push(frame_start.elapsed().as_secs_f64());
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_frame = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let max_frame = frame_times.iter().copied().fold(0.0, f64::max);

        let accumulator = ctx.accumulator();
        let solver = ctx.solver();

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            cell_count: solver.cell_count_x() * solver.cell_count_y(),
            frames: scenario.frames.len() as u32,
            steps_run: accumulator.total_steps(),
            steps_dropped: accumulator.total_dropped(),
            capped_frames,
            total_wall_time,
            avg_frame_time: avg_frame,
            max_frame_time: max_frame,
            peak_density,
            peak_velocity,
            finite: solver.is_finite(),
            fingerprint: GridSnapshot::capture(solver).fingerprint()?,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> RippleResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}

fn apply_inputs(ctx: &mut SimulationContext<ManualClock>, frame: &Frame) {
    for input in &frame.inputs {
        match *input {
            ScriptedInput::Start { contact, pos } => ctx.on_contact_start(contact, pos),
            ScriptedInput::Move { contact, pos } => ctx.on_contact_move(contact, pos),
            ScriptedInput::End { contact } => ctx.on_contact_end(contact),
        }
    }
}

/// Reads every cell at the current extrapolation and returns the largest
/// absolute density and smoothed velocity.
fn sample_field(ctx: &SimulationContext<ManualClock>) -> (f32, f32) {
    let e = ctx.extrapolation();
    let mut peak_density: f32 = 0.0;
    let mut peak_velocity: f32 = 0.0;

    for i in 0..ctx.cell_count_x() {
        for j in 0..ctx.cell_count_y() {
            let (x, y) = (i as Scalar, j as Scalar);
            peak_density = peak_density.max(ctx.query_density(x, y, e).abs());
            peak_velocity = peak_velocity.max(ctx.query_velocity_smoothed(x, y, e).abs());
        }
    }

    (peak_density, peak_velocity)
}
