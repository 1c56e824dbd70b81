//! Integration tests for ripple-engine.

use ripple_clock::ManualClock;
use ripple_debug::GridSnapshot;
use ripple_engine::{GridConfig, SimulationConfig, SimulationContext};
use ripple_input::{InputSink, SurfacePoint};
use ripple_solver::{FieldView, ImpulseTarget};
use ripple_telemetry::{EventKind, VecSink};
use ripple_types::{ContactId, RippleError};

fn small_config() -> SimulationConfig {
    SimulationConfig {
        grid: GridConfig {
            count_x: 32,
            count_y: 24,
        },
        ..Default::default()
    }
}

fn context() -> (SimulationContext<ManualClock>, ManualClock, VecSink) {
    let clock = ManualClock::starting_at(0.0);
    let mut ctx = SimulationContext::new(small_config(), clock.clone()).unwrap();
    let sink = VecSink::new();
    ctx.bus_mut().add_sink(Box::new(sink.clone()));
    (ctx, clock, sink)
}

fn count(sink: &VecSink, pred: impl Fn(&EventKind) -> bool) -> usize {
    sink.events().iter().filter(|e| pred(&e.kind)).count()
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    assert!(SimulationConfig::default().validate().is_ok());
}

#[test]
fn config_toml_round_trip() {
    let config = small_config();
    let text = config.to_toml_string().unwrap();
    assert!(text.contains("[grid]"));
    let recovered = SimulationConfig::from_toml_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn partial_toml_fills_defaults() {
    let config = SimulationConfig::from_toml_str("[wave]\nfriction = 0.9\n").unwrap();
    assert_eq!(config.wave.friction, 0.9);
    assert_eq!(config.wave.speed, 50.0);
    assert_eq!(config.timestep.max_steps_per_call, 10);
}

#[test]
fn invalid_toml_values_fail() {
    assert!(matches!(
        SimulationConfig::from_toml_str("[wave]\nfriction = 1.5\n"),
        Err(RippleError::InvalidConfig(_))
    ));
    assert!(matches!(
        SimulationConfig::from_toml_str("[grid]\ncount_x = 0\n"),
        Err(RippleError::InvalidGrid(_))
    ));
    assert!(matches!(
        SimulationConfig::from_toml_str("[grid\n"),
        Err(RippleError::Serialization(_))
    ));
}

#[test]
fn missing_config_file_is_io_error() {
    assert!(matches!(
        SimulationConfig::load("/nonexistent/ripple.toml"),
        Err(RippleError::Io(_))
    ));
}

#[test]
fn grid_from_viewport() {
    let grid = GridConfig::from_viewport(1280, 720, 3).unwrap();
    assert_eq!((grid.count_x, grid.count_y), (426, 240));
    assert!(GridConfig::from_viewport(2, 720, 3).is_err());
    assert!(GridConfig::from_viewport(100, 100, 0).is_err());
}

#[test]
fn grid_for_viewport_uses_three_pixel_cells() {
    let grid = GridConfig::for_viewport(1280, 720).unwrap();
    assert_eq!(grid, GridConfig::from_viewport(1280, 720, 3).unwrap());
    assert_eq!((grid.count_x, grid.count_y), (426, 240));
    assert!(GridConfig::for_viewport(2, 2).is_err());
}

// ─── Tick Tests ───────────────────────────────────────────────

#[test]
fn tick_runs_owed_steps() {
    let (mut ctx, clock, sink) = context();
    clock.advance_ms(23.0);

    let report = ctx.tick();
    assert_eq!(report.steps_run, 2);
    assert_eq!(ctx.solver().step_count(), 2);
    assert_eq!(count(&sink, |k| matches!(k, EventKind::StepCompleted { .. })), 2);
    assert!((ctx.extrapolation() - 0.3).abs() < 1e-6);
}

#[test]
fn stall_emits_capped_event() {
    let (mut ctx, clock, sink) = context();
    clock.advance_ms(1000.0);
    let report = ctx.tick();

    assert_eq!(report.steps_run, 10);
    assert_eq!(ctx.accumulator().last_update_ms(), 1000.0);
    let capped: Vec<_> = sink
        .events()
        .into_iter()
        .filter_map(|e| match e.kind {
            EventKind::StepsCapped { available, executed } => Some((available, executed)),
            _ => None,
        })
        .collect();
    assert_eq!(capped, vec![(100, 10)]);
}

#[test]
fn extrapolation_tracks_time_between_ticks() {
    let (mut ctx, _clock, _sink) = context();
    ctx.tick_at(40.0);
    assert_eq!(ctx.extrapolation_at(40.0), 0.0);
    assert!((ctx.extrapolation_at(45.0) - 0.5).abs() < 1e-6);
    assert!((ctx.extrapolation_at(55.0) - 1.5).abs() < 1e-6);
}

#[test]
fn system_clock_context_ticks() {
    let mut ctx = SimulationContext::with_system_clock(small_config()).unwrap();
    ctx.inject_impulse(1_000.0, 16.0, 12.0);

    let report = ctx.tick();
    assert!(report.steps_run <= 10);
    assert_eq!(ctx.solver().step_count(), u64::from(report.steps_run));
    assert!(ctx.extrapolation() >= 0.0);
    assert!(ctx.solver().is_finite());
}

// ─── Input Tests ──────────────────────────────────────────────

#[test]
fn contact_lifecycle_emits_events() {
    let (mut ctx, _clock, sink) = context();
    ctx.on_contact_start(ContactId(1), SurfacePoint::new(0.5, 0.5));
    ctx.on_contact_move(ContactId(1), SurfacePoint::new(0.6, 0.5));
    ctx.on_contact_end(ContactId(1));

    assert_eq!(count(&sink, |k| matches!(k, EventKind::ContactStarted { .. })), 1);
    assert_eq!(count(&sink, |k| matches!(k, EventKind::ContactEnded { .. })), 1);
    let impulses = count(&sink, |k| matches!(k, EventKind::ImpulseInjected { .. }));
    assert!(impulses >= 2, "tap plus at least one drag cell, got {impulses}");
    assert_eq!(ctx.mapper().active_contacts(), 0);
    assert!(ctx.solver().max_abs_velocity() > 0.0);
}

#[test]
fn direct_injection_is_reported() {
    let (mut ctx, _clock, sink) = context();
    ctx.inject_impulse(1_000.0, 3.0, 4.0);
    assert_eq!(
        sink.events().last().map(|e| e.kind.clone()),
        Some(EventKind::ImpulseInjected {
            amount: 1_000.0,
            cell_i: 3.0,
            cell_j: 4.0,
        })
    );
}

#[test]
fn field_view_reads_through_to_solver() {
    let (mut ctx, clock, _sink) = context();
    ctx.on_contact_start(ContactId(0), SurfacePoint::new(0.5, 0.5));
    clock.advance_ms(30.0);
    ctx.tick();

    assert_eq!(FieldView::cell_count_x(&ctx), 32);
    let direct = ctx.solver().density().get(15, 11);
    assert_eq!(ctx.query_density(15.0, 11.0, 0.0), direct);
    assert!(ctx.query_velocity_smoothed(15.0, 11.0, 0.5).is_finite());
}

// ─── Resize Tests ─────────────────────────────────────────────

#[test]
fn resize_builds_a_fresh_grid() {
    let (mut ctx, clock, sink) = context();
    ctx.on_contact_start(ContactId(2), SurfacePoint::new(0.5, 0.5));
    clock.advance_ms(50.0);
    ctx.tick();

    ctx.resize(10, 8).unwrap();
    assert_eq!((ctx.cell_count_x(), ctx.cell_count_y()), (10, 8));
    assert_eq!(ctx.config().grid, GridConfig { count_x: 10, count_y: 8 });
    assert_eq!(ctx.solver().step_count(), 0);
    assert_eq!(ctx.solver().max_abs_velocity(), 0.0);
    assert_eq!(ctx.mapper().active_contacts(), 0);
    assert_eq!(
        count(&sink, |k| matches!(k, EventKind::GridRebuilt { count_x: 10, count_y: 8 })),
        1
    );
}

#[test]
fn failed_resize_keeps_current_grid() {
    let (mut ctx, _clock, _sink) = context();
    ctx.inject_impulse(1_000.0, 5.0, 5.0);
    assert!(ctx.resize(0, 8).is_err());
    assert_eq!(ctx.cell_count_x(), 32);
    assert!(ctx.solver().max_abs_velocity() > 0.0);
}

// ─── Stability Tests ──────────────────────────────────────────

#[test]
fn blow_up_is_reported_once_and_not_masked() {
    let mut config = small_config();
    config.timestep.timestep_ms = 50.0;
    let clock = ManualClock::starting_at(0.0);
    let mut ctx = SimulationContext::new(config, clock.clone()).unwrap();
    let sink = VecSink::new();
    ctx.bus_mut().add_sink(Box::new(sink.clone()));

    ctx.on_contact_start(ContactId(0), SurfacePoint::new(0.5, 0.5));
    for _ in 0..500 {
        clock.advance_ms(500.0);
        ctx.tick();
        if !ctx.solver().is_finite() {
            break;
        }
    }
    clock.advance_ms(500.0);
    ctx.tick();

    assert!(!ctx.solver().is_finite());
    assert_eq!(count(&sink, |k| matches!(k, EventKind::NonFinite)), 1);
}

#[test]
fn identical_scripts_are_bit_identical() {
    let run = || {
        let clock = ManualClock::starting_at(0.0);
        let mut ctx = SimulationContext::new(small_config(), clock.clone()).unwrap();
        ctx.on_contact_start(ContactId(7), SurfacePoint::new(0.2, 0.3));
        for frame in 0..120 {
            clock.advance_ms(16.0 + (frame % 3) as f64);
            let x = 0.2 + frame as f32 * 0.005;
            ctx.on_contact_move(ContactId(7), SurfacePoint::new(x, 0.3));
            ctx.tick();
        }
        ctx.on_contact_end(ContactId(7));
        GridSnapshot::capture(ctx.solver())
    };
    let a = run();
    let b = run();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    assert_eq!(a, b);
}
