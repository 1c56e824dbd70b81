//! CLI command implementations.

use ripple_bench::metrics::BenchmarkMetrics;
use ripple_bench::runner::BenchmarkRunner;
use ripple_bench::scenarios::{Scenario, ScenarioKind};
use ripple_clock::ManualClock;
use ripple_debug::GridSnapshot;
use ripple_engine::{SimulationConfig, SimulationContext};
use ripple_input::{InputSink, SurfacePoint};
use ripple_telemetry::TracingSink;
use ripple_types::ContactId;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run a headless simulation on a manual clock.
pub fn simulate(
    config_path: Option<&str>,
    frames: u32,
    frame_ms: f64,
    snapshot_path: Option<&str>,
) -> CommandResult {
    if !(frame_ms.is_finite() && frame_ms > 0.0) {
        return Err(format!("frame interval must be positive, got {frame_ms}").into());
    }

    let config = match config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    println!("Ripple Simulation");
    println!("─────────────────");
    println!("Config:  {}", config_path.unwrap_or("(defaults)"));
    println!("Grid:    {} x {}", config.grid.count_x, config.grid.count_y);
    println!("Frames:  {frames} @ {frame_ms} ms");
    println!();

    let clock = ManualClock::starting_at(0.0);
    let mut ctx = SimulationContext::new(config, clock.clone())?;
    ctx.bus_mut().add_sink(Box::new(TracingSink::new()));

    ctx.on_contact_start(ContactId::POINTER, SurfacePoint::new(0.5, 0.5));
    ctx.on_contact_end(ContactId::POINTER);

    let mut capped_frames = 0u32;
    for _ in 0..frames {
        clock.advance_ms(frame_ms);
        if ctx.tick().was_capped() {
            capped_frames += 1;
        }
    }
    ctx.bus_mut().finalize();

    let solver = ctx.solver();
    let accumulator = ctx.accumulator();
    let snapshot = GridSnapshot::capture(solver);

    println!("  Steps run:      {}", accumulator.total_steps());
    println!("  Steps dropped:  {}", accumulator.total_dropped());
    println!("  Capped frames:  {capped_frames}");
    println!("  Max |density|:  {:.6e}", solver.max_abs_density());
    println!("  Max |velocity|: {:.6e}", solver.max_abs_velocity());
    println!("  Finite:         {}", solver.is_finite());
    println!("  Fingerprint:    {:016x}", snapshot.fingerprint()?);

    if let Some(path) = snapshot_path {
        std::fs::write(path, snapshot.to_bytes()?)?;
        println!();
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> CommandResult {
    println!("Ripple Benchmark Suite");
    println!("══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = ScenarioKind::from_name(scenario_name).ok_or_else(|| {
            let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            format!(
                "Unknown scenario: '{scenario_name}'. Available: {}, all",
                available.join(", ")
            )
        })?;
        vec![kind]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);
        println!(
            "Running: {} ({} x {} cells, {} frames, {:.0} ms)",
            kind.name(),
            scenario.config.grid.count_x,
            scenario.config.grid.count_y,
            scenario.frame_count(),
            scenario.duration_ms(),
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Steps:         {} run, {} dropped", metrics.steps_run, metrics.steps_dropped);
        println!("  Peak density:  {:.6e}", metrics.peak_density);
        println!("  Finite:        {}", metrics.finite);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Inspect a grid snapshot.
pub fn inspect(path: &str) -> CommandResult {
    println!("Ripple Snapshot Inspector");
    println!("────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot = GridSnapshot::from_bytes(&data)?;

    let range = |values: &[f32]| {
        values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    };
    let (d_min, d_max) = range(&snapshot.density);
    let (v_min, v_max) = range(&snapshot.velocity);

    println!("Step:           {}", snapshot.step);
    println!("Grid:           {} x {}", snapshot.count_x, snapshot.count_y);
    println!("Density range:  [{d_min:.6e}, {d_max:.6e}]");
    println!("Velocity range: [{v_min:.6e}, {v_max:.6e}]");
    println!("Fingerprint:    {:016x}", snapshot.fingerprint()?);

    Ok(())
}

/// Validate a config file.
pub fn validate(path: &str) -> CommandResult {
    println!("Ripple Validator");
    println!("────────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err("Unsupported file format. Use .toml (simulation config).".into());
    }

    println!("Validating config: {path}");
    let config = SimulationConfig::load(path)?;
    println!(
        "✅ Config is valid ({} x {} grid, friction {}, speed {}).",
        config.grid.count_x, config.grid.count_y, config.wave.friction, config.wave.speed
    );
    Ok(())
}

/// Print the default config.
pub fn print_default_config() -> CommandResult {
    print!("{}", SimulationConfig::default().to_toml_string()?);
    Ok(())
}
