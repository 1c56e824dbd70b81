//! Integration tests for ripple-bench.

use ripple_bench::metrics::BenchmarkMetrics;
use ripple_bench::runner::BenchmarkRunner;
use ripple_bench::scenarios::{Scenario, ScenarioKind, ScriptedInput};
use ripple_engine::{GridConfig, SimulationConfig};

fn shortened(mut scenario: Scenario, frames: usize) -> Scenario {
    scenario.frames.truncate(frames);
    scenario
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 4);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        assert_eq!(Scenario::from_kind(kind).kind, kind);
    }
    assert_eq!(ScenarioKind::from_name("hanging_sheet"), None);
}

#[test]
fn single_tap_setup() {
    let s = Scenario::single_tap();
    assert_eq!(s.frame_count(), 120);
    assert_eq!(s.duration_ms(), 1920.0);
    assert!(matches!(s.frames[0].inputs[0], ScriptedInput::Start { .. }));
    assert!(s.frames[1..].iter().all(|f| f.inputs.is_empty()));
}

#[test]
fn multi_touch_uses_four_contacts() {
    let s = Scenario::multi_touch();
    let starts = s.frames[0]
        .inputs
        .iter()
        .filter(|i| matches!(i, ScriptedInput::Start { .. }))
        .count();
    assert_eq!(starts, 4);
}

#[test]
fn frame_stall_has_one_long_frame() {
    let s = Scenario::frame_stall();
    let long: Vec<_> = s.frames.iter().filter(|f| f.interval_ms > 100.0).collect();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].interval_ms, 1000.0);
}

#[test]
fn scenario_kind_serializes_snake_case() {
    let json = serde_json::to_string(&ScenarioKind::DragStroke).unwrap();
    assert_eq!(json, "\"drag_stroke\"");
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_single_tap() {
    let metrics = BenchmarkRunner::run(&Scenario::single_tap()).unwrap();

    assert_eq!(metrics.scenario, "single_tap");
    assert_eq!(metrics.frames, 120);
    assert_eq!(metrics.cell_count, 128 * 96);
    assert_eq!(metrics.steps_run, 192);
    assert_eq!(metrics.steps_dropped, 0);
    assert_eq!(metrics.capped_frames, 0);
    assert!(metrics.finite);
    assert!(metrics.peak_density > 0.0);
    assert!(metrics.peak_velocity > 0.0);
}

#[test]
fn run_frame_stall_hits_cap_once() {
    let metrics = BenchmarkRunner::run(&Scenario::frame_stall()).unwrap();

    assert_eq!(metrics.capped_frames, 1);
    assert_eq!(metrics.steps_dropped, 90);
    assert_eq!(metrics.steps_run, 48 + 10 + 48);
    assert!(metrics.finite);
}

#[test]
fn runs_are_reproducible() {
    let scenario = shortened(Scenario::drag_stroke(), 40);
    let a = BenchmarkRunner::run(&scenario).unwrap();
    let b = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(a.fingerprint, b.fingerprint);
    assert_eq!(a.peak_density, b.peak_density);
    assert_eq!(a.steps_run, b.steps_run);
}

#[test]
fn different_scripts_differ() {
    let tap = BenchmarkRunner::run(&shortened(Scenario::single_tap(), 20)).unwrap();
    let stroke = BenchmarkRunner::run(&shortened(Scenario::drag_stroke(), 20)).unwrap();
    assert_ne!(tap.fingerprint, stroke.fingerprint);
}

#[test]
fn run_all_short_scenarios() {
    for &kind in ScenarioKind::all() {
        let scenario = shortened(Scenario::from_kind(kind), 10);
        let metrics = BenchmarkRunner::run(&scenario).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert!(metrics.total_wall_time >= 0.0);
        assert!(metrics.finite);
    }
}

#[test]
fn invalid_config_is_rejected() {
    let config = SimulationConfig {
        grid: GridConfig {
            count_x: 0,
            count_y: 10,
        },
        ..Default::default()
    };
    let scenario = Scenario::single_tap().with_config(config);
    assert!(BenchmarkRunner::run(&scenario).is_err());
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn csv_rows_match_header() {
    let metrics = BenchmarkRunner::run(&shortened(Scenario::single_tap(), 5)).unwrap();
    let csv = BenchmarkMetrics::to_csv(&[metrics.clone(), metrics]);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    let columns = lines[0].split(',').count();
    assert_eq!(columns, 13);
    assert!(lines[1..].iter().all(|l| l.split(',').count() == columns));
    assert!(lines[1].starts_with("single_tap,12288,5,"));
}

#[test]
fn metrics_json_round_trip() {
    let metrics = BenchmarkRunner::run(&shortened(Scenario::multi_touch(), 5)).unwrap();
    let json = serde_json::to_string(&metrics).unwrap();
    let back: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scenario, "multi_touch");
    assert_eq!(back.fingerprint, metrics.fingerprint);
    assert_eq!(back.steps_run, metrics.steps_run);
}
