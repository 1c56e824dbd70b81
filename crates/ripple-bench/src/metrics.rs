//! Benchmark metrics: data collected during a scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Grid cells (`count_x * count_y`).
    pub cell_count: usize,
    /// Frames played.
    pub frames: u32,
    /// Solver steps executed.
    pub steps_run: u64,
    /// Steps owed but discarded by the per-call cap.
    pub steps_dropped: u64,
    /// Frames on which the cap was hit.
    pub capped_frames: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame, including sampling (seconds).
    pub avg_frame_time: f64,
    /// Slowest frame (seconds).
    pub max_frame_time: f64,
    /// Largest |density| seen by the sampling pass.
    pub peak_density: f32,
    /// Largest |smoothed velocity| seen by the sampling pass.
    pub peak_velocity: f32,
    /// Whether the field stayed finite through the run.
    pub finite: bool,
    /// Fingerprint of the final grid state.
    pub fingerprint: u64,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,cell_count,frames,steps_run,steps_dropped,capped_frames,total_wall_time_s,avg_frame_ms,max_frame_ms,peak_density,peak_velocity,finite,fingerprint".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.6e},{:.6e},{},{:016x}",
            self.scenario,
            self.cell_count,
            self.frames,
            self.steps_run,
            self.steps_dropped,
            self.capped_frames,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.peak_density,
            self.peak_velocity,
            self.finite,
            self.fingerprint,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
