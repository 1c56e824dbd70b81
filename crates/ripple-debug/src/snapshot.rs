//! Grid state snapshots.
//!
//! Snapshots are for comparison, not storage: the engine keeps no state
//! across runs.

use serde::{Deserialize, Serialize};

use ripple_solver::WaveSolver;
use ripple_types::{RippleError, RippleResult, Scalar};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A copy of all four solver buffers at one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Completed solver steps when captured.
    pub step: u64,
    /// Cells along `i`.
    pub count_x: usize,
    /// Cells along `j`.
    pub count_y: usize,
    /// Current density, `i`-major.
    pub density: Vec<Scalar>,
    /// Current velocity, `i`-major.
    pub velocity: Vec<Scalar>,
    /// Previous-step density.
    pub prev_density: Vec<Scalar>,
    /// Previous-step velocity.
    pub prev_velocity: Vec<Scalar>,
}

impl GridSnapshot {
    /// Copies the solver's buffers.
    pub fn capture(solver: &WaveSolver) -> Self {
        let state = solver.state();
        Self {
            step: solver.step_count(),
            count_x: solver.cell_count_x(),
            count_y: solver.cell_count_y(),
            density: state.density.values().to_vec(),
            velocity: state.velocity.values().to_vec(),
            prev_density: state.prev_density.values().to_vec(),
            prev_velocity: state.prev_velocity.values().to_vec(),
        }
    }

    /// Serializes to compact binary (`bincode`).
    pub fn to_bytes(&self) -> RippleResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| RippleError::Serialization(format!("snapshot encoding failed: {e}")))
    }

    /// Deserializes from binary, checking buffer lengths against the
    /// recorded dimensions.
    pub fn from_bytes(data: &[u8]) -> RippleResult<Self> {
        let snapshot: Self = bincode::deserialize(data)
            .map_err(|e| RippleError::Serialization(format!("snapshot decoding failed: {e}")))?;

        let cells = snapshot.count_x.checked_mul(snapshot.count_y);
        let consistent = [
            &snapshot.density,
            &snapshot.velocity,
            &snapshot.prev_density,
            &snapshot.prev_velocity,
        ]
        .iter()
        .all(|buf| Some(buf.len()) == cells);
        if !consistent {
            return Err(RippleError::Serialization(format!(
                "snapshot buffers do not match {} x {} grid",
                snapshot.count_x, snapshot.count_y
            )));
        }
        Ok(snapshot)
    }

    /// FNV-1a hash of the binary encoding. Equal fingerprints mean
    /// bit-identical state.
    pub fn fingerprint(&self) -> RippleResult<u64> {
        let bytes = self.to_bytes()?;
        Ok(bytes.iter().fold(FNV_OFFSET, |hash, &b| {
            (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
        }))
    }

    /// Largest absolute difference across all four buffers, or `None`
    /// when the grids differ in shape.
    pub fn max_abs_diff(&self, other: &GridSnapshot) -> Option<Scalar> {
        if (self.count_x, self.count_y) != (other.count_x, other.count_y) {
            return None;
        }
        let pairs = [
            (&self.density, &other.density),
            (&self.velocity, &other.velocity),
            (&self.prev_density, &other.prev_density),
            (&self.prev_velocity, &other.prev_velocity),
        ];
        let diff = pairs
            .iter()
            .flat_map(|(a, b)| a.iter().zip(b.iter()))
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, Scalar::max);
        Some(diff)
    }
}
