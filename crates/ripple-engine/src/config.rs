//! Top-level simulation configuration.
//!
//! ```toml
//! [grid]
//! count_x = 256
//! count_y = 192
//!
//! [wave]
//! friction = 0.99
//! speed = 50.0
//!
//! [timestep]
//! timestep_ms = 10.0
//! max_steps_per_call = 10
//! ```
//!
//! Every section and field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use ripple_clock::TimestepConfig;
use ripple_input::InputConfig;
use ripple_solver::WaveConfig;
use ripple_types::constants::DEFAULT_CELL_WIDTH_PX;
use ripple_types::{RippleError, RippleResult};

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells along `i`.
    pub count_x: usize,
    /// Cells along `j`.
    pub count_y: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            count_x: 256,
            count_y: 192,
        }
    }
}

impl GridConfig {
    /// As many cells of `cell_width_px` as fit in the viewport.
    pub fn from_viewport(width_px: u32, height_px: u32, cell_width_px: u32) -> RippleResult<Self> {
        if cell_width_px == 0 {
            return Err(RippleError::InvalidConfig("cell width must be >= 1 px".into()));
        }
        let grid = Self {
            count_x: (width_px / cell_width_px) as usize,
            count_y: (height_px / cell_width_px) as usize,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// [`from_viewport`](Self::from_viewport) with the default
    /// [`DEFAULT_CELL_WIDTH_PX`] cell width.
    pub fn for_viewport(width_px: u32, height_px: u32) -> RippleResult<Self> {
        Self::from_viewport(width_px, height_px, DEFAULT_CELL_WIDTH_PX)
    }

    /// Both dimensions must be at least one cell.
    pub fn validate(&self) -> RippleResult<()> {
        if self.count_x == 0 || self.count_y == 0 {
            return Err(RippleError::InvalidGrid(format!(
                "cell counts must be >= 1, got {} x {}",
                self.count_x, self.count_y
            )));
        }
        Ok(())
    }
}

/// Every tunable of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid dimensions.
    pub grid: GridConfig,
    /// Solver parameters.
    pub wave: WaveConfig,
    /// Fixed step size and cap.
    pub timestep: TimestepConfig,
    /// Contact impulse magnitudes.
    pub input: InputConfig,
}

impl SimulationConfig {
    /// Validates every section.
    pub fn validate(&self) -> RippleResult<()> {
        self.grid.validate()?;
        self.wave.validate()?;
        self.timestep.validate()?;
        self.input.validate()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> RippleResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| RippleError::Serialization(format!("invalid config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> RippleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> RippleResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RippleError::Serialization(format!("config encoding failed: {e}")))
    }
}
