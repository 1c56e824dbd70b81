//! Benchmark scenarios: grid config plus a scripted frame sequence.
//!
//! Four canonical scenarios:
//! 1. **Single tap** — one tap at the center, then free ringing
//! 2. **Drag stroke** — one contact dragged across the surface
//! 3. **Multi touch** — four simultaneous contacts moving diagonally
//! 4. **Frame stall** — a tap followed by a one-second frame hitch

use serde::{Deserialize, Serialize};

use ripple_engine::{GridConfig, SimulationConfig};
use ripple_input::SurfacePoint;
use ripple_types::ContactId;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// One tap, then the field rings down.
    SingleTap,
    /// A single contact dragged left to right.
    DragStroke,
    /// Several contacts active at once.
    MultiTouch,
    /// A long frame forces the step cap.
    FrameStall,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::SingleTap,
            ScenarioKind::DragStroke,
            ScenarioKind::MultiTouch,
            ScenarioKind::FrameStall,
        ]
    }

    /// Returns the name used on the command line and in CSV output.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::SingleTap => "single_tap",
            ScenarioKind::DragStroke => "drag_stroke",
            ScenarioKind::MultiTouch => "multi_touch",
            ScenarioKind::FrameStall => "frame_stall",
        }
    }

    /// Looks a scenario up by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<ScenarioKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// One host input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScriptedInput {
    /// Contact down.
    Start { contact: ContactId, pos: SurfacePoint },
    /// Contact moved.
    Move { contact: ContactId, pos: SurfacePoint },
    /// Contact lifted.
    End { contact: ContactId },
}

/// One animation frame: time since the previous frame, and the input
/// delivered before it is drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Milliseconds since the previous frame.
    pub interval_ms: f64,
    /// Input events received during the interval.
    pub inputs: Vec<ScriptedInput>,
}

impl Frame {
    /// A frame with no input.
    pub fn idle(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            inputs: Vec::new(),
        }
    }

    /// A frame carrying input events.
    pub fn with_inputs(interval_ms: f64, inputs: Vec<ScriptedInput>) -> Self {
        Self { interval_ms, inputs }
    }
}

/// Frame interval of a 60 Hz display, rounded to whole milliseconds.
pub const FRAME_MS: f64 = 16.0;

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Simulation configuration.
    pub config: SimulationConfig,
    /// The frame script.
    pub frames: Vec<Frame>,
}

fn bench_config() -> SimulationConfig {
    SimulationConfig {
        grid: GridConfig {
            count_x: 128,
            count_y: 96,
        },
        ..Default::default()
    }
}

fn idle_frames(count: usize) -> impl Iterator<Item = Frame> {
    std::iter::repeat_with(|| Frame::idle(FRAME_MS)).take(count)
}

impl Scenario {
    /// Create the single tap scenario.
    ///
    /// One tap at the center of a 128×96 grid, then 120 idle frames.
    pub fn single_tap() -> Self {
        let tap = ScriptedInput::Start {
            contact: ContactId::POINTER,
            pos: SurfacePoint::new(0.5, 0.5),
        };
        let lift = ScriptedInput::End {
            contact: ContactId::POINTER,
        };

        let mut frames = vec![Frame::with_inputs(FRAME_MS, vec![tap, lift])];
        frames.extend(idle_frames(119));

        Self {
            kind: ScenarioKind::SingleTap,
            config: bench_config(),
            frames,
        }
    }

    /// Create the drag stroke scenario.
    ///
    /// The pointer goes down at the left, crosses to the right over 60
    /// frames, lifts, and the field rings for 60 more frames.
    pub fn drag_stroke() -> Self {
        let contact = ContactId::POINTER;
        let mut frames = vec![Frame::with_inputs(
            FRAME_MS,
            vec![ScriptedInput::Start {
                contact,
                pos: SurfacePoint::new(0.2, 0.5),
            }],
        )];

        for k in 1..=60 {
            let x = 0.2 + 0.6 * k as f32 / 60.0;
            let y = 0.5 + 0.1 * (k as f32 / 10.0).sin();
            frames.push(Frame::with_inputs(
                FRAME_MS,
                vec![ScriptedInput::Move {
                    contact,
                    pos: SurfacePoint::new(x, y),
                }],
            ));
        }

        frames.push(Frame::with_inputs(FRAME_MS, vec![ScriptedInput::End { contact }]));
        frames.extend(idle_frames(60));

        Self {
            kind: ScenarioKind::DragStroke,
            config: bench_config(),
            frames,
        }
    }

    /// Create the multi touch scenario.
    ///
    /// Four contacts start around the center and move outward together
    /// for 40 frames before lifting.
    pub fn multi_touch() -> Self {
        let starts = [(0.4, 0.4), (0.6, 0.4), (0.4, 0.6), (0.6, 0.6)];
        let dirs = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];

        let down = starts
            .iter()
            .enumerate()
            .map(|(n, &(x, y))| ScriptedInput::Start {
                contact: ContactId(n as u32),
                pos: SurfacePoint::new(x, y),
            })
            .collect();
        let mut frames = vec![Frame::with_inputs(FRAME_MS, down)];

        for k in 1..=40 {
            let t = 0.3 * k as f32 / 40.0;
            let moves = starts
                .iter()
                .zip(dirs.iter())
                .enumerate()
                .map(|(n, (&(x, y), &(dx, dy)))| ScriptedInput::Move {
                    contact: ContactId(n as u32),
                    pos: SurfacePoint::new(x + dx * t, y + dy * t),
                })
                .collect();
            frames.push(Frame::with_inputs(FRAME_MS, moves));
        }

        let up = (0..starts.len())
            .map(|n| ScriptedInput::End {
                contact: ContactId(n as u32),
            })
            .collect();
        frames.push(Frame::with_inputs(FRAME_MS, up));
        frames.extend(idle_frames(80));

        Self {
            kind: ScenarioKind::MultiTouch,
            config: bench_config(),
            frames,
        }
    }

    /// Create the frame stall scenario.
    ///
    /// A tap, 30 normal frames, one 1000 ms frame, then 30 normal frames.
    /// The long frame owes 100 steps and the cap allows 10.
    pub fn frame_stall() -> Self {
        let tap = ScriptedInput::Start {
            contact: ContactId::POINTER,
            pos: SurfacePoint::new(0.3, 0.3),
        };
        let lift = ScriptedInput::End {
            contact: ContactId::POINTER,
        };

        let mut frames = vec![Frame::with_inputs(FRAME_MS, vec![tap, lift])];
        frames.extend(idle_frames(29));
        frames.push(Frame::idle(1000.0));
        frames.extend(idle_frames(30));

        Self {
            kind: ScenarioKind::FrameStall,
            config: bench_config(),
            frames,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::SingleTap => Self::single_tap(),
            ScenarioKind::DragStroke => Self::drag_stroke(),
            ScenarioKind::MultiTouch => Self::multi_touch(),
            ScenarioKind::FrameStall => Self::frame_stall(),
        }
    }

    /// Replace the simulation configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of scripted frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Simulated time covered by the script, in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.frames.iter().map(|f| f.interval_ms).sum()
    }
}
