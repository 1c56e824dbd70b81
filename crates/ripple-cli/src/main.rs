//! Ripple CLI: headless simulation, benchmarking and config tooling.

use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "ripple")]
#[command(version, about = "Ripple — interactive 2D wave-field simulation engine")]
struct Cli {
    /// Show debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation: one tap at the center, then free ringing.
    Simulate {
        /// Path to simulation config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of frames to play.
        #[arg(short, long, default_value_t = 300)]
        frames: u32,

        /// Milliseconds between frames.
        #[arg(long, default_value_t = 16.0)]
        frame_ms: f64,

        /// Write the final grid snapshot to this file.
        #[arg(short, long)]
        snapshot: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (single_tap, drag_stroke, multi_touch, frame_stall, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a grid snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a simulation config file.
    Validate {
        /// Path to config file (TOML).
        path: String,
    },

    /// Print the default configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames,
            frame_ms,
            snapshot,
        } => commands::simulate(config.as_deref(), frames, frame_ms, snapshot.as_deref()),
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Config => commands::print_default_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
