//! Match Replay CLI
//!
//! Loads a match document and prints frames, trajectories, state, statistics
//! or determinism digests.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use of_cli::Profile;
use of_replay::{PlayerId, StatKind};

#[derive(Parser)]
#[command(name = "of-replay")]
#[command(about = "Replay football event data as interpolated player positions", long_about = None)]
#[command(version = of_replay::VERSION)]
struct Cli {
    /// Replay config file (.yaml/.yml or .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Configuration preset, ignored when --config is given
    #[arg(long, value_enum, global = true)]
    profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print render frames as JSON lines
    Frames {
        /// Match document (JSON)
        file: PathBuf,

        /// Frames per second of match time
        #[arg(long, default_value_t = 10.0)]
        fps: f64,

        /// First timestamp (seconds)
        #[arg(long)]
        from: Option<f64>,

        /// Last timestamp (seconds)
        #[arg(long)]
        to: Option<f64>,
    },

    /// Print one player's trajectory as JSON lines
    Probe {
        file: PathBuf,

        /// Player id
        #[arg(long)]
        player: u32,

        #[arg(long, default_value_t = 1.0)]
        fps: f64,
    },

    /// Print score, period and possession at a timestamp
    State {
        file: PathBuf,

        /// Timestamp (seconds)
        #[arg(long)]
        at: f64,
    },

    /// Print per-player statistics
    Stats {
        file: PathBuf,

        /// Rank players by this statistic (e.g. passes_completed, shots_on_target)
        #[arg(long)]
        top: Option<StatKind>,

        #[arg(long, default_value_t = 5)]
        limit: usize,
    },

    /// Print the SHA-256 digest of sampled frames
    Digest {
        file: PathBuf,

        #[arg(long, default_value_t = 25.0)]
        fps: f64,
    },

    /// Print the JSON schema of the match document
    Schema,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = of_cli::load_config(cli.config.as_deref(), cli.profile)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Frames { file, fps, from, to } => {
            let replay = of_cli::load_replay(&file, config)?;
            let n = of_cli::run_frames(&replay, fps, from, to, &mut out)?;
            debug!(frames = n, "frames written");
        }
        Commands::Probe { file, player, fps } => {
            let replay = of_cli::load_replay(&file, config)?;
            of_cli::run_probe(&replay, PlayerId(player), fps, &mut out)?;
        }
        Commands::State { file, at } => {
            let replay = of_cli::load_replay(&file, config)?;
            of_cli::run_state(&replay, at, &mut out)?;
        }
        Commands::Stats { file, top, limit } => {
            let replay = of_cli::load_replay(&file, config)?;
            of_cli::run_stats(&replay, top, limit, &mut out)?;
        }
        Commands::Digest { file, fps } => {
            let replay = of_cli::load_replay(&file, config)?;
            of_cli::run_digest(&replay, fps, &mut out)?;
        }
        Commands::Schema => of_cli::run_schema(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
