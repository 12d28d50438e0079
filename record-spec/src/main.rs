//! Inspect or stage recording intent for a mission.
//!
//! Builds a [`RecordSpec`] from flags, then either prints its plan as JSON or
//! creates the staging directory a recorder would write into.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use record_spec::config::{RecordConfig, load_config};
use record_spec::logging;
use record_spec::spec::RecordSpec;
use record_spec::staging::prepare_staging;

#[derive(Parser)]
#[command(
    name = "record-spec",
    version,
    about = "Describe what a mission recording should capture"
)]
struct Cli {
    /// Recording config (TOML). Defaults apply if the file is missing.
    #[arg(long, global = true, default_value = "record.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the recording plan as JSON.
    Plan(SpecArgs),
    /// Create the staging directory and write its plan manifest.
    Prepare(SpecArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct SpecArgs {
    /// Archive to package the recording into. Empty records nothing.
    destination: String,

    /// Record video at the configured quality.
    #[arg(long)]
    video: bool,

    /// Video frame rate (implies --video).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    fps: Option<u32>,

    /// Video bit rate in bits per second (implies --video).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    bit_rate: Option<u64>,

    #[arg(long)]
    observations: bool,

    #[arg(long)]
    rewards: bool,

    #[arg(long)]
    commands: bool,
}

impl SpecArgs {
    fn build(&self, cfg: &RecordConfig) -> RecordSpec {
        let mut spec = cfg.spec(self.destination.as_str());
        if self.video || self.fps.is_some() || self.bit_rate.is_some() {
            spec.record_video(
                self.fps.unwrap_or(cfg.video.frames_per_second),
                self.bit_rate.unwrap_or(cfg.video.bit_rate),
            );
        }
        if self.observations {
            spec.record_observations();
        }
        if self.rewards {
            spec.record_rewards();
        }
        if self.commands {
            spec.record_commands();
        }
        spec
    }
}

fn main() {
    if let Err(err) = logging::init().and_then(|()| run()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?;
    match cli.command {
        Command::Plan(args) => cmd_plan(&args, &cfg),
        Command::Prepare(args) => cmd_prepare(&args, &cfg),
    }
}

fn cmd_plan(args: &SpecArgs, cfg: &RecordConfig) -> Result<()> {
    let plan = args.build(cfg).into_plan();
    let json = serde_json::to_string_pretty(&plan).context("serialize record plan")?;
    println!("{json}");
    Ok(())
}

fn cmd_prepare(args: &SpecArgs, cfg: &RecordConfig) -> Result<()> {
    let plan = args.build(cfg).into_plan();
    if let Some(dir) = prepare_staging(&plan)? {
        println!("{}", dir.display());
    }
    Ok(())
}
