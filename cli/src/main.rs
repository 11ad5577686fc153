use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use std::io::{self, Write};
use tilemerge_core::PlayEngine;

mod bot;
mod play;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Play from the keyboard, one direction per line
    Play,
    /// Let the greedy bot play until the game ends (default)
    Bot {
        /// Stop after this many steps even if the game is not over
        #[arg(long)]
        max_steps: Option<u32>,

        /// Print a JSON summary once the run finishes
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");
    let mut engine = PlayEngine::new(SmallRng::seed_from_u64(seed));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode.unwrap_or(Mode::Bot {
        max_steps: None,
        json: false,
    }) {
        Mode::Play => {
            let stdin = io::stdin();
            play::start(&mut engine, stdin.lock(), &mut out)?;
        }
        Mode::Bot { max_steps, json } => {
            let report = bot::BotDriver::new(max_steps).start(&mut engine, &mut out)?;
            if json {
                serde_json::to_writer_pretty(&mut out, &report)
                    .context("Failed to write bot report")?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
