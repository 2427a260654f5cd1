// File: crates/demo/src/args.rs
// Summary: Command line for the headless tile demo.

use std::path::PathBuf;

use chart_tile::ThemeMode;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "tile-demo", about = "Drive a live area-chart tile through a scripted session and write PNG frames")]
pub struct Args {
    /// TOML file with tile settings; TILE_* environment variables override it.
    #[arg(short, long, env = "TILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Replay (time, value) rows from a CSV file instead of the synthetic stream.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Seed for the synthetic stream.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fill the window before mounting.
    #[arg(long)]
    pub prefill: bool,

    #[arg(long, default_value_t = 24)]
    pub ticks: usize,

    /// Write a frame every N ticks (the last tick always gets one).
    #[arg(long, default_value_t = 6)]
    pub frame_every: usize,

    #[arg(long, default_value = "light")]
    pub theme: ThemeMode,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(short, long, default_value = "target/out")]
    pub out: PathBuf,

    /// Log filter, e.g. "info" or "chart_tile=debug".
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}
