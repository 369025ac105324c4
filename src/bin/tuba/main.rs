//! tuba - walking-bass demo for the tuba engine
//!
//! Run with: cargo run --bin tuba -- --seconds 20

mod app;
mod walker;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Play a random walking tuba line on the default output device")]
pub struct Args {
    /// How long to play, in seconds
    #[arg(long, default_value_t = 16.0)]
    pub seconds: f64,

    /// Time between rhythmic ticks, in seconds (triplet eighths at 111 BPM)
    #[arg(long, default_value_t = 0.18)]
    pub interval: f64,

    /// Key as a semitone offset from C (0-11); random when omitted
    #[arg(long)]
    pub key: Option<i32>,

    /// Seed for both the melody and the filter noise
    #[arg(long)]
    pub seed: Option<u64>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    app::run(Args::parse())
}
