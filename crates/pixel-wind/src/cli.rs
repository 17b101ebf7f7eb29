//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pixel-wind", version, about = "A pixel wind scene that carries a sealed letter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play the scene on its own.
    Play {
        /// Scene seed in [0, 1); random when omitted.
        #[arg(long, value_parser = parse_seed)]
        seed: Option<f64>,
    },
    /// Open a sealed letter from a link or a bare token.
    Open {
        /// Link containing `?l=<token>`, or the token itself.
        link: String,
    },
    /// Seal a letter and print its shareable link.
    Seal {
        #[arg(long)]
        to: String,
        #[arg(long)]
        from: String,
        /// First page of the letter.
        #[arg(long)]
        msg1: String,
        /// Optional second page.
        #[arg(long)]
        msg2: Option<String>,
        /// Video id or URL to attach.
        #[arg(long)]
        media: Option<String>,
        /// Scene seed in [0, 1); random when omitted.
        #[arg(long, value_parser = parse_seed)]
        seed: Option<f64>,
        /// Base URL to append the letter to; defaults to the configured one.
        #[arg(long)]
        base: Option<String>,
    },
    /// Render one frame of a scene to a PNG file.
    Snapshot {
        #[arg(long, value_parser = parse_seed)]
        seed: f64,
        /// Number of frames to simulate before capturing.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        frames: u64,
        /// Width / height of the output.
        #[arg(long, default_value_t = 16.0 / 9.0)]
        aspect: f64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn parse_seed(value: &str) -> Result<f64, String> {
    let seed: f64 = value.parse().map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..1.0).contains(&seed) {
        Ok(seed)
    } else {
        Err(format!("seed {seed} must be in [0, 1)"))
    }
}
