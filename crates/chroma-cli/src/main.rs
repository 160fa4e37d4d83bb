//! chroma - Colorize grayscale images from a color reference
//!
//! Matches the Lab a/b statistics of the grayscale image to those of the
//! reference, globally or per tile, and keeps the grayscale lightness.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Colorize grayscale images by Lab statistics transfer")]
#[command(long_about = "
Transfers color from a reference image onto a grayscale image by matching
the mean and standard deviation of the CIELAB a/b channels. Lightness is
taken from the grayscale image unchanged.

Examples:
  chroma transfer grayscale.jpg reference.jpg
  chroma transfer gray.png ref.png -o out.png -m patch
  chroma transfer gray.png ref.png -m patch --tile-size 16 -q 95
  chroma stats reference.jpg
  chroma stats grayscale.jpg --gray
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v: messages and debug logs, -vv: trace logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Colorize a grayscale image from a reference
    #[command(visible_alias = "t")]
    Transfer(TransferArgs),

    /// Print per-channel Lab mean and standard deviation
    #[command(visible_alias = "s")]
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct TransferArgs {
    /// Grayscale input image (decoded as luma)
    pub gray: PathBuf,

    /// Color reference image
    pub reference: PathBuf,

    /// Output image; JPEG unless the extension says otherwise
    #[arg(short, long, default_value = "colorized_output.jpg")]
    pub output: PathBuf,

    /// Statistics mode: global, patch
    #[arg(short, long, default_value = "global")]
    pub mode: String,

    /// Tile side in patch mode
    #[arg(long, default_value_t = chroma_ops::PATCH_SIZE)]
    pub tile_size: u32,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value = "90", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Input images
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Decode as grayscale first, as `transfer` does for its first input
    #[arg(long)]
    pub gray: bool,
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Transfer(args) => commands::transfer::run(args, cli.verbose),
        Commands::Stats(args) => commands::stats::run(args, cli.verbose),
    }
}
