//! Transfer command
//!
//! Colorizes a grayscale image from a color reference.

use crate::TransferArgs;
use anyhow::{bail, Context, Result};
use chroma_ops::{TransferMode, TransferOptions};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Parses a mode name as given on the command line.
pub fn parse_mode(name: &str) -> Result<TransferMode> {
    match name.to_lowercase().as_str() {
        "global" | "g" => Ok(TransferMode::Global),
        "patch" | "local" | "p" => Ok(TransferMode::Patch),
        other => bail!("Unknown mode '{}' (expected global or patch)", other),
    }
}

/// Maps command-line arguments to [`TransferOptions`].
pub fn transfer_options(args: &TransferArgs) -> Result<TransferOptions> {
    let mode = parse_mode(&args.mode)?;
    if mode == TransferMode::Patch && args.tile_size == 0 {
        bail!("--tile-size must be at least 1");
    }
    Ok(TransferOptions {
        mode,
        tile_size: args.tile_size,
    })
}

pub fn run(args: TransferArgs, verbose: u8) -> Result<()> {
    trace!(
        gray = %args.gray.display(),
        reference = %args.reference.display(),
        mode = %args.mode,
        "transfer::run"
    );
    let options = transfer_options(&args)?;

    let gray = super::load_gray(&args.gray)?;
    if verbose > 0 {
        println!("Grayscale image loaded: {}x{}", gray.width(), gray.height());
    }
    let reference = super::load_rgb(&args.reference)?;
    if verbose > 0 {
        println!("Reference image loaded: {}x{}", reference.width(), reference.height());
    }

    info!(mode = %options.mode, tile_size = options.tile_size, "Transferring color");
    let output = chroma_ops::transfer(&gray, &reference, &options).with_context(|| {
        format!(
            "Cannot transfer {} onto {}",
            args.reference.display(),
            args.gray.display()
        )
    })?;

    super::save_image(&args.output, &output, args.quality)?;

    if verbose > 0 {
        println!("Colorized image saved as '{}'", args.output.display());
    }

    Ok(())
}
