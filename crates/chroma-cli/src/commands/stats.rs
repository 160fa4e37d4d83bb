//! Stats command
//!
//! Prints the whole-image Lab statistics that global transfer works from.

use crate::StatsArgs;
use anyhow::Result;
use chroma_color::LabPlanes;
use chroma_ops::{LabStats, RegionStats};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: StatsArgs, verbose: u8) -> Result<()> {
    for path in &args.inputs {
        trace!(input = %path.display(), gray = args.gray, "stats::run");
        let image = if args.gray {
            super::load_gray(path)?
        } else {
            super::load_rgb(path)?
        };

        println!("{}", path.display());
        if verbose > 0 {
            println!("  Size: {}x{}", image.width(), image.height());
        }
        if image.is_empty() {
            println!("  (empty)");
            continue;
        }

        let stats = LabStats::from_planes(&LabPlanes::from_image(&image));
        print!("{}", format_stats(&stats));
    }
    Ok(())
}

/// Formats one line per channel.
pub fn format_stats(stats: &LabStats) -> String {
    let line = |name: &str, s: RegionStats| {
        format!("  {}: mean={:>9.4} std={:>9.4}\n", name, s.mean, s.std_dev)
    };
    [line("L", stats.l), line("a", stats.a), line("b", stats.b)].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats() {
        let stats = LabStats {
            l: RegionStats::new(50.0, 2.5),
            a: RegionStats::new(-1.0, 0.0),
            b: RegionStats::new(12.25, 3.0),
        };
        let text = format_stats(&stats);
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("  L: mean=  50.0000 std=   2.5000"));
        assert!(text.contains("  a: mean=  -1.0000"));
    }
}
