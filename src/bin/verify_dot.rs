use anyhow::Result;
use clap::Parser;
use status_dots::{inspect::inspect, Palette};
use std::path::PathBuf;

/// Check generated dot PNGs: size, center color and transparent background
#[derive(Debug, Parser)]
#[clap(name = "verify_dot")]
struct Args {
    /// PNG files to check. Defaults to the three standard dots in the current directory.
    #[clap(value_name = "PNG")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let palette = Palette::default();

    let files = if args.files.is_empty() {
        palette
            .entries()
            .iter()
            .map(|entry| PathBuf::from(entry.file_name()))
            .collect()
    } else {
        args.files
    };

    let mut failures = 0;

    for path in &files {
        println!("Checking dot in: {}", path.display());

        let report = match inspect(path) {
            Ok(report) => report,
            Err(err) => {
                println!("⚠ {:#}", err);
                failures += 1;
                continue;
            }
        };

        println!("  Image dimensions: {}x{}", report.width, report.height);
        println!(
            "  Center pixel RGBA: [{}, {}, {}, {}]",
            report.center[0], report.center[1], report.center[2], report.center[3]
        );
        println!("  Opaque pixels: {}", report.opaque_pixels);

        // `green_dot.png` -> palette entry `green`
        let expected = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.strip_suffix("_dot"))
            .and_then(|name| palette.get(name));

        match expected {
            Some(entry) if report.matches(entry.color) => println!("✓ Dot looks correct"),
            Some(_) => {
                println!("⚠ Dot does not match the expected shape or color");
                failures += 1;
            }
            None => {
                println!("⚠ File name does not match any palette color");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} dot images failed verification", failures, files.len());
    }

    Ok(())
}
