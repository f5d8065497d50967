use anyhow::Result;
use clap::Parser;
use status_dots::{dot_gen, GenerateOptions, Palette};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "status-dots",
    about = "Generate colored status dot emojis (green, red, orange)"
)]
struct Args {
    /// Output directory. Must already exist.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Also write emojis.json describing the generated emojis
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = GenerateOptions {
        output_dir: args.output,
        manifest: args.manifest,
    };

    dot_gen::generate_dots(&Palette::default(), &options)?;
    Ok(())
}
