use clap::{CommandFactory, Parser};
use log::{LevelFilter, error};
use std::path::PathBuf;
use std::process::ExitCode;

use edgemap::models::DEFAULT_IMAGE;
use edgemap::{EdgePreview, Threshold};

#[derive(Parser)]
#[command(name = "edgemap")]
#[command(about = "Preview Canny edges of an image with a live threshold slider")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", default_value = DEFAULT_IMAGE)]
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(
            "edgemap",
            if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            },
        )
        .init();

    let preview = match EdgePreview::load(&args.image_path, Threshold::DEFAULT) {
        Ok(preview) => preview,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", Cli::command().render_usage());
            return Ok(ExitCode::FAILURE);
        }
    };

    edgemap::gui::run(preview)?;

    Ok(ExitCode::SUCCESS)
}
