use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use modelfetch::core::{config, pipeline};

/// Download the SSD MobileNet V1 TFLite model and COCO label map for the
/// SmartFocus app. Run this once before building the app.
#[derive(Parser)]
#[clap(name = "modelfetch")]
#[clap(about = "Fetches the SmartFocus detection model assets")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Model archive URL
    #[clap(long, default_value = config::DEFAULT_MODEL_URL)]
    url: String,

    /// Directory the model assets are placed into
    #[clap(long, default_value = config::DEFAULT_ASSETS_DIR)]
    dir: PathBuf,

    /// Download timeout in seconds
    #[clap(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::FetchConfig {
        model_url: cli.url,
        assets_dir: cli.dir,
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    if let Err(e) = pipeline::run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
