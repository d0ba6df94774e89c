mod cli;
mod log;

use anyhow::{Context, anyhow};
use clap::Parser;
use cli::Cli;
use scroller_config::StartupConfig;
use tracing::{debug, warn};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = log::init() {
        eprintln!("Warning: logging not initialised: {err}");
    }

    let config = StartupConfig::load_or_default(cli.config.as_deref())
        .context("failed to load startup profile")?
        .with_speed_override(cli.speed)
        .context("invalid --speed")?;
    debug!(%config, "startup configuration");

    if let Some(path) = &cli.file {
        if !path.exists() {
            warn!(path = %path.display(), "startup file does not exist");
        }
    }

    scroller_gui::run(config, cli.file).map_err(|err| anyhow!("window closed with an error: {err}"))
}
