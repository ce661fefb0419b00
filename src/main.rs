use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod discovery;
mod error;
mod metadata;
mod release;

use cli::{Cli, Mode};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Warnings are always shown; --verbose adds debug output
    let filter = if cli.verbose {
        EnvFilter::new("cardpack=debug")
    } else {
        EnvFilter::new("cardpack=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = match cli.root {
        Some(ref root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let loaded = Config::load_or_default(&root, cli.config.as_deref());

    match cli.mode() {
        Mode::Clean => {
            // Cleaning never fails on a bad layout file
            let config = loaded.unwrap_or_else(|e| {
                warn!("{}; using the default layout", e);
                Config::default()
            });
            cli::clean::execute(&config.paths(&root)?)
        }
        Mode::Package => {
            let config = loaded?;
            let paths = config.paths(&root)?;
            cli::package::execute(&config, &paths, cli.dry_run)
        }
    }
}
