pub mod clean;
pub mod package;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardpack")]
#[command(
    author,
    version,
    about = "Stage and zip card-set theme releases"
)]
pub struct Cli {
    /// Run mode tokens (case-insensitive); `clean` removes the release directory
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Layout root containing INFO, PySol/ and source/ (default: current directory)
    #[arg(short, long, env = "CARDPACK_ROOT")]
    pub root: Option<PathBuf>,

    /// Layout config file (default: <root>/cardpack.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the packaging plan without touching the file system
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Clean,
    Package,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        select_mode(&self.args)
    }
}

/// `clean` anywhere in the arguments wins over everything else
pub fn select_mode<S: AsRef<str>>(args: &[S]) -> Mode {
    if args
        .iter()
        .any(|arg| arg.as_ref().to_lowercase() == "clean")
    {
        Mode::Clean
    } else {
        Mode::Package
    }
}
