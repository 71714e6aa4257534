use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, SetSpec};

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub dir: String,
    pub interactive: bool,
    pub set: Vec<SetSpec>,
    pub paths_file: Option<PathBuf>,
    pub strict: bool,
    pub only: Vec<String>,
    pub stdout: bool,
    pub write: Option<PathBuf>,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        let cli = Cli::parse();
        Ok(Config {
            dir: cli.dir,
            interactive: cli.interactive,
            set: cli.set,
            paths_file: cli.paths_file,
            strict: cli.strict,
            only: cli.only,
            stdout: cli.stdout,
            write: cli.write,
        })
    }
}
