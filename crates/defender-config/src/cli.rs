//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, GridLookup};

/// Command-line overrides for the grid configuration.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "planet-defender", about = "Planet Defender sphere grid")]
pub struct CliArgs {
    /// Planet radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Number of grid cells.
    #[arg(long)]
    pub cells: Option<u32>,

    /// Nearest-cell lookup (auto, linear, bands).
    #[arg(long)]
    pub lookup: Option<GridLookup>,

    /// Seed for cell population.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// The config directory: `--config` if given, else [`default_config_dir`].
    pub fn config_dir(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_dir)
    }
}

/// Platform config directory for the tools, falling back to `./config`.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("planet-defender"))
        .unwrap_or_else(|| PathBuf::from("config"))
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.radius {
            self.planet.radius = r;
        }
        if let Some(n) = args.cells {
            self.grid.cell_count = n;
        }
        if let Some(lookup) = args.lookup {
            self.grid.lookup = lookup;
        }
        if let Some(seed) = args.seed {
            self.grid.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
