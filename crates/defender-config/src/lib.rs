//! Configuration for the Planet Defender grid tools.
//!
//! Settings persist to disk as a RON file, can be overridden from the
//! command line via clap, and support hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, default_config_dir};
pub use config::{Config, DebugConfig, GridConfig, GridLookup, PlanetConfig};
pub use error::ConfigError;
