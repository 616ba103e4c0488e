//! Command-line entry point: build a planet grid and locate query positions.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p defender-app -- --cells 2000 --query 0,5,0 --query=-3,1,4`.

use std::process::ExitCode;

use clap::Parser;
use defender_app::parse_vec3;
use defender_config::{CliArgs, Config};
use glam::DVec3;

#[derive(Parser, Debug)]
#[command(name = "planet-defender", about = "Planet Defender sphere grid")]
struct AppArgs {
    #[command(flatten)]
    config: CliArgs,

    /// World position to locate, as `x,y,z`. Repeatable.
    #[arg(long = "query", value_parser = parse_vec3, allow_hyphen_values = true)]
    queries: Vec<DVec3>,
}

fn main() -> ExitCode {
    let args = AppArgs::parse();
    let config_dir = args.config.config_dir();

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args.config);

    let log_dir = config_dir.join("logs");
    defender_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match defender_app::run(&config, &args.queries) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
