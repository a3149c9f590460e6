//! skills - Skill catalog CLI
//!
//! Browse, filter and count the curated skill catalog.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skill_catalog::app::AppContext;
use skill_catalog::cli::{Cli, Commands};
use skill_catalog::{CatalogError, Result, config};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let robot = cli.robot || config::robot_from_env();
    init_tracing(&cli, robot);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if robot {
                let error_json = serde_json::json!({
                    "error": true,
                    "code": e.code(),
                    "message": e.to_string(),
                    "retryable": e.is_retryable(),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
                if let CatalogError::DataUnavailable(_) = e {
                    eprintln!("Re-run the command to retry, or pass --offline to use the built-in catalog.");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Completions(args) = &cli.command {
        return skill_catalog::cli::commands::completions::run(args);
    }
    let mut ctx = AppContext::from_cli(cli)?;
    skill_catalog::cli::commands::run(&mut ctx, &cli.command)
}

fn init_tracing(cli: &Cli, robot: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,skill_catalog=warn",
        1 => "info,skill_catalog=debug",
        2 => "debug,skill_catalog=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
