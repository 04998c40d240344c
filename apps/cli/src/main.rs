#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Commands};
use crate::handlers::{check, fields, transcode};

use annc_kernel::config::load_config;
use annc_kernel::domain::config::{AppConfig, LoggingConfig};
use annc_logger::{LevelFilter, Logger};
use anyhow::{Context, Result};
use clap::Parser;

const LOGGER_NAME: &str = "annc";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: AppConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    let _logger = init_logger(&cfg.logging, cli.verbose)?;

    match cli.command {
        Commands::Check { kind, files } => check::check_documents(kind, &files)?,
        Commands::Transcode { kind, input, output } => {
            transcode::transcode(kind, &input, &output)?;
        },
        Commands::Fields { kind } => fields::print_fields(kind),
    }

    Ok(())
}

fn init_logger(cfg: &LoggingConfig, verbose: bool) -> Result<Logger> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        cfg.level.parse().with_context(|| format!("Invalid log level '{}'", cfg.level))?
    };

    let builder = Logger::builder().name(LOGGER_NAME).level(level);
    let logger = match &cfg.directory {
        Some(directory) => builder.path(directory).max_files(cfg.max_files).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
