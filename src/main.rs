//! Entry point for the glossary string extractor.

use std::process::ExitCode;

use apple_glossary_strings::cli::Cli;
use apple_glossary_strings::config::{
    ConfigError,
    ConfigManager,
};
use apple_glossary_strings::{
    ExtractError,
    RunReport,
    extractor,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Runs the extraction and maps fatal errors to a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match execute(cli) {
        Ok(report) => {
            tracing::info!(
                "Wrote {} files ({} lookups failed, {} locales skipped).",
                report.locales.len(),
                report.failure_count(),
                report.skipped.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Resolves the configuration from the settings file and flags, then extracts.
fn execute(cli: Cli) -> Result<RunReport, ExtractError> {
    let working_dir = std::env::current_dir().map_err(ConfigError::from)?;

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(cli.config.as_deref(), &working_dir)?;
    if let Some(config_path) = config_manager.config_path() {
        tracing::info!("Using settings from {}.", config_path.display());
    }
    config_manager.apply_overrides(cli.output_dir, cli.volumes_dir);
    let config = config_manager.extract_config(cli.mode, &cli.locales)?;

    extractor::run(config)
}
