//! Application wiring for the `authz-info` binary
//!
//! Resolves configuration, sets up logging and drives the builder over a
//! recorded responses file.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use anyhow::{Context, Result};
use log::{debug, error, info, LevelFilter};
use crate::cli::Args;
use crate::config::ConfigManager;
use crate::logging::{self, LogConfig, LogDestination, LogFormat};
use crate::plugin::{
    AuthorizationPluginInfo, AuthorizationPluginInfoBuilder, FixtureExtension, PluginDescriptor, QueryMode,
};

/// Load configuration from --config-file or the discovery hierarchy
pub fn load_configuration(args: &Args) -> Result<ConfigManager> {
    let mut manager = match &args.config_file {
        Some(path) => ConfigManager::load_from_file(path.clone())?,
        None => ConfigManager::load()?,
    };

    if let Some(section) = &args.config_name {
        manager.select_section(section.clone());
    }

    Ok(manager)
}

/// Combine CLI flags and configuration into a logger configuration
pub fn configure_logging(args: &Args, config: &ConfigManager) -> Result<LogConfig> {
    let console_level = if args.debug {
        LevelFilter::Trace
    } else if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Error
    } else {
        config.get_log_level("base", "console-level")?.unwrap_or(LevelFilter::Info)
    };

    let format = match args.log_format.as_deref().or_else(|| config.get_value("base", "log-format").map(String::as_str)) {
        Some(format) => LogFormat::from_str(format).map_err(|e| anyhow::anyhow!(e))?,
        None => LogFormat::Text,
    };

    let log_file = args.log_file.clone().or_else(|| config.get_path("base", "log-file"));

    let file_level = match &args.log_file_level {
        Some(level) => Some(logging::parse_log_level(level)?),
        None => config.get_log_level("base", "file-log-level")?,
    };
    // a log file without an explicit level records what the console shows
    let file_level = match (&log_file, file_level) {
        (Some(_), None) => Some(console_level),
        (_, level) => level,
    };

    Ok(LogConfig {
        console_level,
        file_level,
        format,
        destination: LogDestination::for_file(log_file),
    })
}

/// Responses file from the CLI, falling back to `[extension] responses-file`
pub fn resolve_responses_file(args: &Args, config: &ConfigManager) -> Result<PathBuf> {
    args.responses
        .clone()
        .or_else(|| config.get_path("extension", "responses-file"))
        .ok_or_else(|| anyhow::anyhow!("No responses file given: use --responses or set [extension] responses-file"))
}

/// Build every requested plugin and write the successful ones as JSON
///
/// Returns the number of plugins whose build failed.
pub async fn build_and_report<W: Write>(args: &Args, config: &ConfigManager, out: &mut W) -> Result<usize> {
    let responses = resolve_responses_file(args, config)?;
    let extension = FixtureExtension::load_from_file(&responses)?;

    let mut builder_config = config.get_builder_config()?;
    if args.sequential {
        builder_config.query_mode = QueryMode::Sequential;
    }

    let plugin_ids = if args.plugin_ids.is_empty() {
        extension.plugin_ids()
    } else {
        args.plugin_ids.clone()
    };
    debug!("Building plugin info for {:?}", plugin_ids);

    let descriptors: Vec<Arc<PluginDescriptor>> = plugin_ids
        .iter()
        .map(|id| Arc::new(PluginDescriptor::new(id.as_str())))
        .collect();

    let builder = AuthorizationPluginInfoBuilder::new(Arc::new(extension)).with_config(builder_config);
    let results = builder.plugin_infos_for(&descriptors).await;

    let mut infos: Vec<AuthorizationPluginInfo> = Vec::new();
    let mut failures = 0;
    for result in results {
        match result {
            Ok(info) => infos.push(info),
            Err(e) => {
                error!("{}", e);
                failures += 1;
            }
        }
    }

    serde_json::to_writer_pretty(&mut *out, &infos).context("Failed to write plugin info")?;
    writeln!(out)?;

    info!("Built {} plugin info(s), {} failed", infos.len(), failures);
    Ok(failures)
}
