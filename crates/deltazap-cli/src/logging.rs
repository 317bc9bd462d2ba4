// deltazap-core/deltazap-cli
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::metadata::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::CliConfig;

const LOG_FILENAME: &str = "deltazap.log";

/// Logs to stderr, filtered by `DELTAZAP_LOG`, and everything from `info` up as JSON to a file
/// in the configured log directory.
pub fn enable_logging(config: &CliConfig) -> Result<()> {
    let appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILENAME);

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let terminal_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::try_new(&config.log_filter)?);

    Registry::default()
        .with(terminal_layer)
        .with(json_layer)
        .try_init()?;

    Ok(())
}
