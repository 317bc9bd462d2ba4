// deltazap-core/deltazap-cli
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use deltazap_core::dtos::UserId;
use deltazap_core::{AppConfig, ServerEndpoint};

const DEFAULT_DATABASE_PATH: &str = "deltazap.sqlite3";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5222;

pub struct CliConfig {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    /// Filter for the terminal log output, in `EnvFilter` syntax.
    pub log_filter: String,
    pub app_config: AppConfig,
}

impl CliConfig {
    /// Reads the configuration from the environment. A `.env` file in the working directory is
    /// loaded first if there is one.
    pub fn from_env() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("Failed to load .env file");
            }
        }

        let database_path = env::var("DATABASE_URL")
            .map(|url| parse_database_url(&url))
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));

        let host = env::var("DELTAZAP_XMPP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("DELTAZAP_XMPP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid DELTAZAP_XMPP_PORT '{}'", port))?,
            Err(_) => DEFAULT_PORT,
        };

        let admin_addresses = match env::var("DELTAZAP_ADMINS") {
            Ok(admins) => parse_admins(&admins)?,
            Err(_) => vec![],
        };

        Ok(CliConfig {
            database_path,
            log_dir: env::var("DELTAZAP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs")),
            log_filter: env::var("DELTAZAP_LOG").unwrap_or_else(|_| "warn".to_string()),
            app_config: AppConfig {
                server_endpoint: ServerEndpoint::new(host, port),
                admin_addresses,
                ..Default::default()
            },
        })
    }
}

/// Accepts `sqlite://<path>`, `sqlite:<path>` or a plain path.
fn parse_database_url(url: &str) -> PathBuf {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    PathBuf::from(path)
}

fn parse_admins(admins: &str) -> Result<Vec<UserId>> {
    admins
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(|address| {
            address
                .parse::<UserId>()
                .with_context(|| format!("Invalid address '{}' in DELTAZAP_ADMINS", address))
        })
        .collect()
}
