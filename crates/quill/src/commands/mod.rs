//! CLI command implementations.

pub(crate) mod css;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use quill_admin::Locale;
use quill_articles::ArticlesClient;
use quill_config::{CliSettings, Config};
use tracing::debug;

use crate::error::CliError;

pub(crate) use css::CssArgs;
pub(crate) use delete::DeleteArgs;
pub(crate) use edit::{CreateArgs, UpdateArgs};
pub(crate) use list::ListArgs;
pub(crate) use render::{RenderArgs, ShowArgs};

/// Options shared by all commands.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Articles API base URL (overrides config).
    #[arg(long, env = "QUILL_API_URL", global = true)]
    api_url: Option<String>,

    /// Message language: en or ja (overrides config).
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Enable verbose output (request and render logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration with the CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            api_url: self.api_url.clone(),
            locale: self.locale.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        debug!(path = ?config.config_path, api = %config.api.base_url, "Loaded configuration");
        Ok(config)
    }
}

/// Articles API client for the configured base URL.
pub(crate) fn client(config: &Config) -> ArticlesClient {
    ArticlesClient::new(&config.api.base_url, config.api.timeout())
}

/// Configured display locale.
pub(crate) fn locale(config: &Config) -> Result<Locale, CliError> {
    Ok(config.ui.locale.parse()?)
}
