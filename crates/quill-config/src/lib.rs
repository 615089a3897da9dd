//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `api.base_url`
//! - `render.theme`
//! - `ui.locale`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Articles API base URL.
    pub api_url: Option<String>,
    /// Override display locale.
    pub locale: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// Locale codes accepted for `ui.locale`.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "ja"];

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Articles API configuration.
    pub api: ApiConfig,
    /// Markdown rendering configuration.
    pub render: RenderConfig,
    /// User interface configuration.
    pub ui: UiConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Articles API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API base URL; the `articles` resource lives under it.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Markdown rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Enable GFM tables, strikethrough and task lists.
    pub gfm: bool,
    /// Highlighting theme for the generated stylesheet.
    pub theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            theme: "InspiredGitHub".to_owned(),
        }
    }
}

/// User interface configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Message language, one of [`SUPPORTED_LOCALES`].
    pub locale: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`api.base_url`").
        field: String,
        /// Error message (e.g., "${`QUILL_API_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading and take precedence over
    /// config file values. The result is validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_config(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.ui.locale = config.ui.locale.trim().to_ascii_lowercase();
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_url) = &settings.api_url {
            self.api.base_url.clone_from(api_url);
        }
        if let Some(locale) = &settings.locale {
            self.ui.locale.clone_from(locale);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api.base_url, "api.base_url")?;
        require_http_url(&self.api.base_url, "api.base_url")?;
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        require_non_empty(&self.render.theme, "render.theme")?;

        if !SUPPORTED_LOCALES.contains(&self.ui.locale.as_str()) {
            return Err(ConfigError::Validation(format!(
                "ui.locale must be one of {}, got '{}'",
                SUPPORTED_LOCALES.join(", "),
                self.ui.locale
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.api.base_url = expand::expand_env(&self.api.base_url, "api.base_url")?;
        self.render.theme = expand::expand_env(&self.render.theme, "render.theme")?;
        self.ui.locale = expand::expand_env(&self.ui.locale, "ui.locale")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert!(config.render.gfm);
        assert_eq!(config.render.theme, "InspiredGitHub");
        assert_eq!(config.ui.locale, "en");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[api]
base_url = "https://blog.example.com/api"
timeout_secs = 5

[render]
gfm = false
theme = "Solarized (dark)"

[ui]
locale = "ja"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "https://blog.example.com/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert!(!config.render.gfm);
        assert_eq!(config.render.theme, "Solarized (dark)");
        assert_eq!(config.ui.locale, "ja");
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[ui]\nlocale = \"ja\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.ui.locale, "ja");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_explicit_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_validates_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_config(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            api_url: Some("https://api.example.com".to_owned()),
            locale: Some("ja".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.ui.locale, "ja");
        assert_eq!(config.api.timeout_secs, 30); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.ui.locale, "en");
    }

    #[test]
    fn test_cli_settings_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            locale: Some("fr".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(err.to_string().contains("ui.locale"));
    }

    #[test]
    fn test_locale_case_and_whitespace_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nlocale = \"EN\"\n").unwrap();
        assert_eq!(Config::load(Some(&path), None).unwrap().ui.locale, "en");

        let overrides = CliSettings {
            locale: Some(" JA".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();
        assert_eq!(config.ui.locale, "ja");
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("QUILL_TEST_API_URL", "https://staging.example.com/api");
            std::env::remove_var("QUILL_TEST_LOCALE");
        }

        let toml = r#"
[api]
base_url = "${QUILL_TEST_API_URL}"

[ui]
locale = "${QUILL_TEST_LOCALE:-ja}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.api.base_url, "https://staging.example.com/api");
        assert_eq!(config.ui.locale, "ja");

        unsafe {
            std::env::remove_var("QUILL_TEST_API_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_QUILL_CONFIG_TEST");
        }

        let toml = r#"
[api]
base_url = "${MISSING_VAR_QUILL_CONFIG_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_QUILL_CONFIG_TEST"));
        assert!(err.to_string().contains("api.base_url"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_base_url_empty() {
        let mut config = Config::default();
        config.api.base_url = String::new();
        assert_validation_error(&config, &["api.base_url", "empty"]);
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_owned();
        assert_validation_error(&config, &["api.base_url", "http"]);
    }

    #[test]
    fn test_validate_theme_empty() {
        let mut config = Config::default();
        config.render.theme = String::new();
        assert_validation_error(&config, &["render.theme"]);
    }

    #[test]
    fn test_validate_locale() {
        let mut config = Config::default();
        config.ui.locale = "de".to_owned();
        assert_validation_error(&config, &["ui.locale", "en, ja", "'de'"]);
    }
}
