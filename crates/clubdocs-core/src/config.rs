//! Configuration module for clubdocs.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration for clubdocs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub profile: ProfileConfig,
    pub browser: BrowserConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

/// Document platform API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the document platform API.
    pub base_url: String,
    /// Bearer token for API requests. `None` until the user configures one
    /// (the `CLUBDOCS_TOKEN` environment variable takes precedence).
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Who the user is on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Platform role: `admin`, `coach`, or `player`.
    pub role: String,
}

/// Browsing behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Milliseconds a press must be held before the context menu opens.
    pub long_press_ms: u64,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

/// Session persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// File holding the id of the last opened folder.
    pub state_file: PathBuf,
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/clubdocs/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("clubdocs")
            .join("config.yaml")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            role: "player".to_string(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { long_press_ms: 500 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("clubdocs");
        Self {
            state_file: data_dir.join("session.json"),
        }
    }
}

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"api.timeout_secs"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid values for `profile.role`.
const VALID_ROLES: &[&str] = &["admin", "coach", "player"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            errors.push(ValidationError {
                field: "api.base_url".into(),
                message: format!("must be an http(s) URL, got '{}'", self.api.base_url),
            });
        }
        if self.api.timeout_secs == 0 {
            errors.push(ValidationError {
                field: "api.timeout_secs".into(),
                message: "must be greater than 0".into(),
            });
        }

        if !VALID_ROLES.contains(&self.profile.role.as_str()) {
            errors.push(ValidationError {
                field: "profile.role".into(),
                message: format!(
                    "invalid role '{}'; valid options: {}",
                    self.profile.role,
                    VALID_ROLES.join(", ")
                ),
            });
        }

        if self.browser.long_press_ms == 0 {
            errors.push(ValidationError {
                field: "browser.long_press_ms".into(),
                message: "must be greater than 0".into(),
            });
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    // -- Defaults --

    #[test]
    fn default_config_has_sensible_values() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, "http://localhost:8000/api");
        assert!(cfg.api.token.is_none());
        assert_eq!(cfg.api.timeout_secs, 30);
        assert_eq!(cfg.profile.role, "player");
        assert_eq!(cfg.browser.long_press_ms, 500);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.session.state_file.to_string_lossy().contains("clubdocs"));
    }

    #[test]
    fn default_config_passes_validation() {
        let cfg = Config::default();
        assert!(cfg.validate().is_empty(), "unexpected errors: {:?}", cfg.validate());
    }

    // -- Loading --

    #[test]
    fn load_from_yaml_file() {
        let yaml = r#"
api:
  base_url: https://docs.ridgeline.example/api
  token: "secret-token"
  timeout_secs: 10
profile:
  role: coach
browser:
  long_press_ms: 650
logging:
  level: debug
session:
  state_file: /tmp/clubdocs-session.json
"#;
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(yaml.as_bytes()).unwrap();
        tmp.flush().unwrap();

        let cfg = Config::load(tmp.path()).expect("load config");
        assert_eq!(cfg.api.base_url, "https://docs.ridgeline.example/api");
        assert_eq!(cfg.api.token.as_deref(), Some("secret-token"));
        assert_eq!(cfg.api.timeout_secs, 10);
        assert_eq!(cfg.profile.role, "coach");
        assert_eq!(cfg.browser.long_press_ms, 650);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(
            cfg.session.state_file,
            PathBuf::from("/tmp/clubdocs-session.json")
        );
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let cfg = Config::load_or_default(Path::new("/nonexistent/clubdocs.yaml"));
        assert_eq!(cfg.api.timeout_secs, 30);
        assert_eq!(cfg.profile.role, "player");
    }

    #[test]
    fn default_path_points_into_clubdocs_dir() {
        let path = Config::default_path();
        assert!(path.to_string_lossy().contains("clubdocs"));
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }

    // -- Validation --

    #[test]
    fn validate_rejects_bad_role_and_url() {
        let mut cfg = Config::default();
        cfg.api.base_url = "ftp://example.com".into();
        cfg.profile.role = "mascot".into();

        let errors = cfg.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"api.base_url"));
        assert!(fields.contains(&"profile.role"));
    }

    #[test]
    fn validate_rejects_zero_timings() {
        let mut cfg = Config::default();
        cfg.api.timeout_secs = 0;
        cfg.browser.long_press_ms = 0;

        let errors = cfg.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn validation_error_displays_field_and_message() {
        let err = ValidationError {
            field: "logging.level".into(),
            message: "invalid level 'loud'".into(),
        };
        assert_eq!(err.to_string(), "logging.level: invalid level 'loud'");
    }
}
