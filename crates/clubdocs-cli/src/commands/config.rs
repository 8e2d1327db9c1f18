//! Config command - View and manage ClubDocs configuration
//!
//! Provides the `clubdocs config` CLI command which:
//! 1. Shows the current configuration (YAML or JSON)
//! 2. Sets individual configuration values via dot-notation keys
//! 3. Validates the configuration file and reports errors

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use clubdocs_core::config::Config;
use tracing::info;

use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "api.base_url")
        key: String,
        /// New value
        value: String,
    },
    /// Validate configuration file
    Validate,
}

impl ConfigCommand {
    pub async fn execute(
        &self,
        config_override: Option<&Path>,
        format: OutputFormat,
    ) -> Result<()> {
        let config_path = config_override
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_path);

        match self {
            ConfigCommand::Show => self.execute_show(&config_path, format),
            ConfigCommand::Set { key, value } => {
                self.execute_set(&config_path, key, value, format)
            }
            ConfigCommand::Validate => self.execute_validate(&config_path, format),
        }
    }

    fn execute_show(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));

        let mut config = Config::load_or_default(config_path);

        info!(config_path = %config_path.display(), "Showing configuration");

        // The token is a credential; never echo it back.
        if config.api.token.is_some() {
            config.api.token = Some("<redacted>".to_string());
        }

        if matches!(format, OutputFormat::Json) {
            let json = serde_json::to_value(&config)
                .context("Failed to serialize configuration to JSON")?;
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Configuration ({})", config_path.display()));
            formatter.info("");

            let yaml = serde_yaml::to_string(&config)
                .context("Failed to serialize configuration to YAML")?;
            for line in yaml.lines() {
                formatter.info(line);
            }
        }

        Ok(())
    }

    fn execute_set(
        &self,
        config_path: &Path,
        key: &str,
        value: &str,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));

        let mut config = Config::load_or_default(config_path);

        info!(key = %key, "Setting configuration value");

        match apply_config_value(&mut config, key, value) {
            Ok(()) => {
                let errors = config.validate();
                if !errors.is_empty() {
                    let messages: Vec<String> = errors
                        .iter()
                        .map(|e| format!("{}: {}", e.field, e.message))
                        .collect();

                    if matches!(format, OutputFormat::Json) {
                        formatter.print_json(&serde_json::json!({
                            "success": false,
                            "key": key,
                            "errors": messages,
                        }));
                    } else {
                        formatter.error(&format!(
                            "Invalid value for '{}': {}",
                            key,
                            messages.join("; ")
                        ));
                    }
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create configuration directory")?;
                }
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                std::fs::write(config_path, &yaml)
                    .context("Failed to write configuration file")?;

                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&serde_json::json!({
                        "success": true,
                        "key": key,
                        "config_path": config_path.display().to_string(),
                    }));
                } else {
                    formatter.success(&format!("Set {} = {}", key, value));
                    formatter.info(&format!("Saved to {}", config_path.display()));
                }
            }
            Err(e) => {
                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&serde_json::json!({
                        "success": false,
                        "key": key,
                        "error": e.to_string(),
                    }));
                } else {
                    formatter.error(&format!("Failed to set '{}': {}", key, e));
                    formatter.info("");
                    formatter.info("Supported keys:");
                    formatter.info("  api.base_url          - Document service base URL");
                    formatter.info("  api.token             - API token ('none' to clear)");
                    formatter.info("  api.timeout_secs      - Request timeout in seconds");
                    formatter.info("  profile.role          - admin|coach|player");
                    formatter.info("  browser.long_press_ms - Long-press threshold (ms)");
                    formatter.info("  logging.level         - trace|debug|info|warn|error");
                    formatter.info("  session.state_file    - Saved-location file path");
                }
            }
        }

        Ok(())
    }

    fn execute_validate(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(matches!(format, OutputFormat::Json));

        let config = match Config::load(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                if !config_path.exists() {
                    if matches!(format, OutputFormat::Json) {
                        formatter.print_json(&serde_json::json!({
                            "valid": false,
                            "config_path": config_path.display().to_string(),
                            "errors": ["Configuration file not found. Using defaults."],
                        }));
                    } else {
                        formatter.info(&format!(
                            "Configuration file not found at {}",
                            config_path.display()
                        ));
                        formatter.info(
                            "Using default configuration. Run 'clubdocs config set <key> <value>' to create one.",
                        );
                    }
                    return Ok(());
                }

                if matches!(format, OutputFormat::Json) {
                    formatter.print_json(&serde_json::json!({
                        "valid": false,
                        "config_path": config_path.display().to_string(),
                        "errors": [format!("Failed to parse configuration: {}", e)],
                    }));
                } else {
                    formatter.error(&format!("Failed to parse configuration: {}", e));
                    formatter.info(&format!("File: {}", config_path.display()));
                }
                return Ok(());
            }
        };

        info!(config_path = %config_path.display(), "Validating configuration");

        let errors = config.validate();

        if matches!(format, OutputFormat::Json) {
            let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            formatter.print_json(&serde_json::json!({
                "valid": errors.is_empty(),
                "config_path": config_path.display().to_string(),
                "errors": error_strings,
            }));
        } else if errors.is_empty() {
            formatter.success("Configuration is valid");
            formatter.info(&format!("File: {}", config_path.display()));
        } else {
            formatter.error(&format!(
                "Configuration has {} error{}:",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ));
            formatter.info(&format!("File: {}", config_path.display()));
            formatter.info("");
            for error in &errors {
                formatter.info(&format!("  {} - {}", error.field, error.message));
            }
        }

        Ok(())
    }
}

/// Apply a dot-notation key/value pair to a Config struct
///
/// Supported keys:
/// - api.base_url, api.token, api.timeout_secs
/// - profile.role
/// - browser.long_press_ms
/// - logging.level
/// - session.state_file
fn apply_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        // --- api ---
        "api.base_url" => {
            config.api.base_url = value.to_string();
        }
        "api.token" => {
            config.api.token = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.to_string())
            };
        }
        "api.timeout_secs" => {
            config.api.timeout_secs = value
                .parse::<u64>()
                .context("Expected a positive integer for api.timeout_secs")?;
        }

        // --- profile ---
        "profile.role" => {
            config.profile.role = value.to_string();
        }

        // --- browser ---
        "browser.long_press_ms" => {
            config.browser.long_press_ms = value
                .parse::<u64>()
                .context("Expected a positive integer for browser.long_press_ms")?;
        }

        // --- logging ---
        "logging.level" => {
            config.logging.level = value.to_string();
        }

        // --- session ---
        "session.state_file" => {
            config.session.state_file = PathBuf::from(value);
        }

        _ => anyhow::bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}
