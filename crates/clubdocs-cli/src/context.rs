//! Shared command context
//!
//! Resolves configuration and wiring for the service-backed commands: the
//! HTTP gateway, the session store, and the signed-in role. The bearer token
//! comes from the `CLUBDOCS_TOKEN` environment variable when set, otherwise
//! from the configuration file.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use clubdocs_api::{ApiClient, HttpDocumentGateway};
use clubdocs_browser::Browser;
use clubdocs_core::config::Config;
use clubdocs_core::domain::Role;
use clubdocs_core::ports::{IDocumentGateway, ILocationStore};

use crate::session::FileLocationStore;

/// Environment variable that overrides the configured bearer token
pub const TOKEN_ENV_VAR: &str = "CLUBDOCS_TOKEN";

/// Configuration and wiring shared by the service-backed commands
pub struct CliContext {
    pub config: Config,
    pub role: Role,
}

impl CliContext {
    /// Loads configuration from the given path or the default location
    ///
    /// An explicit path must exist and parse; the default location falls
    /// back to the built-in defaults when absent.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config = match config_override {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::load_or_default(&Config::default_path()),
        };

        let role: Role = config
            .profile
            .role
            .parse()
            .with_context(|| format!("invalid profile.role '{}'", config.profile.role))?;

        Ok(Self { config, role })
    }

    /// Effective bearer token: environment first, then the config file
    pub fn token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.is_empty())
            .or_else(|| self.config.api.token.clone())
    }

    /// Builds the HTTP gateway from the configuration
    pub fn gateway(&self) -> Arc<dyn IDocumentGateway> {
        let client = ApiClient::new(self.config.api.base_url.clone(), self.token())
            .with_timeout(Duration::from_secs(self.config.api.timeout_secs));
        Arc::new(HttpDocumentGateway::new(client))
    }

    /// Builds the session store persisting the last visited folder
    pub fn location_store(&self) -> Arc<dyn ILocationStore> {
        Arc::new(FileLocationStore::new(
            self.config.session.state_file.clone(),
        ))
    }

    /// Builds a browser wired to the gateway and the session store
    pub fn browser(&self) -> Browser {
        debug!(role = %self.role, base_url = %self.config.api.base_url, "building browser");
        Browser::new(self.gateway(), self.location_store(), self.role)
    }

    /// Whether the signed-in role may delete entries
    ///
    /// The service enforces this too; the client checks first so no traffic
    /// is issued for a request that cannot succeed.
    pub fn can_delete(&self) -> bool {
        self.role != Role::Player
    }
}
