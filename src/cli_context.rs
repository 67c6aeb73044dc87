use std::sync::Arc;

use crate::client::PanelClient;
use crate::config::{get_base_url, get_session_token, load_config, save_config};
use crate::error::{PanelError, PanelResult};

/// Central context for CLI operations, managing configuration and the
/// panel client instance.
pub struct CliContext {
    base_url: String,
    session_token: Option<String>,
    client: Option<Arc<PanelClient>>,
}

impl CliContext {
    /// Load context from saved configuration and the environment.
    pub fn load() -> Self {
        Self {
            base_url: get_base_url(),
            session_token: get_session_token(),
            client: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.session_token.is_some()
    }

    /// Get or create the client. The stored session cookie, if any, rides
    /// along on every request.
    pub fn client(&mut self) -> PanelResult<Arc<PanelClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(PanelClient::new(
            self.base_url.clone(),
            self.session_token.clone(),
        )?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Persist a freshly obtained session token and rebuild the client with it.
    pub fn set_session_token(&mut self, token: String) -> PanelResult<()> {
        let mut config = load_config();
        config.session_token = Some(token.clone());
        save_config(&config).map_err(|e| PanelError::ConfigError(e.to_string()))?;
        self.session_token = Some(token);
        self.client = None;
        Ok(())
    }

    pub fn clear_session_token(&mut self) -> PanelResult<()> {
        let mut config = load_config();
        config.session_token = None;
        save_config(&config).map_err(|e| PanelError::ConfigError(e.to_string()))?;
        self.session_token = None;
        self.client = None;
        Ok(())
    }
}
