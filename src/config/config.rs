use std::env;
use std::fs;
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_BASE_URL};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub session_token: Option<String>,
    pub default_email: Option<String>,
}

pub fn load_config() -> Config {
    let home_dir = match dirs::home_dir() {
        Some(dir) => dir,
        None => return Config::default(),
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_default();
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// Panel base URL: environment variable wins, then config file, then the default.
pub fn get_base_url() -> String {
    if let Ok(url) = env::var("TEAMGATE_URL") {
        return url.trim_end_matches('/').to_string();
    }

    let config = load_config();
    config
        .base_url
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Admin session token, if one has been stored by 'teamgate auth login'.
pub fn get_session_token() -> Option<String> {
    if let Ok(token) = env::var("TEAMGATE_SESSION") {
        if !token.is_empty() {
            return Some(token);
        }
    }

    load_config().session_token
}
