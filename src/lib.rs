// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod wizard;

// Re-export commonly used items
pub use cli_context::CliContext;
pub use client::PanelClient;
pub use config::{get_base_url, get_session_token, load_config, save_config, Config};
pub use error::{ErrorContext, PanelError, PanelResult};
pub use models::*;

#[cfg(test)]
mod tests;
