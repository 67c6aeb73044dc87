pub mod config;

pub use config::{get_base_url, get_session_token, load_config, save_config, Config};
