pub mod panel_client;

pub use panel_client::{normalize_response, PanelClient};
