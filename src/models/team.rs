use serde::{Deserialize, Serialize};

/// One eligible team as returned by the verify endpoint. The server orders
/// the list by expiration; it must be displayed in that order, never
/// re-sorted client-side.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TeamOption {
    pub id: i64,
    pub team_name: Option<String>,
    pub subscription_plan: Option<String>,
    #[serde(default)]
    pub current_members: i64,
    #[serde(default)]
    pub max_members: i64,
    pub expires_at: Option<String>,
}

impl TeamOption {
    pub fn display_name(&self) -> &str {
        self.team_name.as_deref().unwrap_or("Unnamed team")
    }
}

/// Snapshot of the joined team returned by a successful confirm.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TeamInfo {
    pub id: Option<i64>,
    pub team_name: Option<String>,
    pub expires_at: Option<String>,
}
