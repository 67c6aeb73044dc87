use serde::{Deserialize, Serialize};

use super::team::{TeamInfo, TeamOption};

/// The email/code pair captured when verification is submitted, carried
/// unmodified through confirm. A user cannot alter either without starting
/// the wizard over.
#[derive(Debug, Clone, PartialEq)]
pub struct RedemptionSession {
    pub email: String,
    pub code: String,
    pub selected_team_id: Option<i64>,
}

impl RedemptionSession {
    pub fn new(email: String, code: String) -> Self {
        Self {
            email,
            code,
            selected_team_id: None,
        }
    }
}

/// Response of POST /redeem/verify.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub valid: bool,
    pub reason: Option<String>,
    #[serde(default)]
    pub teams: Vec<TeamOption>,
    pub error: Option<String>,
}

/// Response of POST /redeem/confirm.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConfirmResponse {
    pub success: bool,
    pub message: Option<String>,
    pub team_info: Option<TeamInfo>,
    pub error: Option<String>,
}
