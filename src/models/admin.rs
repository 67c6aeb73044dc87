use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
    pub username: Option<String>,
}

/// Per-row result of a batch team import.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImportRowResult {
    pub email: Option<String>,
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ImportRowResult {
    /// The server fills message on success and error on failure.
    pub fn detail(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("-")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImportOutcome {
    pub success: bool,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub failed_count: u32,
    #[serde(default)]
    pub results: Vec<ImportRowResult>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GenerateOutcome {
    pub success: bool,
    pub code: Option<String>,
    #[serde(default)]
    pub codes: Vec<String>,
    #[serde(default)]
    pub total: u32,
    pub message: Option<String>,
    pub error: Option<String>,
}
