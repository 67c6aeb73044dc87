pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const CONFIG_FILE: &str = ".teamgate-config.json";

// Backend endpoints (the contract boundary; all business rules live server-side)
pub const REDEEM_VERIFY_PATH: &str = "/redeem/verify";
pub const REDEEM_CONFIRM_PATH: &str = "/redeem/confirm";
pub const AUTH_STATUS_PATH: &str = "/auth/status";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_LOGOUT_PATH: &str = "/auth/logout";
pub const TEAMS_IMPORT_PATH: &str = "/admin/teams/import";
pub const CODES_GENERATE_PATH: &str = "/admin/codes/generate";

// Batch code generation bounds, enforced locally before any request is sent
pub const GENERATE_BATCH_MIN: u32 = 1;
pub const GENERATE_BATCH_MAX: u32 = 1000;

pub const SESSION_COOKIE_NAME: &str = "session";

// Shown when verify reports an invalid code without a reason of its own
pub const DEFAULT_INVALID_CODE_MESSAGE: &str = "This redemption code is invalid or has expired";
