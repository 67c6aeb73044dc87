pub mod admin;
pub mod redemption;
pub mod team;

// Re-export commonly used types
pub use admin::{AuthStatus, GenerateOutcome, ImportOutcome, ImportRowResult};
pub use redemption::{ConfirmResponse, RedemptionSession, VerifyResponse};
pub use team::{TeamInfo, TeamOption};
