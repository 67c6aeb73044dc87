pub mod auth;
pub mod generate;
pub mod import;
pub mod redeem;

use crate::client::PanelClient;
use crate::error::{PanelError, PanelResult};

/// Client-side gate before admin actions. Convenience only: the backend is
/// the authoritative enforcement and rejects unauthenticated calls itself.
pub(crate) async fn ensure_admin(client: &PanelClient) -> PanelResult<()> {
    let status = client.auth_status().await?;
    if !status.authenticated {
        return Err(PanelError::NotAuthenticated);
    }
    Ok(())
}
