use async_trait::async_trait;

use crate::auth::application::domain::entities::SessionAndUser;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Turns a presented session token into the live session and its user.
/// Unknown and expired tokens both resolve to `Ok(None)`.
#[async_trait]
pub trait ResolveSessionUseCase: Send + Sync {
    async fn execute(&self, session_token: &str)
        -> Result<Option<SessionAndUser>, ResolveSessionError>;
}
