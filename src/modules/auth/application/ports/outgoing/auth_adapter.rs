use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{
    AccountKey, AdapterAccount, AdapterSession, AdapterUser, NewUser, SessionAndUser,
    SessionPatch, UserPatch, VerificationToken, VerificationTokenKey,
};

/// Failures reported by the persistence adapter.
///
/// A lookup that matches no row is never an error: those operations return
/// `Ok(None)` so callers can tell "not found" apart from "store unavailable".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdapterError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No user id.")]
    MissingUserId,

    #[error("User not found")]
    UserNotFound,

    /// The consuming delete itself failed. A token that simply does not
    /// exist is reported as `Ok(None)`, not through this variant.
    #[error("No verification token found: {0}")]
    TokenConsumption(String),
}

/// Capability set the authentication controller persists its state through.
#[async_trait]
pub trait AuthAdapter: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<AdapterUser, AdapterError>;

    async fn get_user(&self, id: &str) -> Result<Option<AdapterUser>, AdapterError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<AdapterUser>, AdapterError>;

    async fn create_session(&self, session: AdapterSession)
        -> Result<AdapterSession, AdapterError>;

    /// Session joined to its owning user; absent when the token is unknown.
    async fn get_session_and_user(
        &self,
        session_token: &str,
    ) -> Result<Option<SessionAndUser>, AdapterError>;

    async fn update_user(&self, patch: UserPatch) -> Result<AdapterUser, AdapterError>;

    /// Absent when no session carries the token.
    async fn update_session(
        &self,
        patch: SessionPatch,
    ) -> Result<Option<AdapterSession>, AdapterError>;

    async fn link_account(&self, account: AdapterAccount) -> Result<(), AdapterError>;

    async fn get_user_by_account(
        &self,
        key: &AccountKey,
    ) -> Result<Option<AdapterUser>, AdapterError>;

    async fn delete_session(&self, session_token: &str) -> Result<(), AdapterError>;

    async fn create_verification_token(
        &self,
        token: VerificationToken,
    ) -> Result<VerificationToken, AdapterError>;

    /// Deletes the token and hands back what was deleted. Single use: a second
    /// call for the same key returns `Ok(None)`.
    async fn use_verification_token(
        &self,
        key: &VerificationTokenKey,
    ) -> Result<Option<VerificationToken>, AdapterError>;

    /// Owned accounts and sessions go with the user (cascade).
    async fn delete_user(&self, id: &str) -> Result<(), AdapterError>;

    /// Idempotent: unlinking an account that is not there is not an error.
    async fn unlink_account(&self, key: &AccountKey) -> Result<(), AdapterError>;

    /// Returns the number of sessions removed.
    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, AdapterError>;

    /// Returns the number of verification tokens removed.
    async fn delete_expired_verification_tokens(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, AdapterError>;
}
