use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::application::{
    domain::entities::SessionAndUser,
    ports::incoming::use_cases::{ResolveSessionError, ResolveSessionUseCase},
    ports::outgoing::AuthAdapter,
};

#[derive(Clone)]
pub struct SessionResolver {
    adapter: Arc<dyn AuthAdapter>,
}

impl SessionResolver {
    pub fn new(adapter: Arc<dyn AuthAdapter>) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl ResolveSessionUseCase for SessionResolver {
    async fn execute(
        &self,
        session_token: &str,
    ) -> Result<Option<SessionAndUser>, ResolveSessionError> {
        let found = self
            .adapter
            .get_session_and_user(session_token)
            .await
            .map_err(|e| ResolveSessionError::StoreUnavailable(e.to_string()))?;

        let Some(found) = found else {
            debug!("No session for presented token");
            return Ok(None);
        };

        if found.session.is_expired(Utc::now()) {
            debug!(user_id = %found.user.id, "Presented session has expired");

            // Best effort; the sweeper catches anything left behind.
            if let Err(e) = self.adapter.delete_session(session_token).await {
                warn!(error = %e, "Failed to delete expired session");
            }
            return Ok(None);
        }

        Ok(Some(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{AdapterSession, AdapterUser};
    use crate::auth::application::ports::outgoing::AdapterError;
    use crate::tests::support::mocks::MockAdapter;
    use chrono::Duration;
    use mockall::predicate::eq;

    fn session_and_user(expires_in: Duration) -> SessionAndUser {
        SessionAndUser {
            session: AdapterSession {
                session_token: "tok1".to_string(),
                user_id: "u1".to_string(),
                expires: Utc::now() + expires_in,
            },
            user: AdapterUser {
                id: "u1".to_string(),
                name: Some("Alice".to_string()),
                email: "a@x.com".to_string(),
                email_verified: None,
                image: None,
            },
        }
    }

    #[tokio::test]
    async fn live_session_is_returned() {
        // Arrange
        let mut adapter = MockAdapter::new();
        adapter
            .expect_get_session_and_user()
            .with(eq("tok1"))
            .times(1)
            .returning(|_| Ok(Some(session_and_user(Duration::days(1)))));
        adapter.expect_delete_session().never();

        let resolver = SessionResolver::new(Arc::new(adapter));

        // Act
        let result = resolver.execute("tok1").await;

        // Assert
        let found = result.unwrap().expect("session should resolve");
        assert_eq!(found.user.id, "u1");
        assert_eq!(found.session.user_id, found.user.id);
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let mut adapter = MockAdapter::new();
        adapter
            .expect_get_session_and_user()
            .returning(|_| Ok(None));
        adapter.expect_delete_session().never();

        let resolver = SessionResolver::new(Arc::new(adapter));

        assert_eq!(resolver.execute("nope").await, Ok(None));
    }

    #[tokio::test]
    async fn expired_session_is_deleted_and_not_returned() {
        let mut adapter = MockAdapter::new();
        adapter
            .expect_get_session_and_user()
            .returning(|_| Ok(Some(session_and_user(-Duration::minutes(5)))));
        adapter
            .expect_delete_session()
            .with(eq("tok1"))
            .times(1)
            .returning(|_| Ok(()));

        let resolver = SessionResolver::new(Arc::new(adapter));

        assert_eq!(resolver.execute("tok1").await, Ok(None));
    }

    #[tokio::test]
    async fn failed_cleanup_of_expired_session_still_resolves_to_none() {
        let mut adapter = MockAdapter::new();
        adapter
            .expect_get_session_and_user()
            .returning(|_| Ok(Some(session_and_user(-Duration::minutes(5)))));
        adapter
            .expect_delete_session()
            .returning(|_| Err(AdapterError::Storage("timeout".to_string())));

        let resolver = SessionResolver::new(Arc::new(adapter));

        assert_eq!(resolver.execute("tok1").await, Ok(None));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_store_unavailable() {
        let mut adapter = MockAdapter::new();
        adapter
            .expect_get_session_and_user()
            .returning(|_| Err(AdapterError::Storage("connection refused".to_string())));

        let resolver = SessionResolver::new(Arc::new(adapter));

        let result = resolver.execute("tok1").await;

        assert!(matches!(
            result,
            Err(ResolveSessionError::StoreUnavailable(msg)) if msg.contains("connection refused")
        ));
    }
}
