use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::{AdapterSession, AdapterUser, SessionAndUser};
use crate::auth::application::ports::incoming::use_cases::{
    ResolveSessionError, ResolveSessionUseCase,
};
use crate::content::application::domain::entities::Post;
use crate::content::application::ports::incoming::use_cases::{
    ListContentError, ListContentUseCase,
};

// ============================================================
// Content
// ============================================================

#[derive(Clone)]
pub struct StubListContentUseCase {
    result: Result<Vec<Post>, ListContentError>,
}

impl StubListContentUseCase {
    pub fn success(posts: Vec<Post>) -> Self {
        Self { result: Ok(posts) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListContentError::QueryFailed(msg.into())),
        }
    }
}

impl Default for StubListContentUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl ListContentUseCase for StubListContentUseCase {
    async fn execute(&self) -> Result<Vec<Post>, ListContentError> {
        self.result.clone()
    }
}

// ============================================================
// Sessions
// ============================================================

#[derive(Clone)]
pub struct StubResolveSessionUseCase {
    result: Result<Option<SessionAndUser>, ResolveSessionError>,
}

impl StubResolveSessionUseCase {
    pub fn none() -> Self {
        Self { result: Ok(None) }
    }

    pub fn live(user_id: &str) -> Self {
        Self {
            result: Ok(Some(SessionAndUser {
                session: AdapterSession {
                    session_token: "tok1".to_string(),
                    user_id: user_id.to_string(),
                    expires: Utc::now() + Duration::days(30),
                },
                user: AdapterUser {
                    id: user_id.to_string(),
                    name: Some("Test User".to_string()),
                    email: "test@example.com".to_string(),
                    email_verified: None,
                    image: None,
                },
            })),
        }
    }

    pub fn unavailable(msg: &str) -> Self {
        Self {
            result: Err(ResolveSessionError::StoreUnavailable(msg.into())),
        }
    }
}

impl Default for StubResolveSessionUseCase {
    fn default() -> Self {
        Self::none()
    }
}

#[async_trait]
impl ResolveSessionUseCase for StubResolveSessionUseCase {
    async fn execute(
        &self,
        _session_token: &str,
    ) -> Result<Option<SessionAndUser>, ResolveSessionError> {
        self.result.clone()
    }
}
