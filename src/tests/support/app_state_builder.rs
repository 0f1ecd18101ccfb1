use crate::auth::adapter::incoming::web::extractors::DEFAULT_SESSION_COOKIE_NAMES;
use crate::auth::application::ports::incoming::use_cases::ResolveSessionUseCase;
use crate::content::application::ports::incoming::use_cases::ListContentUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` where every use case defaults to a harmless stub.
pub struct TestAppStateBuilder {
    list_content: Arc<dyn ListContentUseCase + Send + Sync>,
    resolve_session: Arc<dyn ResolveSessionUseCase + Send + Sync>,
    content_requires_session: bool,
    session_cookie_names: Vec<String>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_content: Arc::new(StubListContentUseCase::default()),
            resolve_session: Arc::new(StubResolveSessionUseCase::default()),
            content_requires_session: false,
            session_cookie_names: DEFAULT_SESSION_COOKIE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_content(
        mut self,
        uc: impl ListContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_content = Arc::new(uc);
        self
    }

    pub fn with_resolve_session(
        mut self,
        uc: impl ResolveSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_session = Arc::new(uc);
        self
    }

    pub fn requiring_session(mut self) -> Self {
        self.content_requires_session = true;
        self
    }

    pub fn with_session_cookie_names(mut self, names: Vec<String>) -> Self {
        self.session_cookie_names = names;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            list_content_use_case: self.list_content,
            resolve_session_use_case: self.resolve_session,
            content_requires_session: self.content_requires_session,
            session_cookie_names: self.session_cookie_names,
        })
    }
}
