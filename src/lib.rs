pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;

use actix_web::web;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;
use tokio::task::JoinHandle;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::application::ports::incoming::use_cases::ResolveSessionUseCase;
use crate::content::application::ports::incoming::use_cases::ListContentUseCase;
use crate::shared::api::ApiResponse;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_content_use_case: Arc<dyn ListContentUseCase + Send + Sync>,
    pub resolve_session_use_case: Arc<dyn ResolveSessionUseCase + Send + Sync>,
    pub content_requires_session: bool,
    pub session_cookie_names: Vec<String>,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_content_handler);
    // OpenAPI document and explorer
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    cfg.default_service(web::to(|| async {
        ApiResponse::not_found("NOT_FOUND", "Resource not found")
    }));
}

/// Stops the sweeper and closes the pool.
///
/// The aborted task is awaited so its adapter handle is released before
/// the pool closes. Closing a clone closes the shared pool, so other
/// holders of `db` do not keep it open.
pub async fn shutdown(
    sweeper: Option<JoinHandle<()>>,
    db: Arc<DatabaseConnection>,
) -> Result<(), DbErr> {
    if let Some(handle) = sweeper {
        handle.abort();
        // Cancelled is the expected outcome.
        let _ = handle.await;
    }

    db.as_ref().close_by_ref().await
}

#[cfg(test)]
mod shutdown_tests {
    use super::*;
    use crate::auth::application::ports::outgoing::AuthAdapter;
    use crate::auth::application::services::ExpiredRecordSweeper;
    use crate::tests::support::mocks::MockAdapter;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::time::Duration;

    #[actix_web::test]
    async fn shutdown_releases_sweeper_and_closes_pool() {
        // Arrange
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let mut adapter = MockAdapter::new();
        adapter
            .expect_delete_expired_sessions()
            .returning(|_| Ok(0));
        adapter
            .expect_delete_expired_verification_tokens()
            .returning(|_| Ok(0));
        let adapter: Arc<dyn AuthAdapter> = Arc::new(adapter);
        let sweeper_adapter = Arc::downgrade(&adapter);

        let handle = actix_web::rt::spawn(
            ExpiredRecordSweeper::new(Arc::clone(&adapter)).run_every(Duration::from_secs(3600)),
        );
        drop(adapter);

        // Act
        let result = shutdown(Some(handle), Arc::clone(&db)).await;

        // Assert
        assert!(result.is_ok());
        assert!(sweeper_adapter.upgrade().is_none());
    }

    #[actix_web::test]
    async fn shutdown_closes_pool_while_still_shared() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let still_held = Arc::clone(&db);

        let result = shutdown(None, db).await;

        assert!(result.is_ok());
        assert_eq!(Arc::strong_count(&still_held), 1);
    }
}

#[cfg(test)]
mod route_tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn openapi_document_is_served() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["paths"]["/api/content"].is_object());
    }

    #[actix_web::test]
    async fn unknown_route_uses_error_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn content_is_routed() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/content").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
