use actix_web::{get, web, HttpResponse, Responder};
use tracing::{debug, warn};

use crate::{
    auth::adapter::incoming::web::extractors::{resolve_session_or_response, SessionToken},
    content::application::ports::incoming::use_cases::ListContentError,
    shared::api::ApiResponse,
    AppState,
};

/// List published content
///
/// Returns every post as a bare JSON array. When the server is configured to
/// require a session, requests without a live session are rejected.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "All posts in display order", body = [crate::content::application::domain::entities::Post]),
        (status = 401, description = "A session is required and none was presented", body = crate::api::schemas::ErrorResponse),
        (status = 503, description = "Session store unavailable", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    ),
    security(
        (),
        ("SessionCookie" = [])
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(
    token: SessionToken,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.content_requires_session {
        match resolve_session_or_response(&data, &token).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                debug!("Content request rejected: no live session");
                return ApiResponse::unauthorized("UNAUTHENTICATED", "A valid session is required");
            }
            Err(resp) => return resp,
        }
    } else if let Err(resp) = resolve_session_or_response(&data, &token).await {
        // Public listing: the session is looked up but never decides the outcome.
        warn!(status = %resp.status(), "Ignoring session lookup failure on public content");
    }

    match data.list_content_use_case.execute().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => map_list_content_error(err),
    }
}

fn map_list_content_error(err: ListContentError) -> HttpResponse {
    match err {
        ListContentError::QueryFailed(msg) => {
            tracing::error!("Content listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
