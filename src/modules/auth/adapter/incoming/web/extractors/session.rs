use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use tracing::error;

use crate::auth::application::{
    domain::entities::SessionAndUser, ports::incoming::use_cases::ResolveSessionError,
};
use crate::{shared::api::ApiResponse, AppState};

/// Cookie names the authentication library writes its session token under.
pub const DEFAULT_SESSION_COOKIE_NAMES: [&str; 4] = [
    "authjs.session-token",
    "__Secure-authjs.session-token",
    "next-auth.session-token",
    "__Secure-next-auth.session-token",
];

/// Session token presented with the request, if any. Never rejects the
/// request; handlers decide what a missing token means.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for SessionToken {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let from_cookie = match req.app_data::<web::Data<AppState>>() {
            Some(state) => extract_token_from_cookies(req, &state.session_cookie_names),
            None => {
                let defaults = DEFAULT_SESSION_COOKIE_NAMES.map(String::from);
                extract_token_from_cookies(req, &defaults)
            }
        };

        ready(Ok(SessionToken(
            from_cookie.or_else(|| extract_token_from_header(req)),
        )))
    }
}

fn extract_token_from_cookies(req: &HttpRequest, names: &[String]) -> Option<String> {
    names.iter().find_map(|name| {
        req.cookie(name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
    })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Resolves the presented token. Store failures become a 503 response so
/// callers that gate on the session can return it directly.
pub async fn resolve_session_or_response(
    data: &web::Data<AppState>,
    token: &SessionToken,
) -> Result<Option<SessionAndUser>, HttpResponse> {
    let Some(token) = token.as_deref() else {
        return Ok(None);
    };

    match data.resolve_session_use_case.execute(token).await {
        Ok(found) => Ok(found),
        Err(ResolveSessionError::StoreUnavailable(msg)) => {
            error!("Session store unavailable: {}", msg);
            Err(ApiResponse::service_unavailable(
                "SESSION_STORE_UNAVAILABLE",
                "Session store is unavailable",
            ))
        }
    }
}
