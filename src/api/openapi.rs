use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::content::application::domain::entities::Post;
use crate::health::{HealthResponse, ReadinessResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Content API",
        version = "0.1.0",
        description = "Public content listing backed by a relational session store"
    ),
    paths(
        // Content
        crate::content::adapter::incoming::web::routes::get_content_handler,

        // Probes
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            Post,
            ErrorResponse,
            ErrorDetail,
            HealthResponse,
            ReadinessResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "content", description = "Content listing"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "authjs.session-token",
                    "Session token issued by the authentication library",
                ))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in ["/api/content", "/health", "/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn session_cookie_scheme_is_registered() {
        let doc = ApiDoc::openapi();

        let components = doc.components.expect("components should exist");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
