use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry Service API",
        version = "1.0.0",
        description = "User registry over MongoDB.\n\n**Endpoints:**\n- List all stored users\n- Upsert a user keyed by email\n\n**Authentication:** when the Basic-auth gate is configured, every endpoint except the health check requires credentials.",
        contact(
            name = "User Registry Team"
        )
    ),
    paths(
        // Users
        crate::api::users::get_users,
        crate::api::users::upsert_user,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Users
            crate::models::user::UpsertUserRequest,
            crate::models::user::UserResponse,
            crate::models::user::UpsertUserResponse,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registry endpoints. List stored users and upsert records by their email natural key."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Basic)
                        .description(Some("HTTP Basic credentials, required when the access gate is enabled"))
                        .build(),
                ),
            );
        }
    }
}
