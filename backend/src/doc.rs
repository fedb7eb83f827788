//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the schema wrappers
//! from [`crate::inbound::http::schemas`]. The document backs Swagger UI in
//! debug builds and is exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{EnvelopeSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User REST API",
        description = "CRUD operations over an in-memory user collection, plus a health probe."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::health::api_info,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(UserSchema, EnvelopeSchema)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Service health and description")
    )
)]
pub struct ApiDoc;
