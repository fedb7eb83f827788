//! OpenAPI schema definitions for the user record and the response envelope.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-assigned identifier; ignored on create and update.
    #[schema(example = 1, minimum = 1)]
    id: Option<i64>,
    /// Non-empty display name.
    #[schema(example = "Ada Lovelace", min_length = 1)]
    name: String,
    /// Non-empty address containing `@`.
    #[schema(example = "ada@example.com")]
    email: String,
    /// Age in years; must be positive.
    #[schema(example = 36, minimum = 1)]
    age: i64,
}

/// OpenAPI schema for [`crate::inbound::http::envelope::ApiResponse`].
///
/// `data` is omitted when the payload is absent or empty.
#[derive(ToSchema)]
#[schema(as = ApiResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeSchema {
    /// Whether the request succeeded.
    success: bool,
    /// Human-readable outcome.
    #[schema(example = "User found")]
    message: String,
    /// A user, an array of users, or nothing.
    data: Option<serde_json::Value>,
}
