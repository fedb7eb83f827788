//! Users API handlers.
//!
//! ```text
//! GET    /api/users
//! GET    /api/users/{id}
//! POST   /api/users       {"name":"Ada","email":"ada@example.com","age":36}
//! PUT    /api/users/{id}  {"name":"Ada","email":"ada@example.com","age":37}
//! DELETE /api/users/{id}
//! ```
//!
//! Every handler runs parse, validate, execute, respond in that order and
//! stops at the first failure. Syntactic failures (bad id, bad JSON, missing
//! fields) answer 400; well-formed records that break the field rules answer
//! 422. A body the extractor refuses to read (oversized, truncated) takes the
//! malformed JSON path. Each handler makes exactly one store call.

use actix_web::{HttpRequest, delete, get, post, put, web};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::domain::ports::UserStoreError;
use crate::domain::{Error, ErrorCode, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::{EnvelopeSchema, UserSchema};
use crate::inbound::http::state::HttpState;

const INVALID_ID: &str = "Invalid user ID format";
const INVALID_JSON: &str = "Invalid JSON format";
const INVALID_USER: &str = "Invalid user data. Name, email, and age are required.";
const USER_NOT_FOUND: &str = "User not found";

/// Parse a path segment as a positive user identifier.
///
/// Only ASCII digits are accepted; zero and values beyond `i64::MAX` are
/// rejected as well.
pub(crate) fn parse_user_id(raw: &str) -> Result<i64, Error> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::invalid_id(INVALID_ID));
    }
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::invalid_id(INVALID_ID))
}

fn decode_user(body: Result<web::Bytes, actix_web::Error>) -> Result<User, Error> {
    let body = body.map_err(Error::from)?;
    let user = User::from_json(&body).map_err(|err| {
        debug!(error = %err, "rejecting user payload");
        Error::malformed_input(INVALID_JSON)
    })?;
    if !user.is_valid() {
        return Err(Error::validation_failed(INVALID_USER));
    }
    Ok(user)
}

fn store_failure(message: &'static str) -> impl FnOnce(UserStoreError) -> Error {
    move |err| {
        error!(error = %err, "user store call failed");
        Error::unexpected(message)
    }
}

fn respond(
    method: &'static str,
    path: &str,
    action: &'static str,
    handler: impl FnOnce() -> ApiResult<ApiResponse>,
) -> ApiResult<ApiResponse> {
    info!(method, path, action, "request received");
    let outcome = handler();
    match &outcome {
        Ok(response) => info!(
            method,
            path,
            outcome = "ok",
            status = response.status_code().as_u16(),
            "request completed"
        ),
        Err(err) if err.code() == ErrorCode::Unexpected => error!(
            method,
            path,
            outcome = err.code().as_str(),
            error = %err,
            "request failed"
        ),
        Err(err) => warn!(
            method,
            path,
            outcome = err.code().as_str(),
            error = %err,
            "request rejected"
        ),
    }
    outcome
}

/// List every stored user in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users retrieved; data is an array of users", body = EnvelopeSchema),
        (status = 500, description = "Store unavailable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/api/users")]
pub async fn list_users(req: HttpRequest, state: web::Data<HttpState>) -> ApiResult<ApiResponse> {
    respond("GET", req.path(), "fetching all users", || {
        let users = state
            .users
            .list_all()
            .map_err(store_failure("Failed to retrieve users"))?;
        debug!(count = users.len(), "listing users");
        let data = Value::Array(users.iter().map(User::to_json).collect());
        Ok(ApiResponse::success("Users retrieved successfully").with_data(data))
    })
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Positive user identifier")),
    responses(
        (status = 200, description = "User found", body = EnvelopeSchema),
        (status = 400, description = "Identifier is not a positive integer", body = EnvelopeSchema),
        (status = 404, description = "No user at this identifier", body = EnvelopeSchema),
        (status = 500, description = "Store unavailable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/api/users/{id}")]
pub async fn get_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<ApiResponse> {
    respond("GET", req.path(), "fetching user by id", || {
        let id = parse_user_id(&id)?;
        let user = state
            .users
            .get_by_id(id)
            .map_err(store_failure("Failed to retrieve user"))?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
        Ok(ApiResponse::success("User found").with_data(user.to_json()))
    })
}

/// Create a user; any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = UserSchema, content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = EnvelopeSchema),
        (status = 400, description = "Body is not JSON or lacks a required field", body = EnvelopeSchema),
        (status = 422, description = "Field values break the user rules", body = EnvelopeSchema),
        (status = 500, description = "Store unavailable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/api/users")]
pub async fn create_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> ApiResult<ApiResponse> {
    respond("POST", req.path(), "creating user", || {
        let candidate = decode_user(body)?;
        let created = state
            .users
            .create(candidate)
            .map_err(store_failure("Failed to create user"))?;
        info!(user_id = created.id(), "user created");
        Ok(ApiResponse::created("User created successfully").with_data(created.to_json()))
    })
}

/// Replace name, email and age of an existing user.
///
/// The response always carries the path identifier, whatever the body says.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Positive user identifier")),
    request_body(content = UserSchema, content_type = "application/json"),
    responses(
        (status = 200, description = "User updated", body = EnvelopeSchema),
        (status = 400, description = "Bad identifier, body is not JSON, or a field is missing", body = EnvelopeSchema),
        (status = 404, description = "No user at this identifier", body = EnvelopeSchema),
        (status = 422, description = "Field values break the user rules", body = EnvelopeSchema),
        (status = 500, description = "Store unavailable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/api/users/{id}")]
pub async fn update_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> ApiResult<ApiResponse> {
    respond("PUT", req.path(), "updating user", || {
        let id = parse_user_id(&id)?;
        let replacement = decode_user(body)?;
        let updated = state
            .users
            .update(id, &replacement)
            .map_err(store_failure("Failed to update user"))?;
        if !updated {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        Ok(ApiResponse::success("User updated successfully")
            .with_data(replacement.with_id(id).to_json()))
    })
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Positive user identifier")),
    responses(
        (status = 200, description = "User deleted; no data", body = EnvelopeSchema),
        (status = 400, description = "Identifier is not a positive integer", body = EnvelopeSchema),
        (status = 404, description = "No user at this identifier", body = EnvelopeSchema),
        (status = 500, description = "Store unavailable", body = EnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/api/users/{id}")]
pub async fn delete_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<ApiResponse> {
    respond("DELETE", req.path(), "deleting user", || {
        let id = parse_user_id(&id)?;
        let deleted = state
            .users
            .delete(id)
            .map_err(store_failure("Failed to delete user"))?;
        if !deleted {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        Ok(ApiResponse::success("User deleted successfully"))
    })
}
