//! Uniform JSON envelope for every user endpoint.
//!
//! ```text
//! {"success": true, "message": "User found", "data": {...}}
//! {"success": false, "message": "User not found"}
//! ```
//!
//! The status code travels with the envelope but is applied to the HTTP
//! response line, never to the body.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde_json::{Map, Value};

/// Prefix prepended to validation failure messages.
pub const VALIDATION_PREFIX: &str = "Validation Error: ";

/// Success or failure wrapper carrying a message, optional payload and status.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use backend::inbound::http::envelope::ApiResponse;
/// use serde_json::json;
///
/// let response = ApiResponse::created("User created successfully")
///     .with_data(json!({"id": 1}));
/// assert_eq!(response.status_code(), StatusCode::CREATED);
/// assert_eq!(
///     response.to_json(),
///     json!({"success": true, "message": "User created successfully", "data": {"id": 1}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    success: bool,
    message: String,
    data: Option<Value>,
    status: StatusCode,
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

impl ApiResponse {
    fn new(success: bool, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success,
            message: message.into(),
            data: None,
            status,
        }
    }

    /// `200 OK` success.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(true, message, StatusCode::OK)
    }

    /// `201 Created` success.
    pub fn created(message: impl Into<String>) -> Self {
        Self::new(true, message, StatusCode::CREATED)
    }

    /// `400 Bad Request` failure.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(false, message, StatusCode::BAD_REQUEST)
    }

    /// `404 Not Found` failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(false, message, StatusCode::NOT_FOUND)
    }

    /// `500 Internal Server Error` failure.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(false, message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// `405 Method Not Allowed` failure.
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(false, message, StatusCode::METHOD_NOT_ALLOWED)
    }

    /// `422 Unprocessable Entity` failure with [`VALIDATION_PREFIX`] prepended.
    pub fn validation_error(message: impl AsRef<str>) -> Self {
        Self::new(
            false,
            format!("{VALIDATION_PREFIX}{}", message.as_ref()),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Attached payload when present and non-empty.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref().filter(|value| !is_empty_payload(value))
    }

    /// Status applied to the HTTP response.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Serialise the body; `data` is omitted when absent or empty.
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("success".to_owned(), Value::Bool(self.success));
        body.insert("message".to_owned(), Value::String(self.message.clone()));
        if let Some(data) = self.data() {
            body.insert("data".to_owned(), data.clone());
        }
        Value::Object(body)
    }

    /// Render the envelope as an HTTP response.
    pub fn into_http_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self.to_json())
    }
}

impl Responder for ApiResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_http_response()
    }
}
