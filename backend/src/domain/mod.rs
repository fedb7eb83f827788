//! Domain primitives and ports.
//!
//! Purpose: Define the user record, the transport-agnostic error taxonomy,
//! and the store port that inbound adapters drive. Nothing here depends on
//! Actix.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — failure carried to adapters.
//! - ErrorCode (alias to `error::ErrorCode`) — stable failure category.
//! - User (alias to `user::User`) — user record and JSON contract.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{User, UserDecodeError};

/// Header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
