//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such
//! as tracing, request logging and CORS headers.

pub mod cors;
pub mod trace;

pub use cors::cors_headers;
pub use trace::Trace;
