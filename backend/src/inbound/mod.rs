//! Inbound adapters that translate external requests into user store calls
//! while keeping framework details at the edge.

pub mod http;
