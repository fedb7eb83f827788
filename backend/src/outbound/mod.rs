//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user store guarded by a single mutex
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;

pub use memory::InMemoryUserStore;
