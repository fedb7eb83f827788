//! Driven port for the user collection.
//!
//! Inbound adapters depend on this trait only; the process wires a single
//! shared implementation at startup. Every call is atomic on its own and no
//! implementation may hold its guard across two calls, so handlers issue one
//! call per request.

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserStoreError {
        /// A writer panicked while holding the store guard.
        Poisoned { operation: String } => "user store guard poisoned during {operation}",
    }
}

/// Mutual-exclusion guarded collection of users with an id generator.
///
/// ## Invariants
/// - Identifiers in the collection are unique.
/// - Identifiers are assigned from a strictly increasing counter starting at
///   `1` and are never reused, even after deletion.
/// - Scans run in insertion order.
pub trait UserStore: Send + Sync {
    /// Snapshot every record in insertion order.
    fn list_all(&self) -> Result<Vec<User>, UserStoreError>;

    /// Fetch a copy of the record stored at `id`.
    fn get_by_id(&self, id: i64) -> Result<Option<User>, UserStoreError>;

    /// Store `candidate` under the next identifier and return the stored copy.
    ///
    /// Any identifier carried by `candidate` is discarded.
    fn create(&self, candidate: User) -> Result<User, UserStoreError>;

    /// Overwrite name, email and age of the record at `id`.
    ///
    /// Returns `false` without touching the collection when `id` is absent.
    fn update(&self, id: i64, replacement: &User) -> Result<bool, UserStoreError>;

    /// Remove the record at `id`, returning `false` when absent.
    fn delete(&self, id: i64) -> Result<bool, UserStoreError>;

    /// Report whether a record is stored at `id`.
    fn exists(&self, id: i64) -> Result<bool, UserStoreError> {
        Ok(self.get_by_id(id)?.is_some())
    }
}
