//! In-memory user store.
//!
//! The collection and its identifier counter share one [`Mutex`]. Each port
//! call takes the guard once, works on the vector, and releases it before
//! returning, so no caller ever observes a half-applied change.

use std::sync::{Mutex, MutexGuard};

use tracing::error;

use crate::domain::User;
use crate::domain::ports::{UserStore, UserStoreError};

#[derive(Debug)]
struct StoreState {
    users: Vec<User>,
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl StoreState {
    fn position(&self, id: i64) -> Option<usize> {
        self.users.iter().position(|user| user.id() == id)
    }
}

/// Process-local [`UserStore`] that forgets everything on restart.
///
/// # Examples
/// ```
/// use backend::domain::User;
/// use backend::domain::ports::UserStore;
/// use backend::outbound::InMemoryUserStore;
///
/// let store = InMemoryUserStore::new();
/// let created = store
///     .create(User::new(0, "Ada", "ada@example.com", 36))
///     .expect("store available");
/// assert_eq!(created.id(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: Mutex<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store whose first identifier is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, StoreState>, UserStoreError> {
        self.state.lock().map_err(|_| {
            error!(operation, "user store guard poisoned");
            UserStoreError::poisoned(operation)
        })
    }
}

impl UserStore for InMemoryUserStore {
    fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        let state = self.lock("list_all")?;
        Ok(state.users.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<User>, UserStoreError> {
        let state = self.lock("get_by_id")?;
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    fn create(&self, candidate: User) -> Result<User, UserStoreError> {
        let mut state = self.lock("create")?;
        let stored = candidate.with_id(state.next_id);
        state.next_id += 1;
        state.users.push(stored.clone());
        Ok(stored)
    }

    fn update(&self, id: i64, replacement: &User) -> Result<bool, UserStoreError> {
        let mut state = self.lock("update")?;
        match state.users.iter_mut().find(|user| user.id() == id) {
            Some(existing) => {
                existing.overwrite_fields(replacement);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: i64) -> Result<bool, UserStoreError> {
        let mut state = self.lock("delete")?;
        match state.position(id) {
            Some(index) => {
                state.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn exists(&self, id: i64) -> Result<bool, UserStoreError> {
        let state = self.lock("exists")?;
        Ok(state.position(id).is_some())
    }
}

#[cfg(test)]
mod tests;
