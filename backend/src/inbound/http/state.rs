//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without real infrastructure.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::inbound::http::state::HttpState;
/// use backend::outbound::InMemoryUserStore;
/// use mockable::DefaultClock;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStore::new()), Arc::new(DefaultClock));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserStore>,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl HttpState {
    /// Bundle the user store and the clock used by health probes.
    pub fn new(users: Arc<dyn UserStore>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { users, clock }
    }
}
