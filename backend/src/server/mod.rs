//! Server construction and shutdown wiring.

mod config;

pub use config::{DEFAULT_PORT, ServerConfig};

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use backend::inbound::http::app::build_app;
use backend::inbound::http::state::HttpState;
use backend::outbound::InMemoryUserStore;

/// Construct an Actix HTTP server around a fresh in-memory user store.
///
/// Built-in signal handling is disabled; callers stop the server through its
/// handle once [`ShutdownSignals::recv`] resolves.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(DefaultClock),
    ));

    let server = HttpServer::new(move || build_app(state.clone()))
        .disable_signals()
        .bind(config.bind_addr())?
        .run();

    Ok(server)
}

/// Process signal listeners that trigger an orderly shutdown.
///
/// Listeners are installed up front so a failure surfaces as a startup error
/// rather than leaving a server that cannot be stopped gracefully.
pub struct ShutdownSignals {
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
}

impl ShutdownSignals {
    /// Register SIGTERM and SIGINT listeners.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when a listener cannot be registered.
    #[cfg(unix)]
    pub fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            terminate: signal(SignalKind::terminate())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    /// Ctrl-C is registered lazily on non-Unix targets.
    ///
    /// # Errors
    /// Never fails; the signature matches the Unix variant.
    #[cfg(not(unix))]
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {})
    }

    /// Resolve once SIGTERM or SIGINT arrives.
    #[cfg(unix)]
    pub async fn recv(mut self) {
        let name = tokio::select! {
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.interrupt.recv() => "SIGINT",
        };
        info!(signal = name, "shutdown signal received");
    }

    /// Resolve once Ctrl-C arrives.
    #[cfg(not(unix))]
    pub async fn recv(self) {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "ctrl-c listener failed");
            std::future::pending::<()>().await;
        }
        info!(signal = "ctrl-c", "shutdown signal received");
    }
}
