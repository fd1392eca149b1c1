mod dispatch;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Extension, Router};
use ledgerline_config::Config;
use tower_http::trace::TraceLayer;

pub use dispatch::ErrorDispatcher;

/// Assembled server with routes and middleware
pub struct Server {
    router: Router,
    dispatcher: Arc<ErrorDispatcher>,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// The classifier registry is constructed here, once, and published to
    /// every merged router through an `Extension`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        Self {
            router: app,
            dispatcher: Arc::new(ErrorDispatcher::new()),
            listen_address,
        }
    }

    /// Merge a feature router into the server
    ///
    /// Merged routes see the shared `Extension<Arc<ErrorDispatcher>>`.
    #[must_use]
    pub fn merge(mut self, router: Router) -> Self {
        self.router = self.router.merge(router);
        self
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router with middleware applied
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        // Layers are applied last so they wrap merged feature routes too.
        self.router
            .layer(Extension(self.dispatcher))
            .layer(TraceLayer::new_for_http())
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listen_address = self.listen_address;
        let router = self.into_router();

        let listener = tokio::net::TcpListener::bind(listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
