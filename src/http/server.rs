//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router from the resolved application factory
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Serve one generation on a bound listener until told to stop
//!
//! Request semantics belong to the application router; this layer only
//! assembles and runs it.

use std::future::Future;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app::AppFactory;
use crate::config::BootstrapConfig;
use crate::http::request::RequestIdLayer;
use crate::net::Listener;
use crate::observability::metrics;

/// HTTP server for one serve generation.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Build a server around a freshly constructed application.
    pub fn new(config: &BootstrapConfig, factory: &dyn AppFactory) -> Self {
        let app = factory.build();
        let router = Self::attach_layers(app, config);
        Self { router }
    }

    /// Wrap the application router with the middleware stack.
    fn attach_layers(app: Router, config: &BootstrapConfig) -> Router {
        app.layer(middleware::from_fn(track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until the `stop` future resolves, then drain gracefully.
    pub async fn run(
        self,
        listener: Listener,
        stop: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr();
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener.into_inner(), self.router.into_make_service())
            .with_graceful_shutdown(stop)
            .await?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }
}

/// Request counter and latency recorder.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();

    let response = next.run(request).await;

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}
