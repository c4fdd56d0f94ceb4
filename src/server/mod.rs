//! HTTP surface
//!
//! Three stateless endpoints: a static HTML form, a form-encoded predict
//! endpoint rendering HTML, and a JSON predict endpoint. The loaded
//! inference pipeline is shared read-only with every handler; it is built
//! before the listener binds, so the process never serves traffic without
//! models.

pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::pipeline::InferencePipeline;

/// Shared handler state: the immutable pipeline
pub type AppState = Arc<InferencePipeline>;

/// Build the application router
pub fn router(pipeline: InferencePipeline) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/predict", post(handlers::predict_form))
        .route("/api/predict", post(handlers::predict_api))
        .with_state(Arc::new(pipeline))
}

/// Bind and serve until the process is stopped
pub async fn run(pipeline: InferencePipeline, addr: &str) -> anyhow::Result<()> {
    let app = router(pipeline);
    let listener = TcpListener::bind(addr).await?;

    info!(addr, "prediction server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
