use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use stats::Dataset;

pub fn build_app(dataset: Arc<Dataset>) -> Router {
    debug_assert!(stats::module_ready());
    debug_assert!(api::module_ready());

    // Layered again over the composed router so routes added here, like
    // /health, answer preflights and carry the cross-origin headers too.
    api::app(dataset)
        .route("/health", get(healthcheck))
        .layer(middleware::from_fn(api::cors::permissive_cors))
}

async fn healthcheck() -> &'static str {
    "ok"
}
