use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{
    cors,
    state::{AppState, MetricsRequest},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", post(region_metrics))
        .route("/regions", get(known_regions))
        .layer(middleware::from_fn(cors::permissive_cors))
        .with_state(state)
}

async fn region_metrics(
    State(state): State<AppState>,
    Json(request): Json<MetricsRequest>,
) -> impl IntoResponse {
    Json(state.metrics(&request))
}

async fn known_regions(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.regions())
}
