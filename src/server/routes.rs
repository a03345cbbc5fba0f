use crate::server::{handlers, types::AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/predict/", post(handlers::predict))
        // Uploads are full-resolution photographs; the decode step is the
        // only size gate on the request body
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
