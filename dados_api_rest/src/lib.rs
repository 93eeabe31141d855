pub mod dados;
pub mod error;
pub mod welcome;

use axum::{extract::DefaultBodyLimit, Router};
use dados_store::RecordState;
use tower_http::trace::TraceLayer;

/// Builds the complete HTTP surface around `state`. Request bodies larger than `max_body_bytes` are rejected while
/// they are being read.
pub fn app(state: RecordState, max_body_bytes: usize) -> Router {
    welcome::router()
        .merge(dados::router(state))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
