use axum::{http::Method, routing::get, Router};

use crate::error::ApiError;

pub const WELCOME_MESSAGE: &str = "Bem-vindo ao Servidor JSON!";

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(welcome).head(method_not_allowed).fallback(method_not_allowed),
        )
        .fallback(fallback)
}

#[axum_macros::debug_handler]
pub(crate) async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Anything outside the known routes: the method is checked before the path.
async fn fallback(method: Method) -> ApiError {
    if method == Method::GET {
        ApiError::NotFound
    } else {
        ApiError::MethodNotAllowed
    }
}
