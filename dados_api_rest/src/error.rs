use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, info};

/// Request-scoped failures. None of them touch the store.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("O corpo da requisição não pode estar vazio")]
    EmptyBody,
    #[error("Corpo da requisição inválido: {0}")]
    UnknownField(#[source] serde_json::Error),
    #[error("Erro ao processar JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("O corpo da requisição excede o limite permitido")]
    PayloadTooLarge,
    #[error("Não foi possível ler o corpo da requisição: {0}")]
    UnreadableBody(String),
    #[error("Erro interno ao gerar JSON")]
    Encoding(#[source] serde_json::Error),
    #[error("Método não suportado para esta API.")]
    UnsupportedMethod,
    #[error("Método não permitido.")]
    MethodNotAllowed,
    #[error("404 page not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyBody
            | ApiError::UnknownField(_)
            | ApiError::MalformedJson(_)
            | ApiError::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnsupportedMethod | ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match &self {
            ApiError::Encoding(source) => error!("Failed to encode JSON response: {source}"),
            _ => info!("Request rejected ({status_code}): {self}"),
        }

        (status_code, self.to_string()).into_response()
    }
}
