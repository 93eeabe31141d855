use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dados_shared::{ConfirmationMessage, Record};
use dados_store::RecordState;
use serde::de::Unexpected;
use tracing::info;

use crate::error::ApiError;

pub fn router(state: RecordState) -> Router {
    Router::new()
        .route(
            "/api/dados",
            get(list)
                .post(append)
                .head(unsupported_method)
                .fallback(unsupported_method),
        )
        .with_state(state)
}

#[axum_macros::debug_handler]
pub(crate) async fn list(State(state): State<RecordState>) -> Result<Response, ApiError> {
    let records = state.list().await;

    // The snapshot is encoded into a buffer so that a failure never leaves a half-written body behind.
    let body = serde_json::to_vec(&records).map_err(ApiError::Encoding)?;

    Ok(([(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())], body).into_response())
}

#[axum_macros::debug_handler]
pub(crate) async fn append(
    State(state): State<RecordState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ConfirmationMessage>), ApiError> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
        _ => ApiError::UnreadableBody(rejection.body_text()),
    })?;

    // Decoding happens before the store is locked.
    let record = decode_record(&body)?;
    let confirmation = ConfirmationMessage::for_record(&record);

    let total = state.append(record).await;
    info!("{} ({total} records stored)", confirmation.message);

    Ok((StatusCode::CREATED, Json(confirmation)))
}

async fn unsupported_method() -> ApiError {
    ApiError::UnsupportedMethod
}

/// Decodes exactly one [`Record`]. Blank bodies, unknown fields, type mismatches and trailing data are rejected.
pub(crate) fn decode_record(body: &[u8]) -> Result<Record, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }

    // serde_json has no dedicated category for unknown fields, so they are told apart by the message prefix.
    let record = serde_json::from_slice(body).map_err(|err| {
        if err.to_string().starts_with("unknown field") {
            ApiError::UnknownField(err)
        } else {
            ApiError::MalformedJson(err)
        }
    })?;

    // serde also maps a two-element array onto the struct; only objects are records.
    if body.iter().find(|byte| !byte.is_ascii_whitespace()) != Some(&b'{') {
        return Err(ApiError::MalformedJson(serde::de::Error::invalid_type(
            Unexpected::Seq,
            &"a JSON object",
        )));
    }

    Ok(record)
}
