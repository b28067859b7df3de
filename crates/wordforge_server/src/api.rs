//! Route handlers and HTTP status mapping.
//!
//! Outcome-to-status policy, per route:
//!
//! * Extraction success answers 200 with the typed payload.
//! * A vocabulary or quiz fallback answers **500** carrying the reason and
//!   the raw completion text; a definition fallback answers **200** with the
//!   degraded payload. The asymmetry is deliberate and matches the deployed
//!   frontend's expectations.
//! * Transport errors answer 500 with an error descriptor, except dictionary
//!   lookups, which mirror the upstream status.

use crate::AppState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, instrument};
use wordforge_core::Extraction;
use wordforge_error::{WordforgeError, WordforgeErrorKind};
use wordforge_extract::Extractor;

/// Word count used when the vocabulary route gets no `count` parameter.
pub const DEFAULT_VOCAB_COUNT: usize = 10;
/// Largest list size a single request may ask for.
pub const MAX_VOCAB_COUNT: usize = 50;

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/word/:word", get(get_word))
        .route("/api/vocab", get(get_vocab))
        .route("/api/definition/:word", get(get_definition))
        .route("/api/quiz/:word", get(get_quiz))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Raw dictionary lookup, relayed to the frontend unreshaped.
#[instrument(skip(state))]
async fn get_word(State(state): State<AppState>, Path(word): Path<String>) -> Response {
    match state.dictionary.definitions(&word).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Query parameters for the vocabulary route.
#[derive(Debug, Deserialize)]
struct VocabParams {
    count: Option<usize>,
}

/// Generated vocabulary list, cached per requested count.
#[instrument(skip(state))]
async fn get_vocab(State(state): State<AppState>, Query(params): Query<VocabParams>) -> Response {
    let count = params
        .count
        .unwrap_or(DEFAULT_VOCAB_COUNT)
        .clamp(1, MAX_VOCAB_COUNT);

    let cached = {
        let mut cache = state.vocab_cache.lock().await;
        cache.get(count).map(|entry| entry.value().clone())
    };
    if let Some(list) = cached {
        debug!(count, "Serving vocabulary list from cache");
        return (StatusCode::OK, Json(list)).into_response();
    }

    let extractor = Extractor::new(state.generator.clone());
    match extractor.vocab_list(count).await {
        Ok(Extraction::Success(list)) => {
            state
                .vocab_cache
                .lock()
                .await
                .insert(count, list.clone(), None);
            (StatusCode::OK, Json(list)).into_response()
        }
        Ok(Extraction::Fallback(fallback)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": fallback.reason().to_string(),
                "raw": fallback.raw_text(),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// Generated definition; shape failures degrade instead of erroring.
#[instrument(skip(state))]
async fn get_definition(State(state): State<AppState>, Path(word): Path<String>) -> Response {
    let extractor = Extractor::new(state.generator.clone());
    match extractor.definition(&word).await {
        Ok(Extraction::Success(definition)) => (StatusCode::OK, Json(definition)).into_response(),
        Ok(Extraction::Fallback(fallback)) => {
            let raw = fallback.raw_text().to_string();
            let reason = fallback.reason().to_string();
            match fallback.into_degraded() {
                Some(degraded) => (StatusCode::OK, Json(degraded)).into_response(),
                // The definition intent always synthesizes a degraded payload.
                None => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": reason, "raw": raw })),
                )
                    .into_response(),
            }
        }
        Err(err) => error_response(&err),
    }
}

/// Generated multiple-choice quiz question.
#[instrument(skip(state))]
async fn get_quiz(State(state): State<AppState>, Path(word): Path<String>) -> Response {
    let extractor = Extractor::new(state.generator.clone());
    match extractor.quiz(&word).await {
        Ok(Extraction::Success(quiz)) => (StatusCode::OK, Json(quiz)).into_response(),
        Ok(Extraction::Fallback(fallback)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": fallback.reason().to_string(),
                "raw": fallback.raw_text(),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

/// Convert a transport error to an HTTP error response.
///
/// Dictionary errors that carry an upstream status mirror it; everything
/// else answers 500. Fallbacks never pass through here.
fn error_response(error: &WordforgeError) -> Response {
    let (status, descriptor) = match error.kind() {
        WordforgeErrorKind::Dictionary(dict) => (
            dict.kind
                .status()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "dictionary lookup failed",
        ),
        WordforgeErrorKind::Chat(_) => (StatusCode::INTERNAL_SERVER_ERROR, "text generation failed"),
        WordforgeErrorKind::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration error"),
        WordforgeErrorKind::Server(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server error"),
    };

    error!(error = %error, status = %status, "Request failed");

    (
        status,
        Json(json!({
            "error": descriptor,
            "details": error.to_string(),
        })),
    )
        .into_response()
}
