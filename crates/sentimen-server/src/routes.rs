//! HTTP routes and handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sentimen_core::{Error, Prediction};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span, Instrument};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    // The dashboard frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/predict", post(predict))
        .route("/wordcloud", get(wordcloud))
        .route("/analytics/summary", get(analytics_summary))
        .fallback(fallback)
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

/// Prediction request body
#[derive(Debug, Deserialize)]
struct PredictRequest {
    #[serde(default)]
    text: String,
}

/// Main prediction handler
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<Prediction>, ApiError> {
    metrics::counter!("sentimen_requests_total").increment(1);

    let request_id = uuid::Uuid::new_v4();
    let span = info_span!("predict", %request_id);
    let prediction = state.pipeline.predict(&req.text).instrument(span).await?;

    info!(
        %request_id,
        sentiment = %prediction.sentiment,
        confidence = prediction.confidence,
        "prediction served"
    );
    Ok(Json(prediction))
}

/// Word-cloud view: every category's terms through the normalizer
async fn wordcloud(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state
        .artifact
        .render_word_clouds(state.config.wordcloud_top_k);
    Json(json!({ "categories": categories }))
}

/// Opaque passthrough of the precomputed dashboard summary
async fn analytics_summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.artifact.summary.clone())
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Tidak ditemukan" })),
    )
}

/// Error wrapper mapping pipeline errors onto the wire contract
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

/// Status code, user-facing message, and metric class for an error.
///
/// Messages are user-facing and localized; the error detail stays in the
/// logs. Explainer-tier errors never reach this point (the pipeline absorbs
/// them), except the rate-limit and quota passthrough classes.
fn error_parts(err: &Error) -> (StatusCode, &'static str, &'static str) {
    match err {
        Error::EmptyInput => (
            StatusCode::BAD_REQUEST,
            "Teks tidak boleh kosong",
            "empty_input",
        ),
        Error::ClassifierUnavailable { .. } | Error::Classifier(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Gagal memproses prediksi dari model Naive Bayes",
            "classifier",
        ),
        Error::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "Terlalu banyak permintaan. Silakan tunggu sebentar.",
            "rate_limited",
        ),
        Error::QuotaExhausted => (
            StatusCode::PAYMENT_REQUIRED,
            "Kredit AI habis. Silakan hubungi administrator.",
            "quota_exhausted",
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Terjadi kesalahan internal",
            "internal",
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, class) = error_parts(&self.0);
        tracing::error!(error = %self.0, %status, "request failed");
        metrics::counter!("sentimen_errors_total", "class" => class).increment(1);

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_maps_to_400_with_localized_message() {
        let (status, message, _) = error_parts(&Error::EmptyInput);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Teks tidak boleh kosong");
    }

    #[test]
    fn classifier_failures_map_to_500() {
        let err = Error::ClassifierUnavailable {
            status: 503,
            body: "down".to_string(),
        };
        let (status, message, _) = error_parts(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Gagal memproses prediksi dari model Naive Bayes");
    }

    #[test]
    fn upstream_signals_keep_their_status() {
        let (status, _, _) = error_parts(&Error::RateLimited);
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

        let (status, _, _) = error_parts(&Error::QuotaExhausted);
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn everything_else_is_an_internal_error() {
        let (status, message, _) = error_parts(&Error::config("bad config"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Terjadi kesalahan internal");
    }
}
