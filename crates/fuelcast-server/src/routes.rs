//! HTTP surface of the prediction endpoint.
//!
//! Routes:
//! - POST {endpoint_path} -> 200 `{"<prediction_key>": fuel}` rounded to 2 decimals
//! - GET /health -> 200 "ok"
//!
//! Refused payloads answer 400 and estimator failures 422, both with an
//! `{"error": "..."}` body.

use std::future::Future;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fuelcast_core::constants::ERROR_KEY;
use fuelcast_core::errors::PredictError;
use fuelcast_core::tracing::events;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

use crate::state::AppState;

/// Build the endpoint router.
pub fn build_router(state: AppState) -> Router {
    let endpoint_path = state.endpoint_path.to_string();
    Router::new()
        .route(&endpoint_path, post(predict))
        .route("/health", get(health))
        .with_state(state)
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(
        address = %listener.local_addr()?,
        endpoint = %state.endpoint_path,
        predictor = state.predictor.name(),
        features = ?state.shaper.feature_order(),
        "prediction endpoint listening"
    );
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(status = %rejection.status(), "unreadable prediction payload");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let outcome = state
        .shaper
        .shape(&payload)
        .and_then(|features| {
            let value = state.predictor.predict(&features)?;
            Ok((features.len(), value))
        });

    match outcome {
        Ok((feature_count, value)) => {
            let value = round_to_cents(value);
            events::prediction_served(state.predictor.name(), feature_count, value);
            let mut body = Map::new();
            body.insert(state.prediction_key.to_string(), json!(value));
            (StatusCode::OK, Json(Value::Object(body))).into_response()
        }
        Err(err) => {
            events::prediction_refused(&err);
            error_response(status_for(&err), err.to_string())
        }
    }
}

fn status_for(err: &PredictError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ ERROR_KEY: message }))).into_response()
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
