//! HTTP service command.
//!
//! Exposes the momentum computation as a small axum application with two
//! routes: `POST /compute` and `GET /health`. Boundary validation failures
//! return `400` with a `detail` message; upstream fetch failures degrade to
//! unavailable results, never a server error.

use crate::data;
use crate::render::ComputeResponse;
use ancora_core::{MomentumRequest, Unit, compute_window, evaluate};
use ancora_feed::FeedClient;
use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    client: FeedClient,
}

/// Wire shape of a momentum computation request.
#[derive(Debug, Deserialize)]
struct ComputeRequest {
    tickers: Vec<String>,
    unit: String,
    n: u32,
    as_of_period: String,
}

/// Bind the service and run it until shutdown.
pub(crate) async fn run(host: &str, port: u16) -> Result<()> {
    let state = AppState {
        client: FeedClient::from_env(),
    };
    tracing::info!("price feed base: {}", state.client.base_url());

    let app = Router::new()
        .route("/compute", post(compute))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid host:port configuration: {}", e))?;
    tracing::info!("ancora v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn compute(
    State(state): State<AppState>,
    Json(req): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>, (StatusCode, Json<Value>)> {
    let request = build_request(&req).map_err(|e| bad_request(&e.to_string()))?;
    let window = compute_window(request.unit(), request.periods(), request.reference())
        .map_err(|e| bad_request(&e.to_string()))?;

    let series = data::load_price_series(&state.client, request.tickers(), window).await;
    let report = evaluate(&series, &request);

    Ok(Json(ComputeResponse::build(&request, &report)))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "api_base": state.client.base_url(),
    }))
}

/// Validate the wire request into an engine request.
fn build_request(req: &ComputeRequest) -> ancora_core::Result<MomentumRequest> {
    let unit: Unit = req.unit.parse()?;
    MomentumRequest::new(req.tickers.clone(), unit, req.n, &req.as_of_period)
}

fn bad_request(detail: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail })))
}
