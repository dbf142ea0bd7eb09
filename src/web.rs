//! Thin HTTP adapter over the planner
//!
//! No decision logic lives here: handlers parse the form, call the planner
//! and serialize the payload. Fatal planner errors map to status codes; the
//! body always carries a JSON object.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::PlannerError;
use crate::models::LocationQuery;
use crate::planner::{EventEvaluation, EventWeatherPlanner};

#[derive(Debug, Deserialize)]
pub struct CheckWeatherRequest {
    pub country: String,
    pub city: String,
    /// Optional specific place; blank falls back to the city
    #[serde(default)]
    pub place: Option<String>,
    /// Event date as YYYY-MM-DD
    pub event_date: String,
}

pub fn router(planner: Arc<EventWeatherPlanner>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/check-weather", post(check_weather))
        .layer(cors)
        .with_state(planner)
}

pub async fn run(planner: Arc<EventWeatherPlanner>, port: u16) -> Result<()> {
    let app = router(planner);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{port}");
    axum::serve(listener, app)
        .await
        .with_context(|| "Web server terminated")?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

async fn check_weather(
    State(planner): State<Arc<EventWeatherPlanner>>,
    Form(request): Form<CheckWeatherRequest>,
) -> Result<Json<EventEvaluation>, (StatusCode, Json<Value>)> {
    let event_date = NaiveDate::parse_from_str(&request.event_date, "%Y-%m-%d").map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            &format!("Invalid event date '{}', expected YYYY-MM-DD", request.event_date),
        )
    })?;

    let query = LocationQuery::new(&request.country, &request.city, request.place.as_deref());
    if query.country.is_empty() || query.city.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Country and city cannot be empty",
        ));
    }

    let evaluation = planner
        .evaluate(&query, event_date)
        .await
        .map_err(|e| match e {
            PlannerError::LocationNotFound => {
                error_response(StatusCode::NOT_FOUND, &e.user_message())
            }
            PlannerError::WeatherUnavailable => {
                error_response(StatusCode::BAD_GATEWAY, &e.user_message())
            }
            other => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.user_message()),
        })?;

    Ok(Json(evaluation))
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}
