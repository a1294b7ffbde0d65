use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use serde::Serialize;

use crate::config::Config;
use crate::data::{SeatingInput, SeatingOutput};
use crate::error::SeatingError;
use crate::{chart, planner};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(e: SeatingError) -> ApiError {
    let status = match e {
        SeatingError::CapacityExceeded { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SeatingError::InvalidRoomCapacity { .. }
        | SeatingError::CapacityOverflow
        | SeatingError::ChartTooLarge { .. }
        | SeatingError::Csv { .. }
        | SeatingError::InvalidRecord { .. } => StatusCode::BAD_REQUEST,
    };
    warn!("Rejecting seating request: {}", e);
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

async fn plan_handler(Json(input): Json<SeatingInput>) -> Result<Json<SeatingOutput>, ApiError> {
    planner::plan(&input).map(Json).map_err(api_error)
}

async fn chart_handler(
    State(max_chart_seats): State<usize>,
    Json(input): Json<SeatingInput>,
) -> Result<String, ApiError> {
    let output = planner::plan(&input).map_err(api_error)?;
    chart::render(&output.assignments, max_chart_seats).map_err(api_error)
}

async fn liveness() -> &'static str {
    "seating planner"
}

pub fn router(max_body_size: usize, max_chart_seats: usize) -> Router {
    Router::new()
        .route("/v1/seating/plan", post(plan_handler))
        .route(
            "/v1/seating/chart",
            post(chart_handler).with_state(max_chart_seats),
        )
        .route("/_liveness", get(liveness))
        .layer(DefaultBodyLimit::max(max_body_size))
}

pub async fn run_server(config: &Config) -> std::io::Result<()> {
    let app = router(config.max_body_size, config.max_chart_seats);

    let listener = tokio::net::TcpListener::bind(config.bind()).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
