//! Request handlers for the API endpoints.

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;

use super::types::{ErrorResponse, SimulationResponse};
use crate::config::ScenarioConfig;
use crate::error::ConfigError;
use crate::runner::run_scenario;

type ApiResult = Result<Json<SimulationResponse>, (StatusCode, Json<ErrorResponse>)>;

/// Runs a posted scenario.
///
/// `POST /simulate` + `ScenarioConfig` JSON → 200 + `SimulationResponse`
/// Invalid hardware or stages → 422 + `ErrorResponse` listing every problem
pub async fn simulate(Json(config): Json<ScenarioConfig>) -> ApiResult {
    respond(&config)
}

/// Runs a built-in preset.
///
/// `GET /presets/{name}` → 200 + `SimulationResponse`
/// Unknown name → 404 + `ErrorResponse`
pub async fn run_preset(Path(name): Path<String>) -> ApiResult {
    let config = ScenarioConfig::from_preset(&name).map_err(|e| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
                problems: Vec::new(),
            }),
        )
    })?;
    respond(&config)
}

/// `GET /health` → 200 `ok`
pub async fn health() -> &'static str {
    "ok"
}

fn respond(config: &ScenarioConfig) -> ApiResult {
    match config.build() {
        Ok(scenario) => Ok(Json(SimulationResponse::from(&run_scenario(&scenario)))),
        Err(ConfigError::Invalid(errors)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!("scenario failed validation ({} problem(s))", errors.len()),
                problems: errors.iter().map(ToString::to_string).collect(),
            }),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
                problems: Vec::new(),
            }),
        )),
    }
}
