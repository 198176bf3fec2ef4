//! Rutas del optimizador
//!
//! `POST /optimize` calcula la ruta; `GET /` devuelve la última calculada.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::RouteController;
use crate::dto::ApiResponse;
use crate::services::RouteSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", get(latest_route))
        .route("/optimize", post(optimize_route))
}

async fn optimize_route(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RouteSummary>>, AppError> {
    Ok(Json(RouteController::new(&state).optimize().await?))
}

async fn latest_route(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RouteSummary>>, AppError> {
    Ok(Json(RouteController::new(&state).latest().await?))
}
