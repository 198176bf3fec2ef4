pub mod expense_routes;
pub mod order_routes;
pub mod route_routes;
pub mod settings_routes;
pub mod shift_routes;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use crate::controllers::SummaryController;
use crate::dto::ApiResponse;
use crate::services::summary_service::EarningsSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/orders", order_routes::create_order_router())
        .nest("/api/expenses", expense_routes::create_expense_router())
        .nest("/api/shifts", shift_routes::create_shift_router())
        .nest("/api/settings", settings_routes::create_settings_router())
        .nest("/api/route", route_routes::create_route_router())
        .route("/api/summary", get(get_summary))
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "gig-driver-optimizer",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<EarningsSummary>>, AppError> {
    Ok(Json(SummaryController::new(&state).get().await?))
}
