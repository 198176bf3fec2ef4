use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::SettingsController;
use crate::dto::settings_dto::SaveSettingsRequest;
use crate::dto::ApiResponse;
use crate::models::Settings;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(save_settings))
}

async fn get_settings(State(state): State<AppState>) -> Result<Json<ApiResponse<Settings>>, AppError> {
    Ok(Json(SettingsController::new(&state).get().await?))
}

async fn save_settings(
    State(state): State<AppState>,
    Json(request): Json<SaveSettingsRequest>,
) -> Result<Json<ApiResponse<Settings>>, AppError> {
    Ok(Json(SettingsController::new(&state).save(request).await?))
}
