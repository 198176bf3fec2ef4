use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::ShiftController;
use crate::dto::shift_dto::{CreateShiftRequest, ShiftListResponse};
use crate::dto::ApiResponse;
use crate::models::Shift;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_shift_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shifts).post(create_shift))
        .route("/:id", delete(delete_shift))
}

async fn list_shifts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ShiftListResponse>>, AppError> {
    Ok(Json(ShiftController::new(&state).list().await?))
}

async fn create_shift(
    State(state): State<AppState>,
    Json(request): Json<CreateShiftRequest>,
) -> Result<Json<ApiResponse<Shift>>, AppError> {
    Ok(Json(ShiftController::new(&state).create(request).await?))
}

async fn delete_shift(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    Ok(Json(ShiftController::new(&state).delete(id).await?))
}
