use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::ExpenseController;
use crate::dto::expense_dto::{CreateExpenseRequest, ExpenseListResponse};
use crate::dto::ApiResponse;
use crate::models::Expense;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", delete(delete_expense))
}

async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ExpenseListResponse>>, AppError> {
    Ok(Json(ExpenseController::new(&state).list().await?))
}

async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, AppError> {
    Ok(Json(ExpenseController::new(&state).create(request).await?))
}

async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    Ok(Json(ExpenseController::new(&state).delete(id).await?))
}
