use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::OrderController;
use crate::dto::order_dto::{CreateOrderRequest, OrderListResponse};
use crate::dto::ApiResponse;
use crate::models::Order;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", delete(delete_order))
        .route("/:id/toggle", post(toggle_order))
}

async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OrderListResponse>>, AppError> {
    let response = OrderController::new(&state).list().await?;
    Ok(Json(response))
}

async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let response = OrderController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn toggle_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let response = OrderController::new(&state).toggle_accepted(id).await?;
    Ok(Json(response))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let response = OrderController::new(&state).delete(id).await?;
    Ok(Json(response))
}
