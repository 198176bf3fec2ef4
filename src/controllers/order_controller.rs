use chrono::Utc;
use validator::Validate;

use crate::dto::order_dto::{CreateOrderRequest, OrderListResponse};
use crate::dto::ApiResponse;
use crate::models::Order;
use crate::services::metrics_service::rank_orders;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub struct OrderController<'a> {
    state: &'a AppState,
}

impl<'a> OrderController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Vista ordenada por pago por hora con la clasificación por umbral
    pub async fn list(&self) -> AppResult<ApiResponse<OrderListResponse>> {
        let ledger = self.state.ledger.lock().await;
        let threshold = ledger.settings.get().favorable_threshold();

        Ok(ApiResponse::success(OrderListResponse {
            orders: rank_orders(ledger.orders.all(), threshold),
            alert_threshold: threshold,
        })
        .with_route_available(ledger.orders.has_accepted()))
    }

    pub async fn create(&self, request: CreateOrderRequest) -> AppResult<ApiResponse<Order>> {
        request.validate()?;

        let mut ledger = self.state.ledger.lock().await;
        let order = ledger
            .orders
            .add(request.into_order(Utc::now().date_naive()))
            .await?;

        log::info!("📝 Pedido {} registrado ({})", order.id, order.platform);
        Ok(ApiResponse::success_with_message(order, "Order added")
            .with_route_available(ledger.orders.has_accepted()))
    }

    pub async fn toggle_accepted(&self, id: i64) -> AppResult<ApiResponse<Order>> {
        let mut ledger = self.state.ledger.lock().await;
        let order = ledger
            .orders
            .toggle_accepted(id)
            .await?
            .ok_or_else(|| not_found_error("Order", id))?;

        log::info!(
            "🔁 Pedido {} {}",
            order.id,
            if order.accepted { "aceptado" } else { "pendiente" }
        );
        let message = if order.accepted { "Order accepted" } else { "Order unaccepted" };
        Ok(ApiResponse::success_with_message(order, message)
            .with_route_available(ledger.orders.has_accepted()))
    }

    /// Borrar un pedido; un id inexistente no es un error
    pub async fn delete(&self, id: i64) -> AppResult<ApiResponse<bool>> {
        let mut ledger = self.state.ledger.lock().await;
        let removed = ledger.orders.remove(id).await?;

        log::info!("🗑️ Borrado de pedido {} (existía: {})", id, removed);
        Ok(ApiResponse::success(removed).with_route_available(ledger.orders.has_accepted()))
    }
}
