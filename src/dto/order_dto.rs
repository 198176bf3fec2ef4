use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Order;
use crate::services::metrics_service::RankedOrder;
use crate::utils::validation::{validate_date, validate_not_empty};

// Request para registrar un pedido
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(custom = "validate_not_empty")]
    pub platform: String,

    #[validate(custom = "validate_not_empty")]
    pub pickup: String,

    #[validate(custom = "validate_not_empty")]
    pub dropoff: String,

    #[validate(range(min = 0.0))]
    pub pay: f64,

    #[validate(range(min = 0.0))]
    pub miles: f64,

    #[validate(range(min = 0.0))]
    pub minutes: f64,

    pub notes: Option<String>,

    #[validate(custom = "validate_date")]
    pub date: Option<String>,
}

impl CreateOrderRequest {
    /// Construir el pedido (id pendiente de asignar, no aceptado).
    /// Sin fecha explícita se usa `today`.
    pub fn into_order(self, today: NaiveDate) -> Order {
        Order {
            id: 0,
            platform: self.platform.trim().to_string(),
            pickup: self.pickup.trim().to_string(),
            dropoff: self.dropoff.trim().to_string(),
            pay: self.pay,
            miles: self.miles,
            minutes: self.minutes,
            notes: self.notes.map(|n| n.trim().to_string()).unwrap_or_default(),
            accepted: false,
            date: Some(
                self.date
                    .map(|d| d.trim().to_string())
                    .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            ),
        }
    }
}

// Vista ordenada de pedidos
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub orders: Vec<RankedOrder>,
    pub alert_threshold: Option<f64>,
}
