//! Modelo de Order
//!
//! Un pedido ofrecido por una plataforma. Sólo `accepted` cambia después de
//! la creación; las métricas derivadas viven en el servicio de métricas.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub platform: String,
    pub pickup: String,
    pub dropoff: String,
    pub pay: f64,
    pub miles: f64,
    pub minutes: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub accepted: bool,
    /// Fecha del pedido (YYYY-MM-DD); ausente en datos antiguos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Order {
    /// Fecha del pedido, o la fecha UTC de su identificador si no se guardó
    pub fn effective_date(&self) -> String {
        match &self.date {
            Some(date) => date.clone(),
            None => DateTime::from_timestamp_millis(self.id)
                .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

impl Record for Order {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
