//! Métricas de rentabilidad por pedido
//!
//! Vista derivada que se recalcula en cada lectura: pago por milla, pago por
//! hora y orden descendente por pago por hora.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::Order;

/// Pedido con sus métricas derivadas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub pay_per_mile: f64,
    pub pay_per_hour: f64,
    /// `None` cuando no hay umbral configurado
    pub favorable: Option<bool>,
}

/// Pago por milla; 0 si las millas son 0
pub fn pay_per_mile(order: &Order) -> f64 {
    if order.miles > 0.0 {
        order.pay / order.miles
    } else {
        0.0
    }
}

/// Pago por hora; 0 si los minutos son 0
pub fn pay_per_hour(order: &Order) -> f64 {
    if order.minutes > 0.0 {
        order.pay / (order.minutes / 60.0)
    } else {
        0.0
    }
}

/// Un pedido es favorable si su pago por milla alcanza el umbral
pub fn is_favorable(pay_per_mile: f64, threshold: Option<f64>) -> Option<bool> {
    threshold
        .filter(|t| t.is_finite() && *t > 0.0)
        .map(|t| pay_per_mile >= t)
}

/// Vista ordenada por pago por hora descendente. El orden es estable:
/// a igual valor se conserva el orden de inserción.
pub fn rank_orders(orders: &[Order], threshold: Option<f64>) -> Vec<RankedOrder> {
    let mut ranked: Vec<RankedOrder> = orders
        .iter()
        .map(|order| {
            let ppm = pay_per_mile(order);
            RankedOrder {
                order: order.clone(),
                pay_per_mile: ppm,
                pay_per_hour: pay_per_hour(order),
                favorable: is_favorable(ppm, threshold),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.pay_per_hour
            .partial_cmp(&a.pay_per_hour)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
