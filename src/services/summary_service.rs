//! Resumen de ganancias
//!
//! Agregados para las gráficas y el total de gastos. No se persiste nada.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Expense, Order, Shift};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    pub order_count: usize,
    pub total_earnings: f64,
    pub earnings_by_date: BTreeMap<String, f64>,
    pub earnings_by_platform: BTreeMap<String, f64>,
    pub total_expenses: f64,
    pub expenses_by_category: BTreeMap<String, f64>,
    pub net_earnings: f64,
    pub total_shift_hours: f64,
    /// Ganancia neta por hora de turno; 0 sin horas registradas
    pub effective_hourly_rate: f64,
}

pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn total_shift_hours(shifts: &[Shift]) -> f64 {
    shifts.iter().filter_map(Shift::hours).sum()
}

pub fn summarize(orders: &[Order], expenses: &[Expense], shifts: &[Shift]) -> EarningsSummary {
    let mut earnings_by_date = BTreeMap::new();
    let mut earnings_by_platform = BTreeMap::new();
    for order in orders {
        *earnings_by_date.entry(order.effective_date()).or_insert(0.0) += order.pay;
        *earnings_by_platform.entry(order.platform.clone()).or_insert(0.0) += order.pay;
    }

    let mut expenses_by_category = BTreeMap::new();
    for expense in expenses {
        *expenses_by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    let total_earnings: f64 = orders.iter().map(|o| o.pay).sum();
    let total_expenses = total_expenses(expenses);
    let net_earnings = total_earnings - total_expenses;
    let total_shift_hours = total_shift_hours(shifts);
    let effective_hourly_rate = if total_shift_hours > 0.0 {
        net_earnings / total_shift_hours
    } else {
        0.0
    };

    EarningsSummary {
        order_count: orders.len(),
        total_earnings,
        earnings_by_date,
        earnings_by_platform,
        total_expenses,
        expenses_by_category,
        net_earnings,
        total_shift_hours,
        effective_hourly_rate,
    }
}
