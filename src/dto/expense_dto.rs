use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Expense;
use crate::utils::validation::{validate_date, validate_not_empty};

// Request para registrar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    #[validate(custom = "validate_date")]
    pub date: String,

    #[validate(custom = "validate_not_empty")]
    pub category: String,

    #[validate(range(min = 0.0))]
    pub amount: f64,
}

impl CreateExpenseRequest {
    pub fn into_expense(self) -> Expense {
        Expense {
            id: 0,
            date: self.date.trim().to_string(),
            category: self.category.trim().to_string(),
            amount: self.amount,
        }
    }
}

// Listado de gastos con su total
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
    pub total: f64,
}
