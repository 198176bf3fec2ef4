use validator::Validate;

use crate::dto::expense_dto::{CreateExpenseRequest, ExpenseListResponse};
use crate::dto::ApiResponse;
use crate::models::Expense;
use crate::services::summary_service::total_expenses;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct ExpenseController<'a> {
    state: &'a AppState,
}

impl<'a> ExpenseController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn list(&self) -> AppResult<ApiResponse<ExpenseListResponse>> {
        let ledger = self.state.ledger.lock().await;
        let expenses = ledger.expenses.all().to_vec();
        let total = total_expenses(&expenses);

        Ok(ApiResponse::success_with_message(
            ExpenseListResponse { expenses, total },
            format!("Total expenses: ${:.2}", total),
        ))
    }

    pub async fn create(&self, request: CreateExpenseRequest) -> AppResult<ApiResponse<Expense>> {
        request.validate()?;

        let mut ledger = self.state.ledger.lock().await;
        let expense = ledger.expenses.add(request.into_expense()).await?;

        log::info!("💸 Gasto {} registrado: {} {:.2}", expense.id, expense.category, expense.amount);
        Ok(ApiResponse::success_with_message(expense, "Expense added"))
    }

    pub async fn delete(&self, id: i64) -> AppResult<ApiResponse<bool>> {
        let mut ledger = self.state.ledger.lock().await;
        let removed = ledger.expenses.remove(id).await?;
        Ok(ApiResponse::success(removed))
    }
}
