use crate::dto::ApiResponse;
use crate::services::summary_service::{summarize, EarningsSummary};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct SummaryController<'a> {
    state: &'a AppState,
}

impl<'a> SummaryController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn get(&self) -> AppResult<ApiResponse<EarningsSummary>> {
        let ledger = self.state.ledger.lock().await;
        Ok(ApiResponse::success(summarize(
            ledger.orders.all(),
            ledger.expenses.all(),
            ledger.shifts.all(),
        )))
    }
}
