use validator::Validate;

use crate::dto::shift_dto::{CreateShiftRequest, ShiftListResponse};
use crate::dto::ApiResponse;
use crate::models::Shift;
use crate::services::summary_service::total_shift_hours;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct ShiftController<'a> {
    state: &'a AppState,
}

impl<'a> ShiftController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn list(&self) -> AppResult<ApiResponse<ShiftListResponse>> {
        let ledger = self.state.ledger.lock().await;
        let shifts = ledger.shifts.all().to_vec();
        let total_hours = total_shift_hours(&shifts);

        Ok(ApiResponse::success(ShiftListResponse { shifts, total_hours }))
    }

    pub async fn create(&self, request: CreateShiftRequest) -> AppResult<ApiResponse<Shift>> {
        request.validate()?;

        let mut ledger = self.state.ledger.lock().await;
        let shift = ledger.shifts.add(request.into_shift()).await?;

        log::info!("🕒 Turno {} registrado: {} {}-{}", shift.id, shift.date, shift.start, shift.end);
        Ok(ApiResponse::success_with_message(shift, "Shift added"))
    }

    pub async fn delete(&self, id: i64) -> AppResult<ApiResponse<bool>> {
        let mut ledger = self.state.ledger.lock().await;
        let removed = ledger.shifts.remove(id).await?;
        Ok(ApiResponse::success(removed))
    }
}
