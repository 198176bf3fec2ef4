use validator::Validate;

use crate::dto::settings_dto::SaveSettingsRequest;
use crate::dto::ApiResponse;
use crate::models::Settings;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct SettingsController<'a> {
    state: &'a AppState,
}

impl<'a> SettingsController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn get(&self) -> AppResult<ApiResponse<Settings>> {
        let ledger = self.state.ledger.lock().await;
        Ok(ApiResponse::success(ledger.settings.get().clone()))
    }

    pub async fn save(&self, request: SaveSettingsRequest) -> AppResult<ApiResponse<Settings>> {
        request.validate()?;

        let mut ledger = self.state.ledger.lock().await;
        let saved = ledger.settings.save(request.into_settings()).await?.clone();
        Ok(ApiResponse::success_with_message(saved, "Settings saved"))
    }
}
