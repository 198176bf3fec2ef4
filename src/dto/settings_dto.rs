use serde::Deserialize;
use validator::Validate;

use crate::models::Settings;

// Request para guardar los ajustes (sobrescribe todo el registro)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsRequest {
    #[serde(default)]
    pub map_token: String,

    #[validate(range(min = 0.0))]
    pub alert_threshold: Option<f64>,
}

impl SaveSettingsRequest {
    pub fn into_settings(self) -> Settings {
        Settings {
            map_token: self.map_token.trim().to_string(),
            alert_threshold: self.alert_threshold,
        }
    }
}
