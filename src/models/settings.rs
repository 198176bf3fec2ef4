use serde::{Deserialize, Serialize};

/// Ajustes del usuario: token de Mapbox y umbral de alerta de pago por milla.
/// Una sola instancia, sobrescrita completa al guardar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub map_token: String,
    /// Puede venir `null` de datos antiguos
    #[serde(default)]
    pub alert_threshold: Option<f64>,
}

impl Settings {
    /// Token de acceso configurado, si no está vacío
    pub fn access_token(&self) -> Option<&str> {
        let token = self.map_token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    /// Umbral efectivo; cero, ausente o no finito desactiva la clasificación
    pub fn favorable_threshold(&self) -> Option<f64> {
        self.alert_threshold.filter(|t| t.is_finite() && *t > 0.0)
    }
}
