use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Shift;
use crate::utils::validation::{validate_clock_time, validate_date};

// Request para registrar un turno
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShiftRequest {
    #[validate(custom = "validate_date")]
    pub date: String,

    #[validate(custom = "validate_clock_time")]
    pub start: String,

    #[validate(custom = "validate_clock_time")]
    pub end: String,
}

impl CreateShiftRequest {
    pub fn into_shift(self) -> Shift {
        Shift {
            id: 0,
            date: self.date.trim().to_string(),
            start: self.start.trim().to_string(),
            end: self.end.trim().to_string(),
        }
    }
}

// Listado de turnos con las horas trabajadas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftListResponse {
    pub shifts: Vec<Shift>,
    pub total_hours: f64,
}
