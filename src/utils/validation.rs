//! Utilidades de validación
//!
//! Funciones `custom` para los DTOs validados con `validator`.

use chrono::NaiveDate;
use validator::ValidationError;

use crate::models::shift::parse_clock;

/// Validar formato de fecha YYYY-MM-DD
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            let mut error = ValidationError::new("date");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DD".to_string());
            error
        })
}

/// Validar formato de hora HH:MM
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    match parse_clock(value) {
        Some(_) => Ok(()),
        None => {
            let mut error = ValidationError::new("time");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"HH:MM".to_string());
            Err(error)
        }
    }
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_empty"));
    }
    Ok(())
}
