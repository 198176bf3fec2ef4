//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa HTTP y su conversión a
//! respuestas. Ningún error es fatal para el servicio: se registra, se
//! devuelve como mensaje y el usuario decide si repetir la acción.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::RouteError;
use crate::storage::StorageError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Error optimizing route: {0}")]
    Route(#[from] RouteError),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::Route(e) => match e {
                RouteError::Configuration => (StatusCode::PRECONDITION_FAILED, "CONFIGURATION_ERROR"),
                RouteError::EmptySelection => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_SELECTION"),
                RouteError::Geocoding(_) | RouteError::GeocodingMany(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "GEOCODING_ERROR")
                }
                RouteError::NoRouteFound => (StatusCode::NOT_FOUND, "NO_ROUTE_FOUND"),
                RouteError::Provider(_) => (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        } else {
            log::warn!("⚠️ {}", self);
        }

        let (error, details) = match &self {
            AppError::Validation(e) => ("Validation Error", Some(json!(e))),
            AppError::NotFound(_) => ("Not Found", None),
            AppError::Storage(_) => ("Storage Error", None),
            AppError::Route(RouteError::GeocodingMany(addresses)) => {
                ("Route Error", Some(json!({ "addresses": addresses })))
            }
            AppError::Route(RouteError::Geocoding(address)) => {
                ("Route Error", Some(json!({ "addresses": [address] })))
            }
            AppError::Route(_) => ("Route Error", None),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            details,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_errors_map_to_distinct_statuses() {
        let cases = [
            (RouteError::Configuration, StatusCode::PRECONDITION_FAILED),
            (RouteError::EmptySelection, StatusCode::UNPROCESSABLE_ENTITY),
            (RouteError::Geocoding("Y".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (RouteError::NoRouteFound, StatusCode::NOT_FOUND),
        ];
        for (err, expected) in cases {
            assert_eq!(AppError::Route(err).status_and_code().0, expected);
        }
    }

    #[test]
    fn test_route_message_prefix() {
        let err = AppError::from(RouteError::Geocoding("Y".into()));
        assert_eq!(err.to_string(), "Error optimizing route: Geocoding failed for Y");
    }

    #[test]
    fn test_not_found_helper() {
        let err = not_found_error("Order", 42);
        assert_eq!(err.to_string(), "Not found: Order with id '42' not found");
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }
}
