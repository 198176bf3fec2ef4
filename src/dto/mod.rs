//! DTOs de la API
//!
//! Requests validados, responses y estructuras de las APIs de Mapbox.

pub mod api_response;
pub mod expense_dto;
pub mod mapbox_dto;
pub mod order_dto;
pub mod settings_dto;
pub mod shift_dto;

pub use api_response::ApiResponse;
