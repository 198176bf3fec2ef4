//! Utilidades del sistema
//!
//! Manejo de errores HTTP y validación de entradas.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
