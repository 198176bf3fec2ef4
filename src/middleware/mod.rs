//! Middleware
//!
//! CORS y trazas de peticiones HTTP.

pub mod cors;

pub use cors::cors_layer;
