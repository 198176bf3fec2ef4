//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la selección de backends.

pub mod environment;

pub use environment::*;
