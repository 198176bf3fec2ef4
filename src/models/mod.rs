//! Modelos del sistema
//!
//! Este módulo contiene los registros persistidos. Los nombres de campo JSON
//! coinciden con el layout guardado (`camelCase`).

pub mod expense;
pub mod order;
pub mod settings;
pub mod shift;

pub use expense::Expense;
pub use order::Order;
pub use settings::Settings;
pub use shift::Shift;

use serde::{de::DeserializeOwned, Serialize};

/// Registro de una colección con identificador numérico
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}
