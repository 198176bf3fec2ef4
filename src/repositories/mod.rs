//! Repositorios
//!
//! Colecciones en memoria respaldadas por el adaptador de persistencia.

pub mod ledger;
pub mod record_store;
pub mod settings_store;

pub use ledger::Ledger;
pub use record_store::{IdClock, RecordStore};
pub use settings_store::SettingsStore;
