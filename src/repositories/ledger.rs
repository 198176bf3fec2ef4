//! Libro del conductor
//!
//! Agrupa las tres colecciones independientes y los ajustes. Se carga una
//! vez al arrancar y se comparte detrás de un mutex, de modo que las
//! mutaciones se aplican de una en una.

use std::sync::Arc;

use tracing::info;

use crate::models::{Expense, Order, Shift};
use crate::storage::{KeyValueStore, StorageError, EXPENSES_KEY, ORDERS_KEY, SHIFTS_KEY};

use super::{RecordStore, SettingsStore};

pub struct Ledger {
    pub orders: RecordStore<Order>,
    pub expenses: RecordStore<Expense>,
    pub shifts: RecordStore<Shift>,
    pub settings: SettingsStore,
}

impl Ledger {
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let ledger = Self {
            orders: RecordStore::load(storage.clone(), ORDERS_KEY).await?,
            expenses: RecordStore::load(storage.clone(), EXPENSES_KEY).await?,
            shifts: RecordStore::load(storage.clone(), SHIFTS_KEY).await?,
            settings: SettingsStore::load(storage.clone()).await?,
        };

        info!(
            "📚 Datos cargados desde {}: {} pedidos, {} gastos, {} turnos",
            storage.backend_name(),
            ledger.orders.all().len(),
            ledger.expenses.all().len(),
            ledger.shifts.all().len()
        );
        Ok(ledger)
    }
}
