//! Colecciones de registros con persistencia write-through
//!
//! Cada colección vive en memoria y se vuelca completa al adaptador de
//! persistencia después de cada mutación. Las transformaciones sobre la lista
//! son funciones puras (`appended`, `without`, `with_toggled`); el store sólo
//! las aplica y persiste.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::models::{Order, Record};
use crate::storage::{load_json, save_json, KeyValueStore, StorageError};

/// Generador de identificadores a partir del reloj en milisegundos.
/// Si el reloj no avanza respecto al último emitido se usa el siguiente entero;
/// `None` cuando ya no quedan enteros por encima del último.
#[derive(Debug, Clone, Default)]
pub struct IdClock {
    last: i64,
}

impl IdClock {
    pub fn starting_after(last: i64) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> Option<i64> {
        self.next_from(Utc::now().timestamp_millis())
    }

    fn next_from(&mut self, now_millis: i64) -> Option<i64> {
        let id = if now_millis > self.last {
            now_millis
        } else {
            self.last.checked_add(1)?
        };
        self.last = id;
        Some(id)
    }
}

/// Añadir un registro al final
pub fn appended<T>(mut records: Vec<T>, record: T) -> Vec<T> {
    records.push(record);
    records
}

/// Quitar el registro con ese id; sin cambios si no existe
pub fn without<T: Record>(records: Vec<T>, id: i64) -> Vec<T> {
    records.into_iter().filter(|r| r.id() != id).collect()
}

/// Invertir la marca de aceptación del pedido con ese id
pub fn with_toggled(orders: Vec<Order>, id: i64) -> Vec<Order> {
    orders
        .into_iter()
        .map(|mut order| {
            if order.id == id {
                order.accepted = !order.accepted;
            }
            order
        })
        .collect()
}

pub struct RecordStore<T: Record> {
    key: &'static str,
    records: Vec<T>,
    ids: IdClock,
    storage: Arc<dyn KeyValueStore>,
}

impl<T: Record> RecordStore<T> {
    /// Cargar la colección guardada bajo `key` (vacía si no existe)
    pub async fn load(storage: Arc<dyn KeyValueStore>, key: &'static str) -> Result<Self, StorageError> {
        let records: Vec<T> = load_json(storage.as_ref(), key).await?.unwrap_or_default();
        let last_id = records.iter().map(Record::id).max().unwrap_or(0);

        debug!("📦 Colección {} cargada: {} registros", key, records.len());

        Ok(Self {
            key,
            records,
            ids: IdClock::starting_after(last_id),
            storage,
        })
    }

    /// Asignar un id nuevo, añadir y persistir.
    /// Si la escritura falla ni la colección ni el reloj de ids cambian.
    pub async fn add(&mut self, mut record: T) -> Result<T, StorageError> {
        let mut ids = self.ids.clone();
        let id = ids.next_id().ok_or_else(|| StorageError::IdsExhausted {
            key: self.key.to_string(),
            last: self.ids.last,
        })?;
        record.set_id(id);

        self.commit(appended(self.records.clone(), record.clone())).await?;
        self.ids = ids;
        Ok(record)
    }

    /// Borrar por id y persistir; devuelve si existía
    pub async fn remove(&mut self, id: i64) -> Result<bool, StorageError> {
        let next = without(self.records.clone(), id);
        let removed = next.len() != self.records.len();
        self.commit(next).await?;
        Ok(removed)
    }

    /// Instantánea de la colección actual
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Persistir la nueva lista y sólo entonces reemplazar la de memoria
    async fn commit(&mut self, next: Vec<T>) -> Result<(), StorageError> {
        save_json(self.storage.as_ref(), self.key, &next).await?;
        self.records = next;
        Ok(())
    }
}

impl RecordStore<Order> {
    /// Invertir `accepted` y persistir; `None` si el pedido no existe
    pub async fn toggle_accepted(&mut self, id: i64) -> Result<Option<Order>, StorageError> {
        if self.get(id).is_none() {
            return Ok(None);
        }
        self.commit(with_toggled(self.records.clone(), id)).await?;
        Ok(self.get(id).cloned())
    }

    pub fn has_accepted(&self) -> bool {
        self.records.iter().any(|o| o.accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::storage::{MemoryStore, EXPENSES_KEY, ORDERS_KEY};

    fn order(platform: &str) -> Order {
        Order {
            id: 0,
            platform: platform.to_string(),
            pickup: "A".to_string(),
            dropoff: "B".to_string(),
            pay: 10.0,
            miles: 2.0,
            minutes: 15.0,
            notes: String::new(),
            accepted: false,
            date: None,
        }
    }

    fn expense(amount: f64) -> Expense {
        Expense {
            id: 0,
            date: "2024-05-01".to_string(),
            category: "Fuel".to_string(),
            amount,
        }
    }

    #[test]
    fn test_id_clock_is_strictly_monotonic() {
        let mut clock = IdClock::starting_after(1_000);
        assert_eq!(clock.next_from(500), Some(1_001));
        assert_eq!(clock.next_from(1_001), Some(1_002));
        assert_eq!(clock.next_from(5_000), Some(5_000));
        assert_eq!(clock.next_from(5_000), Some(5_001));
    }

    #[test]
    fn test_id_clock_stops_at_max() {
        let mut clock = IdClock::starting_after(i64::MAX);
        assert_eq!(clock.next_from(1_000), None);
        assert_eq!(clock.next_from(i64::MAX), None);
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids_and_persists() {
        let storage = Arc::new(MemoryStore::new());
        let mut store: RecordStore<Order> = RecordStore::load(storage.clone(), ORDERS_KEY).await.unwrap();

        let first = store.add(order("DoorDash")).await.unwrap();
        let second = store.add(order("Instacart")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);

        let persisted: Vec<Order> = load_json(storage.as_ref(), ORDERS_KEY).await.unwrap().unwrap();
        assert_eq!(persisted, store.all());
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_noop() {
        let storage = Arc::new(MemoryStore::new());
        let mut store: RecordStore<Expense> = RecordStore::load(storage, EXPENSES_KEY).await.unwrap();
        store.add(expense(12.0)).await.unwrap();
        let snapshot = store.all().to_vec();

        let removed = store.remove(42).await.unwrap();

        assert!(!removed);
        assert_eq!(store.all(), snapshot.as_slice());
    }

    #[tokio::test]
    async fn test_remove_existing_id() {
        let storage = Arc::new(MemoryStore::new());
        let mut store: RecordStore<Expense> = RecordStore::load(storage, EXPENSES_KEY).await.unwrap();
        let kept = store.add(expense(5.0)).await.unwrap();
        let gone = store.add(expense(7.0)).await.unwrap();

        assert!(store.remove(gone.id).await.unwrap());
        assert_eq!(store.all(), &[kept]);
    }

    #[tokio::test]
    async fn test_reload_round_trip_is_field_for_field() {
        let storage = Arc::new(MemoryStore::new());
        let mut store: RecordStore<Order> = RecordStore::load(storage.clone(), ORDERS_KEY).await.unwrap();
        let mut dated = order("Grubhub");
        dated.notes = "gate code 1234".to_string();
        dated.date = Some("2024-06-01".to_string());
        store.add(dated).await.unwrap();
        store.add(order("Uber Eats")).await.unwrap();

        let reloaded: RecordStore<Order> = RecordStore::load(storage, ORDERS_KEY).await.unwrap();
        assert_eq!(reloaded.all(), store.all());
    }

    #[tokio::test]
    async fn test_reload_continues_ids_after_stored_maximum() {
        let storage = Arc::new(MemoryStore::new());
        let far_future = Order {
            id: i64::MAX - 10,
            ..order("DoorDash")
        };
        save_json(storage.as_ref(), ORDERS_KEY, &vec![far_future]).await.unwrap();

        let mut store: RecordStore<Order> = RecordStore::load(storage, ORDERS_KEY).await.unwrap();
        let added = store.add(order("Instacart")).await.unwrap();
        assert_eq!(added.id, i64::MAX - 9);
    }

    #[tokio::test]
    async fn test_toggle_accepted_flips_and_persists() {
        let storage = Arc::new(MemoryStore::new());
        let mut store: RecordStore<Order> = RecordStore::load(storage.clone(), ORDERS_KEY).await.unwrap();
        let added = store.add(order("DoorDash")).await.unwrap();

        let toggled = store.toggle_accepted(added.id).await.unwrap().unwrap();
        assert!(toggled.accepted);
        assert!(store.has_accepted());

        let persisted: Vec<Order> = load_json(storage.as_ref(), ORDERS_KEY).await.unwrap().unwrap();
        assert!(persisted[0].accepted);

        let back = store.toggle_accepted(added.id).await.unwrap().unwrap();
        assert!(!back.accepted);
        assert!(!store.has_accepted());
    }

    #[tokio::test]
    async fn test_toggle_unknown_order_is_none() {
        let storage = Arc::new(MemoryStore::new());
        let mut store: RecordStore<Order> = RecordStore::load(storage.clone(), ORDERS_KEY).await.unwrap();
        assert!(store.toggle_accepted(99).await.unwrap().is_none());
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_fails_when_stored_ids_are_exhausted() {
        let storage = Arc::new(MemoryStore::new());
        let last = Order {
            id: i64::MAX,
            ..order("DoorDash")
        };
        save_json(storage.as_ref(), ORDERS_KEY, &vec![last.clone()]).await.unwrap();

        let mut store: RecordStore<Order> = RecordStore::load(storage, ORDERS_KEY).await.unwrap();
        let err = store.add(order("Instacart")).await.unwrap_err();

        assert!(matches!(err, StorageError::IdsExhausted { last: i64::MAX, .. }));
        assert_eq!(store.all(), &[last]);
    }

    /// Almacén que lee lo que se le siembra y rechaza toda escritura
    struct ReadOnlyStore {
        seeded: Option<String>,
    }

    #[async_trait::async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.seeded.clone())
        }

        async fn set(&self, key: &str, _value: String) -> Result<(), StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        }

        fn backend_name(&self) -> &'static str {
            "read-only"
        }
    }

    #[tokio::test]
    async fn test_failed_write_leaves_collection_unchanged() {
        let mut existing = order("DoorDash");
        existing.id = 7;
        let storage = Arc::new(ReadOnlyStore {
            seeded: Some(serde_json::to_string(&vec![existing.clone()]).unwrap()),
        });
        let mut store: RecordStore<Order> = RecordStore::load(storage, ORDERS_KEY).await.unwrap();

        assert!(store.add(order("Instacart")).await.is_err());
        assert_eq!(store.all(), &[existing.clone()]);

        assert!(store.remove(7).await.is_err());
        assert_eq!(store.all(), &[existing.clone()]);

        assert!(store.toggle_accepted(7).await.is_err());
        assert_eq!(store.all(), &[existing]);
        assert!(!store.has_accepted());
    }

    #[tokio::test]
    async fn test_failed_add_does_not_consume_an_id() {
        let storage = Arc::new(ReadOnlyStore { seeded: None });
        let mut store: RecordStore<Expense> = RecordStore::load(storage, EXPENSES_KEY).await.unwrap();
        let before = store.ids.clone();

        assert!(store.add(expense(3.0)).await.is_err());
        assert_eq!(store.ids.last, before.last);
    }

    #[test]
    fn test_pure_transformations() {
        let mut a = order("A");
        a.id = 1;
        let mut b = order("B");
        b.id = 2;

        let list = appended(vec![a.clone()], b.clone());
        assert_eq!(list.len(), 2);
        assert_eq!(without(list.clone(), 3), list);
        assert_eq!(without(list.clone(), 1), vec![b.clone()]);

        let toggled = with_toggled(list, 2);
        assert!(!toggled[0].accepted);
        assert!(toggled[1].accepted);
    }
}
