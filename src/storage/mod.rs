//! Persistencia clave-valor
//!
//! Este módulo define el adaptador de persistencia: un almacén de valores JSON
//! indexado por clave (`orders`, `expenses`, `shifts`, `settings`) con tres
//! backends intercambiables.

pub mod file_store;
pub mod memory_store;
pub mod redis_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Claves persistidas
pub const ORDERS_KEY: &str = "orders";
pub const EXPENSES_KEY: &str = "expenses";
pub const SHIFTS_KEY: &str = "shifts";
pub const SETTINGS_KEY: &str = "settings";

/// Errores del adaptador de persistencia
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Invalid JSON stored under key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No ids left after {last} for key '{key}'")]
    IdsExhausted { key: String, last: i64 },
}

/// Operaciones del almacén clave-valor
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Leer el valor crudo de una clave, `None` si nunca se escribió
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Sobrescribir el valor de una clave
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Nombre del backend para los logs
    fn backend_name(&self) -> &'static str;
}

/// Leer y deserializar el valor JSON de una clave
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Serializar y guardar un valor JSON bajo una clave
pub async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, raw).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        value: f64,
    }

    #[tokio::test]
    async fn test_load_missing_key_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<Vec<Sample>> = load_json(&store, "missing").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryStore::new();
        let items = vec![Sample { name: "a".into(), value: 1.5 }];
        save_json(&store, "items", &items).await.unwrap();

        let loaded: Option<Vec<Sample>> = load_json(&store, "items").await.unwrap();
        assert_eq!(loaded, Some(items));
    }

    #[tokio::test]
    async fn test_corrupt_value_is_decode_error() {
        let store = MemoryStore::new();
        store.set("items", "{not json".to_string()).await.unwrap();

        let result: Result<Option<Vec<Sample>>, _> = load_json(&store, "items").await;
        assert!(matches!(result, Err(StorageError::Decode { ref key, .. }) if key == "items"));
    }
}
