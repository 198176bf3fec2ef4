use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, error, info};

use super::{KeyValueStore, StorageError};

/// Cliente Redis con connection manager; las claves no expiran
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Crear nuevo cliente Redis y verificar la conexión
    pub async fn connect(redis_url: &str) -> Result<Self, StorageError> {
        info!("🔗 Conectando a Redis: {}", mask_url(redis_url));

        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");
        Ok(Self { manager })
    }

    /// Generar clave con prefijo
    fn make_key(key: &str) -> String {
        format!("gig_driver:{}", key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(Self::make_key(key)).await?;
        debug!("📥 Redis GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(Self::make_key(key), value)
            .await
            .map_err(|e| {
                error!("❌ Error guardando clave {} en Redis: {}", key, e);
                StorageError::from(e)
            })?;
        debug!("💾 Redis SET {}", key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

/// Enmascarar credenciales de la URL en los logs
fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
