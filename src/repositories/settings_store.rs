use std::sync::Arc;

use tracing::info;

use crate::models::Settings;
use crate::storage::{load_json, save_json, KeyValueStore, StorageError, SETTINGS_KEY};

/// Registro único de ajustes, sobrescrito completo en cada guardado
pub struct SettingsStore {
    current: Settings,
    storage: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let current = load_json(storage.as_ref(), SETTINGS_KEY).await?.unwrap_or_default();
        Ok(Self { current, storage })
    }

    pub fn get(&self) -> &Settings {
        &self.current
    }

    pub async fn save(&mut self, settings: Settings) -> Result<&Settings, StorageError> {
        save_json(self.storage.as_ref(), SETTINGS_KEY, &settings).await?;
        info!(
            "⚙️ Ajustes guardados (token configurado: {}, umbral: {:?})",
            settings.access_token().is_some(),
            settings.alert_threshold
        );
        self.current = settings;
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_missing_settings_load_as_default() {
        let store = SettingsStore::load(Arc::new(MemoryStore::new())).await.unwrap();
        assert_eq!(store.get(), &Settings::default());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = SettingsStore::load(storage.clone()).await.unwrap();
        store
            .save(Settings {
                map_token: "pk.first".to_string(),
                alert_threshold: Some(2.5),
            })
            .await
            .unwrap();
        store
            .save(Settings {
                map_token: "pk.second".to_string(),
                alert_threshold: None,
            })
            .await
            .unwrap();

        let reloaded = SettingsStore::load(storage).await.unwrap();
        assert_eq!(reloaded.get().map_token, "pk.second");
        assert_eq!(reloaded.get().alert_threshold, None);
    }
}
