//! Backend de ficheros
//!
//! Un fichero `<clave>.json` por clave dentro del directorio de datos. Cada
//! escritura va a un fichero temporal que luego se renombra, de modo que un
//! lector nunca ve un JSON a medio escribir.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use super::{KeyValueStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Abrir (y crear si hace falta) el directorio de datos
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|source| StorageError::Io {
                key: root.display().to_string(),
                source,
            })?;

        info!("📁 Almacén de ficheros en {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => {
                debug!("📥 Leída clave {} ({} bytes)", key, raw.len());
                Ok(Some(raw))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let target = self.path_for(key);
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        tokio::fs::write(&tmp, value.as_bytes()).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &target).await.map_err(io_err)?;

        debug!("💾 Guardada clave {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
