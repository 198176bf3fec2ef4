//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto; sólo los valores inválidos
//! abortan el arranque.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errores de configuración
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Backend de persistencia seleccionado
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    File,
    Redis,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected file, redis or memory, got {}", other)),
        }
    }
}

/// Estrategia de geocodificación del optimizador de rutas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GeocodingMode {
    /// Una petición tras otra, abortando en el primer fallo
    #[default]
    Sequential,
    /// Todas las peticiones a la vez, reportando todos los fallos juntos
    Parallel,
}

impl FromStr for GeocodingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            other => Err(format!("expected sequential or parallel, got {}", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub storage_backend: StorageBackend,
    pub data_dir: String,
    pub redis_url: String,
    pub mapbox_api_url: String,
    pub mapbox_timeout: Option<Duration>,
    pub geocoding_mode: GeocodingMode,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            storage_backend: StorageBackend::File,
            data_dir: "./data".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
            mapbox_api_url: "https://api.mapbox.com".to_string(),
            mapbox_timeout: None,
            geocoding_mode: GeocodingMode::Sequential,
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Construir la configuración a partir de una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mapbox_timeout = match read("MAPBOX_TIMEOUT_SECS") {
            Some(raw) => match parse_var::<u64>("MAPBOX_TIMEOUT_SECS", &raw)? {
                0 => {
                    return Err(ConfigError::InvalidValue {
                        name: "MAPBOX_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be at least 1 second; leave unset for no timeout".to_string(),
                    })
                }
                secs => Some(Duration::from_secs(secs)),
            },
            None => None,
        };

        Ok(Self {
            environment: read("ENVIRONMENT").unwrap_or(defaults.environment),
            port: match read("PORT") {
                Some(raw) => parse_var("PORT", &raw)?,
                None => defaults.port,
            },
            host: read("HOST").unwrap_or(defaults.host),
            storage_backend: match read("STORAGE_BACKEND") {
                Some(raw) => parse_var("STORAGE_BACKEND", &raw)?,
                None => defaults.storage_backend,
            },
            data_dir: read("DATA_DIR").unwrap_or(defaults.data_dir),
            redis_url: read("REDIS_URL").unwrap_or(defaults.redis_url),
            mapbox_api_url: read("MAPBOX_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.mapbox_api_url),
            mapbox_timeout,
            geocoding_mode: match read("GEOCODING_MODE") {
                Some(raw) => parse_var("GEOCODING_MODE", &raw)?,
                None => defaults.geocoding_mode,
            },
            cors_origins: read("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: match read("LOG_LEVEL") {
                Some(raw) => parse_var("LOG_LEVEL", &raw)?,
                None => defaults.log_level,
            },
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
