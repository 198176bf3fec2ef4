//! Proveedor de mapas
//!
//! Abstracción de los dos servicios externos que consume el optimizador:
//! geocodificación de direcciones y cálculo de rutas de conducción.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Punto geográfico
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

/// Ruta candidata tal como la devuelve el proveedor (unidades nativas)
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRoute {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Pares [longitude, latitude] del trazado
    pub geometry: Vec<[f64; 2]>,
}

/// Fallos de transporte o de formato del proveedor
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Parse(String),
}

#[async_trait]
pub trait MappingProvider: Send + Sync {
    /// Mejor coincidencia para una dirección, `None` si no hay ninguna
    async fn geocode(&self, address: &str, token: &str) -> Result<Option<Coordinate>, ProviderError>;

    /// Rutas candidatas más rápidas a través de los waypoints, en ese orden
    async fn directions(
        &self,
        waypoints: &[Coordinate],
        token: &str,
    ) -> Result<Vec<DirectionsRoute>, ProviderError>;
}
