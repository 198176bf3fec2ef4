//! Optimizador de rutas
//!
//! Convierte los pedidos aceptados en una única ruta de conducción:
//! geocodifica recogida y entrega de cada pedido, encadena los puntos en el
//! orden de la lista ([recogida₁, entrega₁, recogida₂, …]) y pide al
//! proveedor la ruta más rápida a través de ellos. No reordena las paradas.
//!
//! Cualquier fallo termina la invocación: no hay resultado parcial ni
//! reintentos.

use futures::future::join_all;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::GeocodingMode;
use crate::models::{Order, Settings};

use super::mapping_provider::{Coordinate, MappingProvider, ProviderError};

pub const METERS_PER_MILE: f64 = 1609.34;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Please provide a Mapbox token in Settings")]
    Configuration,

    #[error("No accepted orders to optimize")]
    EmptySelection,

    #[error("Geocoding failed for {0}")]
    Geocoding(String),

    #[error("Geocoding failed for {}", .0.join(", "))]
    GeocodingMany(Vec<String>),

    #[error("No route found")]
    NoRouteFound,

    #[error("Mapping provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Caja envolvente del trazado, para encuadrar el mapa
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    pub fn around(points: &[[f64; 2]]) -> Option<Self> {
        let first = *points.first()?;
        Some(points.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: [acc.min[0].min(p[0]), acc.min[1].min(p[1])],
                max: [acc.max[0].max(p[0]), acc.max[1].max(p[1])],
            },
        ))
    }
}

/// Resultado transitorio de una optimización
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub order_count: usize,
    pub waypoints: Vec<Coordinate>,
    pub distance_miles: f64,
    pub duration_minutes: f64,
    pub geometry: Vec<[f64; 2]>,
    pub bounds: Option<BoundingBox>,
}

pub struct RouteOptimizer<'a> {
    provider: &'a dyn MappingProvider,
    mode: GeocodingMode,
}

impl<'a> RouteOptimizer<'a> {
    pub fn new(provider: &'a dyn MappingProvider, mode: GeocodingMode) -> Self {
        Self { provider, mode }
    }

    /// Calcular la ruta para los pedidos aceptados de `orders`
    pub async fn optimize(&self, orders: &[Order], settings: &Settings) -> Result<RouteSummary, RouteError> {
        let token = settings.access_token().ok_or(RouteError::Configuration)?;

        let accepted: Vec<&Order> = orders.iter().filter(|o| o.accepted).collect();
        if accepted.is_empty() {
            return Err(RouteError::EmptySelection);
        }

        let addresses: Vec<&str> = accepted
            .iter()
            .flat_map(|o| [o.pickup.as_str(), o.dropoff.as_str()])
            .collect();

        info!(
            "🚀 Optimizando ruta para {} pedidos ({} direcciones, modo {:?})",
            accepted.len(),
            addresses.len(),
            self.mode
        );

        let waypoints = match self.mode {
            GeocodingMode::Sequential => self.geocode_sequential(&addresses, token).await?,
            GeocodingMode::Parallel => self.geocode_parallel(&addresses, token).await?,
        };

        let routes = self.provider.directions(&waypoints, token).await?;
        let route = routes.into_iter().next().ok_or(RouteError::NoRouteFound)?;

        let summary = RouteSummary {
            order_count: accepted.len(),
            waypoints,
            distance_miles: route.distance_meters / METERS_PER_MILE,
            duration_minutes: route.duration_seconds / 60.0,
            bounds: BoundingBox::around(&route.geometry),
            geometry: route.geometry,
        };

        info!(
            "✅ Ruta calculada: {:.2} millas, {:.1} minutos",
            summary.distance_miles, summary.duration_minutes
        );
        Ok(summary)
    }

    /// Una dirección tras otra; aborta en la primera sin resultado
    async fn geocode_sequential(&self, addresses: &[&str], token: &str) -> Result<Vec<Coordinate>, RouteError> {
        let mut coords = Vec::with_capacity(addresses.len());
        for address in addresses {
            match self.provider.geocode(address, token).await? {
                Some(coordinate) => coords.push(coordinate),
                None => {
                    warn!("❌ Sin coincidencias para la dirección: {}", address);
                    return Err(RouteError::Geocoding(address.to_string()));
                }
            }
        }
        Ok(coords)
    }

    /// Todas las direcciones a la vez; reporta juntas las que fallan
    async fn geocode_parallel(&self, addresses: &[&str], token: &str) -> Result<Vec<Coordinate>, RouteError> {
        let results = join_all(addresses.iter().map(|a| self.provider.geocode(a, token))).await;

        let mut coords = Vec::with_capacity(addresses.len());
        let mut missing = Vec::new();
        for (address, result) in addresses.iter().zip(results) {
            match result? {
                Some(coordinate) => coords.push(coordinate),
                None => missing.push(address.to_string()),
            }
        }

        match missing.len() {
            0 => Ok(coords),
            1 => Err(RouteError::Geocoding(missing.remove(0))),
            _ => {
                warn!("❌ {} direcciones sin coincidencias", missing.len());
                Err(RouteError::GeocodingMany(missing))
            }
        }
    }
}
