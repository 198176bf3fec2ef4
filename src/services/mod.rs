//! Services module
//!
//! Este módulo contiene la lógica de negocio: métricas derivadas, resumen de
//! ganancias y el optimizador de rutas con su proveedor de mapas.

pub mod mapbox_client;
pub mod mapping_provider;
pub mod metrics_service;
pub mod route_optimizer;
pub mod summary_service;

pub use mapbox_client::MapboxClient;
pub use mapping_provider::{Coordinate, DirectionsRoute, MappingProvider, ProviderError};
pub use route_optimizer::{RouteError, RouteOptimizer, RouteSummary};
