//! Gig Driver Optimizer
//!
//! Registro de pedidos, gastos y turnos para conductores de reparto, métricas
//! de rentabilidad y cálculo de ruta de conducción sobre los pedidos
//! aceptados mediante Mapbox. Todo el estado vive en un almacén clave-valor
//! local; no hay multiusuario ni autenticación.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use config::{EnvironmentConfig, StorageBackend};
use state::AppState;
use storage::{FileStore, KeyValueStore, MemoryStore, RedisStore, StorageError};

/// Router completo con CORS y trazas
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors_layer(&state.config.cors_origins);

    routes::create_api_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Abrir el backend de persistencia configurado
pub async fn open_storage(config: &EnvironmentConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::File => Arc::new(FileStore::open(&config.data_dir).await?),
        StorageBackend::Redis => Arc::new(RedisStore::connect(&config.redis_url).await?),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}
