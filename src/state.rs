//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::environment::EnvironmentConfig;
use crate::repositories::Ledger;
use crate::services::{MappingProvider, RouteSummary};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    /// Todas las mutaciones pasan por este mutex, una a una
    pub ledger: Arc<Mutex<Ledger>>,
    pub provider: Arc<dyn MappingProvider>,
    /// Última ruta calculada en esta sesión; se vacía al empezar cada cálculo
    pub last_route: Arc<RwLock<Option<RouteSummary>>>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, ledger: Ledger, provider: Arc<dyn MappingProvider>) -> Self {
        Self {
            config,
            ledger: Arc::new(Mutex::new(ledger)),
            provider,
            last_route: Arc::new(RwLock::new(None)),
        }
    }
}
