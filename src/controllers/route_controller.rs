//! Controlador del optimizador de rutas
//!
//! Copia pedidos y ajustes bajo el mutex y lo suelta antes de llamar al
//! proveedor, así las peticiones de red no bloquean el resto de acciones.
//! Dos cálculos simultáneos no se excluyen: gana el último en terminar.

use crate::dto::ApiResponse;
use crate::services::{RouteOptimizer, RouteSummary};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub struct RouteController<'a> {
    state: &'a AppState,
}

impl<'a> RouteController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn optimize(&self) -> AppResult<ApiResponse<RouteSummary>> {
        *self.state.last_route.write().await = None;

        let (orders, settings) = {
            let ledger = self.state.ledger.lock().await;
            (ledger.orders.all().to_vec(), ledger.settings.get().clone())
        };

        let optimizer = RouteOptimizer::new(self.state.provider.as_ref(), self.state.config.geocoding_mode);
        let summary = optimizer.optimize(&orders, &settings).await?;

        *self.state.last_route.write().await = Some(summary.clone());

        let message = format!(
            "Route distance: {:.2} miles, estimated time: {:.1} minutes",
            summary.distance_miles, summary.duration_minutes
        );
        Ok(ApiResponse::success_with_message(summary, message))
    }

    /// Última ruta de la sesión
    pub async fn latest(&self) -> AppResult<ApiResponse<RouteSummary>> {
        self.state
            .last_route
            .read()
            .await
            .clone()
            .map(ApiResponse::success)
            .ok_or_else(|| AppError::NotFound("No route has been calculated".to_string()))
    }
}
