//! Helpers compartidos por los tests de integración

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use gig_driver_optimizer::build_router;
use gig_driver_optimizer::config::{EnvironmentConfig, GeocodingMode, StorageBackend};
use gig_driver_optimizer::models::Order;
use gig_driver_optimizer::repositories::Ledger;
use gig_driver_optimizer::services::{Coordinate, DirectionsRoute, MappingProvider, ProviderError};
use gig_driver_optimizer::state::AppState;
use gig_driver_optimizer::storage::MemoryStore;

/// Llamada registrada por el proveedor falso
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    Geocode(String),
    Directions(Vec<Coordinate>),
}

/// Proveedor de mapas en memoria que registra cada llamada
#[derive(Default)]
pub struct FakeProvider {
    places: HashMap<String, Coordinate>,
    routes: Mutex<Vec<DirectionsRoute>>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, address: &str, longitude: f64, latitude: f64) -> Self {
        self.places
            .insert(address.to_string(), Coordinate::new(longitude, latitude));
        self
    }

    pub fn with_route(self, route: DirectionsRoute) -> Self {
        self.routes.lock().unwrap().push(route);
        self
    }

    pub fn clear_routes(&self) {
        self.routes.lock().unwrap().clear();
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn directions_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ProviderCall::Directions(_)))
            .count()
    }
}

#[async_trait]
impl MappingProvider for FakeProvider {
    async fn geocode(&self, address: &str, _token: &str) -> Result<Option<Coordinate>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(ProviderCall::Geocode(address.to_string()));
        tokio::task::yield_now().await;
        Ok(self.places.get(address).copied())
    }

    async fn directions(
        &self,
        waypoints: &[Coordinate],
        _token: &str,
    ) -> Result<Vec<DirectionsRoute>, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push(ProviderCall::Directions(waypoints.to_vec()));
        Ok(self.routes.lock().unwrap().clone())
    }
}

/// Ruta de 2 millas y 9 minutos
pub fn sample_route() -> DirectionsRoute {
    DirectionsRoute {
        distance_meters: 3218.68,
        duration_seconds: 540.0,
        geometry: vec![[-73.99, 40.73], [-73.985, 40.735], [-73.98, 40.74]],
    }
}

pub fn order(pickup: &str, dropoff: &str, accepted: bool) -> Order {
    Order {
        id: 0,
        platform: "DoorDash".to_string(),
        pickup: pickup.to_string(),
        dropoff: dropoff.to_string(),
        pay: 10.0,
        miles: 2.0,
        minutes: 20.0,
        notes: String::new(),
        accepted,
        date: None,
    }
}

pub fn test_config(mode: GeocodingMode) -> EnvironmentConfig {
    EnvironmentConfig {
        storage_backend: StorageBackend::Memory,
        geocoding_mode: mode,
        ..EnvironmentConfig::default()
    }
}

/// App de test sobre almacén en memoria y proveedor falso
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<MemoryStore>,
    pub provider: Arc<FakeProvider>,
}

impl TestApp {
    pub async fn new(provider: FakeProvider) -> Self {
        Self::with_storage(provider, Arc::new(MemoryStore::new())).await
    }

    pub async fn with_storage(provider: FakeProvider, storage: Arc<MemoryStore>) -> Self {
        let provider = Arc::new(provider);
        let ledger = Ledger::load(storage.clone()).await.unwrap();
        let state = AppState::new(test_config(GeocodingMode::Sequential), ledger, provider.clone());

        Self {
            router: build_router(state),
            storage,
            provider,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}
