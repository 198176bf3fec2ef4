//! Cliente HTTP de Mapbox
//!
//! Implementa el proveedor de mapas con Geocoding v5 y Directions v5
//! (perfil `driving`, geometría GeoJSON completa).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::dto::mapbox_dto::{MapboxDirectionsResponse, MapboxGeocodingResponse};

use super::mapping_provider::{Coordinate, DirectionsRoute, MappingProvider, ProviderError};

pub struct MapboxClient {
    base_url: String,
    client: Client,
}

impl MapboxClient {
    /// Crear el cliente; sin `timeout` una petición puede esperar indefinidamente
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = Client::builder().user_agent("GigDriverOptimizer/1.0");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    fn geocoding_url(&self, address: &str, token: &str) -> String {
        format!(
            "{}/geocoding/v5/mapbox.places/{}.json?limit=1&access_token={}",
            self.base_url,
            urlencoding::encode(address),
            token
        )
    }

    fn directions_url(&self, waypoints: &[Coordinate], token: &str) -> String {
        let coords = waypoints
            .iter()
            .map(|c| format!("{},{}", c.longitude, c.latitude))
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/directions/v5/mapbox/driving/{}?geometries=geojson&overview=full&access_token={}",
            self.base_url, coords, token
        )
    }

    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        log::debug!("📡 Mapbox response status: {}", status);

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl MappingProvider for MapboxClient {
    async fn geocode(&self, address: &str, token: &str) -> Result<Option<Coordinate>, ProviderError> {
        log::info!("🗺️ Geocoding address: {}", address);

        // 422: consulta demasiado larga (más de 256 caracteres o 20 palabras)
        let body = match self.get_text(&self.geocoding_url(address, token)).await {
            Err(ProviderError::Status { status: 422, body }) => {
                log::warn!("⚠️ Mapbox rejected geocoding query for {}: {}", address, body);
                return Ok(None);
            }
            other => other?,
        };
        let parsed: MapboxGeocodingResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("geocoding response: {}", e)))?;

        let coordinate = parsed
            .features
            .first()
            .and_then(|feature| feature.center.as_deref())
            .and_then(|center| match center {
                [lng, lat, ..] => Some(Coordinate::new(*lng, *lat)),
                _ => None,
            });

        match coordinate {
            Some(c) => log::info!("✅ Geocoding successful: {} -> ({}, {})", address, c.latitude, c.longitude),
            None => log::warn!("⚠️ No coordinates found for address: {}", address),
        }
        Ok(coordinate)
    }

    async fn directions(
        &self,
        waypoints: &[Coordinate],
        token: &str,
    ) -> Result<Vec<DirectionsRoute>, ProviderError> {
        log::info!("🚗 Requesting driving route through {} waypoints", waypoints.len());

        let body = self.get_text(&self.directions_url(waypoints, token)).await?;
        let parsed: MapboxDirectionsResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("directions response: {}", e)))?;

        if parsed.routes.is_empty() {
            log::warn!(
                "⚠️ Directions returned no routes (code: {:?}, message: {:?})",
                parsed.code,
                parsed.message
            );
        }

        Ok(parsed
            .routes
            .into_iter()
            .map(|route| DirectionsRoute {
                distance_meters: route.distance,
                duration_seconds: route.duration,
                geometry: route.geometry.coordinates,
            })
            .collect())
    }
}
