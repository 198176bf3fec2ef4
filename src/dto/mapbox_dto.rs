//! DTOs para las APIs de Mapbox
//!
//! Estructuras de respuesta de Geocoding v5 (`mapbox.places`) y Directions v5.
//! Sólo se deserializan los campos que usa el optimizador.

use serde::Deserialize;

/// Response de Geocoding v5
#[derive(Debug, Deserialize)]
pub struct MapboxGeocodingResponse {
    #[serde(default)]
    pub features: Vec<MapboxFeature>,
}

/// Resultado de geocodificación; `center` es [longitude, latitude]
#[derive(Debug, Deserialize)]
pub struct MapboxFeature {
    pub center: Option<Vec<f64>>,
    pub place_name: Option<String>,
}

/// Response de Directions v5
#[derive(Debug, Deserialize)]
pub struct MapboxDirectionsResponse {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<MapboxRoute>,
}

/// Ruta candidata; distancia en metros y duración en segundos
#[derive(Debug, Deserialize)]
pub struct MapboxRoute {
    pub distance: f64,
    pub duration: f64,
    pub geometry: MapboxGeometry,
}

/// Geometría GeoJSON LineString (`geometries=geojson`)
#[derive(Debug, Deserialize)]
pub struct MapboxGeometry {
    #[serde(rename = "type")]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}
