mod common;

use common::{order, sample_route, FakeProvider, ProviderCall};
use gig_driver_optimizer::config::GeocodingMode;
use gig_driver_optimizer::models::Settings;
use gig_driver_optimizer::services::{Coordinate, RouteError, RouteOptimizer};

fn settings_with_token() -> Settings {
    Settings {
        map_token: "pk.test".to_string(),
        alert_threshold: None,
    }
}

#[tokio::test]
async fn test_missing_token_fails_without_network_calls() {
    let provider = FakeProvider::new().with_place("X", 1.0, 2.0);
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Sequential);

    let result = optimizer
        .optimize(&[order("X", "X", true)], &Settings::default())
        .await;

    assert!(matches!(result, Err(RouteError::Configuration)));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_no_accepted_orders_fails_without_network_calls() {
    let provider = FakeProvider::new();
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Sequential);

    let orders = vec![order("X", "Y", false), order("Z", "W", false)];
    let result = optimizer.optimize(&orders, &settings_with_token()).await;

    assert!(matches!(result, Err(RouteError::EmptySelection)));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_waypoints_follow_list_order_of_accepted_orders() {
    let provider = FakeProvider::new()
        .with_place("P1", 1.0, 1.0)
        .with_place("D1", 2.0, 2.0)
        .with_place("P2", 3.0, 3.0)
        .with_place("D2", 4.0, 4.0)
        .with_route(sample_route());
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Sequential);

    let orders = vec![
        order("P1", "D1", true),
        order("SKIPPED", "SKIPPED", false),
        order("P2", "D2", true),
    ];
    let summary = optimizer.optimize(&orders, &settings_with_token()).await.unwrap();

    let expected = vec![
        Coordinate::new(1.0, 1.0),
        Coordinate::new(2.0, 2.0),
        Coordinate::new(3.0, 3.0),
        Coordinate::new(4.0, 4.0),
    ];
    assert_eq!(summary.waypoints, expected);
    assert_eq!(summary.order_count, 2);
    assert_eq!(
        provider.calls(),
        vec![
            ProviderCall::Geocode("P1".into()),
            ProviderCall::Geocode("D1".into()),
            ProviderCall::Geocode("P2".into()),
            ProviderCall::Geocode("D2".into()),
            ProviderCall::Directions(expected),
        ]
    );
}

#[tokio::test]
async fn test_converts_units_and_keeps_geometry() {
    let provider = FakeProvider::new()
        .with_place("X", -73.99, 40.73)
        .with_place("Y", -73.98, 40.74)
        .with_route(sample_route());
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Sequential);

    let summary = optimizer
        .optimize(&[order("X", "Y", true)], &settings_with_token())
        .await
        .unwrap();

    assert!((summary.distance_miles - 2.0).abs() < 1e-9);
    assert!((summary.duration_minutes - 9.0).abs() < 1e-9);
    assert_eq!(summary.geometry.len(), 3);
    let bounds = summary.bounds.unwrap();
    assert_eq!(bounds.min, [-73.99, 40.73]);
    assert_eq!(bounds.max, [-73.98, 40.74]);
}

#[tokio::test]
async fn test_unresolved_dropoff_aborts_before_directions() {
    let provider = FakeProvider::new()
        .with_place("X", 1.0, 2.0)
        .with_route(sample_route());
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Sequential);

    let result = optimizer
        .optimize(&[order("X", "Y", true)], &settings_with_token())
        .await;

    match result {
        Err(RouteError::Geocoding(address)) => assert_eq!(address, "Y"),
        other => panic!("expected geocoding error, got {:?}", other),
    }
    assert_eq!(provider.directions_calls(), 0);
}

#[tokio::test]
async fn test_sequential_mode_stops_at_first_unresolved_address() {
    let provider = FakeProvider::new()
        .with_place("D2", 4.0, 4.0)
        .with_route(sample_route());
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Sequential);

    let orders = vec![order("P1", "D1", true), order("P2", "D2", true)];
    let result = optimizer.optimize(&orders, &settings_with_token()).await;

    assert!(matches!(result, Err(RouteError::Geocoding(ref a)) if a == "P1"));
    assert_eq!(provider.calls(), vec![ProviderCall::Geocode("P1".into())]);
}

#[tokio::test]
async fn test_empty_route_list_is_no_route_found() {
    let provider = FakeProvider::new()
        .with_place("X", 1.0, 2.0)
        .with_place("Y", 3.0, 4.0);
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Sequential);

    let result = optimizer
        .optimize(&[order("X", "Y", true)], &settings_with_token())
        .await;

    assert!(matches!(result, Err(RouteError::NoRouteFound)));
    assert_eq!(provider.directions_calls(), 1);
}

#[tokio::test]
async fn test_parallel_mode_reports_every_unresolved_address() {
    let provider = FakeProvider::new()
        .with_place("P1", 1.0, 1.0)
        .with_place("D2", 4.0, 4.0)
        .with_route(sample_route());
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Parallel);

    let orders = vec![order("P1", "D1", true), order("P2", "D2", true)];
    let result = optimizer.optimize(&orders, &settings_with_token()).await;

    match result {
        Err(RouteError::GeocodingMany(addresses)) => assert_eq!(addresses, vec!["D1", "P2"]),
        other => panic!("expected aggregated geocoding error, got {:?}", other),
    }
    let geocodes = provider
        .calls()
        .iter()
        .filter(|c| matches!(c, ProviderCall::Geocode(_)))
        .count();
    assert_eq!(geocodes, 4);
    assert_eq!(provider.directions_calls(), 0);
}

#[tokio::test]
async fn test_parallel_mode_keeps_traversal_order() {
    let provider = FakeProvider::new()
        .with_place("P1", 1.0, 1.0)
        .with_place("D1", 2.0, 2.0)
        .with_place("P2", 3.0, 3.0)
        .with_place("D2", 4.0, 4.0)
        .with_route(sample_route());
    let optimizer = RouteOptimizer::new(&provider, GeocodingMode::Parallel);

    let orders = vec![order("P1", "D1", true), order("P2", "D2", true)];
    let summary = optimizer.optimize(&orders, &settings_with_token()).await.unwrap();

    let longitudes: Vec<f64> = summary.waypoints.iter().map(|c| c.longitude).collect();
    assert_eq!(longitudes, vec![1.0, 2.0, 3.0, 4.0]);
}
