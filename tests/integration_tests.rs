use anyhow::Result;
use geo_processor::utils::validation::Validate;
use geo_processor::{
    build_processor, parse_non_empty, GeoConfig, GeoError, GeoPoint, LocalProcessor,
    PointProcessor, RemoteProcessor, SampleSet,
};
use httpmock::prelude::*;
use tempfile::TempDir;

const TWO_CITIES: &str = "40.7128, -74.0060\n34.0522, -118.2437";

fn config_for(server: &MockServer, fallback_enabled: bool) -> Result<GeoConfig> {
    let content = format!(
        r#"
[api]
base_url = "{}"
timeout_seconds = 2

[processing]
fallback_enabled = {}
"#,
        server.base_url(),
        fallback_enabled
    );
    Ok(GeoConfig::from_toml_str(&content)?)
}

#[tokio::test]
async fn test_end_to_end_local_processing() -> Result<()> {
    let points = parse_non_empty(TWO_CITIES)?;
    let processor = build_processor(&GeoConfig::default())?;

    let result = processor.process(&points).await?;

    assert_eq!(processor.name(), "local");
    assert!((result.centroid.lat - 37.3825).abs() < 1e-4);
    assert!((result.centroid.lng - -96.1249).abs() < 1e-4);
    assert_eq!(result.bounds.north, 40.7128);
    assert_eq!(result.bounds.south, 34.0522);
    assert_eq!(result.bounds.east, -74.0060);
    assert_eq!(result.bounds.west, -118.2437);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_remote_service() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/geo/process-points");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "centroid": {"lat": 37.3825, "lng": -96.12485},
                "bounds": {"north": 40.7128, "south": 34.0522, "east": -74.006, "west": -118.2437}
            }));
    });

    let config = config_for(&server, false)?;
    config.validate()?;
    let processor = build_processor(&config)?;
    let points = parse_non_empty(TWO_CITIES)?;

    let remote = processor.process(&points).await?;
    let local = LocalProcessor::new().process(&points).await?;

    api_mock.assert();
    assert!((remote.centroid.lat - local.centroid.lat).abs() < 1e-9);
    assert!((remote.centroid.lng - local.centroid.lng).abs() < 1e-9);
    assert_eq!(remote.bounds, local.bounds);
    Ok(())
}

#[tokio::test]
async fn test_remote_failure_falls_back_to_local() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/geo/process-points");
        then.status(502)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Error from geo-processor service"}));
    });

    let processor = build_processor(&config_for(&server, true)?)?;
    let points = parse_non_empty(SampleSet::EuropeanCapitals.text())?;

    let result = processor.process(&points).await?;

    api_mock.assert();
    assert_eq!(result.bounds.north, 52.52);
    assert_eq!(result.bounds.south, 40.4168);
    assert_eq!(result.bounds.east, 13.405);
    assert_eq!(result.bounds.west, -3.7038);
    Ok(())
}

#[tokio::test]
async fn test_remote_failure_without_fallback() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/geo/process-points");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Internal server error"}));
    });

    let processor = build_processor(&config_for(&server, false)?)?;
    let points = parse_non_empty(TWO_CITIES)?;

    let err = processor.process(&points).await.unwrap_err();

    api_mock.assert();
    match err {
        GeoError::RemoteError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_falls_back() -> Result<()> {
    // 沒有服務在此埠監聽
    let config = GeoConfig::from_toml_str(
        r#"
[api]
base_url = "http://127.0.0.1:9"
timeout_seconds = 1

[processing]
fallback_enabled = true
"#,
    )?;

    let processor = build_processor(&config)?;
    let point = GeoPoint::new(-33.8568, 151.2153)?;
    let result = processor.process(&[point]).await?;

    assert_eq!(result.centroid, point);
    Ok(())
}

#[tokio::test]
async fn test_health_check_against_mock_service() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(serde_json::json!({
            "status": "healthy",
            "timestamp": "2024-05-01T12:00:00Z",
            "service": "geo-processor-frontend"
        }));
    });

    let config = config_for(&server, false)?;
    let remote = RemoteProcessor::new(config.api.clone().unwrap())?;

    assert!(remote.is_healthy().await);
    Ok(())
}

#[tokio::test]
async fn test_config_file_drives_processing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("geo.toml");
    tokio::fs::write(
        &config_path,
        r#"
[processing]
fallback_enabled = false

[output]
format = "text"
pretty = false
"#,
    )
    .await?;

    let config = GeoConfig::from_file(&config_path)?;
    config.validate()?;

    let processor = build_processor(&config)?;
    let points = parse_non_empty(SampleSet::WorldLandmarks.text())?;
    let result = processor.process(&points).await?;

    assert_eq!(processor.name(), "local");
    assert_eq!(result.bounds.north, 40.4319);
    assert_eq!(result.bounds.south, -33.8568);
    assert_eq!(result.bounds.east, 151.2153);
    assert_eq!(result.bounds.west, -72.545);
    Ok(())
}

#[tokio::test]
async fn test_blank_input_is_reported_before_processing() -> Result<()> {
    let err = parse_non_empty("\n   \n").unwrap_err();

    assert!(matches!(err, GeoError::EmptyInput { .. }));
    assert_eq!(err.to_string(), "no valid coordinates provided");
    Ok(())
}
