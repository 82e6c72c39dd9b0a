use crate::domain::model::GeoPointsRequest;
use crate::utils::error::{GeoError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Request gate: a non-empty point list with finite, in-range coordinates.
pub fn validate_request(request: &GeoPointsRequest) -> Result<()> {
    if request.points.is_empty() {
        return Err(GeoError::ValidationError {
            message: "Invalid request: points field must be a non-empty array".to_string(),
        });
    }

    if let Some(point) = request.points.iter().find(|p| !p.is_valid()) {
        return Err(GeoError::ValidationError {
            message: format!("Invalid coordinates: lat={}, lng={}", point.lat, point.lng),
        });
    }

    Ok(())
}

impl Validate for GeoPointsRequest {
    fn validate(&self) -> Result<()> {
        validate_request(self)
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GeoError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_endpoint_path(field_name: &str, path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must start with '/'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GeoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GeoPoint;

    #[test]
    fn test_validate_request() {
        let request = GeoPointsRequest::new(vec![GeoPoint { lat: 40.7128, lng: -74.006 }]);
        assert!(request.validate().is_ok());

        let empty = GeoPointsRequest::new(vec![]);
        match validate_request(&empty) {
            Err(GeoError::ValidationError { message }) => {
                assert_eq!(message, "Invalid request: points field must be a non-empty array")
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let out_of_range = GeoPointsRequest::new(vec![
            GeoPoint { lat: 10.0, lng: 10.0 },
            GeoPoint { lat: 91.0, lng: 10.0 },
        ]);
        match validate_request(&out_of_range) {
            Err(GeoError::ValidationError { message }) => {
                assert_eq!(message, "Invalid coordinates: lat=91, lng=10")
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let nan = GeoPointsRequest::new(vec![GeoPoint { lat: 0.0, lng: f64::NAN }]);
        assert!(validate_request(&nan).is_err());
    }

    #[test]
    fn test_validate_request_from_json() {
        let request: GeoPointsRequest = serde_json::from_value(serde_json::json!({
            "points": [{"lat": 0.0, "lng": -181.0}]
        }))
        .unwrap();
        assert!(request.validate().is_err());

        let missing_lng = serde_json::from_value::<GeoPointsRequest>(serde_json::json!({
            "points": [{"lat": 0.0}]
        }));
        assert!(missing_lng.is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:3000").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("api.timeout_seconds", 10, 1, 300).is_ok());
        assert!(validate_range("api.timeout_seconds", 0, 1, 300).is_err());
        assert!(validate_range("lat", 45.0, -90.0, 90.0).is_ok());
        assert!(validate_range("lat", 95.0, -90.0, 90.0).is_err());
    }

    #[test]
    fn test_validate_one_of_and_path() {
        assert!(validate_one_of("output.format", "json", &["json", "text"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["json", "text"]).is_err());
        assert!(validate_endpoint_path("api.health_path", "/api/health").is_ok());
        assert!(validate_endpoint_path("api.health_path", "api/health").is_err());
    }
}
