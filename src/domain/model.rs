use crate::utils::error::{GeoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// A decimal-degree coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting NaN/infinite values and out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let point = Self { lat, lng };
        Self::from_source(lat, lng, &point.to_string())
    }

    /// Same checks as [`GeoPoint::new`], with `source` as the offending line in the error.
    pub fn from_source(lat: f64, lng: f64, source: &str) -> Result<Self> {
        if !is_valid_lat(lat) || !is_valid_lng(lng) {
            return Err(GeoError::RangeError {
                line: source.to_string(),
                lat,
                lng,
            });
        }
        Ok(Self { lat, lng })
    }

    pub fn is_valid(&self) -> bool {
        is_valid_lat(self.lat) && is_valid_lng(self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

pub fn is_valid_lat(lat: f64) -> bool {
    lat.is_finite() && (MIN_LAT..=MAX_LAT).contains(&lat)
}

pub fn is_valid_lng(lng: f64) -> bool {
    lng.is_finite() && (MIN_LNG..=MAX_LNG).contains(&lng)
}

/// Axis-aligned box in lat/lng space. Boxes spanning the antimeridian are not wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Degenerate box covering a single point.
    pub fn from_point(point: &GeoPoint) -> Self {
        Self {
            north: point.lat,
            south: point.lat,
            east: point.lng,
            west: point.lng,
        }
    }

    pub fn extend(&mut self, point: &GeoPoint) {
        self.north = self.north.max(point.lat);
        self.south = self.south.min(point.lat);
        self.east = self.east.max(point.lng);
        self.west = self.west.min(point.lng);
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessedPoints {
    pub centroid: GeoPoint,
    pub bounds: BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPointsRequest {
    pub points: Vec<GeoPoint>,
}

impl GeoPointsRequest {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }
}

/// Error body returned by the remote service on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
