use crate::domain::model::{BoundingBox, GeoPoint, ProcessedPoints};
use crate::utils::error::{GeoError, Result};

/// Computes the arithmetic centroid and the min/max bounding box of `points`.
///
/// Flat lat/lng arithmetic; longitudes straddling the antimeridian produce an
/// unwrapped box.
pub fn process_points(points: &[GeoPoint]) -> Result<ProcessedPoints> {
    let first = points.first().ok_or_else(GeoError::empty_points)?;

    for (index, point) in points.iter().enumerate() {
        GeoPoint::from_source(point.lat, point.lng, &format!("point {}", index))?;
    }

    let mut bounds = BoundingBox::from_point(first);
    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;

    for point in points {
        bounds.extend(point);
        lat_sum += point.lat;
        lng_sum += point.lng;
    }

    let count = points.len() as f64;
    Ok(ProcessedPoints {
        centroid: GeoPoint {
            lat: lat_sum / count,
            lng: lng_sum / count,
        },
        bounds,
    })
}
