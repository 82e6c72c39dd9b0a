use crate::domain::model::{GeoPoint, ProcessedPoints};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that turns a point sequence into a centroid and bounding box.
///
/// Local and remote implementations return the same shape, so callers can
/// swap one for the other.
#[async_trait]
pub trait PointProcessor: Send + Sync {
    async fn process(&self, points: &[GeoPoint]) -> Result<ProcessedPoints>;

    fn name(&self) -> &str;
}

pub trait ApiSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn process_path(&self) -> &str;
    fn health_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> Vec<(String, String)>;
}
