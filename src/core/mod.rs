pub mod aggregator;
pub mod parser;
pub mod processor;
pub mod remote;

pub use crate::domain::model::{BoundingBox, GeoPoint, GeoPointsRequest, ProcessedPoints};
pub use crate::domain::ports::{ApiSettings, PointProcessor};
pub use crate::utils::error::Result;
