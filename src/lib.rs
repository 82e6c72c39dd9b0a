pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::InputSource, CliConfig};

pub use config::{ApiConfig, GeoConfig, OutputFormat};
pub use crate::core::aggregator::process_points;
pub use crate::core::parser::{parse_non_empty, parse_points, CoordinateFormat};
pub use crate::core::processor::{
    build_checked_processor, build_processor, FallbackProcessor, LocalProcessor,
};
pub use crate::core::remote::RemoteProcessor;
pub use domain::model::{BoundingBox, GeoPoint, GeoPointsRequest, HealthStatus, ProcessedPoints};
pub use domain::ports::PointProcessor;
pub use domain::samples::SampleSet;
pub use utils::error::{GeoError, Result};
