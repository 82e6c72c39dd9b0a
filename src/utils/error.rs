use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Could not parse coordinates: {line}")]
    ParseError { line: String },

    #[error("Invalid coordinates: {line} (lat={lat}, lng={lng})")]
    RangeError { line: String, lat: f64, lng: f64 },

    #[error("{message}")]
    EmptyInput { message: String },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("Remote service error ({status}): {message}")]
    RemoteError { status: u16, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Remote,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GeoError {
    pub fn empty_points() -> Self {
        GeoError::EmptyInput {
            message: "No points provided".to_string(),
        }
    }

    pub fn no_valid_coordinates() -> Self {
        GeoError::EmptyInput {
            message: "no valid coordinates provided".to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GeoError::ParseError { .. }
            | GeoError::RangeError { .. }
            | GeoError::EmptyInput { .. }
            | GeoError::ValidationError { .. } => ErrorCategory::Input,
            GeoError::RemoteError { .. } | GeoError::ApiError(_) => ErrorCategory::Remote,
            GeoError::ConfigError { .. }
            | GeoError::ConfigValidationError { .. }
            | GeoError::InvalidConfigValueError { .. }
            | GeoError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GeoError::IoError(_) | GeoError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Input errors are rejected identically by every processor, so they are never failed over.
    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GeoError::ParseError { .. } => {
                "Enter one 'lat, lng' pair per line, e.g. '40.7128, -74.0060' or '40.7128°N, 74.0060°W'"
                    .to_string()
            }
            GeoError::RangeError { .. } => {
                "Latitude must be within [-90, 90] and longitude within [-180, 180]".to_string()
            }
            GeoError::EmptyInput { .. } => {
                "Provide at least one coordinate pair, or try --sample us-cities".to_string()
            }
            GeoError::ValidationError { .. } => {
                "Check that every point has numeric lat/lng values in range".to_string()
            }
            GeoError::RemoteError { .. } | GeoError::ApiError(_) => {
                "Check that the geo-processing service is reachable, or enable --fallback".to_string()
            }
            GeoError::ConfigError { .. }
            | GeoError::ConfigValidationError { .. }
            | GeoError::InvalidConfigValueError { .. }
            | GeoError::MissingConfigError { .. } => {
                "Review the configuration file and command line arguments".to_string()
            }
            GeoError::IoError(_) => "Check that the input file exists and is readable".to_string(),
            GeoError::SerializationError(_) => {
                "The data could not be (de)serialized as JSON".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GeoError::ParseError { line } => format!("Could not parse coordinates: {}", line),
            GeoError::RangeError { line, .. } => format!("Coordinates out of range: {}", line),
            GeoError::EmptyInput { .. } => "Please enter at least one valid coordinate pair".to_string(),
            GeoError::RemoteError { message, .. } => {
                format!("The geo-processing service failed: {}", message)
            }
            GeoError::ApiError(_) => "Could not reach the geo-processing service".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeoError::ParseError {
            line: "not a coordinate".to_string(),
        };
        assert_eq!(err.to_string(), "Could not parse coordinates: not a coordinate");

        let err = GeoError::RangeError {
            line: "95.0°N, 10.0°E".to_string(),
            lat: 95.0,
            lng: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid coordinates: 95.0°N, 10.0°E (lat=95, lng=10)"
        );

        assert_eq!(GeoError::empty_points().to_string(), "No points provided");
    }

    #[test]
    fn test_error_classification() {
        assert_eq!(GeoError::empty_points().category(), ErrorCategory::Input);
        assert!(GeoError::empty_points().is_input_error());

        let remote = GeoError::RemoteError {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(remote.category(), ErrorCategory::Remote);
        assert_eq!(remote.severity(), ErrorSeverity::Medium);
        assert!(!remote.is_input_error());

        let config = GeoError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::High);
    }
}
