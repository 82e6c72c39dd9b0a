use crate::config::GeoConfig;
use crate::core::aggregator::process_points;
use crate::core::remote::RemoteProcessor;
use crate::core::PointProcessor;
use crate::domain::model::{GeoPoint, ProcessedPoints};
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-process aggregation; a drop-in substitute for [`RemoteProcessor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProcessor;

impl LocalProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PointProcessor for LocalProcessor {
    async fn process(&self, points: &[GeoPoint]) -> Result<ProcessedPoints> {
        process_points(points)
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Runs `primary` and, when enabled, retries once on `fallback` after a failure.
///
/// Input errors are returned as-is: the fallback would reject the same input.
pub struct FallbackProcessor<P: PointProcessor, F: PointProcessor> {
    primary: P,
    fallback: F,
    fallback_enabled: bool,
}

impl<P: PointProcessor, F: PointProcessor> FallbackProcessor<P, F> {
    pub fn new(primary: P, fallback: F, fallback_enabled: bool) -> Self {
        Self {
            primary,
            fallback,
            fallback_enabled,
        }
    }
}

#[async_trait]
impl<P: PointProcessor, F: PointProcessor> PointProcessor for FallbackProcessor<P, F> {
    async fn process(&self, points: &[GeoPoint]) -> Result<ProcessedPoints> {
        match self.primary.process(points).await {
            Ok(result) => Ok(result),
            Err(e) if self.fallback_enabled && !e.is_input_error() => {
                tracing::error!("Error processing points with {}: {}", self.primary.name(), e);
                tracing::warn!("Falling back to {} implementation", self.fallback.name());
                self.fallback.process(points).await
            }
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}

/// Local processing without an `[api]` section, otherwise remote with optional local fallback.
pub fn build_processor(config: &GeoConfig) -> Result<Box<dyn PointProcessor>> {
    match &config.api {
        None => {
            tracing::debug!("No API configured, processing locally");
            Ok(Box::new(LocalProcessor::new()))
        }
        Some(api) => {
            tracing::debug!(
                "Using remote API at {} (fallback enabled: {})",
                api.base_url,
                config.fallback_enabled()
            );
            let remote = RemoteProcessor::new(api.clone())?;
            Ok(Box::new(FallbackProcessor::new(
                remote,
                LocalProcessor::new(),
                config.fallback_enabled(),
            )))
        }
    }
}

/// [`build_processor`] preceded by a health check when `check_health` is set.
///
/// An offline service is skipped entirely when fallback is enabled; otherwise
/// the request is still attempted and fails on its own terms.
pub async fn build_checked_processor(config: &GeoConfig) -> Result<Box<dyn PointProcessor>> {
    if let Some(api) = config.api.as_ref().filter(|_| config.check_health()) {
        let remote = RemoteProcessor::new(api.clone())?;
        if remote.is_healthy().await {
            tracing::info!("🟢 API Online: {}", api.base_url);
        } else {
            tracing::warn!("🔴 API Offline: {}", api.base_url);
            if config.fallback_enabled() {
                tracing::warn!("Falling back to local implementation");
                return Ok(Box::new(LocalProcessor::new()));
            }
        }
    }

    build_processor(config)
}
