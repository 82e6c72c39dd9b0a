use crate::core::{ApiSettings, PointProcessor};
use crate::domain::model::{ApiErrorBody, GeoPoint, GeoPointsRequest, HealthStatus, ProcessedPoints};
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::validate_request;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Delegates processing to an external geo-processing service over HTTP.
pub struct RemoteProcessor<C: ApiSettings> {
    config: C,
    client: Client,
}

impl<C: ApiSettings> RemoteProcessor<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url(self.config.health_path());
        tracing::debug!("Checking API health at: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::RemoteError {
                status: status.as_u16(),
                message: "Health check failed".to_string(),
            });
        }

        Ok(response.json::<HealthStatus>().await?)
    }

    /// Any failure, including an unexpected body, counts as unhealthy.
    pub async fn is_healthy(&self) -> bool {
        match self.health().await {
            Ok(health) => health.is_healthy(),
            Err(e) => {
                tracing::warn!("API health check failed: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl<C: ApiSettings> PointProcessor for RemoteProcessor<C> {
    async fn process(&self, points: &[GeoPoint]) -> Result<ProcessedPoints> {
        let request = GeoPointsRequest::new(points.to_vec());
        validate_request(&request)?;

        let url = self.url(self.config.process_path());
        tracing::debug!("Sending {} points to: {}", points.len(), url);

        let mut builder = self.client.post(&url).json(&request);
        for (name, value) in self.config.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Failed to process points".to_string());
            return Err(GeoError::RemoteError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<ProcessedPoints>().await?)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
