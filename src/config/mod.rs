#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::{ApiConfig, GeoConfig, OutputFormat};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "geo-processor")]
#[command(about = "Compute the centroid and bounding box of coordinate pairs")]
pub struct CliConfig {
    /// File with one coordinate pair per line ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Use a built-in sample set (us-cities, european-capitals, world-landmarks)
    #[arg(long, conflicts_with = "input")]
    pub sample: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the remote geo-processing service
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Compute locally when the remote service fails
    #[arg(long)]
    pub fallback: bool,

    /// Check the remote service health before processing
    #[arg(long)]
    pub check_health: bool,

    /// Remote request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Output format: json or text
    #[arg(long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔並套用命令列覆蓋
    pub fn resolve(&self) -> crate::Result<GeoConfig> {
        let mut config = match &self.config {
            Some(path) => GeoConfig::from_file(path)?,
            None => GeoConfig::default(),
        };

        if let Some(base_url) = &self.api_base_url {
            match config.api.as_mut() {
                Some(api) => api.base_url = base_url.clone(),
                None => config.api = Some(ApiConfig::new(base_url.clone())),
            }
        }

        if let (Some(timeout), Some(api)) = (self.timeout_seconds, config.api.as_mut()) {
            api.timeout_seconds = timeout;
        }

        if self.fallback {
            config.processing.fallback_enabled = true;
        }

        if self.check_health {
            config.processing.check_health = true;
        }

        if let Some(format) = &self.output {
            config.output.format = format.to_ascii_lowercase();
        }

        Ok(config)
    }
}
