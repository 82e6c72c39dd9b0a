use crate::domain::ports::ApiSettings;
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

pub const DEFAULT_PROCESS_PATH: &str = "/api/geo/process-points";
pub const DEFAULT_HEALTH_PATH: &str = "/api/health";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoConfig {
    pub api: Option<ApiConfig>,
    #[serde(default)]
    pub processing: ProcessingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_process_path")]
    pub process_path: String,
    #[serde(default = "default_health_path")]
    pub health_path: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Compute locally when the remote service fails.
    #[serde(default)]
    pub fallback_enabled: bool,
    /// Ping the health endpoint before sending points.
    #[serde(default)]
    pub check_health: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: String,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

fn default_process_path() -> String {
    DEFAULT_PROCESS_PATH.to_string()
}

fn default_health_path() -> String {
    DEFAULT_HEALTH_PATH.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_output_format() -> String {
    "json".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            pretty: default_pretty(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(GeoError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: "Unsupported format. Valid formats: json, text".to_string(),
            }),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            process_path: default_process_path(),
            health_path: default_health_path(),
            timeout_seconds: default_timeout_seconds(),
            headers: None,
        }
    }
}

impl ApiSettings for ApiConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn process_path(&self) -> &str {
        &self.process_path
    }

    fn health_path(&self) -> &str {
        &self.health_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.headers
            .as_ref()
            .map(|headers| {
                headers
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl GeoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GeoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FRONTEND_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.parse()
    }

    pub fn fallback_enabled(&self) -> bool {
        self.processing.fallback_enabled
    }

    pub fn check_health(&self) -> bool {
        self.processing.check_health
    }

    pub fn remote_enabled(&self) -> bool {
        self.api.is_some()
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        validation::validate_endpoint_path("api.process_path", &self.process_path)?;
        validation::validate_endpoint_path("api.health_path", &self.health_path)?;
        validation::validate_range("api.timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}

impl Validate for GeoConfig {
    fn validate(&self) -> Result<()> {
        if let Some(api) = &self.api {
            api.validate()?;
        }

        validation::validate_one_of("output.format", &self.output.format, &["json", "text"])?;

        if self.processing.fallback_enabled && self.api.is_none() {
            tracing::debug!("fallback_enabled has no effect without an [api] section");
        }

        Ok(())
    }
}
