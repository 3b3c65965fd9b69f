use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::FusionWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub fusion: FusionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    #[serde(default = "default_deepface_url")]
    pub deepface_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClassifierSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            deepface_url: default_deepface_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_deepface_url() -> String { "http://localhost:5005".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FusionSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_image_weight")]
    pub image: f64,
    #[serde(default = "default_bio_weight")]
    pub bio: f64,
    #[serde(default = "default_single_source_threshold")]
    pub single_source_threshold: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            image: default_image_weight(),
            bio: default_bio_weight(),
            single_source_threshold: default_single_source_threshold(),
        }
    }
}

impl From<&WeightsConfig> for FusionWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            image: config.image,
            bio: config.bio,
            single_source_threshold: config.single_source_threshold,
        }
    }
}

fn default_image_weight() -> f64 { 0.6 }
fn default_bio_weight() -> f64 { 0.4 }
fn default_single_source_threshold() -> f64 { 0.7 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DEMOGRAPHICS__)
    /// 5. DEEPFACE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        let settings = apply_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Environment variables and `DEEPFACE_URL` still override the file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings = apply_overrides(settings)?;

        settings.try_deserialize()
    }

    pub fn fusion_weights(&self) -> FusionWeights {
        FusionWeights::from(&self.fusion.weights)
    }
}

/// `DEMOGRAPHICS__*` variables
///
/// e.g., DEMOGRAPHICS__FUSION__WEIGHTS__IMAGE -> fusion.weights.image
fn environment() -> Environment {
    Environment::with_prefix("DEMOGRAPHICS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply well-known environment variables on top of the layered config
fn apply_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = std::env::var("DEEPFACE_URL") {
        builder = builder.set_override("classifier.deepface_url", url)?;
    }

    builder.build()
}
