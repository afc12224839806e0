//! Configuration for the fall-detection training pipeline.
//!
//! Every tunable the pipeline consumes lives here as a named field with a
//! documented default, and is passed explicitly into the stage that uses it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// IMU sampling rate in Hz
    pub sample_rate_hz: f64,

    /// Duration of one analysis window in seconds
    pub window_seconds: f64,

    /// Label (case-insensitive) treated as the positive "fall" class
    pub target_label: String,

    /// Class balancing parameters
    pub balance: BalanceConfig,

    /// Train/validation split parameters
    pub split: SplitConfig,

    /// Decision-threshold sweep parameters
    pub threshold: ThresholdConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 50.0,
            window_seconds: 2.0,
            target_label: "fall".to_string(),
            balance: BalanceConfig::default(),
            split: SplitConfig::default(),
            threshold: ThresholdConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Window length in samples: `round(sample_rate_hz * window_seconds)`.
    pub fn window_len(&self) -> usize {
        (self.sample_rate_hz * self.window_seconds).round() as usize
    }

    /// Stride between window starts: half a window, never below 1.
    pub fn stride(&self) -> usize {
        (self.window_len() / 2).max(1)
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let config: PipelineConfig = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fallprep")
            .join("config.json")
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz <= 0.0 || self.window_seconds <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "sample_rate_hz and window_seconds must be positive".to_string(),
            ));
        }
        if self.window_len() == 0 {
            return Err(ConfigError::InvalidValue(
                "window length rounds to zero samples".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.split.validation_fraction) {
            return Err(ConfigError::InvalidValue(
                "validation_fraction must be in [0, 1)".to_string(),
            ));
        }
        if self.threshold.step <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "threshold step must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Minority-class oversampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Majority/minority ratio above which oversampling kicks in
    pub ratio_threshold: f64,
    /// Standard deviation of the Gaussian noise added to augmented copies
    pub noise_std: f64,
    /// RNG seed for noise generation
    pub seed: u64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            ratio_threshold: 1.5,
            noise_std: 0.01,
            seed: 42,
        }
    }
}

/// Train/validation split parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of each class routed to the validation split
    pub validation_fraction: f64,
    /// RNG seed for the stratified shuffle
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            validation_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Decision-threshold sweep parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Lowest candidate threshold
    pub min: f64,
    /// Highest candidate threshold
    pub max: f64,
    /// Step between candidates
    pub step: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            min: 0.30,
            max: 0.80,
            step: 0.05,
        }
    }
}

impl ThresholdConfig {
    /// Candidate thresholds in ascending order.
    pub fn candidates(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut t = self.min;
        // accumulation drift stays well under step/2 over an 11-point grid
        while t <= self.max + self.step / 2.0 {
            out.push(t);
            t += self.step;
        }
        out
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
            ConfigError::InvalidValue(e) => write!(f, "Invalid value: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
