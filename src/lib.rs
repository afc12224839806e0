//! Fallprep - training-data pipeline for embedded IMU fall detection.
//!
//! This library turns a labeled trace of 6-axis inertial measurements
//! (tri-axis acceleration, tri-axis angular rate) into feature windows
//! ready for training a small binary fall classifier, and calibrates the
//! probability threshold the deployed firmware should use.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            fallprep                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌─────────────┐  │
//! │  │  Trace   │──▶│ Windowing │──▶│ Features │──▶│   Dataset   │  │
//! │  │  (CSV)   │   │ (2s, 50%) │   │   (44)   │   │  (X, y)     │  │
//! │  └──────────┘   └───────────┘   └──────────┘   └─────────────┘  │
//! │                                                       │          │
//! │                  ┌────────────┐   ┌───────┐   ┌───────▼──────┐  │
//! │                  │ Normalizer │◀──│ Split │◀──│   Balancer   │  │
//! │                  └─────┬──────┘   └───────┘   └──────────────┘  │
//! │                        │                                        │
//! │                  ┌─────▼──────────┐   ┌──────────────────────┐  │
//! │                  │ scaler params  │──▶│  deploy artifact     │  │
//! │                  │ + threshold    │   │  (mean/scale/cutoff) │  │
//! │                  └────────────────┘   └──────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The classifier itself is an external collaborator: this crate exports
//! each split as (feature, label) pairs, and reads back the trained
//! model's validation probabilities to calibrate the decision threshold.
//!
//! # Example
//!
//! ```no_run
//! use fallprep::config::PipelineConfig;
//! use fallprep::core::{ClassBalancer, DatasetBuilder};
//! use std::path::Path;
//!
//! let config = PipelineConfig::default();
//! let trace = fallprep::trace::load_csv(Path::new("session.csv")).expect("trace");
//! let dataset = DatasetBuilder::from_config(&config).build(&trace);
//! let balanced = ClassBalancer::new(config.balance.clone()).balance(&dataset);
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod trace;

// Re-export key types at crate root for convenience
pub use config::{ConfigError, PipelineConfig};
pub use core::{
    stratified_split, ClassBalancer, Dataset, DatasetBuilder, FeatureExtractor, ScalerParams,
    ThresholdCalibrator, Windower,
};
pub use export::{DeployArtifact, ExportError, SplitExport};
pub use trace::{load_csv, Sample, Trace, TraceError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
