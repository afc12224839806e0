//! Core pipeline stages.
//!
//! This module contains:
//! - Sliding-window slicing of the sample sequence
//! - Window-level label aggregation by majority vote
//! - Feature computation from sample windows
//! - Dataset construction, class balancing and splitting
//! - Normalization and decision-threshold calibration

pub mod balance;
pub mod dataset;
pub mod features;
pub mod labels;
pub mod metrics;
pub mod normalize;
pub mod split;
pub mod threshold;
pub mod windowing;

// Re-export commonly used types
pub use balance::ClassBalancer;
pub use dataset::{Dataset, DatasetBuilder};
pub use features::{default_stats, ChannelStat, FeatureExtractor};
pub use metrics::{roc_auc, ConfusionMatrix};
pub use normalize::ScalerParams;
pub use split::stratified_split;
pub use threshold::{SweepPoint, ThresholdCalibrator};
pub use windowing::Windower;
