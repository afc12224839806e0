//! Dataset construction: windower -> label aggregator -> feature extractor.
//!
//! Column presence is validated by the trace loader before any window is
//! produced, so the builder itself never fails: a trace shorter than one
//! window simply yields an empty dataset that downstream stages tolerate.

use crate::config::PipelineConfig;
use crate::core::features::FeatureExtractor;
use crate::core::labels;
use crate::core::windowing::Windower;
use crate::trace::Sample;
use serde::{Deserialize, Serialize};

/// Parallel feature and label sequences, one entry per retained window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// One feature vector per window
    pub features: Vec<Vec<f64>>,
    /// One binary label per window (0 = not-fall, 1 = fall)
    pub labels: Vec<u8>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Counts of (not-fall, fall) windows.
    pub fn class_counts(&self) -> (usize, usize) {
        let n1 = self.labels.iter().filter(|&&l| l == 1).count();
        (self.labels.len() - n1, n1)
    }
}

/// Orchestrates windowing, label aggregation and feature extraction over a
/// full trace.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    windower: Windower,
    extractor: FeatureExtractor,
    target_label: String,
}

impl DatasetBuilder {
    pub fn new(windower: Windower, extractor: FeatureExtractor, target_label: &str) -> Self {
        Self {
            windower,
            extractor,
            target_label: target_label.to_string(),
        }
    }

    /// Builder with the configured window geometry and the default
    /// statistic list.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            Windower::new(config.window_len(), config.stride()),
            FeatureExtractor::default(),
            &config.target_label,
        )
    }

    /// Length of every produced feature vector.
    pub fn feature_len(&self) -> usize {
        self.extractor.feature_len()
    }

    /// Names of the produced features, in vector order.
    pub fn feature_names(&self) -> Vec<String> {
        self.extractor.feature_names()
    }

    /// Build the (feature, label) pairs for the whole trace.
    pub fn build(&self, trace: &[Sample]) -> Dataset {
        let mut dataset = Dataset::default();

        for range in self.windower.ranges(trace.len()) {
            let window = &trace[range];
            let label = labels::aggregate(
                window.iter().map(|s| s.label.as_str()),
                &self.target_label,
            );
            dataset.features.push(self.extractor.extract(window));
            dataset.labels.push(label);
        }

        dataset
    }
}
