//! Decision-threshold calibration against a validation set.
//!
//! The deployed decision logic compares the model's fall probability to a
//! fixed cutoff; this stage picks that cutoff by sweeping a candidate grid
//! and keeping the best F1, so the embedded threshold is the calibrated
//! one rather than 0.5.

use crate::config::ThresholdConfig;
use crate::core::metrics::ConfusionMatrix;
use serde::{Deserialize, Serialize};

/// One evaluated candidate threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepPoint {
    pub threshold: f64,
    pub f1: f64,
}

/// Sweeps the configured grid and selects the F1-optimal threshold.
#[derive(Debug, Clone)]
pub struct ThresholdCalibrator {
    config: ThresholdConfig,
}

impl ThresholdCalibrator {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Evaluate every candidate threshold in ascending order.
    pub fn sweep(&self, labels: &[u8], probabilities: &[f64]) -> Vec<SweepPoint> {
        self.config
            .candidates()
            .into_iter()
            .map(|threshold| SweepPoint {
                threshold,
                f1: ConfusionMatrix::at_threshold(labels, probabilities, threshold).f1_score(),
            })
            .collect()
    }

    /// The threshold with the strictly highest F1.
    ///
    /// Ties resolve to the earliest (lowest) candidate in scan order, so a
    /// uniformly-predicting model (all F1 = 0) still yields a threshold:
    /// the first candidate of the grid.
    pub fn calibrate(&self, labels: &[u8], probabilities: &[f64]) -> f64 {
        let mut best_threshold = self.config.min;
        let mut best_f1 = -1.0;
        for point in self.sweep(labels, probabilities) {
            if point.f1 > best_f1 {
                best_threshold = point.threshold;
                best_f1 = point.f1;
            }
        }
        best_threshold
    }
}
