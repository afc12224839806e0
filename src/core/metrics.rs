//! Binary classification metrics for threshold calibration and reporting.
//!
//! Scores that are undefined for the given labels (ROC-AUC with a single
//! class present) come back as `None` rather than crashing or poisoning
//! the report with NaN.

use serde::{Deserialize, Serialize};

/// Confusion counts for one (labels, predictions) pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Count outcomes over parallel label/prediction slices.
    pub fn from_predictions(labels: &[u8], predictions: &[u8]) -> Self {
        let mut matrix = Self::default();
        for (&actual, &predicted) in labels.iter().zip(predictions) {
            match (predicted == 1, actual == 1) {
                (true, true) => matrix.true_positives += 1,
                (false, false) => matrix.true_negatives += 1,
                (true, false) => matrix.false_positives += 1,
                (false, true) => matrix.false_negatives += 1,
            }
        }
        matrix
    }

    /// Threshold probabilities at `threshold` (inclusive) and count.
    pub fn at_threshold(labels: &[u8], probabilities: &[f64], threshold: f64) -> Self {
        let predictions: Vec<u8> = probabilities
            .iter()
            .map(|&p| u8::from(p >= threshold))
            .collect();
        Self::from_predictions(labels, &predictions)
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / total as f64
    }

    /// Precision with zero-division mapped to 0.
    pub fn precision(&self) -> f64 {
        let denom = self.true_positives + self.false_positives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// Recall with zero-division mapped to 0.
    pub fn recall(&self) -> f64 {
        let denom = self.true_positives + self.false_negatives;
        if denom == 0 {
            return 0.0;
        }
        self.true_positives as f64 / denom as f64
    }

    /// Harmonic mean of precision and recall, 0 when both are 0.
    pub fn f1_score(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }
}

/// Area under the ROC curve via the Mann-Whitney rank statistic.
///
/// Tied probabilities count half a concordant pair. Returns `None` when
/// the labels contain only one class, where the score is undefined.
pub fn roc_auc(labels: &[u8], probabilities: &[f64]) -> Option<f64> {
    let n_positive = labels.iter().filter(|&&l| l == 1).count();
    let n_negative = labels.len() - n_positive;
    if n_positive == 0 || n_negative == 0 {
        return None;
    }

    let mut concordant = 0.0;
    for (&label_a, &prob_a) in labels.iter().zip(probabilities) {
        if label_a != 1 {
            continue;
        }
        for (&label_b, &prob_b) in labels.iter().zip(probabilities) {
            if label_b != 0 {
                continue;
            }
            if prob_a > prob_b {
                concordant += 1.0;
            } else if prob_a == prob_b {
                concordant += 0.5;
            }
        }
    }

    Some(concordant / (n_positive * n_negative) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confusion_counts() {
        let labels = [1, 1, 0, 0, 1, 0];
        let predictions = [1, 0, 0, 1, 1, 0];
        let m = ConfusionMatrix::from_predictions(&labels, &predictions);
        assert_eq!(m.true_positives, 2);
        assert_eq!(m.false_negatives, 1);
        assert_eq!(m.false_positives, 1);
        assert_eq!(m.true_negatives, 2);
        assert_eq!(m.total(), 6);
    }

    #[test]
    fn test_precision_recall_f1() {
        let m = ConfusionMatrix {
            true_positives: 8,
            false_positives: 2,
            false_negatives: 2,
            true_negatives: 88,
        };
        assert!((m.precision() - 0.8).abs() < 1e-9);
        assert!((m.recall() - 0.8).abs() < 1e-9);
        assert!((m.f1_score() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_zero_division_maps_to_zero() {
        let m = ConfusionMatrix::from_predictions(&[0, 0, 0], &[0, 0, 0]);
        assert_eq!(m.precision(), 0.0);
        assert_eq!(m.recall(), 0.0);
        assert_eq!(m.f1_score(), 0.0);
        assert_eq!(m.accuracy(), 1.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let m = ConfusionMatrix::at_threshold(&[1, 0], &[0.5, 0.49], 0.5);
        assert_eq!(m.true_positives, 1);
        assert_eq!(m.true_negatives, 1);
    }

    #[test]
    fn test_auc_perfect_separation() {
        let auc = roc_auc(&[0, 0, 1, 1], &[0.1, 0.2, 0.8, 0.9]);
        assert_eq!(auc, Some(1.0));
    }

    #[test]
    fn test_auc_uniform_predictions_is_half() {
        let auc = roc_auc(&[0, 1, 0, 1], &[0.5, 0.5, 0.5, 0.5]);
        assert_eq!(auc, Some(0.5));
    }

    #[test]
    fn test_auc_single_class_is_undefined() {
        assert_eq!(roc_auc(&[1, 1, 1], &[0.1, 0.5, 0.9]), None);
        assert_eq!(roc_auc(&[0, 0], &[0.1, 0.5]), None);
    }
}
