//! Per-feature z-score normalization with frozen scaler parameters.
//!
//! Statistics are fit once, on the training split only, and the exact same
//! parameters are applied to the validation split and exported for the
//! serving side. A mismatch between training-time and serving-time
//! parameters degrades accuracy silently, so the exported record must be
//! bit-for-bit the fitted one.

use serde::{Deserialize, Serialize};

/// Frozen per-feature normalization statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Per-feature mean
    pub mean: Vec<f64>,
    /// Per-feature scale (population standard deviation; 1.0 where the
    /// feature had zero variance, so scaling is a no-op there)
    pub scale: Vec<f64>,
}

impl ScalerParams {
    /// Fit mean and population standard deviation per feature.
    ///
    /// Deterministic: the same input always yields the same parameters.
    /// An empty input fits empty parameter vectors.
    pub fn fit(features: &[Vec<f64>]) -> Self {
        let n_features = features.first().map_or(0, Vec::len);
        let n = features.len() as f64;

        let mut mean = vec![0.0; n_features];
        for row in features {
            for (m, &v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n.max(1.0);
        }

        let mut scale = vec![0.0; n_features];
        for row in features {
            for ((s, &v), &m) in scale.iter_mut().zip(row).zip(&mean) {
                *s += (v - m).powi(2);
            }
        }
        for s in &mut scale {
            *s = (*s / n.max(1.0)).sqrt();
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Self { mean, scale }
    }

    /// Normalize one feature vector: `(x - mean) / scale` element-wise.
    pub fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .map(|((&v, &m), &s)| (v - m) / s)
            .collect()
    }

    /// Normalize a whole split with these frozen parameters.
    ///
    /// Never recomputes statistics from its input; fitting on the
    /// validation split is a contract violation, not an option.
    pub fn apply(&self, features: &[Vec<f64>]) -> Vec<Vec<f64>> {
        features.iter().map(|row| self.transform(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 10.0, 5.0],
            vec![2.0, 20.0, 5.0],
            vec![3.0, 30.0, 5.0],
            vec![4.0, 40.0, 5.0],
        ]
    }

    #[test]
    fn test_fit_then_apply_standardizes() {
        let params = ScalerParams::fit(&rows());
        let scaled = params.apply(&rows());

        for feature in 0..2 {
            let n = scaled.len() as f64;
            let mean: f64 = scaled.iter().map(|r| r[feature]).sum::<f64>() / n;
            let var: f64 = scaled.iter().map(|r| (r[feature] - mean).powi(2)).sum::<f64>() / n;
            assert!(mean.abs() < 1e-9, "feature {feature} mean {mean}");
            assert!((var - 1.0).abs() < 1e-9, "feature {feature} var {var}");
        }
    }

    #[test]
    fn test_zero_variance_feature_is_left_alone() {
        let params = ScalerParams::fit(&rows());
        assert_eq!(params.scale[2], 1.0);
        let scaled = params.apply(&rows());
        assert!(scaled.iter().all(|r| r[2] == 0.0));
    }

    #[test]
    fn test_fit_is_deterministic() {
        assert_eq!(ScalerParams::fit(&rows()), ScalerParams::fit(&rows()));
    }

    #[test]
    fn test_apply_uses_frozen_params_not_input_stats() {
        let params = ScalerParams::fit(&rows());
        // A shifted "validation" split must not come out standardized
        let shifted: Vec<Vec<f64>> = rows()
            .iter()
            .map(|r| r.iter().map(|v| v + 100.0).collect())
            .collect();
        let scaled = params.apply(&shifted);
        let mean: f64 = scaled.iter().map(|r| r[0]).sum::<f64>() / scaled.len() as f64;
        assert!(mean > 10.0);
    }

    #[test]
    fn test_fit_on_empty_split() {
        let params = ScalerParams::fit(&[]);
        assert!(params.mean.is_empty());
        assert!(params.scale.is_empty());
        assert!(params.apply(&[]).is_empty());
    }

    #[test]
    fn test_roundtrip_through_json_is_exact() {
        let params = ScalerParams::fit(&rows());
        let json = serde_json::to_string(&params).expect("serialize");
        let back: ScalerParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(params, back);
    }
}
