//! Minority-class oversampling by Gaussian perturbation in feature space.
//!
//! Noise is added to finished feature vectors, not raw signals, so the
//! augmented windows are not physically re-derivable; they exist only to
//! correct class skew before training.

use crate::config::BalanceConfig;
use crate::core::dataset::Dataset;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::Normal;

/// Oversamples the fall class when the not-fall/fall ratio exceeds the
/// configured threshold.
#[derive(Debug, Clone)]
pub struct ClassBalancer {
    config: BalanceConfig,
}

impl ClassBalancer {
    pub fn new(config: BalanceConfig) -> Self {
        Self { config }
    }

    /// Return a balanced copy of the dataset.
    ///
    /// With counts `n0` (not-fall) and `n1` (fall) and `ratio = n0 / n1`:
    /// if `ratio` exceeds the threshold, `k = floor(ratio) - 1` noisy
    /// copies of every fall vector are appended (independent per-feature
    /// Gaussian noise, mean 0, configured std). Otherwise, and whenever a
    /// class is absent, the dataset passes through unchanged.
    ///
    /// Not idempotent: once balanced, the post-balance ratio falls under
    /// the threshold and a second pass is the identity.
    pub fn balance(&self, dataset: &Dataset) -> Dataset {
        let mut out = dataset.clone();

        let (n0, n1) = dataset.class_counts();
        if n1 == 0 || n0 == 0 {
            return out;
        }

        let ratio = n0 as f64 / n1 as f64;
        if ratio <= self.config.ratio_threshold {
            return out;
        }

        let k = ratio.floor() as usize - 1;
        if k == 0 {
            return out;
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let noise = Normal::new(0.0, self.config.noise_std).ok();

        let minority: Vec<Vec<f64>> = dataset
            .features
            .iter()
            .zip(&dataset.labels)
            .filter(|(_, &label)| label == 1)
            .map(|(features, _)| features.clone())
            .collect();

        for _ in 0..k {
            for features in &minority {
                let perturbed: Vec<f64> = features
                    .iter()
                    .map(|&v| match &noise {
                        Some(n) => v + n.sample(&mut rng),
                        None => v,
                    })
                    .collect();
                out.features.push(perturbed);
                out.labels.push(1);
            }
        }

        out
    }
}
