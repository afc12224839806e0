//! Feature computation from sample windows.
//!
//! Each window of raw 6-axis samples is reduced to a fixed-length numeric
//! vector: a configurable ordered list of summary statistics per channel,
//! plus two statistics of the per-sample resultant acceleration magnitude.
//! All statistics run on raw (unscaled) values; scaling happens later in
//! the normalizer.

use crate::trace::Sample;

/// A named per-channel summary statistic.
///
/// The statistic set is an ordered list so alternative feature sets can be
/// substituted without touching the windower or the label aggregator. The
/// default list is [`default_stats`].
#[derive(Debug, Clone, Copy)]
pub struct ChannelStat {
    /// Short name, used in exported feature name lists
    pub name: &'static str,
    /// Statistic over one channel's window values
    pub compute: fn(&[f64]) -> f64,
}

/// The default statistic list: mean, std, min, max, mean-abs, mean-sq.
pub fn default_stats() -> Vec<ChannelStat> {
    vec![
        ChannelStat {
            name: "mean",
            compute: mean,
        },
        ChannelStat {
            name: "std",
            compute: std_dev,
        },
        ChannelStat {
            name: "min",
            compute: min,
        },
        ChannelStat {
            name: "max",
            compute: max,
        },
        ChannelStat {
            name: "mean_abs",
            compute: mean_abs,
        },
        ChannelStat {
            name: "mean_sq",
            compute: mean_sq,
        },
    ]
}

/// Short channel names in canonical order, matching [`Sample::channels`].
const CHANNEL_NAMES: [&str; 6] = ["acc_x", "acc_y", "acc_z", "gyro_x", "gyro_y", "gyro_z"];

/// Reduces windows of samples to fixed-length feature vectors.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    stats: Vec<ChannelStat>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(default_stats())
    }
}

impl FeatureExtractor {
    pub fn new(stats: Vec<ChannelStat>) -> Self {
        Self { stats }
    }

    /// Length of every produced vector: `6 * stats + 2` magnitude entries.
    /// 44 with the default statistic list.
    pub fn feature_len(&self) -> usize {
        CHANNEL_NAMES.len() * self.stats.len() + 2
    }

    /// Names of the produced features, in vector order.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.feature_len());
        for channel in CHANNEL_NAMES {
            for stat in &self.stats {
                names.push(format!("{channel}_{}", stat.name));
            }
        }
        names.push("acc_mag_max".to_string());
        names.push("acc_mag_std".to_string());
        names
    }

    /// Compute the feature vector for one window.
    ///
    /// A zero-length window yields an all-zero vector; pathological edge
    /// windows degrade instead of failing.
    pub fn extract(&self, window: &[Sample]) -> Vec<f64> {
        let mut features = Vec::with_capacity(self.feature_len());

        let mut channel = Vec::with_capacity(window.len());
        for c in 0..CHANNEL_NAMES.len() {
            channel.clear();
            channel.extend(window.iter().map(|s| s.channels()[c]));
            for stat in &self.stats {
                features.push((stat.compute)(&channel));
            }
        }

        let magnitude: Vec<f64> = window
            .iter()
            .map(|s| (s.acc[0].powi(2) + s.acc[1].powi(2) + s.acc[2].powi(2)).sqrt())
            .collect();
        features.push(max(&magnitude));
        features.push(std_dev(&magnitude));

        features
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n, not n-1).
fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn mean_abs(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v.abs()).sum::<f64>() / values.len() as f64
}

fn mean_sq(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64
}
