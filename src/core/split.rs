//! Stratified train/validation splitting.
//!
//! Splitting and balancing are independent stages: the default pipeline
//! balances first (the observed behavior of the system this tool prepares
//! data for), but a caller can reorder them to balance only the training
//! split.

use crate::config::SplitConfig;
use crate::core::dataset::Dataset;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split a dataset into (train, validation) copies, stratified by label.
///
/// Within each class the indices are shuffled with a seeded RNG and
/// `validation_fraction` of them (rounded) go to the validation split, so
/// both splits keep the dataset's class mix. Deterministic for a fixed
/// seed.
pub fn stratified_split(dataset: &Dataset, config: &SplitConfig) -> (Dataset, Dataset) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut train = Dataset::default();
    let mut validation = Dataset::default();

    for class in [0u8, 1u8] {
        let mut indices: Vec<usize> = dataset
            .labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == class)
            .map(|(i, _)| i)
            .collect();
        indices.shuffle(&mut rng);

        let n_validation = (indices.len() as f64 * config.validation_fraction).round() as usize;
        for (position, &i) in indices.iter().enumerate() {
            let target = if position < n_validation {
                &mut validation
            } else {
                &mut train
            };
            target.features.push(dataset.features[i].clone());
            target.labels.push(dataset.labels[i]);
        }
    }

    (train, validation)
}
