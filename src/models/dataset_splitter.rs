use crate::models::{DatasetConfig, Error};
use crate::types::Dataset;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A dataset partitioned into training, validation and test sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSplit<T> {
    pub train: Dataset<T>,
    pub val: Dataset<T>,
    pub test: Dataset<T>,
}

impl<T> DatasetSplit<T> {
    pub fn len(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shuffles a dataset with `config.seed` and partitions it by the relative
/// train/test/val weights.
///
/// The training and test sizes are rounded to the nearest sample; the test set
/// is capped to what the training set leaves over, and the validation set takes
/// the rest. No sample is dropped.
///
/// # Errors
/// * `Error::EmptyInput` if the dataset is empty.
/// * `Error::InvalidConfig` if `config` does not validate.
pub fn split_dataset<T>(
    mut dataset: Dataset<T>,
    config: &DatasetConfig,
) -> Result<DatasetSplit<T>, Error> {
    if dataset.is_empty() {
        return Err(Error::EmptyInput);
    }

    config.validate()?;
    let relative_total = config.relative_total();

    let mut rng = StdRng::seed_from_u64(config.seed);
    dataset.shuffle(&mut rng);

    let n = dataset.len();
    let share = |relative: u32| -> usize {
        ((n as f64) * (relative as f64) / (relative_total as f64)).round() as usize
    };

    let train_length = share(config.train_relative).min(n);
    let test_length = share(config.test_relative).min(n - train_length);

    let mut rest = dataset.split_off(train_length);
    let val = rest.split_off(test_length);
    let test = rest;
    let train = dataset;

    debug!(
        "Split {} samples into train: {}, val: {}, test: {}",
        n,
        train.len(),
        val.len(),
        test.len()
    );

    if train.is_empty() {
        warn!("Training set is empty after splitting {} samples", n);
    }

    Ok(DatasetSplit { train, val, test })
}

/// Cuts samples into `batch_number` contiguous mini-batches.
///
/// Batch sizes differ by at most one, with larger batches first. When there are
/// fewer samples than requested batches, one batch per sample is returned; an
/// empty input yields no batches.
///
/// # Errors
/// * `Error::InvalidConfig` if `batch_number` is zero.
pub fn mini_batches<S: Clone>(samples: &[S], batch_number: usize) -> Result<Vec<Vec<S>>, Error> {
    if batch_number == 0 {
        return Err(Error::InvalidConfig(
            "batch_number must be at least 1".to_string(),
        ));
    }

    let batch_count = batch_number.min(samples.len());
    if batch_count == 0 {
        return Ok(Vec::new());
    }

    let base_size = samples.len() / batch_count;
    let remainder = samples.len() % batch_count;

    let mut batches = Vec::with_capacity(batch_count);
    let mut start = 0;

    for batch_index in 0..batch_count {
        let size = base_size + usize::from(batch_index < remainder);
        batches.push(samples[start..start + size].to_vec());
        start += size;
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DATASET_CONFIG;
    use crate::types::Sample;

    fn numbered_dataset(n: usize) -> Dataset<usize> {
        (0..n).map(|i| Sample::new(vec![i], i % 2)).collect()
    }

    #[test]
    fn test_split_default_proportions() {
        let split = split_dataset(numbered_dataset(1000), &DEFAULT_DATASET_CONFIG).unwrap();

        assert_eq!(split.train.len(), 500);
        assert_eq!(split.test.len(), 250);
        assert_eq!(split.val.len(), 250);
    }

    #[test]
    fn test_split_keeps_every_sample_once() {
        let split = split_dataset(numbered_dataset(37), &DEFAULT_DATASET_CONFIG).unwrap();
        assert_eq!(split.len(), 37);

        let mut seen: Vec<usize> = split
            .train
            .iter()
            .chain(&split.val)
            .chain(&split.test)
            .map(|sample| sample.features[0])
            .collect();
        seen.sort_unstable();

        assert_eq!(seen, (0..37).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_is_seeded() {
        let first = split_dataset(numbered_dataset(100), &DEFAULT_DATASET_CONFIG).unwrap();
        let second = split_dataset(numbered_dataset(100), &DEFAULT_DATASET_CONFIG).unwrap();
        let other =
            split_dataset(numbered_dataset(100), &DEFAULT_DATASET_CONFIG.with_seed(7)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_split_single_sample() {
        let split = split_dataset(numbered_dataset(1), &DEFAULT_DATASET_CONFIG).unwrap();

        assert_eq!(split.train.len(), 1);
        assert!(split.val.is_empty());
        assert!(split.test.is_empty());
    }

    #[test]
    fn test_split_only_validation_weight() {
        let config = DatasetConfig {
            train_relative: 0,
            test_relative: 0,
            val_relative: 3,
            ..DEFAULT_DATASET_CONFIG
        };
        let split = split_dataset(numbered_dataset(10), &config).unwrap();

        assert!(split.train.is_empty());
        assert!(split.test.is_empty());
        assert_eq!(split.val.len(), 10);
    }

    #[test]
    fn test_split_rejects_empty_dataset() {
        let result = split_dataset(Dataset::<char>::new(), &DEFAULT_DATASET_CONFIG);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_split_rejects_zero_weights() {
        let config = DatasetConfig {
            train_relative: 0,
            test_relative: 0,
            val_relative: 0,
            ..DEFAULT_DATASET_CONFIG
        };

        let result = split_dataset(numbered_dataset(10), &config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_mini_batches_even_sizes() {
        let batches = mini_batches(&(0..10).collect::<Vec<_>>(), 5).unwrap();

        assert_eq!(batches.len(), 5);
        assert!(batches.iter().all(|batch| batch.len() == 2));
    }

    #[test]
    fn test_mini_batches_remainder_goes_first() {
        let batches = mini_batches(&(0..11).collect::<Vec<_>>(), 3).unwrap();

        assert_eq!(
            batches,
            vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10]]
        );
    }

    #[test]
    fn test_mini_batches_more_batches_than_samples() {
        let batches = mini_batches(&['a', 'b'], 5).unwrap();
        assert_eq!(batches, vec![vec!['a'], vec!['b']]);

        let empty = mini_batches::<char>(&[], 5).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_mini_batches_zero_rejected() {
        assert!(matches!(
            mini_batches(&[1, 2, 3], 0),
            Err(Error::InvalidConfig(_))
        ));
    }
}
