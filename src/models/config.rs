use crate::models::Error;
use std::fmt;

/// Settings for generating, splitting and batching a labeled dataset.
///
/// `train_relative`, `test_relative` and `val_relative` are relative weights, so
/// `2:1:1` puts half of the samples in the training set and a quarter in each of
/// the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetConfig {
    pub n_samples: usize,
    pub n_features: usize,
    pub train_relative: u32,
    pub test_relative: u32,
    pub val_relative: u32,
    pub batch_number: usize,
    pub seed: u64,
}

impl DatasetConfig {
    /// Returns a copy with a different seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn relative_total(&self) -> u64 {
        self.train_relative as u64 + self.test_relative as u64 + self.val_relative as u64
    }

    /// Checks the settings shared by generation, splitting and batching.
    ///
    /// # Errors
    /// * `Error::InvalidConfig` if `n_samples` or `batch_number` is zero, or if
    ///   all relative weights are zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.n_samples == 0 {
            return Err(Error::InvalidConfig(
                "n_samples must be at least 1".to_string(),
            ));
        }

        if self.relative_total() == 0 {
            return Err(Error::InvalidConfig(
                "at least one of the train/test/val relative weights must be non-zero".to_string(),
            ));
        }

        if self.batch_number == 0 {
            return Err(Error::InvalidConfig(
                "batch_number must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for DatasetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DatasetConfig (\n\tn_samples: {},\n\tn_features: {},\n\tsplit (train:test:val): {}:{}:{},\n\tbatch_number: {},\n\tseed: {}\n)",
            self.n_samples,
            self.n_features,
            self.train_relative,
            self.test_relative,
            self.val_relative,
            self.batch_number,
            self.seed
        )
    }
}

/// Settings for turning a raw audio clip into a sequence of amplitude tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioConfig {
    pub sampling_rate: u32,
    pub quantization_levels: usize,
}
