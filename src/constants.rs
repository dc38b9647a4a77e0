use crate::models::{AudioConfig, DatasetConfig};

pub const DEFAULT_DATASET_CONFIG: DatasetConfig = DatasetConfig {
    n_samples: 1000,
    n_features: 12,
    train_relative: 2,
    test_relative: 1,
    val_relative: 1,
    batch_number: 5,
    seed: 1,
};

/// Odd feature count, so the boolean majority rule can never tie.
pub const DEFAULT_BOOLEAN_DATASET_CONFIG: DatasetConfig = DatasetConfig {
    n_features: 11,
    ..DEFAULT_DATASET_CONFIG
};

pub const DEFAULT_AUDIO_CONFIG: AudioConfig = AudioConfig {
    sampling_rate: 10_000,
    quantization_levels: 16,
};

pub const DNA_ALPHABET: [char; 4] = ['A', 'T', 'G', 'C'];

/// Motif marking a positive sample in the dummy string dataset.
pub const DUMMY_STRING_MOTIF: [char; 2] = ['A', 'T'];

/// The 20 standard amino acids, one-letter codes.
pub const AMINO_ACID_ALPHABET: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y',
];

/// Fills variable-length peptides up to a common length.
pub const PEPTIDE_PAD_TOKEN: char = '_';

pub const NEGATIVE_LABEL: usize = 0;

pub const POSITIVE_LABEL: usize = 1;

/// Probabilities are clamped to `[METRICS_EPSILON, 1 - METRICS_EPSILON]` before
/// taking logarithms.
pub const METRICS_EPSILON: f64 = 1e-9;

/// Upper bound on the number of samples `resample` will produce.
pub const MAX_RESAMPLED_LENGTH: usize = 1 << 26;
