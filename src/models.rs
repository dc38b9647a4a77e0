pub mod audio;
pub use audio::{normalize, prepare_audio_tokens, quantize, resample};

pub mod config;
pub use config::{AudioConfig, DatasetConfig};

pub mod dataset_generator;
pub use dataset_generator::{
    features_boolean, features_string, prepare_dataset, prepare_dummy_boolean,
    prepare_dummy_string, LabelRule,
};

pub mod dataset_splitter;
pub use dataset_splitter::{mini_batches, split_dataset, DatasetSplit};

pub mod error;
pub use error::Error;

pub mod metrics;
pub use metrics::{
    binary_cross_entropy, kullback_leibler_divergence, mean_absolute_error, mean_squared_error,
    predictions_from_probabilities, root_mean_squared_log_error, Metrics,
};

pub mod one_hot_encoder;
pub use one_hot_encoder::{build_vocabulary, decode, encode};

pub mod one_hot_matrix;
pub use one_hot_matrix::OneHotMatrix;

pub mod vocabulary;
pub use vocabulary::Vocabulary;
