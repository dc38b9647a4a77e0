mod constants;
pub use constants::{
    AMINO_ACID_ALPHABET, DEFAULT_AUDIO_CONFIG, DEFAULT_BOOLEAN_DATASET_CONFIG,
    DEFAULT_DATASET_CONFIG, DNA_ALPHABET, DUMMY_STRING_MOTIF, MAX_RESAMPLED_LENGTH,
    METRICS_EPSILON, NEGATIVE_LABEL, PEPTIDE_PAD_TOKEN, POSITIVE_LABEL,
};
pub mod models;
pub use models::{
    binary_cross_entropy, build_vocabulary, decode, encode, kullback_leibler_divergence,
    mean_absolute_error, mean_squared_error, mini_batches, predictions_from_probabilities,
    prepare_dummy_boolean, root_mean_squared_log_error, prepare_dummy_string, split_dataset, AudioConfig, DatasetConfig,
    DatasetSplit, Error, LabelRule, Metrics, OneHotMatrix, Vocabulary,
};
pub mod types;
mod utils;
pub use types::{
    Dataset, IndexToToken, Label, LabelDistribution, OneHotValue, Sample, TokenIndex,
    TokenToIndex,
};
pub use utils::{
    argmax, count_label_frequencies, load_dataset, pad_sequence, pad_sequences,
    read_dataset_csv, read_dataset_from_gz_bytes, read_dataset_from_string, save_dataset,
    write_dataset_csv,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds a vocabulary over a batch of sequences and one-hot encodes each of
/// them against it, so all matrices share the same columns.
pub fn encode_sequences<T, S>(sequences: &[S]) -> Result<(Vocabulary<T>, Vec<OneHotMatrix>), Error>
where
    T: Eq + std::hash::Hash + Clone + std::fmt::Debug,
    S: AsRef<[T]>,
{
    let vocabulary = Vocabulary::build_from_batch(sequences)?;
    let matrices = vocabulary.encode_batch(sequences)?;

    Ok((vocabulary, matrices))
}
