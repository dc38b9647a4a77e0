use crate::constants::{DNA_ALPHABET, DUMMY_STRING_MOTIF, NEGATIVE_LABEL, POSITIVE_LABEL};
use crate::models::{DatasetConfig, Error};
use crate::types::{Dataset, Label, Sample};
use crate::utils::count_label_frequencies;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A rule assigning a binary label to a generated feature sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRule<T> {
    /// Positive when the token fills strictly more than half of the positions.
    Majority(T),

    /// Positive when the motif occurs as a contiguous run. An empty motif
    /// matches every sequence.
    ContainsMotif(Vec<T>),

    /// Positive when the first and last tokens are equal. Empty sequences are
    /// negative.
    FirstEqualsLast,
}

impl<T: PartialEq> LabelRule<T> {
    pub fn label(&self, features: &[T]) -> Label {
        let is_positive = match self {
            LabelRule::Majority(token) => {
                let count = features.iter().filter(|feature| *feature == token).count();
                count * 2 > features.len()
            }
            LabelRule::ContainsMotif(motif) => {
                motif.is_empty()
                    || features
                        .windows(motif.len())
                        .any(|window| window == motif.as_slice())
            }
            LabelRule::FirstEqualsLast => match (features.first(), features.last()) {
                (Some(first), Some(last)) => first == last,
                _ => false,
            },
        };

        if is_positive {
            POSITIVE_LABEL
        } else {
            NEGATIVE_LABEL
        }
    }
}

/// Draws `n_features` random booleans.
pub fn features_boolean(n_features: usize, rng: &mut StdRng) -> Vec<bool> {
    (0..n_features).map(|_| rng.random::<bool>()).collect()
}

/// Draws `n_features` tokens uniformly from `alphabet`.
///
/// # Errors
/// * `Error::InvalidConfig` if the alphabet is empty.
pub fn features_string<T: Clone>(
    n_features: usize,
    alphabet: &[T],
    rng: &mut StdRng,
) -> Result<Vec<T>, Error> {
    if alphabet.is_empty() {
        return Err(Error::InvalidConfig(
            "cannot draw features from an empty alphabet".to_string(),
        ));
    }

    Ok((0..n_features)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())].clone())
        .collect())
}

/// Generates `config.n_samples` labeled samples.
///
/// `generate` is called once per sample with a generator seeded from
/// `config.seed`, so the same config always yields the same dataset.
///
/// # Errors
/// * `Error::InvalidConfig` if `config` does not validate.
/// * Any error returned by `generate`.
pub fn prepare_dataset<T, F>(
    config: &DatasetConfig,
    mut generate: F,
    rule: &LabelRule<T>,
) -> Result<Dataset<T>, Error>
where
    T: PartialEq,
    F: FnMut(&mut StdRng) -> Result<Vec<T>, Error>,
{
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut dataset = Vec::with_capacity(config.n_samples);

    for _ in 0..config.n_samples {
        let features = generate(&mut rng)?;
        let label = rule.label(&features);
        dataset.push(Sample::new(features, label));
    }

    let distribution = count_label_frequencies(&dataset);
    debug!(
        "Generated {} samples (seed {}), label distribution: {:?}",
        dataset.len(),
        config.seed,
        distribution
    );

    if distribution.len() < 2 {
        warn!("Generated dataset contains a single label; consider more samples or another rule");
    }

    Ok(dataset)
}

/// Random boolean features, positive when `true` holds the majority.
///
/// Use an odd `config.n_features` (as in `DEFAULT_BOOLEAN_DATASET_CONFIG`),
/// otherwise evenly split samples are labeled negative.
pub fn prepare_dummy_boolean(config: &DatasetConfig) -> Result<Dataset<bool>, Error> {
    prepare_dataset(
        config,
        |rng| Ok(features_boolean(config.n_features, rng)),
        &LabelRule::Majority(true),
    )
}

/// Random DNA strings, positive when they contain the `A T` motif.
pub fn prepare_dummy_string(config: &DatasetConfig) -> Result<Dataset<char>, Error> {
    prepare_dataset(
        config,
        |rng| features_string(config.n_features, &DNA_ALPHABET, rng),
        &LabelRule::ContainsMotif(DUMMY_STRING_MOTIF.to_vec()),
    )
}
