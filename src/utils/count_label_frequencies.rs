use crate::types::{LabelDistribution, Sample};
use std::collections::HashMap;

/// Counts how many samples carry each label.
///
/// # Arguments
/// * `samples` - A slice of labeled samples to analyze.
///
/// # Returns
/// * A `HashMap` where the keys are labels and the values are their
///   respective frequencies.
pub fn count_label_frequencies<T>(samples: &[Sample<T>]) -> LabelDistribution {
    let mut frequencies: LabelDistribution = HashMap::new();

    for sample in samples {
        *frequencies.entry(sample.label).or_insert(0) += 1;
    }

    frequencies
}
