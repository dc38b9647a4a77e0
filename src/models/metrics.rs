use crate::constants::METRICS_EPSILON;
use crate::models::{Error, OneHotMatrix};
use crate::types::Label;
use crate::utils::argmax;
use std::fmt;

/// Converts per-class model scores (one row per sample) into predicted labels.
///
/// # Errors
/// * `Error::ShapeMismatch` if the matrix has rows but no columns.
pub fn predictions_from_probabilities(probabilities: &OneHotMatrix) -> Result<Vec<Label>, Error> {
    probabilities
        .iter_rows()
        .map(|row| {
            argmax(row).ok_or_else(|| {
                Error::ShapeMismatch("cannot predict from a row with no columns".to_string())
            })
        })
        .collect()
}

/// Confusion counts of predicted labels against expected ones, relative to a
/// chosen positive label.
///
/// With more than two classes, a sample whose expected and predicted labels
/// differ while neither is the positive label lands in none of the four counts,
/// so they can sum to less than `samples`. `accuracy` still divides by `samples`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub positive_label: Label,
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub samples: usize,
}

impl Metrics {
    /// # Errors
    /// * `Error::EmptyInput` if there is nothing to compare.
    /// * `Error::ShapeMismatch` if the two label lists differ in length.
    pub fn new(
        expected: &[Label],
        predicted: &[Label],
        positive_label: Label,
    ) -> Result<Self, Error> {
        if expected.len() != predicted.len() {
            return Err(Error::ShapeMismatch(format!(
                "{} expected labels but {} predictions",
                expected.len(),
                predicted.len()
            )));
        }

        if expected.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut metrics = Self {
            positive_label,
            true_positives: 0,
            true_negatives: 0,
            false_positives: 0,
            false_negatives: 0,
            samples: expected.len(),
        };

        for (&expected_label, &predicted_label) in expected.iter().zip(predicted) {
            let expected_positive = expected_label == positive_label;
            let predicted_positive = predicted_label == positive_label;

            match (expected_positive, predicted_positive) {
                (true, true) => metrics.true_positives += 1,
                (false, true) => metrics.false_positives += 1,
                (true, false) => metrics.false_negatives += 1,
                (false, false) => {
                    // A wrong class that is not the positive one is still a miss.
                    if expected_label == predicted_label {
                        metrics.true_negatives += 1;
                    }
                }
            }
        }

        Ok(metrics)
    }

    /// Fraction of predictions that matched the expected label exactly.
    pub fn accuracy(&self) -> f32 {
        let correct = self.true_positives + self.true_negatives;
        ratio(correct, self.samples)
    }

    pub fn precision(&self) -> f32 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    pub fn recall(&self) -> f32 {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }
}

fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics (\n\taccuracy: {:.4},\n\tprecision: {:.4},\n\trecall: {:.4}\n)",
            self.accuracy(),
            self.precision(),
            self.recall()
        )
    }
}

fn check_targets(probabilities: &OneHotMatrix, expected: &[Label]) -> Result<(), Error> {
    if probabilities.rows() != expected.len() {
        return Err(Error::ShapeMismatch(format!(
            "{} probability rows but {} expected labels",
            probabilities.rows(),
            expected.len()
        )));
    }

    if expected.is_empty() {
        return Err(Error::EmptyInput);
    }

    if let Some(&label) = expected.iter().find(|&&label| label >= probabilities.cols()) {
        return Err(Error::IndexOutOfRange {
            index: label,
            vocabulary_size: probabilities.cols(),
        });
    }

    Ok(())
}

/// Sums `cell(probability, target)` over every cell, the target being the
/// one-hot row of the expected label.
fn sum_over_cells<F>(probabilities: &OneHotMatrix, expected: &[Label], cell: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    probabilities
        .iter_rows()
        .zip(expected)
        .flat_map(|(row, &label)| {
            row.iter().enumerate().map(move |(column, &probability)| {
                let target = if column == label { 1.0 } else { 0.0 };
                (probability as f64, target)
            })
        })
        .map(|(probability, target)| cell(probability, target))
        .sum()
}

fn cell_mean<F>(probabilities: &OneHotMatrix, expected: &[Label], cell: F) -> Result<f32, Error>
where
    F: Fn(f64, f64) -> f64,
{
    check_targets(probabilities, expected)?;

    let cells = (probabilities.rows() * probabilities.cols()) as f64;
    Ok((sum_over_cells(probabilities, expected, cell) / cells) as f32)
}

/// Binary cross-entropy between per-class probabilities (one row per sample) and
/// the one-hot rows of the expected labels, averaged over every cell.
///
/// Probabilities are clamped to `[METRICS_EPSILON, 1 - METRICS_EPSILON]`, so a
/// confident wrong answer costs a large but finite amount.
///
/// # Errors
/// * `Error::ShapeMismatch` if the row count differs from the label count.
/// * `Error::EmptyInput` if there are no samples.
/// * `Error::IndexOutOfRange` if a label has no column.
pub fn binary_cross_entropy(
    probabilities: &OneHotMatrix,
    expected: &[Label],
) -> Result<f32, Error> {
    cell_mean(probabilities, expected, |probability, target| {
        let probability = probability.clamp(METRICS_EPSILON, 1.0 - METRICS_EPSILON);
        -(target * probability.ln() + (1.0 - target) * (1.0 - probability).ln())
    })
}

/// Mean squared error against the one-hot rows of the expected labels.
pub fn mean_squared_error(
    probabilities: &OneHotMatrix,
    expected: &[Label],
) -> Result<f32, Error> {
    cell_mean(probabilities, expected, |probability, target| {
        (target - probability).powi(2)
    })
}

/// Mean absolute error against the one-hot rows of the expected labels.
pub fn mean_absolute_error(
    probabilities: &OneHotMatrix,
    expected: &[Label],
) -> Result<f32, Error> {
    cell_mean(probabilities, expected, |probability, target| {
        (target - probability).abs()
    })
}

/// Root mean squared logarithmic error against the one-hot rows of the expected
/// labels. Probabilities are expected to be non-negative.
pub fn root_mean_squared_log_error(
    probabilities: &OneHotMatrix,
    expected: &[Label],
) -> Result<f32, Error> {
    let mean = cell_mean(probabilities, expected, |probability, target| {
        (probability.ln_1p() - target.ln_1p()).powi(2)
    })?;

    Ok(mean.sqrt())
}

/// Kullback-Leibler divergence of the predicted distribution from the one-hot
/// target, summed per sample and averaged over samples.
pub fn kullback_leibler_divergence(
    probabilities: &OneHotMatrix,
    expected: &[Label],
) -> Result<f32, Error> {
    check_targets(probabilities, expected)?;

    let total = sum_over_cells(probabilities, expected, |probability, target| {
        target * ((target + METRICS_EPSILON) / (probability + METRICS_EPSILON)).ln()
    });

    Ok((total / expected.len() as f64) as f32)
}
