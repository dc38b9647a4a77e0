use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A dense, zero-based index assigned to a vocabulary token. Indices double as
/// column positions in a one-hot matrix.
pub type TokenIndex = usize;

/// Maps each vocabulary token to its `TokenIndex`.
pub type TokenToIndex<T> = HashMap<T, TokenIndex>;

/// The inverse of `TokenToIndex`, used when decoding one-hot rows back into tokens.
pub type IndexToToken<T> = HashMap<TokenIndex, T>;

/// A class index attached to a sample (e.g. `0` for negative, `1` for positive).
pub type Label = usize;

/// A single value of a one-hot matrix. Model outputs fed back into `decode` may be
/// soft probabilities, so this is a float rather than a bit.
pub type OneHotValue = f32;

/// An ordered list of labeled samples.
pub type Dataset<T> = Vec<Sample<T>>;

/// Number of samples observed per label, keyed by `Label`.
pub type LabelDistribution = HashMap<Label, usize>;

/// One labeled sequence of categorical tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<T> {
    pub features: Vec<T>,
    pub label: Label,
}

impl<T> Sample<T> {
    pub fn new(features: Vec<T>, label: Label) -> Self {
        Self { features, label }
    }
}
