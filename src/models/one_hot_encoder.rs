use crate::models::{Error, OneHotMatrix, Vocabulary};
use crate::types::{IndexToToken, TokenToIndex};
use crate::utils::argmax;
use std::fmt::Debug;
use std::hash::Hash;

/// Builds the `(token_to_index, index_to_token)` mappings for a sequence.
///
/// Indices follow the order in which tokens first appear.
///
/// # Errors
/// * `Error::EmptyInput` if the sequence has no tokens.
pub fn build_vocabulary<T>(sequence: &[T]) -> Result<(TokenToIndex<T>, IndexToToken<T>), Error>
where
    T: Eq + Hash + Clone,
{
    Ok(Vocabulary::build(sequence)?.into_mappings())
}

/// One-hot encodes a sequence into an `L × V` matrix, where `L` is the sequence
/// length and `V` the size of the mapping.
///
/// Tokens absent from the mapping are rejected rather than added; callers that
/// want to grow a vocabulary do so explicitly with `Vocabulary::upsert_token`.
///
/// # Errors
/// * `Error::UnknownToken` if a token is not a key of `token_to_index`.
/// * `Error::IndexOutOfRange` if the mapping assigns an index outside `[0, V)`.
pub fn encode<T>(sequence: &[T], token_to_index: &TokenToIndex<T>) -> Result<OneHotMatrix, Error>
where
    T: Eq + Hash + Debug,
{
    let vocabulary_size = token_to_index.len();
    let mut matrix = OneHotMatrix::zeros(sequence.len(), vocabulary_size);

    for (row, token) in sequence.iter().enumerate() {
        let index = *token_to_index
            .get(token)
            .ok_or_else(|| Error::UnknownToken(format!("{:?}", token)))?;

        if index >= vocabulary_size {
            return Err(Error::IndexOutOfRange {
                index,
                vocabulary_size,
            });
        }

        matrix.set(row, index, 1.0);
    }

    Ok(matrix)
}

/// Decodes each row of a matrix to the token at its largest column.
///
/// Ties resolve to the lowest column, so soft model outputs can be decoded as
/// well as exact one-hot rows.
///
/// # Errors
/// * `Error::ShapeMismatch` if the matrix has rows but no columns.
/// * `Error::UnknownIndex` if a winning column has no token in `index_to_token`.
pub fn decode<T>(matrix: &OneHotMatrix, index_to_token: &IndexToToken<T>) -> Result<Vec<T>, Error>
where
    T: Clone,
{
    matrix
        .iter_rows()
        .map(|row| {
            let index = argmax(row).ok_or_else(|| {
                Error::ShapeMismatch("cannot decode a row with no columns".to_string())
            })?;

            index_to_token
                .get(&index)
                .cloned()
                .ok_or(Error::UnknownIndex(index))
        })
        .collect()
}
