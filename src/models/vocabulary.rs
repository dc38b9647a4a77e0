use crate::models::{one_hot_encoder, Error, OneHotMatrix};
use crate::types::{IndexToToken, TokenIndex, TokenToIndex};
use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A struct to map categorical tokens to dense indices and vice versa.
///
/// Indices are handed out in first-occurrence order, starting at zero, and are
/// never reassigned; the mapping is therefore stable for the lifetime of the
/// vocabulary and always contiguous over `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary<T>
where
    T: Eq + Hash + Clone,
{
    /// A map of tokens to their indices.
    token_map: TokenToIndex<T>,

    /// A reverse map of indices back to their tokens.
    reverse_token_map: IndexToToken<T>,

    /// Tracks the next available index for new tokens.
    next_index: TokenIndex,
}

impl<T> Default for Vocabulary<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Vocabulary<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            token_map: HashMap::new(),
            reverse_token_map: HashMap::new(),
            next_index: 0,
        }
    }

    /// Creates a vocabulary from an externally supplied list of tokens.
    ///
    /// Duplicates are ignored; the first occurrence determines the index. Unlike
    /// `build`, an empty list is accepted and yields an empty vocabulary.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut vocabulary = Self::new();
        for token in tokens {
            vocabulary.upsert_token(token);
        }
        vocabulary
    }

    /// Collects the distinct tokens of a sequence.
    ///
    /// # Errors
    /// * `Error::EmptyInput` if the sequence has no tokens.
    pub fn build(sequence: &[T]) -> Result<Self, Error> {
        if sequence.is_empty() {
            return Err(Error::EmptyInput);
        }

        let vocabulary = Self::from_tokens(sequence.iter().cloned());

        debug!(
            "Built vocabulary of {} tokens from a sequence of {}",
            vocabulary.len(),
            sequence.len()
        );

        Ok(vocabulary)
    }

    /// Collects the distinct tokens across a batch of sequences, so that every
    /// sequence in the batch can be encoded against the same columns.
    ///
    /// # Errors
    /// * `Error::EmptyInput` if the batch holds no tokens at all.
    pub fn build_from_batch<S>(sequences: &[S]) -> Result<Self, Error>
    where
        S: AsRef<[T]>,
    {
        let vocabulary = Self::from_tokens(
            sequences
                .iter()
                .flat_map(|sequence| sequence.as_ref().iter().cloned()),
        );

        if vocabulary.is_empty() {
            return Err(Error::EmptyInput);
        }

        debug!(
            "Built vocabulary of {} tokens from a batch of {} sequences",
            vocabulary.len(),
            sequences.len()
        );

        Ok(vocabulary)
    }

    /// Adds a token if it doesn't already exist, and returns its index.
    ///
    /// This is the only way a vocabulary grows; encoding never extends it.
    pub fn upsert_token(&mut self, token: T) -> TokenIndex {
        if let Some(&index) = self.token_map.get(&token) {
            index
        } else {
            let index = self.next_index;
            self.token_map.insert(token.clone(), index);
            self.reverse_token_map.insert(index, token);
            self.next_index += 1;
            index
        }
    }

    /// Gets the index for a token, or `None` if the token is not present.
    pub fn get_token_index(&self, token: &T) -> Option<TokenIndex> {
        self.token_map.get(token).copied()
    }

    /// Gets the token for an index, or `None` if the index is not assigned.
    pub fn get_token_by_index(&self, index: TokenIndex) -> Option<&T> {
        self.reverse_token_map.get(&index)
    }

    pub fn contains(&self, token: &T) -> bool {
        self.token_map.contains_key(token)
    }

    /// Gets the total number of unique tokens.
    pub fn len(&self) -> usize {
        self.token_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_map.is_empty()
    }

    /// Returns the tokens ordered by index.
    pub fn tokens(&self) -> Vec<&T> {
        (0..self.next_index)
            .filter_map(|index| self.reverse_token_map.get(&index))
            .collect()
    }

    pub fn token_to_index(&self) -> &TokenToIndex<T> {
        &self.token_map
    }

    pub fn index_to_token(&self) -> &IndexToToken<T> {
        &self.reverse_token_map
    }

    /// Splits the vocabulary into its `(token_to_index, index_to_token)` mappings.
    pub fn into_mappings(self) -> (TokenToIndex<T>, IndexToToken<T>) {
        (self.token_map, self.reverse_token_map)
    }
}

impl<T> Vocabulary<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// One-hot encodes a sequence against this vocabulary.
    pub fn encode(&self, sequence: &[T]) -> Result<OneHotMatrix, Error> {
        one_hot_encoder::encode(sequence, &self.token_map)
    }

    /// One-hot encodes every sequence of a batch against this vocabulary.
    pub fn encode_batch<S>(&self, sequences: &[S]) -> Result<Vec<OneHotMatrix>, Error>
    where
        S: AsRef<[T]>,
    {
        sequences
            .iter()
            .map(|sequence| self.encode(sequence.as_ref()))
            .collect()
    }

    /// Decodes a one-hot (or score) matrix back into tokens.
    pub fn decode(&self, matrix: &OneHotMatrix) -> Result<Vec<T>, Error> {
        one_hot_encoder::decode(matrix, &self.reverse_token_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_indices() {
        let vocabulary = Vocabulary::build(&['G', 'A', 'G', 'T', 'A']).unwrap();

        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.get_token_index(&'G'), Some(0));
        assert_eq!(vocabulary.get_token_index(&'A'), Some(1));
        assert_eq!(vocabulary.get_token_index(&'T'), Some(2));
        assert_eq!(vocabulary.tokens(), vec![&'G', &'A', &'T']);
    }

    #[test]
    fn test_upsert_returns_existing_index() {
        let mut vocabulary = Vocabulary::new();

        assert_eq!(vocabulary.upsert_token("x".to_string()), 0);
        assert_eq!(vocabulary.upsert_token("y".to_string()), 1);
        assert_eq!(vocabulary.upsert_token("x".to_string()), 0);
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.get_token_by_index(1), Some(&"y".to_string()));
    }

    #[test]
    fn test_build_empty_sequence() {
        let result = Vocabulary::<char>::build(&[]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_build_from_batch_spans_all_sequences() {
        let batch = vec![vec!['A', 'T'], vec![], vec!['G', 'A', 'C']];
        let vocabulary = Vocabulary::build_from_batch(&batch).unwrap();

        assert_eq!(vocabulary.tokens(), vec![&'A', &'T', &'G', &'C']);
    }

    #[test]
    fn test_build_from_batch_without_tokens() {
        let batch: Vec<Vec<char>> = vec![vec![], vec![]];
        let result = Vocabulary::build_from_batch(&batch);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_from_tokens_accepts_empty_list() {
        let vocabulary = Vocabulary::<u8>::from_tokens(Vec::new());
        assert!(vocabulary.is_empty());
    }
}
