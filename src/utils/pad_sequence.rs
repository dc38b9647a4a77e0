/// Pad a sequence with `pad_token` to the desired length. Longer sequences are
/// returned unchanged.
pub fn pad_sequence<T: Clone>(sequence: &[T], length: usize, pad_token: &T) -> Vec<T> {
    let mut padded = sequence.to_vec();
    if padded.len() < length {
        padded.resize(length, pad_token.clone());
    }
    padded
}

/// Pad every sequence to the length of the longest one in the batch.
pub fn pad_sequences<T: Clone, S: AsRef<[T]>>(sequences: &[S], pad_token: &T) -> Vec<Vec<T>> {
    let max_length = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);

    sequences
        .iter()
        .map(|sequence| pad_sequence(sequence.as_ref(), max_length, pad_token))
        .collect()
}
