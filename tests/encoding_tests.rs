use seq_onehot::{build_vocabulary, decode, encode, Error, IndexToToken, OneHotMatrix, TokenToIndex};
use std::collections::{HashMap, HashSet};
use test_utils::assert_one_hot_rows;

#[cfg(test)]
mod build_vocabulary_tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct_tokens() {
        let sequence: Vec<char> = "GATTACAGATTACA".chars().collect();
        let (token_to_index, index_to_token) = build_vocabulary(&sequence).unwrap();

        let distinct: HashSet<char> = sequence.iter().copied().collect();
        let keys: HashSet<char> = token_to_index.keys().copied().collect();
        assert_eq!(keys, distinct);

        let mut indices: Vec<usize> = token_to_index.values().copied().collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..distinct.len()).collect::<Vec<_>>());

        for (token, index) in &token_to_index {
            assert_eq!(index_to_token.get(index), Some(token));
        }
    }

    #[test]
    fn test_string_tokens() {
        let sequence = vec!["ala", "gly", "ala", "ser"];
        let (token_to_index, _) = build_vocabulary(&sequence).unwrap();

        assert_eq!(token_to_index.len(), 3);
        assert_eq!(token_to_index["ala"], 0);
        assert_eq!(token_to_index["gly"], 1);
        assert_eq!(token_to_index["ser"], 2);
    }

    #[test]
    fn test_empty_sequence() {
        let result = build_vocabulary::<char>(&[]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }
}

#[cfg(test)]
mod encode_decode_tests {
    use super::*;

    #[test]
    fn test_encode_dna_identity() {
        let token_to_index: TokenToIndex<char> =
            HashMap::from([('A', 0), ('T', 1), ('G', 2), ('C', 3)]);

        let matrix = encode(&['A', 'T', 'G', 'C'], &token_to_index).unwrap();

        let expected = OneHotMatrix::from_rows(vec![
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_decode_rows() {
        let index_to_token: IndexToToken<char> = HashMap::from([(0, 'x'), (1, 'y'), (2, 'z')]);
        let matrix =
            OneHotMatrix::from_rows(vec![vec![0.0, 1.0, 0.0], vec![1.0, 0.0, 0.0]]).unwrap();

        assert_eq!(decode(&matrix, &index_to_token).unwrap(), vec!['y', 'x']);
    }

    #[test]
    fn test_round_trip() {
        let sequences = [
            "ATGCATGC",
            "GGGGAAAATTTTCCCC",
            "MKVLAAGIVGLLLAQS",
            "A",
        ];

        for text in sequences {
            let sequence: Vec<char> = text.chars().collect();
            let (token_to_index, index_to_token) = build_vocabulary(&sequence).unwrap();

            let matrix = encode(&sequence, &token_to_index).unwrap();
            assert_one_hot_rows(&matrix);
            assert!(matrix.row_sums().iter().all(|&sum| sum == 1.0));

            assert_eq!(decode(&matrix, &index_to_token).unwrap(), sequence);
        }
    }

    #[test]
    fn test_round_trip_on_subsequence() {
        let (token_to_index, index_to_token) = build_vocabulary(&['A', 'T', 'G', 'C']).unwrap();
        let sequence = ['C', 'C', 'A'];

        let matrix = encode(&sequence, &token_to_index).unwrap();
        assert_eq!(matrix.shape(), (3, 4));
        assert_eq!(decode(&matrix, &index_to_token).unwrap(), sequence.to_vec());
    }

    #[test]
    fn test_unknown_token() {
        let (token_to_index, _) = build_vocabulary(&['A', 'T', 'G', 'C']).unwrap();

        let result = encode(&['A', 'U'], &token_to_index);
        assert!(matches!(result, Err(Error::UnknownToken(_))));
    }

    #[test]
    fn test_quantized_audio_tokens() {
        let levels: Vec<usize> = vec![0, 15, 7, 7, 8, 15];
        let (token_to_index, index_to_token) = build_vocabulary(&levels).unwrap();

        let matrix = encode(&levels, &token_to_index).unwrap();
        assert_eq!(matrix.shape(), (6, 4));
        assert_eq!(decode(&matrix, &index_to_token).unwrap(), levels);
    }
}
