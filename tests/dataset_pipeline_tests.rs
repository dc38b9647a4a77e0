use seq_onehot::{
    count_label_frequencies, encode_sequences, load_dataset, mini_batches,
    predictions_from_probabilities, prepare_dummy_boolean, prepare_dummy_string, save_dataset,
    split_dataset, LabelRule, Metrics, OneHotMatrix, Vocabulary, AMINO_ACID_ALPHABET,
    DEFAULT_BOOLEAN_DATASET_CONFIG, DEFAULT_DATASET_CONFIG, DNA_ALPHABET, DUMMY_STRING_MOTIF, PEPTIDE_PAD_TOKEN, POSITIVE_LABEL,
};
use seq_onehot::{pad_sequences, Label};
use test_utils::{assert_one_hot_rows, load_fixture_dataset};

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_generate_split_batch_encode() {
        let dataset = prepare_dummy_string(&DEFAULT_DATASET_CONFIG).unwrap();
        let split = split_dataset(dataset, &DEFAULT_DATASET_CONFIG).unwrap();

        assert_eq!(split.len(), DEFAULT_DATASET_CONFIG.n_samples);

        let batches = mini_batches(&split.train, DEFAULT_DATASET_CONFIG.batch_number).unwrap();
        assert_eq!(batches.len(), DEFAULT_DATASET_CONFIG.batch_number);
        assert_eq!(
            batches.iter().map(|batch| batch.len()).sum::<usize>(),
            split.train.len()
        );

        let vocabulary = Vocabulary::from_tokens(DNA_ALPHABET);

        for batch in &batches {
            for sample in batch {
                let matrix = vocabulary.encode(&sample.features).unwrap();
                assert_eq!(matrix.shape(), (DEFAULT_DATASET_CONFIG.n_features, 4));
                assert_one_hot_rows(&matrix);
            }
        }
    }

    #[test]
    fn test_encode_boolean_features() {
        let dataset = prepare_dummy_boolean(&DEFAULT_BOOLEAN_DATASET_CONFIG.with_seed(3)).unwrap();
        let features: Vec<Vec<bool>> = dataset
            .iter()
            .map(|sample| sample.features.clone())
            .collect();

        let (vocabulary, matrices) = encode_sequences(&features).unwrap();

        assert_eq!(vocabulary.len(), 2);
        for (sequence, matrix) in features.iter().zip(&matrices) {
            assert_eq!(matrix.shape(), (11, 2));
            assert_eq!(&vocabulary.decode(matrix).unwrap(), sequence);
        }
    }

    #[test]
    fn test_padded_peptides_share_columns() {
        let peptides: Vec<Vec<char>> = ["MKV", "MKVLAAG", "SS"]
            .iter()
            .map(|peptide| peptide.chars().collect())
            .collect();

        let padded = pad_sequences(&peptides, &PEPTIDE_PAD_TOKEN);
        let vocabulary =
            Vocabulary::from_tokens(AMINO_ACID_ALPHABET.into_iter().chain([PEPTIDE_PAD_TOKEN]));
        let matrices = vocabulary.encode_batch(&padded).unwrap();

        assert_eq!(vocabulary.len(), 21);
        assert_eq!(vocabulary.get_token_index(&PEPTIDE_PAD_TOKEN), Some(20));

        for (sequence, matrix) in padded.iter().zip(&matrices) {
            assert_eq!(matrix.shape(), (7, 21));
            assert_one_hot_rows(matrix);
            assert_eq!(&vocabulary.decode(matrix).unwrap(), sequence);
        }

        // "SS" is padded with five pad tokens, all in the last column.
        let short = &matrices[2];
        assert!((2..7).all(|row| short.get(row, 20) == Some(1.0)));
    }

    #[test]
    fn test_fixture_labels_follow_motif_rule() {
        let dataset = load_fixture_dataset();
        let rule = LabelRule::ContainsMotif(DUMMY_STRING_MOTIF.to_vec());

        assert_eq!(dataset.len(), 6);
        for sample in &dataset {
            assert_eq!(sample.label, rule.label(&sample.features));
        }

        let distribution = count_label_frequencies(&dataset);
        assert_eq!(distribution.get(&POSITIVE_LABEL), Some(&3));
    }

    #[test]
    fn test_save_and_load_plain_and_gzip() {
        let dataset = prepare_dummy_string(&DEFAULT_DATASET_CONFIG.with_seed(11)).unwrap();
        let directory = tempfile::tempdir().expect("Failed to create temp dir");

        for file_name in ["dataset.csv", "dataset.csv.gz"] {
            let path = directory.path().join(file_name);

            save_dataset(&dataset, &path).unwrap();
            let loaded = load_dataset::<char, _>(&path).unwrap();

            assert_eq!(loaded, dataset);
        }
    }

    #[test]
    fn test_metrics_on_decoded_predictions() {
        let expected: Vec<Label> = vec![1, 0, 1, 0];
        let probabilities = OneHotMatrix::from_rows(vec![
            vec![0.2, 0.8],
            vec![0.6, 0.4],
            vec![0.7, 0.3],
            vec![0.1, 0.9],
        ])
        .unwrap();

        let predicted = predictions_from_probabilities(&probabilities).unwrap();
        let metrics = Metrics::new(&expected, &predicted, POSITIVE_LABEL).unwrap();

        assert_eq!(predicted, vec![1, 0, 0, 1]);
        assert_eq!(metrics.accuracy(), 0.5);
        assert_eq!(metrics.precision(), 0.5);
        assert_eq!(metrics.recall(), 0.5);
    }
}
