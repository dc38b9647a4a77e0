use seq_onehot::{load_dataset, Dataset, Error, OneHotMatrix, Vocabulary};
use std::{fs, path::Path};

pub mod constants;
use constants::{
    COMMENT_DIRECTIVE, EXPECTED_FAILURE_DIRECTIVE, EXPECTED_VOCABULARY_DIRECTIVE,
    TEST_DATASET_CSV_PATH, VOCABULARY_DIRECTIVE,
};

const DIRECTIVES: [&str; 4] = [
    VOCABULARY_DIRECTIVE,
    EXPECTED_VOCABULARY_DIRECTIVE,
    EXPECTED_FAILURE_DIRECTIVE,
    COMMENT_DIRECTIVE,
];

// Helper function to get the value following a directive, e.g. `VOCABULARY: A,T,G`
pub fn get_directive(file_path: &Path, directive: &str) -> Option<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content.lines().find_map(|line| {
        let line = line.trim();
        line.strip_prefix(directive)
            .map(|value| value.trim().to_string())
    })
}

// Helper function to read the sequences (every non-directive, non-empty line)
pub fn get_sequences(file_path: &Path) -> Vec<Vec<char>> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .map(str::trim_end)
        .filter(|line| {
            !line.is_empty()
                && !DIRECTIVES
                    .iter()
                    .any(|directive| line.trim_start().starts_with(directive))
        })
        .map(|line| line.chars().collect())
        .collect()
}

/// Parses a comma-separated list of single-character tokens.
pub fn parse_token_list(value: &str) -> Vec<char> {
    value
        .split(',')
        .filter_map(|token| token.trim().chars().next())
        .collect()
}

/// Name of an error variant, as written after `EXPECTED_FAILURE:`.
pub fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::EmptyInput => "EmptyInput",
        Error::UnknownToken(_) => "UnknownToken",
        Error::UnknownIndex(_) => "UnknownIndex",
        Error::IndexOutOfRange { .. } => "IndexOutOfRange",
        Error::RaggedMatrix => "RaggedMatrix",
        Error::ShapeMismatch(_) => "ShapeMismatch",
        Error::InvalidConfig(_) => "InvalidConfig",
        Error::InvalidInput(_) => "InvalidInput",
        Error::ParserError(_) => "ParserError",
        Error::CsvError(_) => "CsvError",
        Error::IoError(_) => "IoError",
    }
}

/// Asserts that every row holds a single `1.0` and zeros elsewhere.
pub fn assert_one_hot_rows(matrix: &OneHotMatrix) {
    for (row_index, row) in matrix.iter_rows().enumerate() {
        let ones = row.iter().filter(|&&value| value == 1.0).count();
        let zeros = row.iter().filter(|&&value| value == 0.0).count();

        assert_eq!(ones, 1, "Row {} should hold exactly one 1.0", row_index);
        assert_eq!(
            zeros,
            row.len() - 1,
            "Row {} should hold only zeros besides the hot column",
            row_index
        );
    }
}

fn encode_file_sequences(
    test_file_path: &Path,
    sequences: &[Vec<char>],
) -> Result<(Vocabulary<char>, Vec<OneHotMatrix>), Error> {
    let vocabulary = match get_directive(test_file_path, VOCABULARY_DIRECTIVE) {
        Some(tokens) => Vocabulary::from_tokens(parse_token_list(&tokens)),
        None => Vocabulary::build_from_batch(sequences)?,
    };

    let matrices = vocabulary.encode_batch(sequences)?;

    Ok((vocabulary, matrices))
}

// Helper function to run the encoding checks for a single test file
pub fn run_test_for_file(test_file_path: &Path) {
    eprintln!("Testing file: {:?}", test_file_path);

    let sequences = get_sequences(test_file_path);
    let expected_failure = get_directive(test_file_path, EXPECTED_FAILURE_DIRECTIVE);

    match (expected_failure, encode_file_sequences(test_file_path, &sequences)) {
        (Some(expected), Err(err)) => {
            assert_eq!(
                error_kind(&err),
                expected,
                "Unexpected failure in {:?}: {}",
                test_file_path,
                err
            );
        }
        (Some(expected), Ok(_)) => {
            panic!(
                "Expected failure {} in {:?}, but encoding succeeded",
                expected, test_file_path
            );
        }
        (None, Err(err)) => {
            panic!("Encoding failed in {:?}: {}", test_file_path, err);
        }
        (None, Ok((vocabulary, matrices))) => {
            if let Some(expected_tokens) =
                get_directive(test_file_path, EXPECTED_VOCABULARY_DIRECTIVE)
            {
                let tokens: Vec<char> = vocabulary.tokens().into_iter().copied().collect();
                assert_eq!(tokens, parse_token_list(&expected_tokens));
            }

            assert_eq!(matrices.len(), sequences.len());

            for (sequence, matrix) in sequences.iter().zip(&matrices) {
                assert_eq!(matrix.shape(), (sequence.len(), vocabulary.len()));
                assert_one_hot_rows(matrix);

                let decoded = vocabulary.decode(matrix).expect("Failed to decode matrix");
                assert_eq!(&decoded, sequence);
            }
        }
    }
}

/// Utility to load the sample dataset fixture for testing and benchmarking.
pub fn load_fixture_dataset() -> Dataset<char> {
    load_dataset(&*TEST_DATASET_CSV_PATH).expect("Failed to load dataset fixture")
}
