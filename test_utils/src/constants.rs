#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_DATASET_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "dummy_string_sample.csv"));

pub const VOCABULARY_DIRECTIVE: &str = "VOCABULARY:";

pub const EXPECTED_VOCABULARY_DIRECTIVE: &str = "EXPECTED_VOCABULARY:";

pub const EXPECTED_FAILURE_DIRECTIVE: &str = "EXPECTED_FAILURE:";

pub const COMMENT_DIRECTIVE: &str = "COMMENT:";
