use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!(env!("CARGO_MANIFEST_DIR"), "..", "tests", "test_files"));

pub static TEST_LOCATIONS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("locations.tsv"));

pub static TEST_LEGAL_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("legal.txt"));

pub static TEST_COMPANIES_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("companies.txt"));

pub static TEST_CLASSIFIER_WEIGHTS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| TEST_FILES_DIRECTORY.join("legal_classifier_weights.tsv"));

/// Unique company names in `companies.txt`.
pub const TEST_COMPANY_COUNT: usize = 9;
