use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static LOCATIONS_TSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "locations.tsv"));

pub static LEGAL_TXT_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "legal.txt"));

pub static COMPANIES_TXT_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "companies.txt"));

pub static PARSED_COMPANY_NAMES_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "company_names_parsed.csv"));

pub static LEGAL_CLASSIFIER_WEIGHTS_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "legal_classifier_weights.tsv"));

/// Column order of the batch output artifact.
pub const OUTPUT_CSV_HEADER: [&str; 4] = ["raw", "legal", "location", "base_name"];

pub const DEFAULT_LEGAL_CLASSIFIER_MODEL_ID: &str = "legal-keyword-identifier@1";

/// Reserved feature name holding the intercept in a classifier weight file.
pub const LEGAL_CLASSIFIER_BIAS_FEATURE: &str = "__bias__";

pub const LEGAL_CLASSIFIER_DECISION_THRESHOLD: f32 = 0.5;

pub const WORKERS_ENV_VAR: &str = "NAME_COMPONENTS_WORKERS";

pub const MODEL_PATH_ENV_VAR: &str = "NAME_COMPONENTS_MODEL";

pub const GZIP_FILE_EXTENSION: &str = "gz";
