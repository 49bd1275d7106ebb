use log::error;
use name_components::constants::{
    DEFAULT_LEGAL_CLASSIFIER_MODEL_ID, LEGAL_CLASSIFIER_WEIGHTS_FILE_PATH, MODEL_PATH_ENV_VAR,
};
use name_components::{LegalClassifier, TokenWeightLegalClassifier};
use std::env;
use std::path::PathBuf;

/// Usage: check-legal-identifier [NAME]...
///
/// Prints `true`, `false`, or `unknown` for each name.
fn main() {
    env_logger::init();

    let mut names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        names.push("Apple Inc.".to_string());
    }

    let weights_path = env::var(MODEL_PATH_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| LEGAL_CLASSIFIER_WEIGHTS_FILE_PATH.clone());

    let mut classifier =
        TokenWeightLegalClassifier::new(DEFAULT_LEGAL_CLASSIFIER_MODEL_ID, weights_path);

    if let Err(e) = classifier.load() {
        error!("Error in load: {}", e);
        std::process::exit(1);
    }

    for name in names {
        match classifier.predict(&name) {
            Ok(contains_legal) => println!("{}: {}", name, contains_legal),
            Err(e) => {
                error!("Error in predict: {}", e);
                println!("{}: unknown", name);
            }
        }
    }
}
