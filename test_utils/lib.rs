pub mod constants;

use constants::{TEST_COMPANIES_FILE_PATH, TEST_LEGAL_FILE_PATH, TEST_LOCATIONS_FILE_PATH};
use name_components::{ComponentRecord, ReferenceTablePaths, ReferenceTables, Reporter};
use std::sync::Mutex;

/// Paths to the fixture reference sources under `tests/test_files`.
pub fn fixture_paths() -> ReferenceTablePaths {
    ReferenceTablePaths {
        locations: TEST_LOCATIONS_FILE_PATH.clone(),
        legal: TEST_LEGAL_FILE_PATH.clone(),
        companies: TEST_COMPANIES_FILE_PATH.clone(),
    }
}

/// Loads the fixture reference sources.
pub fn load_fixture_tables() -> ReferenceTables {
    ReferenceTables::load(&fixture_paths()).expect("Failed to load fixture reference tables")
}

/// Small in-memory tables for tests which do not need the fixture files.
pub fn in_memory_tables() -> ReferenceTables {
    ReferenceTables::from_parts(
        [
            ("long island", "Long Island, NY"),
            ("new york", "New York, NY"),
            ("boston", "Boston, MA"),
        ],
        ["inc", "llc", "ltd", "corporation"],
        ["Apple Inc.", "Long Island Fishing LLC", "Boston Dynamics"],
    )
}

/// Records every event it receives, for asserting on diagnostics.
#[derive(Default)]
pub struct CapturingReporter {
    pub events: Mutex<Vec<String>>,
}

impl CapturingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("reporter mutex poisoned").clone()
    }

    fn push(&self, event: String) {
        self.events
            .lock()
            .expect("reporter mutex poisoned")
            .push(event);
    }
}

impl Reporter for CapturingReporter {
    fn extraction_completed(&self, record: &ComponentRecord) {
        self.push(format!("completed:{}", record.raw));
    }

    fn extraction_failed(&self, error: &name_components::Error) {
        self.push(format!("failed:{}", error));
    }

    fn batch_started(&self, total_names: usize, _num_workers: usize) {
        self.push(format!("batch_started:{}", total_names));
    }

    fn batch_completed(&self, total_records: usize, total_failures: usize) {
        self.push(format!(
            "batch_completed:{}:{}",
            total_records, total_failures
        ));
    }

    fn classifier_loaded(&self, model_id: &str, feature_count: usize) {
        self.push(format!("classifier_loaded:{}:{}", model_id, feature_count));
    }

    fn classifier_predicted(&self, model_id: &str, name: &str, contains_legal: bool) {
        self.push(format!(
            "classifier_predicted:{}:{}:{}",
            model_id, name, contains_legal
        ));
    }

    fn classifier_failed(&self, error: &name_components::Error) {
        self.push(format!("classifier_failed:{}", error));
    }
}
