use crate::models::ComponentRecord;
use crate::Error;
use log::{debug, error, info};

/// Receives diagnostics from extraction, batch, and classifier code.
///
/// Components take a reporter instead of writing to a process-wide logger, so callers (and tests)
/// decide where diagnostics go. Every method defaults to a no-op.
pub trait Reporter: Send + Sync {
    fn extraction_started(&self, _raw: &str) {}

    fn extraction_completed(&self, _record: &ComponentRecord) {}

    fn extraction_failed(&self, _error: &Error) {}

    fn batch_started(&self, _total_names: usize, _num_workers: usize) {}

    fn batch_completed(&self, _total_records: usize, _total_failures: usize) {}

    fn classifier_loaded(&self, _model_id: &str, _feature_count: usize) {}

    fn classifier_predicted(&self, _model_id: &str, _name: &str, _contains_legal: bool) {}

    fn classifier_failed(&self, _error: &Error) {}
}

/// Forwards every event to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn extraction_started(&self, raw: &str) {
        debug!("Starting text parsing on {:?}", raw);
    }

    fn extraction_completed(&self, record: &ComponentRecord) {
        debug!(
            "Completed name component parsing on {:?}, with result: {:?}",
            record.raw, record
        );
    }

    fn extraction_failed(&self, error: &Error) {
        error!("{}", error);
    }

    fn batch_started(&self, total_names: usize, num_workers: usize) {
        info!(
            "Starting text parsing on {} company names with {} workers",
            total_names, num_workers
        );
    }

    fn batch_completed(&self, total_records: usize, total_failures: usize) {
        info!(
            "Completed text parsing: {} records, {} failures",
            total_records, total_failures
        );
    }

    fn classifier_loaded(&self, model_id: &str, feature_count: usize) {
        info!("Loaded {} with {} features", model_id, feature_count);
    }

    fn classifier_predicted(&self, model_id: &str, name: &str, contains_legal: bool) {
        info!(
            "{} legal identifier inference on {:?}: {}",
            model_id, name, contains_legal
        );
    }

    fn classifier_failed(&self, error: &Error) {
        error!("{}", error);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

pub(crate) static LOG_REPORTER: LogReporter = LogReporter;
