pub mod error;
pub use error::Error;

pub mod reporter;
pub use reporter::{LogReporter, Reporter, SilentReporter};

pub mod reference_tables;
pub use reference_tables::{ReferenceTable, ReferenceTablePaths, ReferenceTables};

pub mod component_record;
pub use component_record::ComponentRecord;

pub mod component_extractor;
pub use component_extractor::ComponentExtractor;

pub mod batch_runner;
pub use batch_runner::{BatchFailure, BatchResult, BatchRunner, BatchRunnerConfig};

pub mod legal_classifier;
pub use legal_classifier::{LegalClassifier, TokenWeightLegalClassifier};
