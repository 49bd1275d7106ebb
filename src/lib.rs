//! Decomposes raw company names into a legal identifier, a location, and a base name.
//!
//! ```
//! use name_components::{extract_name_components, ReferenceTables};
//!
//! let tables = ReferenceTables::from_parts(
//!     [("long island", "Long Island, NY")],
//!     ["inc", "llc"],
//!     Vec::<&str>::new(),
//! );
//!
//! let record = extract_name_components("Long Island Fishing LLC", &tables);
//! assert_eq!(record.legal.as_deref(), Some("llc"));
//! assert_eq!(record.location.as_deref(), Some("long island"));
//! assert_eq!(record.base_name, "fishing");
//! ```

mod config;
pub use config::DEFAULT_BATCH_RUNNER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    BatchFailure, BatchResult, BatchRunner, BatchRunnerConfig, ComponentExtractor,
    ComponentRecord, Error, LegalClassifier, LogReporter, ReferenceTable, ReferenceTablePaths,
    ReferenceTables, Reporter, SilentReporter, TokenWeightLegalClassifier,
};
pub mod types;
mod utils;
pub use types::{
    BaseName, LegalIdentifier, LocationName, NormalizedName, RawName, WordCombination,
};
pub use utils::{generate_word_combinations, normalize};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Extracts the components of a single name, logging through the `log` facade.
pub fn extract_name_components(raw: &str, tables: &ReferenceTables) -> ComponentRecord {
    ComponentExtractor::new(tables).extract(raw)
}

/// Extracts the components of every company name held in `tables`.
pub fn extract_all_name_components(
    tables: &ReferenceTables,
    config: BatchRunnerConfig,
) -> Result<BatchResult, Error> {
    BatchRunner::new(config, tables).run_all_from_tables()
}
