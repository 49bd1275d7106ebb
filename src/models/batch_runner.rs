use crate::constants::{OUTPUT_CSV_HEADER, PARSED_COMPANY_NAMES_CSV_FILE_PATH, WORKERS_ENV_VAR};
use crate::models::reporter::LOG_REPORTER;
use crate::models::{ComponentExtractor, ComponentRecord, ReferenceTables, Reporter};
use crate::types::RawName;
use crate::Error;
use csv::Writer;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::any::Any;
use std::fs::File;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRunnerConfig {
    /// Worker pool size; `None` uses one worker per available CPU.
    pub num_workers: Option<usize>,
    /// Where `run_and_write` puts the artifact; `None` uses the default data path.
    pub output_path: Option<PathBuf>,
}

impl BatchRunnerConfig {
    /// Parses a worker count such as the value of `NAME_COMPONENTS_WORKERS`.
    pub fn parse_num_workers(value: &str) -> Result<usize, Error> {
        match value.trim().parse::<usize>() {
            Ok(num_workers) if num_workers > 0 => Ok(num_workers),
            _ => Err(Error::ConfigError(format!(
                "{}={:?} is not a positive worker count",
                WORKERS_ENV_VAR, value
            ))),
        }
    }
}

/// A name whose extraction failed. Its row in the output is null-filled.
#[derive(Debug)]
pub struct BatchFailure {
    pub raw: RawName,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct BatchResult {
    records: Vec<ComponentRecord>,
    failures: Vec<BatchFailure>,
}

impl BatchResult {
    /// One record per input name, including null-filled records for failed names.
    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the header row followed by one row per record.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(OUTPUT_CSV_HEADER)?;
        for record in &self.records {
            csv_writer.write_record(record.to_csv_row())?;
        }

        csv_writer.flush()?;

        Ok(())
    }

    pub fn write_csv_to_path(&self, path: &Path) -> Result<(), Error> {
        let file = File::create(path)?;

        self.write_csv(file)
    }
}

/// Fans `ComponentExtractor::extract` out over a worker pool.
///
/// The tables are only ever borrowed immutably, so every worker reads the same copy. A panic while
/// processing one name is caught and recorded as a failure for that name; the rest of the batch
/// carries on. Only pool construction can fail the batch as a whole.
pub struct BatchRunner<'a> {
    config: BatchRunnerConfig,
    tables: &'a ReferenceTables,
    reporter: &'a dyn Reporter,
}

impl<'a> BatchRunner<'a> {
    pub fn new(config: BatchRunnerConfig, tables: &'a ReferenceTables) -> Self {
        Self::with_reporter(config, tables, &LOG_REPORTER)
    }

    pub fn with_reporter(
        config: BatchRunnerConfig,
        tables: &'a ReferenceTables,
        reporter: &'a dyn Reporter,
    ) -> Self {
        BatchRunner {
            config,
            tables,
            reporter,
        }
    }

    pub fn num_workers(&self) -> usize {
        self.config
            .num_workers
            .filter(|&num_workers| num_workers > 0)
            .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()))
    }

    /// Extracts components for every name.
    ///
    /// Records come back in input order, though callers should not depend on it.
    pub fn run_all<S>(&self, names: &[S]) -> Result<BatchResult, Error>
    where
        S: AsRef<str> + Sync,
    {
        let num_workers = self.num_workers();
        self.reporter.batch_started(names.len(), num_workers);

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .thread_name(|idx| format!("name-components-worker-{}", idx))
            .build()?;

        let extractor = ComponentExtractor::with_reporter(self.tables, self.reporter);

        let outcomes: Vec<Result<ComponentRecord, Error>> = pool.install(|| {
            names
                .par_iter()
                .map(|name| extract_isolated(&extractor, name.as_ref()))
                .collect()
        });

        let mut result = BatchResult {
            records: Vec::with_capacity(names.len()),
            failures: Vec::new(),
        };

        for (name, outcome) in names.iter().zip(outcomes) {
            match outcome {
                Ok(record) => result.records.push(record),
                Err(error) => {
                    self.reporter.extraction_failed(&error);

                    result.records.push(ComponentRecord::new(name.as_ref()));
                    result.failures.push(BatchFailure {
                        raw: name.as_ref().to_string(),
                        error,
                    });
                }
            }
        }

        self.reporter
            .batch_completed(result.records.len(), result.failures.len());

        Ok(result)
    }

    /// Extracts components for the company-name corpus held in the tables.
    pub fn run_all_from_tables(&self) -> Result<BatchResult, Error> {
        let names: Vec<&str> = self.tables.company_names().collect();

        self.run_all(&names)
    }

    /// Runs the corpus batch and writes the artifact once every name has been processed.
    pub fn run_and_write(&self) -> Result<BatchResult, Error> {
        let result = self.run_all_from_tables()?;

        let output_path = self
            .config
            .output_path
            .clone()
            .unwrap_or_else(|| PARSED_COMPANY_NAMES_CSV_FILE_PATH.clone());

        result.write_csv_to_path(&output_path)?;

        Ok(result)
    }
}

fn extract_isolated(extractor: &ComponentExtractor, raw: &str) -> Result<ComponentRecord, Error> {
    panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(raw))).map_err(|payload| {
        Error::ExtractionError {
            raw: raw.to_string(),
            message: panic_message(payload.as_ref()),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
