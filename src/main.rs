use log::{error, info};
use name_components::constants::{PARSED_COMPANY_NAMES_CSV_FILE_PATH, WORKERS_ENV_VAR};
use name_components::{BatchRunner, BatchRunnerConfig, Error, ReferenceTablePaths, ReferenceTables};
use std::env;
use std::path::PathBuf;

/// Usage: name-components-cli [locations.tsv] [legal.txt] [companies.txt] [output.csv]
fn main() {
    // Initialize the logger
    env_logger::init();

    if let Err(e) = run() {
        error!("Error parsing company names: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().skip(1).collect();
    let arg_path = |idx: usize| args.get(idx).map(PathBuf::from);

    let default_paths = ReferenceTablePaths::default();
    let paths = ReferenceTablePaths {
        locations: arg_path(0).unwrap_or(default_paths.locations),
        legal: arg_path(1).unwrap_or(default_paths.legal),
        companies: arg_path(2).unwrap_or(default_paths.companies),
    };
    let output_path = arg_path(3).unwrap_or_else(|| PARSED_COMPANY_NAMES_CSV_FILE_PATH.clone());

    let num_workers = match env::var(WORKERS_ENV_VAR) {
        Ok(value) => Some(BatchRunnerConfig::parse_num_workers(&value)?),
        Err(_) => None,
    };

    let tables = ReferenceTables::load(&paths)?;

    let config = BatchRunnerConfig {
        num_workers,
        output_path: Some(output_path.clone()),
    };

    let result = BatchRunner::new(config, &tables).run_and_write()?;

    info!("Wrote {} rows to {:?}", result.len(), output_path);
    println!(
        "Parsed {} company names ({} failures) into {}",
        result.len(),
        result.failure_count(),
        output_path.display()
    );

    Ok(())
}
