use name_components::{
    extract_all_name_components, BatchRunner, BatchRunnerConfig, ComponentRecord, Error,
    Reporter, SilentReporter, DEFAULT_BATCH_RUNNER_CONFIG,
};
use std::collections::HashSet;
use test_utils::constants::TEST_COMPANY_COUNT;
use test_utils::{in_memory_tables, load_fixture_tables, CapturingReporter};

#[cfg(test)]
mod batch_runner_tests {
    use super::*;

    fn config(num_workers: usize) -> BatchRunnerConfig {
        BatchRunnerConfig {
            num_workers: Some(num_workers),
            output_path: None,
        }
    }

    /// Panics while processing one specific name.
    struct ExplodingReporter;

    impl Reporter for ExplodingReporter {
        fn extraction_started(&self, raw: &str) {
            if raw == "Explode Corp" {
                panic!("corrupted table access");
            }
        }
    }

    #[test]
    fn test_one_record_per_name() {
        let tables = in_memory_tables();
        let names: Vec<String> = (0..250).map(|i| format!("Company {} LLC", i)).collect();

        let result = BatchRunner::with_reporter(config(4), &tables, &SilentReporter)
            .run_all(&names)
            .unwrap();

        assert_eq!(result.len(), names.len());
        assert_eq!(result.failure_count(), 0);

        let raws: HashSet<&str> = result.records().iter().map(|r| r.raw.as_str()).collect();
        let expected: HashSet<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(raws, expected);
        assert!(result
            .records()
            .iter()
            .all(|r| r.legal.as_deref() == Some("llc")));
    }

    #[test]
    fn test_matches_sequential_extraction_as_a_set() {
        let tables = load_fixture_tables();
        let names: Vec<&str> = tables.company_names().collect();

        let sequential: HashSet<ComponentRecord> = names
            .iter()
            .map(|name| name_components::extract_name_components(name, &tables))
            .collect();

        for num_workers in [1, 2, 8] {
            let parallel: HashSet<ComponentRecord> =
                BatchRunner::with_reporter(config(num_workers), &tables, &SilentReporter)
                    .run_all(&names)
                    .unwrap()
                    .records()
                    .iter()
                    .cloned()
                    .collect();

            assert_eq!(parallel, sequential, "num_workers: {}", num_workers);
        }
    }

    #[test]
    fn test_runs_over_corpus_in_tables() {
        let tables = load_fixture_tables();

        let result = extract_all_name_components(&tables, DEFAULT_BATCH_RUNNER_CONFIG).unwrap();

        assert_eq!(result.len(), TEST_COMPANY_COUNT);
    }

    #[test]
    fn test_empty_input() {
        let tables = in_memory_tables();
        let names: Vec<&str> = vec![];

        let result = BatchRunner::with_reporter(config(2), &tables, &SilentReporter)
            .run_all(&names)
            .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_default_worker_count_uses_available_parallelism() {
        let tables = in_memory_tables();

        assert!(BatchRunner::new(DEFAULT_BATCH_RUNNER_CONFIG, &tables).num_workers() >= 1);
        assert_eq!(BatchRunner::new(config(3), &tables).num_workers(), 3);
        assert!(BatchRunner::new(config(0), &tables).num_workers() >= 1);
    }

    #[test]
    fn test_parse_num_workers() {
        assert_eq!(BatchRunnerConfig::parse_num_workers("4").unwrap(), 4);
        assert_eq!(BatchRunnerConfig::parse_num_workers(" 16\n").unwrap(), 16);

        for value in ["", "0", "-2", "four"] {
            match BatchRunnerConfig::parse_num_workers(value) {
                Err(Error::ConfigError(msg)) => {
                    assert!(msg.contains("NAME_COMPONENTS_WORKERS"), "msg: {}", msg)
                }
                other => panic!("expected ConfigError for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_failure_is_isolated_and_null_filled() {
        let tables = in_memory_tables();
        let names = ["Apple Inc.", "Explode Corp", "Long Island Fishing LLC"];

        let result = BatchRunner::with_reporter(config(2), &tables, &ExplodingReporter)
            .run_all(&names)
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.failure_count(), 1);

        let failure = &result.failures()[0];
        assert_eq!(failure.raw, "Explode Corp");
        match &failure.error {
            Error::ExtractionError { raw, message } => {
                assert_eq!(raw, "Explode Corp");
                assert!(message.contains("corrupted table access"));
            }
            other => panic!("expected ExtractionError, got {:?}", other),
        }

        assert!(result
            .records()
            .contains(&ComponentRecord::new("Explode Corp")));
        assert!(result
            .records()
            .iter()
            .any(|r| r.raw == "Apple Inc." && r.legal.as_deref() == Some("inc")));
    }

    #[test]
    fn test_reports_batch_progress() {
        let tables = in_memory_tables();
        let reporter = CapturingReporter::default();

        BatchRunner::with_reporter(config(2), &tables, &reporter)
            .run_all(&["Apple Inc.", "Boston Dynamics"])
            .unwrap();

        let events = reporter.events();
        assert_eq!(events.first().map(String::as_str), Some("batch_started:2"));
        assert_eq!(
            events.last().map(String::as_str),
            Some("batch_completed:2:0")
        );
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_csv_artifact_has_header_and_one_row_per_name() {
        let tables = load_fixture_tables();
        let result = BatchRunner::with_reporter(config(2), &tables, &SilentReporter)
            .run_all_from_tables()
            .unwrap();

        let mut buffer = Vec::new();
        result.write_csv(&mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        assert_eq!(headers, vec!["raw", "legal", "location", "base_name"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), TEST_COMPANY_COUNT);

        let tesla = rows
            .iter()
            .find(|row| &row[0] == "Tesla, Inc.")
            .expect("Tesla row missing");
        assert_eq!(&tesla[1], "inc");
        assert_eq!(&tesla[2], "");
        assert_eq!(&tesla[3], "tesla");
    }

    #[test]
    fn test_run_and_write_creates_output_file() {
        let tables = load_fixture_tables();
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("company_names_parsed.csv");

        let config = BatchRunnerConfig {
            num_workers: Some(2),
            output_path: Some(output_path.clone()),
        };

        let result = BatchRunner::with_reporter(config, &tables, &SilentReporter)
            .run_and_write()
            .unwrap();

        let contents = std::fs::read_to_string(&output_path).unwrap();
        assert!(contents.starts_with("raw,legal,location,base_name\n"));
        assert_eq!(contents.lines().count(), result.len() + 1);
    }
}
