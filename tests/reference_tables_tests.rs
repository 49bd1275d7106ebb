use flate2::write::GzEncoder;
use flate2::Compression;
use name_components::{Error, ReferenceTablePaths, ReferenceTables};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use test_utils::constants::{TEST_COMPANY_COUNT, TEST_LEGAL_FILE_PATH, TEST_LOCATIONS_FILE_PATH};
use test_utils::{fixture_paths, load_fixture_tables};

#[cfg(test)]
mod reference_tables_tests {
    use super::*;

    fn write_gzip(path: &Path, contents: &str) {
        let file = File::create(path).expect("Failed to create gzip file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(contents.as_bytes())
            .expect("Failed to compress contents");
        encoder.finish().expect("Failed to finalize compression");
    }

    #[test]
    fn test_loads_fixture_files() {
        let tables = load_fixture_tables();

        assert_eq!(tables.locations().len(), 6);
        assert_eq!(tables.legal().len(), 9);
        assert_eq!(tables.companies().len(), TEST_COMPANY_COUNT);

        // Keys are normalized the same way query names are
        assert!(tables.legal().contains("inc"));
        assert!(tables.legal().contains("lp"));
        assert!(tables.legal().contains("sa"));
        assert!(!tables.legal().contains("Inc."));

        assert_eq!(
            tables.locations().get("san francisco").map(String::as_str),
            Some("San Francisco, CA")
        );
    }

    #[test]
    fn test_company_names_keep_corpus_order() {
        let tables = load_fixture_tables();
        let names: Vec<&str> = tables.company_names().collect();

        assert_eq!(names.first(), Some(&"Apple Inc."));
        assert_eq!(names.last(), Some(&"Deutsche Bank GmbH"));
    }

    #[test]
    fn test_missing_source_names_the_resource() {
        let paths = ReferenceTablePaths {
            companies: PathBuf::from("does/not/exist/companies.txt"),
            ..fixture_paths()
        };

        match ReferenceTables::load(&paths) {
            Err(Error::ReferenceLoadError { source_name, .. }) => {
                assert!(source_name.ends_with("companies.txt"))
            }
            other => panic!("expected ReferenceLoadError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_locations_file_is_fatal() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let locations_path = dir.path().join("locations.tsv");
        fs::write(&locations_path, "boston\tBoston\tMA\n").expect("Failed to write locations");

        let paths = ReferenceTablePaths {
            locations: locations_path,
            ..fixture_paths()
        };

        let err = ReferenceTables::load(&paths).expect_err("expected a load error");
        assert!(err.to_string().contains("locations.tsv"));
    }

    #[test]
    fn test_loads_gzip_sources() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let companies_path = dir.path().join("companies.txt.gz");
        write_gzip(&companies_path, "Apple Inc.\nAcme LLC\n");

        let paths = ReferenceTablePaths {
            locations: TEST_LOCATIONS_FILE_PATH.clone(),
            legal: TEST_LEGAL_FILE_PATH.clone(),
            companies: companies_path,
        };

        let tables = ReferenceTables::load(&paths).expect("Failed to load gzip tables");
        assert_eq!(
            tables.company_names().collect::<Vec<_>>(),
            vec!["Apple Inc.", "Acme LLC"]
        );
    }
}
