use crate::constants::{COMPANIES_TXT_FILE_PATH, LEGAL_TXT_FILE_PATH, LOCATIONS_TSV_FILE_PATH};
use crate::types::{LocationDisplayName, SourceIndex};
use crate::utils::{normalize_key, read_source_to_string};
use crate::Error;
use csv::ReaderBuilder;
use log::info;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// An exact-match dictionary which remembers key insertion order.
#[derive(Debug, Clone)]
pub struct ReferenceTable<V> {
    entries: HashMap<String, V>,
    keys: Vec<String>,
}

impl<V> Default for ReferenceTable<V> {
    fn default() -> Self {
        ReferenceTable {
            entries: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<V> ReferenceTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from already-normalized keys. Duplicate keys keep their first value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, V)>,
    {
        let mut table = Self::new();
        for (key, value) in entries {
            table.insert(key, value);
        }
        table
    }

    /// Inserts `key` unless it is already present; the first value wins.
    fn insert(&mut self, key: String, value: V) {
        if self.entries.contains_key(&key) {
            return;
        }

        self.keys.push(key.clone());
        self.entries.insert(key, value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Keys in the order they were first inserted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|key| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Locations of the three reference sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTablePaths {
    pub locations: PathBuf,
    pub legal: PathBuf,
    pub companies: PathBuf,
}

impl Default for ReferenceTablePaths {
    fn default() -> Self {
        ReferenceTablePaths {
            locations: LOCATIONS_TSV_FILE_PATH.clone(),
            legal: LEGAL_TXT_FILE_PATH.clone(),
            companies: COMPANIES_TXT_FILE_PATH.clone(),
        }
    }
}

/// The immutable lookup data shared by every extraction.
///
/// Legal and location keys are normalized exactly like query names, so that `"L.L.C."` in the
/// source matches the combination `"llc"`. Company names are kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    locations: ReferenceTable<LocationDisplayName>,
    legal: ReferenceTable<SourceIndex>,
    companies: ReferenceTable<SourceIndex>,
}

impl ReferenceTables {
    /// Loads all three sources. Any missing or malformed source aborts the load.
    pub fn load(paths: &ReferenceTablePaths) -> Result<Self, Error> {
        info!("Loading reference tables...");

        let tables = Self::from_sources(
            (&paths.locations, &read_source_to_string(&paths.locations)?),
            (&paths.legal, &read_source_to_string(&paths.legal)?),
            (&paths.companies, &read_source_to_string(&paths.companies)?),
        )?;

        info!(
            "Loaded {} locations, {} legal identifiers, {} company names",
            tables.locations.len(),
            tables.legal.len(),
            tables.companies.len()
        );

        Ok(tables)
    }

    /// Parses the three sources from their text contents. Each tuple pairs the source's path
    /// (used in error messages) with its contents.
    pub fn from_sources(
        locations: (&Path, &str),
        legal: (&Path, &str),
        companies: (&Path, &str),
    ) -> Result<Self, Error> {
        Ok(ReferenceTables {
            locations: parse_locations(locations.0, locations.1)?,
            legal: parse_legal(legal.1),
            companies: parse_companies(companies.1),
        })
    }

    /// Builds tables in memory. Location and legal keys are normalized; company names are not.
    pub fn from_parts<'s, L, G, C>(locations: L, legal: G, companies: C) -> Self
    where
        L: IntoIterator<Item = (&'s str, &'s str)>,
        G: IntoIterator<Item = &'s str>,
        C: IntoIterator<Item = &'s str>,
    {
        let locations = locations
            .into_iter()
            .map(|(key, display_name)| (normalize_key(key), display_name.to_string()))
            .filter(|(key, _)| !key.is_empty());

        let legal = legal
            .into_iter()
            .enumerate()
            .map(|(index, key)| (normalize_key(key), index))
            .filter(|(key, _)| !key.is_empty());

        let companies = companies
            .into_iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), index));

        ReferenceTables {
            locations: ReferenceTable::from_entries(locations),
            legal: ReferenceTable::from_entries(legal),
            companies: ReferenceTable::from_entries(companies),
        }
    }

    pub fn locations(&self) -> &ReferenceTable<LocationDisplayName> {
        &self.locations
    }

    pub fn legal(&self) -> &ReferenceTable<SourceIndex> {
        &self.legal
    }

    pub fn companies(&self) -> &ReferenceTable<SourceIndex> {
        &self.companies
    }

    /// Company names in corpus order, without duplicates.
    pub fn company_names(&self) -> impl Iterator<Item = &str> {
        self.companies.keys()
    }
}

fn parse_locations(path: &Path, tsv: &str) -> Result<ReferenceTable<LocationDisplayName>, Error> {
    let source_name = path.display().to_string();
    let mut table = ReferenceTable::new();

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(Cursor::new(tsv));

    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::reference_load(&source_name, e.to_string()))?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        if record.len() != 2 {
            return Err(Error::reference_load(
                &source_name,
                format!(
                    "row {} has {} columns; expected key and display name",
                    row_idx + 1,
                    record.len()
                ),
            ));
        }

        let key = normalize_key(&record[0]);
        if key.is_empty() {
            return Err(Error::reference_load(
                &source_name,
                format!("row {} has an empty location key", row_idx + 1),
            ));
        }

        let display_name = record[1].trim_end_matches(['\r', '\n']).to_string();
        table.insert(key, display_name);
    }

    Ok(table)
}

fn parse_legal(text: &str) -> ReferenceTable<SourceIndex> {
    let entries = text
        .lines()
        .enumerate()
        .map(|(index, line)| (normalize_key(line), index))
        .filter(|(key, _)| !key.is_empty());

    ReferenceTable::from_entries(entries)
}

fn parse_companies(text: &str) -> ReferenceTable<SourceIndex> {
    let entries = text
        .lines()
        .enumerate()
        .map(|(index, line)| (line.trim_end_matches('\r'), index))
        .filter(|(line, _)| !line.trim().is_empty())
        .map(|(line, index)| (line.to_string(), index));

    ReferenceTable::from_entries(entries)
}
