use crate::models::reporter::LOG_REPORTER;
use crate::models::{ComponentRecord, ReferenceTables, Reporter};
use crate::utils::{generate_word_combinations, normalize, remove_first_token_run};

pub struct ComponentExtractor<'a> {
    tables: &'a ReferenceTables,
    reporter: &'a dyn Reporter,
}

impl<'a> ComponentExtractor<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self::with_reporter(tables, &LOG_REPORTER)
    }

    pub fn with_reporter(tables: &'a ReferenceTables, reporter: &'a dyn Reporter) -> Self {
        ComponentExtractor { tables, reporter }
    }

    /// Splits `raw` into its legal identifier, location, and base name.
    ///
    /// Word combinations are checked in generation order and the first match wins for each
    /// component. A single word can therefore claim a location before a longer phrase containing it
    /// is reached. Each match removes the first run of whole words equal to it, and the remaining
    /// words, joined by single spaces, become the base name.
    pub fn extract(&self, raw: &str) -> ComponentRecord {
        self.reporter.extraction_started(raw);

        let mut record = ComponentRecord::new(raw);
        let normalized_name = normalize(raw);
        let mut working_tokens: Vec<&str> = normalized_name.split_whitespace().collect();

        for combo in generate_word_combinations(&normalized_name) {
            if record.legal.is_none()
                && self.tables.legal().contains(&combo)
                && !record.has_value(&combo)
            {
                remove_first_token_run(&mut working_tokens, &combo);
                record.legal = Some(combo.clone());
            }

            if record.location.is_none()
                && self.tables.locations().contains(&combo)
                && !record.has_value(&combo)
            {
                remove_first_token_run(&mut working_tokens, &combo);
                record.location = Some(combo);
            }

            if record.legal.is_some() && record.location.is_some() {
                break;
            }
        }

        record.base_name = working_tokens.join(" ");

        self.reporter.extraction_completed(&record);

        record
    }
}
