use crate::types::{BaseName, LegalIdentifier, LocationName, RawName};

/// The components of one company name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentRecord {
    pub raw: RawName,
    pub legal: Option<LegalIdentifier>,
    pub location: Option<LocationName>,
    pub base_name: BaseName,
}

impl ComponentRecord {
    /// A record holding only the raw name. Also used as the null-filled row for a failed name.
    pub fn new(raw: &str) -> Self {
        ComponentRecord {
            raw: raw.to_string(),
            legal: None,
            location: None,
            base_name: BaseName::new(),
        }
    }

    /// Whether `value` is already held by the raw, legal, or location field.
    pub fn has_value(&self, value: &str) -> bool {
        self.raw == value
            || self.legal.as_deref() == Some(value)
            || self.location.as_deref() == Some(value)
    }

    /// Fields in output column order; absent components render as empty strings.
    pub fn to_csv_row(&self) -> [&str; 4] {
        [
            self.raw.as_str(),
            self.legal.as_deref().unwrap_or(""),
            self.location.as_deref().unwrap_or(""),
            self.base_name.as_str(),
        ]
    }
}
