use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// The original, unmodified company name as it appeared in the corpus.
pub type RawName = String;

/// A company name after lowercasing and punctuation stripping. Internal whitespace is preserved.
pub type NormalizedName = String;

/// A contiguous run of one or more whitespace-delimited tokens, rejoined with single spaces.
pub type WordCombination = String;

/// A matched legal-entity suffix (e.g. `inc`, `llc`).
pub type LegalIdentifier = String;

/// A matched location token (e.g. `long island`).
pub type LocationName = String;

/// Whatever remains of a name once the legal identifier and location are removed.
pub type BaseName = String;

/// Display value associated with a location key (second column of the locations table).
pub type LocationDisplayName = String;

/// Zero-based line index of an entry within its source.
pub type SourceIndex = usize;

/// Feature weights for the token-weight legal classifier, keyed by word combination.
pub type FeatureWeightMap = HashMap<WordCombination, f32>;
