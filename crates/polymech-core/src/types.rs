//! Build-time error types for the classification stack.

use polymech_types::MechanismCategory;
use thiserror::Error;

/// Errors that can occur while loading a catalog or building the index.
///
/// All variants are configuration defects: they surface during the single
/// build step and are never produced by queries.
#[derive(Error, Debug)]
pub enum MechanismError {
    /// I/O error reading a catalog file.
    #[error("IO error reading catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON parsing error.
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog document is not a JSON object.
    #[error("catalog document must be a JSON object mapping keys to patterns")]
    CatalogNotObject,

    /// A catalog key is missing its `_<variant>` suffix.
    #[error("catalog key is not a qualified pattern key: {key}")]
    UnqualifiedKey {
        /// The offending catalog key.
        key: String,
    },

    /// A catalog value is not a pattern string.
    #[error("catalog pattern for {key} is not a string")]
    NonStringPattern {
        /// The catalog key whose value was malformed.
        key: String,
    },

    /// The same qualified key appeared twice in the catalog input.
    #[error("duplicate catalog key: {key}")]
    DuplicateKey {
        /// The duplicated key.
        key: String,
    },

    /// Variant indices of a class do not run contiguously from 1.
    #[error("variant indices for class {base} are not contiguous from 1 (found {found:?})")]
    NonContiguousVariants {
        /// The class base name.
        base: String,
        /// The variant indices actually present, sorted.
        found: Vec<u16>,
    },

    /// A reaction template references a class the taxonomy does not define.
    #[error("reaction template references unknown class {class} (paired with {partner})")]
    UnknownTemplateClass {
        /// The unknown class base name.
        class: String,
        /// The other class of the template, for the diagnostic.
        partner: String,
    },

    /// The expansion produced the same entry twice within one category.
    #[error("duplicate entry in category {category}: {entry}")]
    DuplicateEntry {
        /// The category the duplicate appeared in.
        category: MechanismCategory,
        /// The duplicated entry, rendered as `a + b`.
        entry: String,
    },
}

/// Result type for catalog and index construction.
pub type MechanismResult<T> = Result<T, MechanismError>;
