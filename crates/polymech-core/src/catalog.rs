//! Monomer pattern catalog.
//!
//! The catalog maps qualified pattern keys (`<class>_<variant>`) to SMARTS
//! pattern strings. It is produced externally by the substructure-rule
//! tooling and consumed here as read-only input; this module validates its
//! shape and fixes a deterministic iteration order.

use std::collections::BTreeMap;
use std::path::Path;

use polymech_types::key;

use crate::types::{MechanismError, MechanismResult};

/// Validated, deterministically ordered monomer pattern catalog.
///
/// Patterns are grouped per class base name; within a class the variant
/// indices must run contiguously from 1, so variant `n` of a class is the
/// `n`-th element of its pattern list.
///
/// # Example
///
/// ```
/// use polymech_core::PatternCatalog;
///
/// let catalog = PatternCatalog::from_json_str(r#"{
///     "smipoly_diol_1": "[OX2H][CX4]",
///     "smipoly_diol_2": "[OX2H][cX3]"
/// }"#).unwrap();
///
/// assert_eq!(catalog.class_count(), 1);
/// assert_eq!(catalog.variant_count("smipoly_diol"), 2);
/// assert_eq!(catalog.pattern("smipoly_diol_2"), Some("[OX2H][cX3]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    /// Patterns per class base name, index i holding variant i+1.
    classes: BTreeMap<String, Vec<String>>,
}

impl PatternCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(qualified key, pattern)` pairs.
    ///
    /// Every key must carry a variant suffix, no key may repeat, and each
    /// class's variants must run contiguously from 1.
    pub fn from_entries<I, K, V>(entries: I) -> MechanismResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut by_class: BTreeMap<String, BTreeMap<u16, String>> = BTreeMap::new();

        for (raw_key, pattern) in entries {
            let raw_key = raw_key.into();
            let Some((base, variant)) = key::split_variant(&raw_key) else {
                return Err(MechanismError::UnqualifiedKey { key: raw_key });
            };
            let variants = by_class.entry(base.to_string()).or_default();
            if variants.insert(variant, pattern.into()).is_some() {
                return Err(MechanismError::DuplicateKey { key: raw_key });
            }
        }

        let mut classes = BTreeMap::new();
        for (base, variants) in by_class {
            let indices: Vec<u16> = variants.keys().copied().collect();
            let contiguous = indices
                .iter()
                .enumerate()
                .all(|(i, &v)| v as usize == i + 1);
            if !contiguous {
                return Err(MechanismError::NonContiguousVariants {
                    base,
                    found: indices,
                });
            }
            classes.insert(base, variants.into_values().collect());
        }

        Ok(Self { classes })
    }

    /// Parses a catalog from a JSON object of key → pattern string.
    pub fn from_json_str(json: &str) -> MechanismResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(map) = value else {
            return Err(MechanismError::CatalogNotObject);
        };

        let mut entries = Vec::with_capacity(map.len());
        for (raw_key, value) in map {
            let serde_json::Value::String(pattern) = value else {
                return Err(MechanismError::NonStringPattern { key: raw_key });
            };
            entries.push((raw_key, pattern));
        }
        Self::from_entries(entries)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> MechanismResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of monomer classes in the catalog.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of pattern variants across all classes.
    pub fn pattern_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    /// Returns true if the catalog has at least one variant for the class.
    pub fn contains_class(&self, base: &str) -> bool {
        self.classes.contains_key(base)
    }

    /// Number of variants for a class, zero when absent.
    pub fn variant_count(&self, base: &str) -> usize {
        self.classes.get(base).map_or(0, Vec::len)
    }

    /// The pattern string behind a qualified key, if present.
    pub fn pattern(&self, qualified: &str) -> Option<&str> {
        let (base, variant) = key::split_variant(qualified)?;
        self.classes
            .get(base)?
            .get(variant as usize - 1)
            .map(String::as_str)
    }

    /// Qualified keys of a class in variant order. Empty when absent.
    pub fn variant_keys(&self, base: &str) -> Vec<String> {
        (1..=self.variant_count(base) as u16)
            .map(|v| key::qualified_key(base, v))
            .collect()
    }

    /// Iterates classes in deterministic (lexicographic) order, yielding
    /// the base name and the patterns in variant order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes.iter().map(|(b, p)| (b.as_str(), p.as_slice()))
    }

    /// Iterates all `(qualified key, pattern)` pairs in deterministic
    /// order: classes lexicographically, variants ascending.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.classes.iter().flat_map(|(base, patterns)| {
            patterns
                .iter()
                .enumerate()
                .map(move |(i, p)| (key::qualified_key(base, i as u16 + 1), p.as_str()))
        })
    }
}
