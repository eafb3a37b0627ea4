//! Queryable mechanism index.
//!
//! The index is built once from a pattern catalog and the static
//! taxonomy, then shared read-only. It supports exact key-set lookup,
//! per-monomer partial lookup, the combined classification entry point,
//! and the numeric reaction-number cross-reference.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use polymech_types::well_known::EXTERNAL_MONOMERS;
use polymech_types::{key, MechanismCategory, MechanismEntry, ReactionId, ReactionInfo};

use crate::catalog::PatternCatalog;
use crate::expand;
use crate::normalize;
use crate::taxonomy::{self, ExternalEntry, ReactionTemplate};
use crate::types::{MechanismError, MechanismResult};

#[derive(Debug, Default)]
struct CategoryEntries {
    /// Entries in emission order, for deterministic serialization.
    ordered: Vec<MechanismEntry>,
    /// The same entries, for O(1) exact-match lookup.
    lookup: HashSet<MechanismEntry>,
}

/// Immutable classification index.
///
/// Construction is a pure fold over the catalog and the taxonomy tables;
/// any malformed table fails the build outright. Afterwards the index
/// never changes, so it is safely shared across concurrent readers.
///
/// # Example
///
/// ```
/// use polymech_core::{MechanismIndex, PatternCatalog};
/// use polymech_types::MechanismCategory;
///
/// let catalog = PatternCatalog::from_json_str(r#"{
///     "smipoly_diCOOH_1": "C(=O)O",
///     "smipoly_diol_1": "OCO"
/// }"#).unwrap();
/// let index = MechanismIndex::from_catalog(&catalog).unwrap();
///
/// let mechanisms = index.classify(&["di_carboxylic_acid", "di_ol"]);
/// assert_eq!(mechanisms, [MechanismCategory::StepGrowth]);
/// ```
pub struct MechanismIndex {
    by_category: BTreeMap<MechanismCategory, CategoryEntries>,
    /// Class base name (or external name) → declared category union.
    monomer_categories: HashMap<String, BTreeSet<MechanismCategory>>,
}

impl MechanismIndex {
    /// Builds the index from a pattern catalog and the built-in taxonomy.
    pub fn from_catalog(catalog: &PatternCatalog) -> MechanismResult<Self> {
        let entries = expand::expand(catalog)?;
        Self::from_parts(entries, taxonomy::EXTERNAL_ENTRIES)
    }

    pub(crate) fn from_catalog_with(
        catalog: &PatternCatalog,
        templates: &[ReactionTemplate],
        externals: &[ExternalEntry],
    ) -> MechanismResult<Self> {
        let entries = expand::expand_with(catalog, templates, externals)?;
        Self::from_parts(entries, externals)
    }

    fn from_parts(
        entries: Vec<(MechanismCategory, MechanismEntry)>,
        externals: &[ExternalEntry],
    ) -> MechanismResult<Self> {
        let mut by_category: BTreeMap<MechanismCategory, CategoryEntries> = MechanismCategory::ALL
            .into_iter()
            .map(|cat| (cat, CategoryEntries::default()))
            .collect();

        for (category, entry) in entries {
            let bucket = by_category
                .get_mut(&category)
                .expect("entries are only emitted for real categories");
            if !bucket.lookup.insert(entry.clone()) {
                return Err(MechanismError::DuplicateEntry {
                    category,
                    entry: entry.to_string(),
                });
            }
            bucket.ordered.push(entry);
        }

        Ok(Self {
            by_category,
            monomer_categories: Self::build_monomer_map(externals),
        })
    }

    /// Derives the per-monomer union map: every taxonomy class under its
    /// base name with its full declared category list, every external
    /// name with the categories of the appendix entries it appears in.
    fn build_monomer_map(externals: &[ExternalEntry]) -> HashMap<String, BTreeSet<MechanismCategory>> {
        let mut map: HashMap<String, BTreeSet<MechanismCategory>> = HashMap::new();

        for spec in taxonomy::CLASS_SPECS {
            map.entry(spec.base.to_string())
                .or_default()
                .extend(spec.categories.iter().copied());
        }

        for external in externals {
            for monomer in external.monomers {
                if EXTERNAL_MONOMERS.contains(monomer) {
                    map.entry((*monomer).to_string())
                        .or_default()
                        .insert(external.category);
                }
            }
        }

        map
    }

    /// Returns the category whose entry set equals `keys`, ignoring key
    /// order. `None` when no entry matches. Categories are scanned in
    /// canonical order, so an entry duplicated across categories resolves
    /// to the earliest one.
    pub fn lookup_exact<S: AsRef<str>>(&self, keys: &[S]) -> Option<MechanismCategory> {
        let probe = MechanismEntry::from_keys(keys.iter().map(|k| k.as_ref()));
        self.by_category
            .iter()
            .find(|(_, entries)| entries.lookup.contains(&probe))
            .map(|(category, _)| *category)
    }

    /// Returns the union of each monomer's declared categories. Catalog
    /// keys resolve through their class base name; external names resolve
    /// by themselves. Keys that resolve nothing contribute nothing, and
    /// an empty union degrades to `{Unknown}`.
    pub fn lookup_partial<S: AsRef<str>>(&self, keys: &[S]) -> BTreeSet<MechanismCategory> {
        let mut union = BTreeSet::new();
        for k in keys {
            if let Some(categories) = self.monomer_categories.get(key::base_name(k.as_ref())) {
                union.extend(categories.iter().copied());
            }
        }
        if union.is_empty() {
            union.insert(MechanismCategory::Unknown);
        }
        union
    }

    /// Classifies caller-supplied monomer identifiers.
    ///
    /// Identifiers are normalized and de-duplicated first; an exact match
    /// of the combined key set wins, otherwise the per-monomer union is
    /// returned. Never fails: unresolvable input yields `[Unknown]`.
    pub fn classify<S: AsRef<str>>(&self, names: &[S]) -> Vec<MechanismCategory> {
        let normalized = normalize::normalize_all(names);
        if let Some(category) = self.lookup_exact(&normalized) {
            return vec![category];
        }
        self.lookup_partial(&normalized).into_iter().collect()
    }

    /// Resolves a numeric reaction identifier. See
    /// [`taxonomy::reaction_info`].
    pub fn reaction_info(&self, number: ReactionId) -> ReactionInfo {
        taxonomy::reaction_info(number)
    }

    /// The entries of one category, in deterministic emission order.
    pub fn entries(&self, category: MechanismCategory) -> &[MechanismEntry] {
        self.by_category
            .get(&category)
            .map_or(&[], |entries| entries.ordered.as_slice())
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.by_category.values().map(|e| e.ordered.len()).sum()
    }

    /// Number of entries in one category.
    pub fn entry_count_for(&self, category: MechanismCategory) -> usize {
        self.entries(category).len()
    }

    /// Number of monomer names (class bases plus externals) the partial
    /// lookup can resolve.
    pub fn monomer_count(&self) -> usize {
        self.monomer_categories.len()
    }

    /// The declared category union of one monomer name, resolved like
    /// [`lookup_partial`](Self::lookup_partial) resolves a single key.
    pub fn categories_for_monomer(&self, monomer: &str) -> Option<&BTreeSet<MechanismCategory>> {
        self.monomer_categories.get(key::base_name(monomer))
    }

    /// Serializes the index as a pretty-printed JSON dictionary, category
    /// names mapping to entry lists in deterministic order.
    pub fn to_json_pretty(&self) -> MechanismResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Debug for MechanismIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("MechanismIndex");
        for (category, entries) in &self.by_category {
            s.field(category.name(), &entries.ordered.len());
        }
        s.field("monomers", &self.monomer_categories.len());
        s.finish()
    }
}

impl Serialize for MechanismIndex {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.by_category.len()))?;
        for (category, entries) in &self.by_category {
            map.serialize_entry(category.name(), &OrderedEntries(&entries.ordered))?;
        }
        map.end()
    }
}

struct OrderedEntries<'a>(&'a [MechanismEntry]);

impl Serialize for OrderedEntries<'_> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for entry in self.0 {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymech_types::well_known::*;
    use polymech_types::MechanismCategory::*;

    fn catalog(classes: &[(&str, usize)]) -> PatternCatalog {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (base, count) in classes {
            for v in 1..=*count {
                entries.push((format!("{base}_{v}"), format!("pattern-{base}-{v}")));
            }
        }
        PatternCatalog::from_entries(entries).unwrap()
    }

    fn sample_index() -> MechanismIndex {
        let catalog = catalog(&[
            (DI_CARBOXYLIC_ACID, 6),
            (DI_OL, 4),
            (DI_AMINE, 2),
            (VINYL, 2),
            (CYCLIC_OLEFIN, 2),
            (CYCLIC_OLEFIN_ROMP, 1),
            (ALIPHATIC_OLEFIN, 2),
            (EPOXIDE, 2),
            (CYCLIC_ANHYDRIDE, 1),
        ]);
        MechanismIndex::from_catalog(&catalog).unwrap()
    }

    #[test]
    fn test_exact_lookup_is_order_insensitive() {
        let index = sample_index();
        let forward = index.lookup_exact(&["smipoly_diCOOH_3", "smipoly_diol_2"]);
        let backward = index.lookup_exact(&["smipoly_diol_2", "smipoly_diCOOH_3"]);
        assert_eq!(forward, Some(StepGrowth));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_exact_lookup_scenario_counts() {
        // diacid 6 variants x diol 4 variants -> 24 step-growth pairs,
        // every one resolvable.
        let index = sample_index();
        for a in 1..=6 {
            for b in 1..=4 {
                let pair = [format!("smipoly_diCOOH_{a}"), format!("smipoly_diol_{b}")];
                assert_eq!(index.lookup_exact(&pair), Some(StepGrowth));
            }
        }
    }

    #[test]
    fn test_no_invented_pairings() {
        let index = sample_index();
        // Same category, no template: diol + diamine is not a reaction.
        assert_eq!(
            index.lookup_exact(&["smipoly_diol_1", "smipoly_diamin_1"]),
            None
        );
        // Cross-category without a template.
        assert_eq!(
            index.lookup_exact(&["smipoly_diCOOH_1", "smipoly_vinyl_1"]),
            None
        );
    }

    #[test]
    fn test_exact_lookup_misses_return_none() {
        let index = sample_index();
        assert_eq!(index.lookup_exact(&["smipoly_unheard_1"]), None);
        assert_eq!(index.lookup_exact::<&str>(&[]), None);
    }

    #[test]
    fn test_partial_lookup_unions_categories() {
        let index = sample_index();
        let union = index.lookup_partial(&["smipoly_diol_3", "smipoly_vinyl_1"]);
        assert_eq!(
            union.into_iter().collect::<Vec<_>>(),
            [StepGrowth, ChainGrowth]
        );
    }

    #[test]
    fn test_partial_lookup_unknown() {
        let index = sample_index();
        let union = index.lookup_partial(&["unmapped_name"]);
        assert_eq!(union.into_iter().collect::<Vec<_>>(), [Unknown]);
    }

    #[test]
    fn test_polymorphic_class_partial_union() {
        let index = sample_index();
        let union = index.lookup_partial(&["smipoly_cycCH_1"]);
        assert_eq!(
            union.into_iter().collect::<Vec<_>>(),
            [ChainGrowth, Metathesis, Special]
        );
    }

    #[test]
    fn test_partial_resolves_any_variant_through_base() {
        let index = sample_index();
        let union = index.lookup_partial(&["smipoly_diCOOH_5"]);
        assert_eq!(union.into_iter().collect::<Vec<_>>(), [StepGrowth]);
    }

    #[test]
    fn test_classify_exact_match_wins() {
        let index = sample_index();
        assert_eq!(
            index.classify(&["di_carboxylic_acid", "di_ol"]),
            [StepGrowth]
        );
        // The COC pairing resolves as special even though both classes
        // also belong to chain growth.
        assert_eq!(
            index.classify(&["cyclic_olefin_romp", "aliphatic_olefin"]),
            [Special]
        );
    }

    #[test]
    fn test_classify_falls_back_to_partial() {
        let index = sample_index();
        // vinyl_2 + diol_1 has no exact entry; the union of the two
        // classes comes back instead.
        assert_eq!(
            index.classify(&["smipoly_vinyl_2", "smipoly_diol_1"]),
            [StepGrowth, ChainGrowth]
        );
        assert_eq!(index.classify(&["no_such_monomer"]), [Unknown]);
    }

    #[test]
    fn test_classify_dedups_input() {
        let index = sample_index();
        // Both spellings normalize to smipoly_vinyl_1, which then matches
        // the single-monomer entry, not the self-pair.
        assert_eq!(index.classify(&["vinyl", "smipoly_vinyl_1"]), [ChainGrowth]);
    }

    #[test]
    fn test_external_entries_resolve() {
        let index = sample_index();
        assert_eq!(index.lookup_exact(&["acetylene"]), Some(ChainGrowth));
        assert_eq!(
            index.lookup_exact(&["di_acid_chloride", "smipoly_diamin_1"]),
            Some(StepGrowth)
        );
        assert_eq!(
            index.classify(&["di_acid_chloride", "di_amine"]),
            [StepGrowth]
        );
        assert_eq!(index.classify(&["cyclic_ether"]), [ChainGrowthRingOpening]);
    }

    #[test]
    fn test_entry_counts() {
        let index = sample_index();
        // Singles: 6+4+2 step, 2+2+2 chain, 1 metathesis, 2+1 ring.
        // Pairs: 24 polyester + 12 polyamide step; vinyl/vinyl 3,
        // vinyl/cOle 4, cOle/cOle 3 chain; cAnhyd/epo 2 ring;
        // cycCH/aliphCH 2 special. External appendix: 2 step, 1 chain,
        // 3 ring, 2 metathesis.
        assert_eq!(index.entry_count_for(StepGrowth), 12 + 36 + 2);
        assert_eq!(index.entry_count_for(ChainGrowth), 6 + 10 + 1);
        assert_eq!(index.entry_count_for(ChainGrowthRingOpening), 3 + 2 + 3);
        assert_eq!(index.entry_count_for(Metathesis), 1 + 2);
        assert_eq!(index.entry_count_for(Special), 2);
        assert_eq!(index.entry_count(), 50 + 17 + 8 + 3 + 2);
    }

    #[test]
    fn test_duplicate_entry_within_category_is_fatal() {
        // Injecting the polyester template twice makes every diacid+diol
        // pair a duplicate within step growth.
        let catalog = catalog(&[(DI_CARBOXYLIC_ACID, 1), (DI_OL, 1)]);
        let twice = [
            ReactionTemplate {
                left: DI_CARBOXYLIC_ACID,
                right: DI_OL,
                category: StepGrowth,
            },
            ReactionTemplate {
                left: DI_CARBOXYLIC_ACID,
                right: DI_OL,
                category: StepGrowth,
            },
        ];
        let err = MechanismIndex::from_catalog_with(&catalog, &twice, &[]).unwrap_err();
        assert!(matches!(err, MechanismError::DuplicateEntry { .. }));
    }

    #[test]
    fn test_same_entry_may_appear_across_categories() {
        // A template category clash across categories is legal; only
        // within-category duplicates are rejected.
        let catalog = catalog(&[(VINYL, 1), (CYCLIC_OLEFIN, 1)]);
        let cross = [
            ReactionTemplate {
                left: VINYL,
                right: CYCLIC_OLEFIN,
                category: ChainGrowth,
            },
            ReactionTemplate {
                left: VINYL,
                right: CYCLIC_OLEFIN,
                category: Special,
            },
        ];
        let index = MechanismIndex::from_catalog_with(&catalog, &cross, &[]).unwrap();
        // Canonical scan order resolves the shared entry to chain growth.
        assert_eq!(
            index.lookup_exact(&["smipoly_vinyl_1", "smipoly_cOle_1"]),
            Some(ChainGrowth)
        );
        assert_eq!(index.entry_count_for(Special), 1);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let index = sample_index();
        let first = index.to_json_pretty().unwrap();
        let second = index.to_json_pretty().unwrap();
        assert_eq!(first, second);

        let value: serde_json::Value = serde_json::from_str(&first).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(object.contains_key("step_growth"));
        assert_eq!(
            object["special"][0],
            serde_json::json!(["smipoly_aliphCH_1", "smipoly_cycCH_1"])
        );
    }

    #[test]
    fn test_debug_summarizes_counts() {
        let index = sample_index();
        let rendered = format!("{index:?}");
        assert!(rendered.contains("step_growth"));
        assert!(rendered.contains("monomers"));
    }
}
