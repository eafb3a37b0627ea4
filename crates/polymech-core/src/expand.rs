//! Combinatorial pattern expansion.
//!
//! Turns the base classification (one taxonomy row per monomer class)
//! into the full set of single-monomer and binary mechanism entries: one
//! single entry per catalog variant of every covered class, the variant
//! cross-product of every reaction template, and the hand-declared
//! external appendix.

use polymech_types::{key, MechanismCategory, MechanismEntry};

use crate::catalog::PatternCatalog;
use crate::taxonomy::{self, ExternalEntry, ReactionTemplate};
use crate::types::MechanismResult;

/// Produces every mechanism entry implied by the catalog and the
/// taxonomy, in deterministic emission order.
///
/// Single-monomer entries come first (classes in catalog order, variants
/// ascending), then template cross-products in template-table order, then
/// the external appendix. The caller partitions the result by category
/// and enforces the per-category uniqueness check.
pub fn expand(catalog: &PatternCatalog) -> MechanismResult<Vec<(MechanismCategory, MechanismEntry)>> {
    expand_with(
        catalog,
        taxonomy::REACTION_TEMPLATES,
        taxonomy::EXTERNAL_ENTRIES,
    )
}

pub(crate) fn expand_with(
    catalog: &PatternCatalog,
    templates: &[ReactionTemplate],
    externals: &[ExternalEntry],
) -> MechanismResult<Vec<(MechanismCategory, MechanismEntry)>> {
    taxonomy::validate_templates(templates)?;

    let mut entries = Vec::new();

    // Single-monomer entries, one per catalog variant. Classes the
    // taxonomy does not cover yield nothing; the taxonomy is
    // intentionally a partial classification.
    for (base, patterns) in catalog.classes() {
        match taxonomy::primary_category(base) {
            Some(category) => {
                for variant in 1..=patterns.len() as u16 {
                    let entry = MechanismEntry::single(key::qualified_key(base, variant));
                    entries.push((category, entry));
                }
            }
            None => {
                tracing::debug!(class = base, "catalog class not covered by taxonomy, skipped");
            }
        }
    }

    // Binary entries: the variant cross-product of each template. A
    // template whose class has no catalog variants contributes nothing.
    for template in templates {
        let left = catalog.variant_keys(template.left);
        if template.left == template.right {
            // Same-class pairing: the cross-product collapsed under
            // unordered-entry equality, self-pairs included.
            for i in 0..left.len() {
                for j in i..left.len() {
                    entries.push((template.category, MechanismEntry::pair(&left[i], &left[j])));
                }
            }
        } else {
            let right = catalog.variant_keys(template.right);
            for a in &left {
                for b in &right {
                    entries.push((template.category, MechanismEntry::pair(a, b)));
                }
            }
        }
    }

    // Hand-declared entries for catalog-absent monomer families.
    for external in externals {
        let entry = MechanismEntry::from_keys(external.monomers.iter().copied());
        entries.push((external.category, entry));
    }

    tracing::debug!(entries = entries.len(), "expansion complete");
    Ok(entries)
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

    fn count(
        entries: &[(MechanismCategory, MechanismEntry)],
        category: MechanismCategory,
        pred: impl Fn(&MechanismEntry) -> bool,
    ) -> usize {
        entries
            .iter()
            .filter(|(c, e)| *c == category && pred(e))
            .count()
    }

    #[test]
    fn test_single_entries_match_variant_counts() {
        let catalog = catalog(&[(DI_CARBOXYLIC_ACID, 6), (DI_OL, 4), (VINYL, 2)]);
        let entries = expand(&catalog).unwrap();

        assert_eq!(count(&entries, StepGrowth, MechanismEntry::is_single), 10);
        assert_eq!(count(&entries, ChainGrowth, MechanismEntry::is_single), 2);
    }

    #[test]
    fn test_uncovered_class_yields_no_singles() {
        let catalog = catalog(&[("smipoly_mystery", 3)]);
        let entries = expand(&catalog).unwrap();
        assert!(entries.iter().all(|(_, e)| !e
            .monomers()
            .iter()
            .any(|m| m.starts_with("smipoly_mystery"))));
    }

    #[test]
    fn test_cross_product_of_distinct_classes() {
        // diacid with 6 variants, diol with 4: exactly 24 step-growth
        // binary entries.
        let catalog = catalog(&[(DI_CARBOXYLIC_ACID, 6), (DI_OL, 4)]);
        let entries = expand(&catalog).unwrap();

        let binary = count(&entries, StepGrowth, |e| {
            e.is_binary() && e.monomers().iter().all(|m| m.starts_with("smipoly_"))
        });
        assert_eq!(binary, 24);
        assert!(entries.contains(&(
            StepGrowth,
            MechanismEntry::pair("smipoly_diCOOH_3", "smipoly_diol_2")
        )));
    }

    #[test]
    fn test_same_class_is_upper_triangular_with_diagonal() {
        // 3 vinyl variants: {1,1} {1,2} {1,3} {2,2} {2,3} {3,3}.
        let catalog = catalog(&[(VINYL, 3)]);
        let entries = expand(&catalog).unwrap();

        let pairs = count(&entries, ChainGrowth, MechanismEntry::is_binary);
        assert_eq!(pairs, 3 * 4 / 2);
        assert!(entries.contains(&(
            ChainGrowth,
            MechanismEntry::pair("smipoly_vinyl_2", "smipoly_vinyl_2")
        )));
        assert!(entries.contains(&(
            ChainGrowth,
            MechanismEntry::pair("smipoly_vinyl_1", "smipoly_vinyl_3")
        )));
    }

    #[test]
    fn test_empty_class_contributes_empty_cross_product() {
        // diacid present, diol absent: the polyester template is inert.
        let catalog = catalog(&[(DI_CARBOXYLIC_ACID, 2)]);
        let entries = expand(&catalog).unwrap();
        assert_eq!(count(&entries, StepGrowth, MechanismEntry::is_binary), 2);
        // Only the external diacid chloride pairs remain binary.
        for (cat, entry) in &entries {
            if *cat == StepGrowth && entry.is_binary() {
                assert!(entry.monomers().contains(&DI_ACID_CHLORIDE.to_string()));
            }
        }
    }

    #[test]
    fn test_external_appendix_is_emitted() {
        let catalog = catalog(&[]);
        let entries = expand(&catalog).unwrap();
        assert_eq!(entries.len(), taxonomy::EXTERNAL_ENTRIES.len());
        assert!(entries.contains(&(ChainGrowth, MechanismEntry::single(ACETYLENE))));
        assert!(entries.contains(&(Metathesis, MechanismEntry::single(TERMINAL_DIENE))));
    }

    #[test]
    fn test_special_pairing_is_full_cross_product() {
        let catalog = catalog(&[(CYCLIC_OLEFIN_ROMP, 1), (ALIPHATIC_OLEFIN, 2)]);
        let entries = expand(&catalog).unwrap();
        assert_eq!(count(&entries, Special, MechanismEntry::is_binary), 2);
        // cycCH singles land under the primary category only.
        assert_eq!(count(&entries, Metathesis, MechanismEntry::is_single), 1);
        assert_eq!(
            count(&entries, ChainGrowth, MechanismEntry::is_single),
            2 // the aliphatic olefin variants
        );
    }

    #[test]
    fn test_polymorphic_singles_use_primary_category() {
        let catalog = catalog(&[(CYCLIC_OLEFIN_ROMP, 2)]);
        let entries = expand(&catalog).unwrap();
        assert_eq!(count(&entries, Metathesis, MechanismEntry::is_single), 2);
        assert_eq!(count(&entries, ChainGrowth, MechanismEntry::is_single), 0);
        assert_eq!(count(&entries, Special, MechanismEntry::is_single), 0);
    }

    #[test]
    fn test_invalid_template_table_is_fatal() {
        let catalog = catalog(&[(DI_OL, 1)]);
        let bad = [ReactionTemplate {
            left: "smipoly_bogus",
            right: DI_OL,
            category: StepGrowth,
        }];
        let err = expand_with(&catalog, &bad, &[]).unwrap_err();
        assert!(matches!(
            err,
            crate::types::MechanismError::UnknownTemplateClass { .. }
        ));
    }
}
