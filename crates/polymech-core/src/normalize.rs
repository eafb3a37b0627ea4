//! Monomer name normalization.
//!
//! Callers supply monomer identifiers in three spellings: user-friendly
//! aliases (`vinyl`, `di_carboxylic_acid`), canonical qualified keys
//! (`smipoly_vinyl_1`), or bare class names with or without the catalog
//! prefix (`diamin`, `smipoly_diamin`). Normalization reconciles all of
//! them into the canonical qualified-key space.
//!
//! The rules form an explicit ordered list; the first matching rule wins
//! and the precedence is fixed, so normalization is deterministic and
//! never fails. Unrecognized input degrades to a best-effort
//! canonical-shaped key that downstream lookups treat as unknown.

use polymech_types::key;
use polymech_types::well_known::{CATALOG_PREFIX, EXTERNAL_MONOMERS};

/// Which normalization rule resolved an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationRule {
    /// The identifier matched the fixed alias table.
    AliasMatch,
    /// The identifier is an external monomer name and passed through.
    ExternalPassthrough,
    /// The identifier was completed with the catalog prefix and/or the
    /// default `_1` variant suffix (possibly neither, when already
    /// canonical).
    PrefixAndSuffix,
}

/// Fixed alias table: user-friendly name → canonical qualified key.
///
/// Variant 1 is the representative pattern of each class, so every alias
/// target carries the `_1` suffix. The table takes precedence over the
/// prefix/suffix rules.
pub const NAME_ALIASES: &[(&str, &str)] = &[
    // Step-growth
    ("amino_acid", "smipoly_aminCOOH_1"),
    ("hydroxy_carboxylic_acid", "smipoly_hydCOOH_1"),
    ("di_carboxylic_acid", "smipoly_diCOOH_1"),
    ("di_ol", "smipoly_diol_1"),
    ("di_amine", "smipoly_diamin_1"),
    ("primary_di_amine", "smipoly_pridiamin_1"),
    ("di_isocyanate", "smipoly_diNCO_1"),
    ("di_cyclic_anhydride", "smipoly_dicAnhyd_1"),
    ("di_epoxide", "smipoly_diepo_1"),
    ("hindered_phenol", "smipoly_hindPhenol_1"),
    ("bis_p_halogenated_aryl_sulfone", "smipoly_sfonediX_1"),
    ("bis_p_fluoroaryl_ketone", "smipoly_BzodiF_1"),
    ("carbon_monoxide", "smipoly_CO_1"),
    ("formaldehyde", "smipoly_HCHO_1"),
    // Chain-growth
    ("vinyl", "smipoly_vinyl_1"),
    ("cyclic_olefin", "smipoly_cOle_1"),
    ("acrylic", "smipoly_acryl_1"),
    ("electron_withdrawing_olefin", "smipoly_bEWole_1"),
    ("styrenic", "smipoly_styryl_1"),
    ("allyl", "smipoly_allyl_1"),
    ("halogenated_olefin", "smipoly_haloCH_1"),
    ("vinyl_ester", "smipoly_vinylester_1"),
    ("maleic", "smipoly_malei_1"),
    ("conjugated_diene", "smipoly_conjdiene_1"),
    ("vinyl_ether", "smipoly_vinylether_1"),
    ("tertiary_carbocation_olefin", "smipoly_tertcatCH_1"),
    ("aliphatic_olefin", "smipoly_aliphCH_1"),
    // Ring-opening
    ("lactone", "smipoly_lactone_1"),
    ("lactam", "smipoly_lactam_1"),
    ("epoxide", "smipoly_epo_1"),
    ("cyclic_anhydride", "smipoly_cAnhyd_1"),
    // ROMP substrate (the non-ROMP cyclic olefin is `cyclic_olefin`)
    ("cyclic_olefin_romp", "smipoly_cycCH_1"),
];

/// Normalizes one identifier to its canonical form.
///
/// # Examples
///
/// ```
/// use polymech_core::normalize;
///
/// assert_eq!(normalize::normalize("vinyl"), "smipoly_vinyl_1");
/// assert_eq!(normalize::normalize("diamin"), "smipoly_diamin_1");
/// assert_eq!(normalize::normalize("smipoly_diCOOH_4"), "smipoly_diCOOH_4");
/// assert_eq!(normalize::normalize("acetylene"), "acetylene");
/// ```
pub fn normalize(name: &str) -> String {
    normalize_with_rule(name).0
}

/// Normalizes one identifier, also reporting which rule resolved it.
pub fn normalize_with_rule(name: &str) -> (String, NormalizationRule) {
    // Rule 1: alias table.
    if let Some((_, canonical)) = NAME_ALIASES.iter().find(|(alias, _)| *alias == name) {
        return ((*canonical).to_string(), NormalizationRule::AliasMatch);
    }

    // Rule 2: external names pass through unchanged.
    if EXTERNAL_MONOMERS.contains(&name) {
        return (name.to_string(), NormalizationRule::ExternalPassthrough);
    }

    // Rule 3: ensure the catalog prefix.
    let mut canonical = if key::has_catalog_prefix(name) {
        name.to_string()
    } else {
        format!("{CATALOG_PREFIX}{name}")
    };

    // Rule 4: ensure a variant suffix; variant 1 is the representative.
    if key::split_variant(&canonical).is_none() {
        canonical.push_str("_1");
    }

    (canonical, NormalizationRule::PrefixAndSuffix)
}

/// Normalizes a list of identifiers, removing repeats after normalization
/// while preserving first-seen order.
pub fn normalize_all<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let canonical = normalize(name.as_ref());
        if !out.contains(&canonical) {
            out.push(canonical);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_wins_over_prefixing() {
        // Prefixing alone would yield smipoly_vinyl_1 too, but the rule
        // must be the alias table, not a coincidence of suffixing.
        let (canonical, rule) = normalize_with_rule("vinyl");
        assert_eq!(canonical, "smipoly_vinyl_1");
        assert_eq!(rule, NormalizationRule::AliasMatch);

        // An alias whose spelling differs entirely from the class name.
        assert_eq!(normalize("di_carboxylic_acid"), "smipoly_diCOOH_1");
        assert_eq!(normalize("bis_p_fluoroaryl_ketone"), "smipoly_BzodiF_1");
    }

    #[test]
    fn test_external_passthrough() {
        for name in EXTERNAL_MONOMERS {
            let (canonical, rule) = normalize_with_rule(name);
            assert_eq!(canonical, *name);
            assert_eq!(rule, NormalizationRule::ExternalPassthrough);
        }
    }

    #[test]
    fn test_prefix_added() {
        assert_eq!(normalize("diamin"), "smipoly_diamin_1");
        assert_eq!(normalize("diCOOH_3"), "smipoly_diCOOH_3");
    }

    #[test]
    fn test_suffix_added() {
        assert_eq!(normalize("smipoly_diamin"), "smipoly_diamin_1");
        // diol_b ends in a non-numeric segment, so it still needs _1.
        assert_eq!(normalize("smipoly_diol_b"), "smipoly_diol_b_1");
    }

    #[test]
    fn test_idempotent_on_canonical_keys() {
        for canonical in [
            "smipoly_vinyl_1",
            "smipoly_diCOOH_6",
            "smipoly_bEWole_156",
            "smipoly_diol_b_3",
            "acetylene",
        ] {
            assert_eq!(normalize(canonical), canonical);
            assert_eq!(normalize(&normalize(canonical)), canonical);
        }
    }

    #[test]
    fn test_suffix_range_bound() {
        // 199 is the highest recognized variant suffix.
        assert_eq!(normalize("smipoly_x_199"), "smipoly_x_199");
        assert_eq!(normalize("smipoly_x_200"), "smipoly_x_200_1");
    }

    #[test]
    fn test_unrecognized_input_degrades() {
        // Never an error; the result is canonical-shaped and simply won't
        // resolve downstream.
        assert_eq!(normalize("unobtainium"), "smipoly_unobtainium_1");
    }

    #[test]
    fn test_romp_alias_is_distinct() {
        assert_eq!(normalize("cyclic_olefin"), "smipoly_cOle_1");
        assert_eq!(normalize("cyclic_olefin_romp"), "smipoly_cycCH_1");
    }

    #[test]
    fn test_normalize_all_dedups_in_order() {
        let normalized = normalize_all(&["di_ol", "smipoly_diol", "smipoly_diol_1", "vinyl"]);
        assert_eq!(normalized, ["smipoly_diol_1", "smipoly_vinyl_1"]);
    }

    #[test]
    fn test_alias_targets_are_canonical() {
        for (_, target) in NAME_ALIASES {
            assert_eq!(normalize(target), *target, "alias target not canonical");
        }
    }
}
