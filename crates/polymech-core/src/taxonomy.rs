//! Static mechanism taxonomy.
//!
//! Three hand-maintained tables versioned with the crate: the monomer
//! class → category map, the binary reaction-template table, and the
//! appendix of entries for monomer families with no catalog coverage.
//! Binary reaction validity is not the cross-product of same-category
//! classes; only the pairings enumerated in [`REACTION_TEMPLATES`] are
//! real reactions, and the expansion must not invent others.
//!
//! The module also carries the numeric reaction-number cross-reference
//! (a separate, hand-authored table, not derived from the expansion).

use polymech_types::well_known::*;
use polymech_types::{MechanismCategory, ReactionId, ReactionInfo, ReactionKind};

use crate::types::{MechanismError, MechanismResult};

use polymech_types::MechanismCategory::{
    ChainGrowth, ChainGrowthRingOpening, Metathesis, Special, StepGrowth, Unknown,
};

/// One row of the class → category table.
#[derive(Debug, Clone, Copy)]
pub struct ClassSpec {
    /// Class base name.
    pub base: &'static str,
    /// Declared categories. The first is the primary category used when
    /// emitting single-monomer entries; the full list feeds the
    /// per-monomer union used by partial lookups.
    pub categories: &'static [MechanismCategory],
}

/// A declared valid pairing of two monomer classes.
#[derive(Debug, Clone, Copy)]
pub struct ReactionTemplate {
    /// First class of the pairing.
    pub left: &'static str,
    /// Second class of the pairing. May equal `left`.
    pub right: &'static str,
    /// The category the pairing yields.
    pub category: MechanismCategory,
}

/// A hand-declared entry over external (catalog-absent) monomer names.
#[derive(Debug, Clone, Copy)]
pub struct ExternalEntry {
    /// The monomer names of the entry (one or two).
    pub monomers: &'static [&'static str],
    /// The category the entry belongs to.
    pub category: MechanismCategory,
}

/// Monomer class → mechanism category table.
///
/// Exactly one class is polymorphic: the strained cyclic olefin
/// (`smipoly_cycCH`) undergoes ROMP, coordination chain growth, or cyclic
/// olefin copolymerization depending on its pairing partner.
pub const CLASS_SPECS: &[ClassSpec] = &[
    // Step-growth
    ClassSpec { base: AMINO_ACID, categories: &[StepGrowth] },
    ClassSpec { base: HYDROXY_CARBOXYLIC_ACID, categories: &[StepGrowth] },
    ClassSpec { base: DI_CARBOXYLIC_ACID, categories: &[StepGrowth] },
    ClassSpec { base: DI_OL, categories: &[StepGrowth] },
    ClassSpec { base: DI_OL_B, categories: &[StepGrowth] },
    ClassSpec { base: DI_AMINE, categories: &[StepGrowth] },
    ClassSpec { base: PRIMARY_DI_AMINE, categories: &[StepGrowth] },
    ClassSpec { base: DI_ISOCYANATE, categories: &[StepGrowth] },
    ClassSpec { base: DI_CYCLIC_ANHYDRIDE, categories: &[StepGrowth] },
    ClassSpec { base: DI_EPOXIDE, categories: &[StepGrowth] },
    ClassSpec { base: HINDERED_PHENOL, categories: &[StepGrowth] },
    ClassSpec { base: ARYL_SULFONE, categories: &[StepGrowth] },
    ClassSpec { base: FLUOROARYL_KETONE, categories: &[StepGrowth] },
    ClassSpec { base: CARBON_MONOXIDE, categories: &[StepGrowth] },
    ClassSpec { base: FORMALDEHYDE, categories: &[StepGrowth] },
    // Chain-growth
    ClassSpec { base: VINYL, categories: &[ChainGrowth] },
    ClassSpec { base: ACRYLIC, categories: &[ChainGrowth] },
    ClassSpec { base: EW_OLEFIN, categories: &[ChainGrowth] },
    ClassSpec { base: STYRENIC, categories: &[ChainGrowth] },
    ClassSpec { base: ALLYL, categories: &[ChainGrowth] },
    ClassSpec { base: HALOGENATED_OLEFIN, categories: &[ChainGrowth] },
    ClassSpec { base: VINYL_ESTER, categories: &[ChainGrowth] },
    ClassSpec { base: MALEIC, categories: &[ChainGrowth] },
    ClassSpec { base: CONJUGATED_DIENE, categories: &[ChainGrowth] },
    ClassSpec { base: VINYL_ETHER, categories: &[ChainGrowth] },
    ClassSpec { base: TERT_CATION_OLEFIN, categories: &[ChainGrowth] },
    ClassSpec { base: ALIPHATIC_OLEFIN, categories: &[ChainGrowth] },
    ClassSpec { base: CYCLIC_OLEFIN, categories: &[ChainGrowth] },
    // Ring-opening chain polymerization
    ClassSpec { base: LACTONE, categories: &[ChainGrowthRingOpening] },
    ClassSpec { base: LACTAM, categories: &[ChainGrowthRingOpening] },
    ClassSpec { base: EPOXIDE, categories: &[ChainGrowthRingOpening] },
    ClassSpec { base: CYCLIC_ANHYDRIDE, categories: &[ChainGrowthRingOpening] },
    // Polymorphic: ROMP primary, coordination chain growth, COC partner
    ClassSpec { base: CYCLIC_OLEFIN_ROMP, categories: &[Metathesis, ChainGrowth, Special] },
];

/// The binary reaction templates.
///
/// Each template expands to the cross-product of the two classes' catalog
/// variants; a pairing absent from this table produces no entry.
pub const REACTION_TEMPLATES: &[ReactionTemplate] = &[
    // Step-growth condensations
    ReactionTemplate { left: AMINO_ACID, right: AMINO_ACID, category: StepGrowth },
    ReactionTemplate { left: HYDROXY_CARBOXYLIC_ACID, right: HYDROXY_CARBOXYLIC_ACID, category: StepGrowth },
    // Polyester
    ReactionTemplate { left: DI_CARBOXYLIC_ACID, right: DI_OL, category: StepGrowth },
    // Polyamide
    ReactionTemplate { left: DI_CARBOXYLIC_ACID, right: DI_AMINE, category: StepGrowth },
    // Polyimide
    ReactionTemplate { left: DI_CYCLIC_ANHYDRIDE, right: PRIMARY_DI_AMINE, category: StepGrowth },
    // Polyurethane
    ReactionTemplate { left: DI_ISOCYANATE, right: DI_OL, category: StepGrowth },
    // Polyoxazolidone
    ReactionTemplate { left: DI_EPOXIDE, right: DI_ISOCYANATE, category: StepGrowth },
    // Polycarbonate
    ReactionTemplate { left: DI_OL, right: CARBON_MONOXIDE, category: StepGrowth },
    // Polysulfone / polyetherketone
    ReactionTemplate { left: ARYL_SULFONE, right: DI_OL_B, category: StepGrowth },
    ReactionTemplate { left: FLUOROARYL_KETONE, right: DI_OL_B, category: StepGrowth },
    // Chain-growth copolymerizations
    ReactionTemplate { left: VINYL, right: VINYL, category: ChainGrowth },
    ReactionTemplate { left: VINYL, right: CYCLIC_OLEFIN, category: ChainGrowth },
    ReactionTemplate { left: CYCLIC_OLEFIN, right: CYCLIC_OLEFIN, category: ChainGrowth },
    // Ring-opening copolymerization
    ReactionTemplate { left: CYCLIC_ANHYDRIDE, right: EPOXIDE, category: ChainGrowthRingOpening },
    // Cyclic olefin copolymerization (COC)
    ReactionTemplate { left: CYCLIC_OLEFIN_ROMP, right: ALIPHATIC_OLEFIN, category: Special },
];

/// Hand-declared entries for monomer families without catalog coverage.
pub const EXTERNAL_ENTRIES: &[ExternalEntry] = &[
    ExternalEntry { monomers: &[DI_ACID_CHLORIDE, DI_AMINE_EXT], category: StepGrowth },
    ExternalEntry { monomers: &[DI_ACID_CHLORIDE, DI_OL_EXT], category: StepGrowth },
    ExternalEntry { monomers: &[ACETYLENE], category: ChainGrowth },
    ExternalEntry { monomers: &[CYCLIC_ETHER], category: ChainGrowthRingOpening },
    ExternalEntry { monomers: &[CYCLIC_CARBONATE], category: ChainGrowthRingOpening },
    ExternalEntry { monomers: &[CYCLIC_SULFIDE], category: ChainGrowthRingOpening },
    ExternalEntry { monomers: &[TERMINAL_DIENE], category: Metathesis },
    ExternalEntry { monomers: &[CONJUGATED_DI_BROMIDE], category: Metathesis },
];

// Partners of the diacid chloride entries are catalog-backed classes, so
// the appendix stores the canonical keys the normalizer produces for them.
const DI_AMINE_EXT: &str = "smipoly_diamin_1";
const DI_OL_EXT: &str = "smipoly_diol_1";

/// Returns the declared categories of a class, `None` when the taxonomy
/// does not cover it.
pub fn declared_categories(base: &str) -> Option<&'static [MechanismCategory]> {
    CLASS_SPECS
        .iter()
        .find(|spec| spec.base == base)
        .map(|spec| spec.categories)
}

/// Returns the primary category of a class (the one its single-monomer
/// entries are filed under).
pub fn primary_category(base: &str) -> Option<MechanismCategory> {
    declared_categories(base).and_then(|cats| cats.first().copied())
}

/// Checks the internal consistency of the static tables.
///
/// Every class referenced by a reaction template must exist in the class
/// table. Run once at the start of index construction; a failure here is
/// fatal, never silently dropped.
pub fn validate() -> MechanismResult<()> {
    validate_templates(REACTION_TEMPLATES)
}

pub(crate) fn validate_templates(templates: &[ReactionTemplate]) -> MechanismResult<()> {
    for template in templates {
        for (class, partner) in [
            (template.left, template.right),
            (template.right, template.left),
        ] {
            if declared_categories(class).is_none() {
                return Err(MechanismError::UnknownTemplateClass {
                    class: class.to_string(),
                    partner: partner.to_string(),
                });
            }
        }
    }
    Ok(())
}

// =============================================================================
// Reaction-number cross-reference
// =============================================================================

/// Returns the mechanism category of a primary polymerization reaction
/// number, `None` when the number is not mapped.
pub fn reaction_mechanism(number: ReactionId) -> Option<MechanismCategory> {
    let category = match number {
        // Step-growth
        6 => StepGrowth,    // hydroxy carboxylic acid
        7 => StepGrowth,    // amino acid
        8 => StepGrowth,    // hindered phenol
        104 => StepGrowth,  // diacid + diol
        105 => StepGrowth,  // hydroxy acid alternating
        106 => StepGrowth,  // diol + carbon monoxide
        108 => StepGrowth,  // diacid + diamine
        109 => StepGrowth,  // amino acid alternating
        110 => StepGrowth,  // dianhydride + primary diamine
        111 => StepGrowth,  // diisocyanate + diol
        113 => StepGrowth,  // diepoxide + diisocyanate
        114 => StepGrowth,  // aryl sulfone + bisphenol
        115 => StepGrowth,  // fluoroaryl ketone + bisphenol

        // Chain-growth
        1 => ChainGrowth,    // vinyl
        3 => ChainGrowth,    // cyclic olefin
        101 => ChainGrowth,  // vinyl + vinyl
        102 => ChainGrowth,  // vinyl + cyclic olefin
        103 => ChainGrowth,  // cyclic olefin + cyclic olefin
        1001 => ChainGrowth, // acrylic
        1002 => ChainGrowth, // electron-withdrawing olefin
        1003 => ChainGrowth, // styrenic
        1004 => ChainGrowth, // allyl
        1005 => ChainGrowth, // halogenated olefin
        1006 => ChainGrowth, // vinyl ester
        1007 => ChainGrowth, // maleic
        1020 => ChainGrowth, // conjugated diene
        1030 => ChainGrowth, // vinyl ether
        1031 => ChainGrowth, // tertiary carbocation olefin
        1052 => ChainGrowth, // aliphatic olefin

        // Ring-opening chain polymerization
        2 => ChainGrowthRingOpening,   // epoxide
        4 => ChainGrowthRingOpening,   // lactone
        5 => ChainGrowthRingOpening,   // lactam
        112 => ChainGrowthRingOpening, // cyclic anhydride + epoxide

        // Metathesis
        1050 => Metathesis, // ROMP

        // Special
        1051 => Special, // COC

        _ => return None,
    };
    Some(category)
}

/// Returns the description of a post-polymerization transformation
/// number, `None` when the number is not one.
pub fn post_polymerization(number: ReactionId) -> Option<&'static str> {
    let description = match number {
        200 => "olefin_hydrogenation",
        201 => "epoxide_ring_opening",
        202 => "carboxylic_acid_acyl_halide_reaction",
        203 => "hydroxyl_reaction",
        204 => "amine_reaction",
        205 => "isocyanate_reaction",
        206 => "carboxylic_acid_anhydride_polyester",
        207 => "carboxylic_acid_anhydride_polyimide",
        208 => "isocyanate_polyoxazolidone",
        209 => "diene_12_to_14_isomerization",
        210 => "olefin_hydrogenation_ROMPH",
        _ => return None,
    };
    Some(description)
}

/// Resolves a reaction number to its record.
///
/// Post-polymerization numbers win over the primary table; unmapped
/// numbers resolve to a primary record with an unknown mechanism rather
/// than an error.
pub fn reaction_info(number: ReactionId) -> ReactionInfo {
    if let Some(description) = post_polymerization(number) {
        return ReactionInfo {
            number,
            kind: ReactionKind::PostPolymerization {
                description: description.to_string(),
            },
        };
    }

    ReactionInfo {
        number,
        kind: ReactionKind::PrimaryPolymerization {
            mechanism: reaction_mechanism(number).unwrap_or(Unknown),
        },
    }
}
