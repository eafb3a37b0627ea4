//! Well-known monomer class names.
//!
//! This module provides constants for the monomer class base names used by
//! the pattern catalog, the external monomer families the taxonomy
//! acknowledges without catalog coverage, and the standard catalog key
//! prefix.
//!
//! # Examples
//!
//! ```
//! use polymech_types::well_known;
//!
//! assert_eq!(well_known::DI_CARBOXYLIC_ACID, "smipoly_diCOOH");
//! assert!(well_known::EXTERNAL_MONOMERS.contains(&"acetylene"));
//! ```

/// Prefix carried by every catalog key.
pub const CATALOG_PREFIX: &str = "smipoly_";

// =============================================================================
// Step-growth monomer classes
// =============================================================================

/// Amino acid (H2N-R-COOH).
pub const AMINO_ACID: &str = "smipoly_aminCOOH";

/// Hydroxy carboxylic acid (HO-R-COOH).
pub const HYDROXY_CARBOXYLIC_ACID: &str = "smipoly_hydCOOH";

/// Dicarboxylic acid family (includes acyl halide patterns).
pub const DI_CARBOXYLIC_ACID: &str = "smipoly_diCOOH";

/// Diol (HO-R-OH).
pub const DI_OL: &str = "smipoly_diol";

/// Bisphenol-type diol used in aromatic condensations.
pub const DI_OL_B: &str = "smipoly_diol_b";

/// Diamine.
pub const DI_AMINE: &str = "smipoly_diamin";

/// Primary diamine (polyimide partner).
pub const PRIMARY_DI_AMINE: &str = "smipoly_pridiamin";

/// Diisocyanate (OCN-R-NCO).
pub const DI_ISOCYANATE: &str = "smipoly_diNCO";

/// Dicyclic anhydride (polyimide partner).
pub const DI_CYCLIC_ANHYDRIDE: &str = "smipoly_dicAnhyd";

/// Diepoxide.
pub const DI_EPOXIDE: &str = "smipoly_diepo";

/// Hindered phenol (oxidative coupling).
pub const HINDERED_PHENOL: &str = "smipoly_hindPhenol";

/// Bis(p-halogenated aryl)sulfone.
pub const ARYL_SULFONE: &str = "smipoly_sfonediX";

/// Bis(p-fluoroaryl)ketone.
pub const FLUOROARYL_KETONE: &str = "smipoly_BzodiF";

/// Carbon monoxide (polycarbonate comonomer).
pub const CARBON_MONOXIDE: &str = "smipoly_CO";

/// Formaldehyde.
pub const FORMALDEHYDE: &str = "smipoly_HCHO";

// =============================================================================
// Chain-growth monomer classes
// =============================================================================

/// Generic vinyl monomer (CH2=CHR).
pub const VINYL: &str = "smipoly_vinyl";

/// Acrylic monomer (acrylates, methacrylates).
pub const ACRYLIC: &str = "smipoly_acryl";

/// Olefin bearing an electron-withdrawing group.
pub const EW_OLEFIN: &str = "smipoly_bEWole";

/// Styrenic monomer.
pub const STYRENIC: &str = "smipoly_styryl";

/// Allyl monomer.
pub const ALLYL: &str = "smipoly_allyl";

/// Halogenated olefin (vinyl chloride family).
pub const HALOGENATED_OLEFIN: &str = "smipoly_haloCH";

/// Vinyl ester.
pub const VINYL_ESTER: &str = "smipoly_vinylester";

/// Maleic monomer (maleimides, maleates).
pub const MALEIC: &str = "smipoly_malei";

/// Conjugated diene (butadiene family).
pub const CONJUGATED_DIENE: &str = "smipoly_conjdiene";

/// Vinyl ether.
pub const VINYL_ETHER: &str = "smipoly_vinylether";

/// Olefin polymerizing through a tertiary carbocation (isobutylene family).
pub const TERT_CATION_OLEFIN: &str = "smipoly_tertcatCH";

/// Aliphatic olefin (ethylene, propylene family).
pub const ALIPHATIC_OLEFIN: &str = "smipoly_aliphCH";

/// Cyclic olefin polymerizing without ring opening.
pub const CYCLIC_OLEFIN: &str = "smipoly_cOle";

// =============================================================================
// Ring-opening chain polymerization classes
// =============================================================================

/// Lactone.
pub const LACTONE: &str = "smipoly_lactone";

/// Lactam.
pub const LACTAM: &str = "smipoly_lactam";

/// Epoxide.
pub const EPOXIDE: &str = "smipoly_epo";

/// Cyclic anhydride (ring-opening comonomer of epoxides).
pub const CYCLIC_ANHYDRIDE: &str = "smipoly_cAnhyd";

// =============================================================================
// Polymorphic class
// =============================================================================

/// Strained cyclic olefin.
///
/// Polymerizes by ROMP (metathesis), by coordination chain growth, or as
/// the cyclic partner of cyclic olefin copolymerization (special). The
/// taxonomy declares all three memberships for this class.
pub const CYCLIC_OLEFIN_ROMP: &str = "smipoly_cycCH";

// =============================================================================
// External monomer names (no catalog entry)
// =============================================================================

/// Diacid chloride. Covered by the dicarboxylic acid SMARTS in the
/// catalog but kept as a named family of its own.
pub const DI_ACID_CHLORIDE: &str = "di_acid_chloride";

/// Cyclic ether.
pub const CYCLIC_ETHER: &str = "cyclic_ether";

/// Cyclic carbonate.
pub const CYCLIC_CARBONATE: &str = "cyclic_carbonate";

/// Cyclic sulfide.
pub const CYCLIC_SULFIDE: &str = "cyclic_sulfide";

/// Acetylene.
pub const ACETYLENE: &str = "acetylene";

/// Terminal diene (ADMET substrate).
pub const TERMINAL_DIENE: &str = "terminal_diene";

/// Conjugated dibromide.
pub const CONJUGATED_DI_BROMIDE: &str = "conjugated_di_bromide";

/// The monomer families the taxonomy acknowledges without catalog
/// coverage. Names on this list pass through normalization unchanged.
pub const EXTERNAL_MONOMERS: &[&str] = &[
    DI_ACID_CHLORIDE,
    CYCLIC_ETHER,
    CYCLIC_CARBONATE,
    CYCLIC_SULFIDE,
    ACETYLENE,
    TERMINAL_DIENE,
    CONJUGATED_DI_BROMIDE,
];
