//! Polymerization mechanism categories.
//!
//! This module provides the enum representation of the five mechanism
//! buckets used throughout the crate, plus the `Unknown` marker returned
//! by queries that resolve nothing.

/// A polymerization mechanism category.
///
/// The five real buckets partition every classified reaction; `Unknown` is
/// a query result only and never has entries stored under it.
///
/// # Examples
///
/// ```
/// use polymech_types::MechanismCategory;
///
/// let cat = MechanismCategory::from_name("step_growth");
/// assert_eq!(cat, Some(MechanismCategory::StepGrowth));
/// assert_eq!(MechanismCategory::StepGrowth.name(), "step_growth");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MechanismCategory {
    /// Step-growth polymerization (polycondensation, polyaddition).
    StepGrowth,
    /// Chain-growth polymerization (addition polymerization).
    ChainGrowth,
    /// Ring-opening chain polymerization.
    ChainGrowthRingOpening,
    /// Ring-opening metathesis polymerization (ROMP).
    Metathesis,
    /// Special cases, e.g. cyclic olefin copolymerization (COC).
    Special,
    /// No category could be resolved. Query result only.
    Unknown,
}

impl MechanismCategory {
    /// The five categories that can hold classified entries, in the
    /// canonical order used for lookup scans and serialization.
    pub const ALL: [MechanismCategory; 5] = [
        MechanismCategory::StepGrowth,
        MechanismCategory::ChainGrowth,
        MechanismCategory::ChainGrowthRingOpening,
        MechanismCategory::Metathesis,
        MechanismCategory::Special,
    ];

    /// Returns the snake_case name used in serialized dictionaries.
    pub fn name(self) -> &'static str {
        match self {
            MechanismCategory::StepGrowth => "step_growth",
            MechanismCategory::ChainGrowth => "chain_growth",
            MechanismCategory::ChainGrowthRingOpening => "chain_growth_ring_opening",
            MechanismCategory::Metathesis => "metathesis",
            MechanismCategory::Special => "special",
            MechanismCategory::Unknown => "unknown",
        }
    }

    /// Creates a category from its snake_case name.
    ///
    /// Returns `None` if the name doesn't match a known category.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "step_growth" => Some(MechanismCategory::StepGrowth),
            "chain_growth" => Some(MechanismCategory::ChainGrowth),
            "chain_growth_ring_opening" => Some(MechanismCategory::ChainGrowthRingOpening),
            "metathesis" => Some(MechanismCategory::Metathesis),
            "special" => Some(MechanismCategory::Special),
            "unknown" => Some(MechanismCategory::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for MechanismCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
