//! Numeric reaction identifier records.
//!
//! Reaction numbers are a hand-authored cross-reference maintained
//! alongside the taxonomy; they are not derived from the combinatorial
//! expansion.

use crate::MechanismCategory;

/// A numeric reaction identifier.
///
/// Primary polymerizations use the historical numbering (1-1052);
/// post-polymerization transformations occupy 200-210.
pub type ReactionId = u32;

/// What a reaction number refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ReactionKind {
    /// A primary polymerization reaction and the mechanism it follows.
    /// The mechanism is [`MechanismCategory::Unknown`] for numbers the
    /// cross-reference does not cover.
    PrimaryPolymerization {
        /// The mechanism category the reaction belongs to.
        mechanism: MechanismCategory,
    },
    /// A secondary transformation applied after primary polymerization.
    PostPolymerization {
        /// Short description of the transformation.
        description: String,
    },
}

/// Resolved information for one reaction number.
///
/// # Examples
///
/// ```
/// use polymech_types::{ReactionInfo, ReactionKind, MechanismCategory};
///
/// let info = ReactionInfo {
///     number: 104,
///     kind: ReactionKind::PrimaryPolymerization {
///         mechanism: MechanismCategory::StepGrowth,
///     },
/// };
/// assert!(info.is_primary());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionInfo {
    /// The queried reaction number.
    pub number: ReactionId,
    /// What the number refers to.
    pub kind: ReactionKind,
}

impl ReactionInfo {
    /// Returns true for a primary polymerization record.
    pub fn is_primary(&self) -> bool {
        matches!(self.kind, ReactionKind::PrimaryPolymerization { .. })
    }

    /// Returns the mechanism category for primary records, `None` for
    /// post-polymerization transformations.
    pub fn mechanism(&self) -> Option<MechanismCategory> {
        match self.kind {
            ReactionKind::PrimaryPolymerization { mechanism } => Some(mechanism),
            ReactionKind::PostPolymerization { .. } => None,
        }
    }
}
