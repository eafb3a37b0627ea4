//! # polymech-core
//!
//! Classification core for polymerization mechanisms.
//!
//! Builds an immutable [`MechanismIndex`] from a monomer pattern catalog
//! and the built-in mechanism taxonomy, then answers queries: exact
//! key-set lookup, per-monomer partial lookup, combined classification of
//! arbitrary caller-supplied monomer names, and the numeric
//! reaction-number cross-reference.
//!
//! ## Usage
//!
//! ```rust
//! use polymech_core::{normalize, MechanismIndex, PatternCatalog};
//! use polymech_types::MechanismCategory;
//!
//! let catalog = PatternCatalog::from_json_str(r#"{
//!     "smipoly_vinyl_1": "[CX3]=[CX2]",
//!     "smipoly_vinyl_2": "[CX3]=[CX3]"
//! }"#).unwrap();
//!
//! let index = MechanismIndex::from_catalog(&catalog).unwrap();
//! assert_eq!(index.classify(&["vinyl"]), [MechanismCategory::ChainGrowth]);
//!
//! // Normalization is exposed on its own as well
//! assert_eq!(normalize::normalize("di_ol"), "smipoly_diol_1");
//! ```

#![warn(missing_docs)]

mod catalog;
mod expand;
mod index;
pub mod normalize;
pub mod taxonomy;
mod types;

// Re-export polymech-types for convenience
pub use polymech_types;

pub use catalog::PatternCatalog;
pub use expand::expand;
pub use index::MechanismIndex;
pub use types::{MechanismError, MechanismResult};
