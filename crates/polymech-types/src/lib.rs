//! # polymech-types
//!
//! Type definitions for polymerization mechanism classification.
//!
//! This crate provides the Rust types shared by the mechanism
//! classification stack: the category enum, qualified monomer keys,
//! classified entries, and numeric reaction-identifier records.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via
//!   serde. Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use polymech_types::{key, well_known, MechanismCategory, MechanismEntry};
//!
//! // Address one pattern variant of a class
//! let diacid = key::qualified_key(well_known::DI_CARBOXYLIC_ACID, 3);
//! assert_eq!(diacid, "smipoly_diCOOH_3");
//!
//! // A binary entry is order-insensitive
//! let entry = MechanismEntry::pair(diacid, "smipoly_diol_2");
//! assert!(entry.is_binary());
//!
//! let cat = MechanismCategory::StepGrowth;
//! assert_eq!(cat.name(), "step_growth");
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! polymech-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod category;
mod entry;
pub mod key;
mod reaction;
pub mod well_known;

// Re-export all public types at crate root
pub use category::MechanismCategory;
pub use entry::MechanismEntry;
pub use key::MAX_VARIANT_INDEX;
pub use reaction::{ReactionId, ReactionInfo, ReactionKind};
