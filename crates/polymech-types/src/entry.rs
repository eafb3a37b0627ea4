//! Classified mechanism entries.
//!
//! A [`MechanismEntry`] is one fully expanded classification fact: the
//! unordered set of one or two monomer keys a reaction consumes. The
//! category an entry belongs to is carried by the index partition, not by
//! the entry itself.

/// One classified monomer combination.
///
/// Holds one key (homopolymerization) or two keys (binary reaction).
/// Equality and hashing are order-insensitive: the keys are stored sorted,
/// so `{A, B}` and `{B, A}` are the same entry.
///
/// # Examples
///
/// ```
/// use polymech_types::MechanismEntry;
///
/// let a = MechanismEntry::pair("smipoly_diol_2", "smipoly_diCOOH_3");
/// let b = MechanismEntry::pair("smipoly_diCOOH_3", "smipoly_diol_2");
/// assert_eq!(a, b);
/// assert_eq!(a.monomers(), ["smipoly_diCOOH_3", "smipoly_diol_2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MechanismEntry {
    monomers: Vec<String>,
}

impl MechanismEntry {
    /// Creates a single-monomer entry.
    pub fn single(key: impl Into<String>) -> Self {
        Self {
            monomers: vec![key.into()],
        }
    }

    /// Creates a binary entry. The two keys are stored sorted, so argument
    /// order does not matter. A self-pair (`a == b`) is a valid entry
    /// distinct from the single-monomer entry for the same key.
    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> Self {
        let mut monomers = vec![a.into(), b.into()];
        monomers.sort();
        Self { monomers }
    }

    /// Creates an entry from an arbitrary key list, sorting it.
    ///
    /// Intended for hand-declared entry tables; the expansion code uses
    /// [`single`](Self::single) and [`pair`](Self::pair).
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut monomers: Vec<String> = keys.into_iter().map(Into::into).collect();
        monomers.sort();
        Self { monomers }
    }

    /// The monomer keys, in sorted order.
    pub fn monomers(&self) -> &[String] {
        &self.monomers
    }

    /// Returns true for a single-monomer entry.
    pub fn is_single(&self) -> bool {
        self.monomers.len() == 1
    }

    /// Returns true for a binary entry (including self-pairs).
    pub fn is_binary(&self) -> bool {
        self.monomers.len() == 2
    }
}

impl std::fmt::Display for MechanismEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.monomers.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_order_insensitive() {
        let a = MechanismEntry::pair("smipoly_diNCO_1", "smipoly_diol_4");
        let b = MechanismEntry::pair("smipoly_diol_4", "smipoly_diNCO_1");
        assert_eq!(a, b);

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_self_pair_differs_from_single() {
        let single = MechanismEntry::single("smipoly_aminCOOH_1");
        let pair = MechanismEntry::pair("smipoly_aminCOOH_1", "smipoly_aminCOOH_1");
        assert_ne!(single, pair);
        assert!(single.is_single());
        assert!(pair.is_binary());
    }

    #[test]
    fn test_from_keys_sorts() {
        let entry = MechanismEntry::from_keys(["di_acid_chloride", "di_amine"]);
        assert_eq!(entry.monomers(), ["di_acid_chloride", "di_amine"]);
        let swapped = MechanismEntry::from_keys(["di_amine", "di_acid_chloride"]);
        assert_eq!(entry, swapped);
    }

    #[test]
    fn test_display() {
        let entry = MechanismEntry::pair("smipoly_cAnhyd_1", "smipoly_epo_2");
        assert_eq!(entry.to_string(), "smipoly_cAnhyd_1 + smipoly_epo_2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_plain_list() {
        let entry = MechanismEntry::pair("smipoly_diCOOH_1", "smipoly_diol_1");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, "[\"smipoly_diCOOH_1\",\"smipoly_diol_1\"]");

        let parsed: MechanismEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
