//! Duplicate-key handling for the catalog.

use cadence_core::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// What the ordered index does when a record arrives for a key it already holds.
///
/// The lookup index always keeps the newest record for a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// The ordered index keeps the record it already has. Both indexes still
    /// report the key as present, but their payloads diverge until the key is
    /// deleted.
    #[default]
    KeepFirst,
    /// The ordered index replaces its record in place, so both indexes hold
    /// the newest record.
    Replace,
}

impl DuplicatePolicy {
    /// Returns the policy's name as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::KeepFirst => "keep-first",
            DuplicatePolicy::Replace => "replace",
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "keep-first" => Ok(DuplicatePolicy::KeepFirst),
            "replace" => Ok(DuplicatePolicy::Replace),
            other => Err(Error::unknown_policy(other)),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_policy_default() {
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::KeepFirst);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("keep-first".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::KeepFirst));
        assert_eq!("replace".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Replace));
        assert_eq!(
            "Replace".parse::<DuplicatePolicy>(),
            Err(Error::unknown_policy("Replace"))
        );
    }

    #[test]
    fn test_policy_display_roundtrip() {
        for policy in [DuplicatePolicy::KeepFirst, DuplicatePolicy::Replace] {
            assert_eq!(policy.to_string().parse::<DuplicatePolicy>(), Ok(policy));
        }
    }
}
