//! Record structure for Cadence.
//!
//! A `Record` is the unit stored by every index: a key used for ordering and
//! lookup, and an opaque payload carried alongside it.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

/// An immutable key/payload pair.
///
/// Records compare for equality over both fields, but only the key takes
/// part in ordering. Use [`Record::key_cmp`] wherever index order matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    /// Ordering and lookup attribute.
    key: String,
    /// Secondary attribute, never compared.
    payload: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(key: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            payload: payload.into(),
        }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the payload.
    #[inline]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Consumes the record, returning `(key, payload)`.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.payload)
    }

    /// Compares two records by key only (byte-wise lexicographic).
    #[inline]
    pub fn key_cmp(&self, other: &Record) -> Ordering {
        self.key.as_str().cmp(other.key.as_str())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {}", self.key, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_record_accessors() {
        let record = Record::new("Song One", "Artist A");
        assert_eq!(record.key(), "Song One");
        assert_eq!(record.payload(), "Artist A");
    }

    #[test]
    fn test_record_into_parts() {
        let (key, payload) = Record::new("k", "p").into_parts();
        assert_eq!(key, "k");
        assert_eq!(payload, "p");
    }

    #[test]
    fn test_record_key_cmp_ignores_payload() {
        let a = Record::new("X", "P1");
        let b = Record::new("X", "P2");
        assert_eq!(a.key_cmp(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_key_cmp_lexicographic() {
        let another = Record::new("Another Song", "C");
        let one = Record::new("Song One", "A");
        let two = Record::new("Song Two", "B");
        assert_eq!(another.key_cmp(&one), Ordering::Less);
        assert_eq!(one.key_cmp(&two), Ordering::Less);
        assert_eq!(two.key_cmp(&another), Ordering::Greater);

        // Uppercase sorts before lowercase byte-wise
        assert_eq!(Record::new("Z", "").key_cmp(&Record::new("a", "")), Ordering::Less);
    }

    #[test]
    fn test_record_display() {
        let record = Record::new("Song Two", "Artist B");
        assert_eq!(record.to_string(), "'Song Two' by Artist B");
    }
}
