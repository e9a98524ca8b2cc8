//! Case Insensitive Identifiers
//!
//! Names of users and roles compare without regard to case but keep the
//! spelling they were written with.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A name compared, ordered and hashed by its lowercase form
#[derive(Clone)]
pub struct CaseInsensitiveString {
    name: String,
    lowercase: String,
}

impl CaseInsensitiveString {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let lowercase = name.to_lowercase();
        Self { name, lowercase }
    }

    /// The name as originally written
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The form used for comparison
    pub fn to_lower(&self) -> &str {
        &self.lowercase
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Render an optional name, using an empty string when absent
    pub fn str(name: Option<&CaseInsensitiveString>) -> &str {
        name.map(CaseInsensitiveString::as_str).unwrap_or("")
    }
}

impl PartialEq for CaseInsensitiveString {
    fn eq(&self, other: &Self) -> bool {
        self.lowercase == other.lowercase
    }
}

impl Eq for CaseInsensitiveString {}

impl Hash for CaseInsensitiveString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lowercase.hash(state);
    }
}

impl PartialOrd for CaseInsensitiveString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CaseInsensitiveString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lowercase.cmp(&other.lowercase)
    }
}

impl fmt::Display for CaseInsensitiveString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for CaseInsensitiveString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.name, f)
    }
}

impl From<&str> for CaseInsensitiveString {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CaseInsensitiveString {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Serialize for CaseInsensitiveString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for CaseInsensitiveString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_case() {
        assert_eq!(CaseInsensitiveString::new("Bob"), CaseInsensitiveString::new("bOB"));
        assert_ne!(CaseInsensitiveString::new("Bob"), CaseInsensitiveString::new("Alice"));
    }

    #[test]
    fn test_keeps_original_spelling() {
        let name = CaseInsensitiveString::new("Bob");
        assert_eq!(name.as_str(), "Bob");
        assert_eq!(name.to_lower(), "bob");
        assert_eq!(name.to_string(), "Bob");
        assert_eq!(format!("{:?}", name), r#""Bob""#);
    }

    #[test]
    fn test_hash_set_deduplicates_by_case() {
        let names: HashSet<CaseInsensitiveString> = ["admin", "Admin", "ADMIN", "operator"]
            .into_iter()
            .map(CaseInsensitiveString::from)
            .collect();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_str_of_absent_name() {
        let name = CaseInsensitiveString::new("bob");
        assert_eq!(CaseInsensitiveString::str(Some(&name)), "bob");
        assert_eq!(CaseInsensitiveString::str(None), "");
    }

    #[test]
    fn test_blank_and_ordering() {
        assert!(CaseInsensitiveString::new("  ").is_blank());
        assert!(!CaseInsensitiveString::new("x").is_blank());
        assert!(CaseInsensitiveString::new("alice") < CaseInsensitiveString::new("Bob"));
    }

    #[test]
    fn test_serde_round_trip_keeps_spelling() {
        let json = serde_json::to_string(&CaseInsensitiveString::new("Bob")).unwrap();
        assert_eq!(json, r#""Bob""#);
        let name: CaseInsensitiveString = serde_json::from_str(&json).unwrap();
        assert_eq!(name.as_str(), "Bob");
    }
}
