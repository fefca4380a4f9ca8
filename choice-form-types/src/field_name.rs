use std::fmt;

use serde::Serialize;

/// The name of a form field, e.g. `"storage"`.
///
/// Used as keys in `FieldValues` and in the form's per-field bookkeeping.
/// Serializes as the bare name so it can key JSON objects.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldName {
    name: String,
}

impl FieldName {
    /// Create a new field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let name = FieldName::new("storage");
        assert_eq!(format!("{}", name), "storage");
    }

    #[test]
    fn from_str() {
        let name: FieldName = "user".into();
        assert_eq!(name.as_str(), "user");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&FieldName::new("storage")).unwrap();
        assert_eq!(json, "\"storage\"");
    }
}
