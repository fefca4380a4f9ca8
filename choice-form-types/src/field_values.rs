use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::FieldName;

/// Scalar values of a set of form fields.
///
/// A field can be present with no value (nothing selected yet). Absent values
/// are left out when serialized, so `{storage: None}` prints as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<FieldName, Option<String>>,
}

impl FieldValues {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert of a present value.
    pub fn with(mut self, name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Set the value of a field, `None` meaning nothing selected.
    pub fn set(&mut self, name: impl Into<FieldName>, value: Option<String>) {
        self.values.insert(name.into(), value);
    }

    /// Get the value of a field.
    ///
    /// Returns `None` both for unknown fields and for fields with no value.
    pub fn get(&self, name: &FieldName) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    /// Check if the field is part of this collection (with or without a value).
    pub fn contains(&self, name: &FieldName) -> bool {
        self.values.contains_key(name)
    }

    /// Check if the field holds a non-empty value.
    pub fn has_value(&self, name: &FieldName) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    /// Get an iterator over all fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k, v.as_deref()))
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.values.iter().filter(|(_, v)| v.is_some());
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in present {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a FieldValues {
    type Item = (&'a FieldName, &'a Option<String>);
    type IntoIter = std::collections::btree_map::Iter<'a, FieldName, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
