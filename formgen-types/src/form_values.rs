use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::FieldId;

/// Current values entered by the user, keyed by field id.
///
/// Every value is the raw string the control holds: the text of an input or
/// textarea, the `value` of the selected option or the checked radio button.
/// Keys are unique; updating a key replaces its value.
///
/// Serializes as a flat JSON object, e.g. `{"name":"Alice"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<FieldId, String>,
}

impl FormValues {
    /// Create a new empty value map.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set the value of a field, replacing any previous value.
    pub fn insert(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Return a copy with `id` set to `value` and every other entry unchanged.
    ///
    /// # Example
    /// ```
    /// use formgen_types::{FieldId, FormValues};
    ///
    /// let values = FormValues::new().with_value("name", "Alice");
    /// let updated = values.with_value("email", "alice@example.com");
    ///
    /// assert_eq!(updated.get(&FieldId::new("name")), Some("Alice"));
    /// assert_eq!(updated.get(&FieldId::new("email")), Some("alice@example.com"));
    /// assert_eq!(values.len(), 1);
    /// ```
    pub fn with_value(&self, id: impl Into<FieldId>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.insert(id, value);
        next
    }

    /// Get the value of a field.
    pub fn get(&self, id: &FieldId) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Get the value of a field, or the empty string if it was never set.
    ///
    /// This is what an unbound text control displays.
    pub fn get_or_empty(&self, id: &FieldId) -> &str {
        self.get(id).unwrap_or("")
    }

    /// Check if a value exists for the field.
    pub fn contains(&self, id: &FieldId) -> bool {
        self.values.contains_key(id)
    }

    /// Check if the field has a non-empty value.
    pub fn has_value(&self, id: &FieldId) -> bool {
        self.get(id).is_some_and(|v| !v.is_empty())
    }

    /// Remove the value of a field.
    pub fn remove(&mut self, id: &FieldId) -> Option<String> {
        self.values.remove(id)
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all id-value pairs, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.values.iter().map(|(id, v)| (id, v.as_str()))
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<FieldId>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (id, value) in iter {
            values.insert(id, value);
        }
        values
    }
}

impl IntoIterator for FormValues {
    type Item = (FieldId, String);
    type IntoIter = std::collections::btree_map::IntoIter<FieldId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a FieldId, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, FieldId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
