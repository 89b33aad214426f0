use std::collections::HashSet;

use crate::{Field, FieldId};

/// A parsed form description: title, description and ordered fields.
///
/// Created once per successful parse and replaced wholesale by the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    /// Heading shown above the form.
    pub title: String,

    /// Text shown under the heading.
    pub description: String,

    /// All fields, in display order (including unrecognized ones).
    pub fields: Vec<Field>,
}

impl FormSchema {
    /// Create a new schema with the given title and fields.
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            fields,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterate over the fields that render a control.
    pub fn recognized_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_recognized())
    }

    /// Find the first field with the given id.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Ids used by more than one field, each reported once, in schema order.
    pub fn duplicate_ids(&self) -> Vec<&FieldId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for field in &self.fields {
            let id = field.id();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Check if the schema has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    #[test]
    fn recognized_fields_skip_unknown_kinds() {
        let schema = FormSchema::new(
            "Signup",
            vec![
                Field::text("name", "Name"),
                Field::new("dob", "Birthday", FieldKind::Unrecognized("date".into())),
                Field::email("email", "Email"),
            ],
        );

        let ids: Vec<_> = schema.recognized_fields().map(|f| f.id().as_str()).collect();
        assert_eq!(ids, vec!["name", "email"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn duplicate_ids_reported_once() {
        let schema = FormSchema::new(
            "Dupes",
            vec![
                Field::text("name", "Name"),
                Field::text("name", "Name again"),
                Field::textarea("name", "Name a third time"),
                Field::email("email", "Email"),
            ],
        );

        let duplicates: Vec<_> = schema.duplicate_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(duplicates, vec!["name"]);
    }

    #[test]
    fn field_lookup_returns_first_match() {
        let schema = FormSchema::new(
            "Lookup",
            vec![Field::text("a", "First"), Field::textarea("a", "Second")],
        )
        .with_description("Two fields, one id");

        let field = schema.field(&FieldId::new("a")).unwrap();
        assert_eq!(field.label(), "First");
        assert_eq!(schema.description, "Two fields, one id");
    }
}
