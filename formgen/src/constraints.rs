//! Required-field check run before submission.
//!
//! Follows the browser's constraint validation for the `required`
//! attribute, so a form that a browser would refuse to submit is refused
//! here as well.

use formgen_types::{Field, FieldId, FieldKind, FormSchema, FormValues};

use crate::render::selected_index;

/// Check a single field against its `required` attribute.
///
/// - text, email, textarea: the value must be non-empty.
/// - radio: one of the choices must be checked, unless there are none.
/// - select: the option the control shows (the bound one, else the first)
///   must exist and have a non-empty value.
///
/// Optional and unrecognized fields always pass.
pub fn is_satisfied(field: &Field, values: &FormValues) -> bool {
    if !field.is_required() {
        return true;
    }

    let current = values.get(field.id());
    match field.kind() {
        FieldKind::Text(_) | FieldKind::Email(_) | FieldKind::Textarea(_) => {
            current.is_some_and(|v| !v.is_empty())
        }
        FieldKind::Radio(choice) => {
            choice.options().is_empty() || current.is_some_and(|v| choice.option(v).is_some())
        }
        FieldKind::Select(choice) => {
            let shown = selected_index(choice, current).unwrap_or(0);
            choice
                .options()
                .get(shown)
                .is_some_and(|o| !o.value.is_empty())
        }
        FieldKind::Unrecognized(_) => true,
    }
}

/// Ids of required fields that block submission, in schema order.
pub fn missing_required(schema: &FormSchema, values: &FormValues) -> Vec<FieldId> {
    schema
        .fields()
        .iter()
        .filter(|field| !is_satisfied(field, values))
        .map(|field| field.id().clone())
        .collect()
}
