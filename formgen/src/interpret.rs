//! Decoding of pasted form definitions into a typed `FormSchema`.
//!
//! Decoding happens in two steps so the two failure modes stay apart:
//! the text is first checked to be well-formed JSON (`InterpretError::Parse`),
//! then the JSON value is matched against the form definition shape
//! (`InterpretError::Schema`). No untyped JSON leaves this module.
//!
//! Accepted shape:
//!
//! ```json
//! {
//!   "formTitle": "Registration",
//!   "formDescription": "Tell us about yourself",
//!   "fields": [
//!     { "id": "name", "type": "text", "label": "Name", "placeholder": "Jane", "required": true },
//!     { "id": "plan", "type": "select", "label": "Plan", "required": false,
//!       "options": [{ "value": "basic", "label": "Basic" }] }
//!   ]
//! }
//! ```

use formgen_types::{ChoiceField, ChoiceOption, Field, FieldId, FieldKind, FormSchema, TextField};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

/// Error type for `parse`.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    /// The text is not well-formed JSON.
    #[error("Invalid JSON format: {0}")]
    Parse(#[source] serde_json::Error),

    /// The text is JSON, but not a form definition.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl InterpretError {
    /// Check if the input was not well-formed JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if the input was JSON of the wrong shape.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

/// Ways a well-formed JSON document can fail to describe a form.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Missing member, wrong member type, or a non-object where an object belongs.
    #[error("Invalid form definition: {0}")]
    Shape(#[source] serde_json::Error),

    /// A select or radio field without an `options` array.
    #[error("Field '{id}' of type '{kind}' has no options")]
    MissingOptions { id: FieldId, kind: &'static str },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    form_title: String,
    form_description: String,
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    label: String,
    placeholder: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    required: bool,
    options: Option<Vec<RawOption>>,
}

/// `"required": null` means the attribute is absent.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Debug, Deserialize)]
struct RawOption {
    value: String,
    label: String,
}

impl RawField {
    fn into_field(self) -> Result<Field, SchemaError> {
        let RawField {
            kind,
            id,
            label,
            placeholder,
            required,
            options,
        } = self;

        let field_kind = match kind.as_str() {
            "text" => FieldKind::Text(TextField { placeholder }),
            "email" => FieldKind::Email(TextField { placeholder }),
            "textarea" => FieldKind::Textarea(TextField { placeholder }),
            "select" => FieldKind::Select(choices(&id, "select", options)?),
            "radio" => FieldKind::Radio(choices(&id, "radio", options)?),
            other => {
                debug!(field = %id, kind = other, "unrecognized field type, it will not be rendered");
                FieldKind::Unrecognized(other.to_string())
            }
        };

        Ok(Field::new(id, label, field_kind).required(required))
    }
}

fn choices(
    id: &str,
    kind: &'static str,
    options: Option<Vec<RawOption>>,
) -> Result<ChoiceField, SchemaError> {
    let options = options.ok_or_else(|| SchemaError::MissingOptions {
        id: FieldId::new(id),
        kind,
    })?;

    if options.is_empty() {
        warn!(field = %id, kind, "choice field has an empty options list");
    }

    Ok(ChoiceField::new(
        options
            .into_iter()
            .map(|o| ChoiceOption::new(o.value, o.label))
            .collect(),
    ))
}

/// Parse a pasted form definition.
///
/// Fails with `InterpretError::Parse` when `raw` is not well-formed JSON and
/// with `InterpretError::Schema` when it is JSON of the wrong shape. Fields
/// with an unknown `type` are kept as `FieldKind::Unrecognized`.
///
/// # Example
/// ```
/// use formgen::{parse, FieldKind};
///
/// let schema = parse(
///     r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"name","type":"text","label":"Name","required":true}]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(schema.title, "T");
/// assert!(matches!(schema.fields[0].kind(), FieldKind::Text(_)));
/// assert!(parse("{not json").unwrap_err().is_parse());
/// ```
pub fn parse(raw: &str) -> Result<FormSchema, InterpretError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(InterpretError::Parse)?;
    let decoded: RawSchema = serde_json::from_value(value).map_err(SchemaError::Shape)?;

    let fields = decoded
        .fields
        .into_iter()
        .map(RawField::into_field)
        .collect::<Result<Vec<_>, _>>()?;

    let schema = FormSchema {
        title: decoded.form_title,
        description: decoded.form_description,
        fields,
    };

    for id in schema.duplicate_ids() {
        warn!(field = %id, "duplicate field id, the fields share one value");
    }
    debug!(
        title = %schema.title,
        fields = schema.len(),
        rendered = schema.recognized_fields().count(),
        "parsed form definition"
    );

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SIGNUP: &str = r#"{
        "formTitle": "Signup",
        "formDescription": "Create an account",
        "fields": [
            { "id": "name", "type": "text", "label": "Name", "placeholder": "Jane Doe", "required": true },
            { "id": "email", "type": "email", "label": "Email", "required": true },
            { "id": "bio", "type": "textarea", "label": "Bio", "required": false },
            { "id": "plan", "type": "select", "label": "Plan", "required": true,
              "options": [{ "value": "basic", "label": "Basic" }, { "value": "pro", "label": "Pro" }] },
            { "id": "contact", "type": "radio", "label": "Contact me by", "required": false,
              "options": [{ "value": "mail", "label": "Mail" }, { "value": "phone", "label": "Phone" }] }
        ]
    }"#;

    #[test]
    fn parses_every_known_kind() {
        let schema = parse(SIGNUP).unwrap();

        assert_eq!(schema.title, "Signup");
        assert_eq!(schema.description, "Create an account");

        let expected = FormSchema {
            title: "Signup".into(),
            description: "Create an account".into(),
            fields: vec![
                Field::text("name", "Name")
                    .with_placeholder("Jane Doe")
                    .required(true),
                Field::email("email", "Email").required(true),
                Field::textarea("bio", "Bio"),
                Field::select(
                    "plan",
                    "Plan",
                    vec![
                        ChoiceOption::new("basic", "Basic"),
                        ChoiceOption::new("pro", "Pro"),
                    ],
                )
                .required(true),
                Field::radio(
                    "contact",
                    "Contact me by",
                    vec![
                        ChoiceOption::new("mail", "Mail"),
                        ChoiceOption::new("phone", "Phone"),
                    ],
                ),
            ],
        };
        assert_eq!(schema, expected);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        for raw in ["{not json", "", "   ", "{\"formTitle\": \"T\",", "{} trailing"] {
            let err = parse(raw).unwrap_err();
            assert!(err.is_parse(), "expected parse error for {raw:?}, got {err}");
        }
    }

    #[test]
    fn parse_error_message_mentions_invalid_json() {
        let err = parse("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn wrong_shape_is_a_schema_error() {
        let cases = [
            "[]",
            "42",
            "\"form\"",
            r#"{"formTitle":"T","formDescription":"D"}"#,
            r#"{"formTitle":"T","fields":[]}"#,
            r#"{"formTitle":1,"formDescription":"D","fields":[]}"#,
            r#"{"formTitle":"T","formDescription":"D","fields":{}}"#,
            r#"{"formTitle":"T","formDescription":"D","fields":[{"type":"text","label":"No id"}]}"#,
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"x","label":"No type"}]}"#,
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"x","type":"text"}]}"#,
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"x","type":"text","label":"X","required":"yes"}]}"#,
        ];

        for raw in cases {
            let err = parse(raw).unwrap_err();
            assert!(err.is_schema(), "expected schema error for {raw}, got {err}");
        }
    }

    #[test]
    fn choice_without_options_is_rejected() {
        let err = parse(
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"color","type":"radio","label":"Color"}]}"#,
        )
        .unwrap_err();

        match err {
            InterpretError::Schema(SchemaError::MissingOptions { id, kind }) => {
                assert_eq!(id.as_str(), "color");
                assert_eq!(kind, "radio");
            }
            other => panic!("expected MissingOptions, got {other:?}"),
        }
    }

    #[test]
    fn empty_options_are_accepted() {
        let schema = parse(
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"color","type":"select","label":"Color","options":[]}]}"#,
        )
        .unwrap();

        assert_eq!(schema.fields[0].options(), Some(&[][..]));
    }

    #[test]
    fn unknown_type_is_kept_as_unrecognized() {
        let schema = parse(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"dob","type":"date","label":"Birthday"},
                {"id":"name","type":"text","label":"Name"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            schema.fields[0].kind(),
            &FieldKind::Unrecognized("date".into())
        );
        assert!(schema.fields[1].is_recognized());
    }

    #[test]
    fn required_defaults_to_false_and_extra_members_are_ignored() {
        let schema = parse(
            r#"{"formTitle":"T","formDescription":"D","theme":"dark","fields":[
                {"id":"name","type":"text","label":"Name","maxLength":20}
            ]}"#,
        )
        .unwrap();

        assert!(!schema.fields[0].is_required());
    }

    #[test]
    fn null_required_means_optional() {
        let schema = parse(
            r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"x","type":"text","label":"X","required":null}]}"#,
        )
        .unwrap();

        assert!(!schema.fields[0].is_required());
    }

    #[test]
    fn placeholder_on_choice_and_options_on_text_are_ignored() {
        let schema = parse(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"plan","type":"select","label":"Plan","placeholder":"Pick","options":[{"value":"a","label":"A"}]},
                {"id":"name","type":"text","label":"Name","options":[{"value":"a","label":"A"}]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(schema.fields[0].placeholder(), None);
        assert_eq!(schema.fields[1].options(), None);
    }

    #[test]
    fn duplicate_ids_are_allowed() {
        let schema = parse(
            r#"{"formTitle":"T","formDescription":"D","fields":[
                {"id":"name","type":"text","label":"First"},
                {"id":"name","type":"textarea","label":"Second"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.duplicate_ids().len(), 1);
    }
}
