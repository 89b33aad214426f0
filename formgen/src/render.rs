//! Mapping of form fields to controls bound to the current values.

use formgen_types::{ChoiceField, ChoiceOption, Field, FieldId, FieldKind, FormSchema, FormValues};

/// `type` attribute of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
        }
    }
}

/// One choice of a radio group, with its checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioChoice {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

/// A rendered control, bound to the value of its field.
///
/// Nodes are presentation-agnostic: `formgen-html` serializes them to HTML,
/// other front ends can map them onto their own widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum FormNode {
    /// Single-line input (`text` and `email` fields).
    Input {
        id: FieldId,
        label: String,
        input_type: InputType,
        placeholder: Option<String>,
        required: bool,
        value: String,
    },

    /// Multi-line input.
    TextArea {
        id: FieldId,
        label: String,
        placeholder: Option<String>,
        required: bool,
        value: String,
    },

    /// Drop-down. `selected` is the index of the option matching the current
    /// value; `None` leaves the choice to the control, which shows the first
    /// option.
    Select {
        id: FieldId,
        label: String,
        required: bool,
        options: Vec<ChoiceOption>,
        selected: Option<usize>,
    },

    /// Exclusive radio buttons sharing the field id as their name.
    RadioGroup {
        id: FieldId,
        label: String,
        required: bool,
        choices: Vec<RadioChoice>,
    },
}

impl FormNode {
    /// Get the id of the field this node is bound to.
    pub fn id(&self) -> &FieldId {
        match self {
            Self::Input { id, .. }
            | Self::TextArea { id, .. }
            | Self::Select { id, .. }
            | Self::RadioGroup { id, .. } => id,
        }
    }

    /// Get the label text.
    pub fn label(&self) -> &str {
        match self {
            Self::Input { label, .. }
            | Self::TextArea { label, .. }
            | Self::Select { label, .. }
            | Self::RadioGroup { label, .. } => label,
        }
    }

    /// Check if the control carries the `required` attribute.
    pub fn is_required(&self) -> bool {
        match self {
            Self::Input { required, .. }
            | Self::TextArea { required, .. }
            | Self::Select { required, .. }
            | Self::RadioGroup { required, .. } => *required,
        }
    }

    /// The option a select shows: the bound one, otherwise the first.
    ///
    /// `None` for other node kinds and for selects without options.
    pub fn displayed_option(&self) -> Option<&ChoiceOption> {
        match self {
            Self::Select {
                options, selected, ..
            } => options.get(selected.unwrap_or(0)),
            _ => None,
        }
    }
}

/// Render every field of the schema against the current values.
///
/// Produces exactly one node per recognized field, in schema order.
/// Unrecognized fields produce nothing.
pub fn render(schema: &FormSchema, values: &FormValues) -> Vec<FormNode> {
    schema
        .fields()
        .iter()
        .filter_map(|field| render_field(field, values))
        .collect()
}

/// Render a single field. Returns `None` for unrecognized kinds.
pub fn render_field(field: &Field, values: &FormValues) -> Option<FormNode> {
    let id = field.id().clone();
    let label = field.label().to_string();
    let required = field.is_required();
    let current = values.get(field.id());

    let node = match field.kind() {
        FieldKind::Text(text) | FieldKind::Email(text) => FormNode::Input {
            input_type: if matches!(field.kind(), FieldKind::Email(_)) {
                InputType::Email
            } else {
                InputType::Text
            },
            placeholder: text.placeholder.clone(),
            value: current.unwrap_or_default().to_string(),
            id,
            label,
            required,
        },
        FieldKind::Textarea(text) => FormNode::TextArea {
            placeholder: text.placeholder.clone(),
            value: current.unwrap_or_default().to_string(),
            id,
            label,
            required,
        },
        FieldKind::Select(choice) => FormNode::Select {
            selected: selected_index(choice, current),
            options: choice.options().to_vec(),
            id,
            label,
            required,
        },
        FieldKind::Radio(choice) => FormNode::RadioGroup {
            choices: choice
                .options()
                .iter()
                .map(|o| RadioChoice {
                    value: o.value.clone(),
                    label: o.label.clone(),
                    checked: current == Some(o.value.as_str()),
                })
                .collect(),
            id,
            label,
            required,
        },
        FieldKind::Unrecognized(_) => return None,
    };

    Some(node)
}

/// Index of the option whose value equals the bound value.
pub(crate) fn selected_index(choice: &ChoiceField, current: Option<&str>) -> Option<usize> {
    let current = current?;
    choice.options().iter().position(|o| o.value == current)
}
