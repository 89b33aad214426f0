use crate::FieldId;

/// A single field of a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Key of this field's value in `FormValues`.
    id: FieldId,

    /// The label shown next to the control.
    label: String,

    /// Whether the browser must block submission while the field is empty.
    required: bool,

    /// The kind of control and its kind-specific settings.
    kind: FieldKind,
}

impl Field {
    /// Create a new optional field.
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            required: false,
            kind,
        }
    }

    /// Single-line text field.
    pub fn text(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Text(TextField::new()))
    }

    /// Single-line email field.
    pub fn email(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Email(TextField::new()))
    }

    /// Multi-line text field.
    pub fn textarea(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Textarea(TextField::new()))
    }

    /// Drop-down with a single choice.
    pub fn select(
        id: impl Into<FieldId>,
        label: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self::new(id, label, FieldKind::Select(ChoiceField::new(options)))
    }

    /// Group of mutually exclusive radio buttons.
    pub fn radio(
        id: impl Into<FieldId>,
        label: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self::new(id, label, FieldKind::Radio(ChoiceField::new(options)))
    }

    /// Mark the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the placeholder. Has no effect on choice or unrecognized kinds.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let Some(text) = self.kind.text_mut() {
            text.placeholder = Some(placeholder.into());
        }
        self
    }

    /// Get the field id.
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Get the label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if the field is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Get the placeholder, if this kind has one.
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Text(t) | FieldKind::Email(t) | FieldKind::Textarea(t) => {
                t.placeholder.as_deref()
            }
            _ => None,
        }
    }

    /// Get the options, if this is a choice kind.
    pub fn options(&self) -> Option<&[ChoiceOption]> {
        match &self.kind {
            FieldKind::Select(c) | FieldKind::Radio(c) => Some(&c.options),
            _ => None,
        }
    }

    /// Check if this field produces a control when rendered.
    pub fn is_recognized(&self) -> bool {
        self.kind.is_recognized()
    }
}

/// The kind of control a field renders as.
///
/// Decoded from the `type` member of a field definition. Type names
/// outside the five known ones are kept as `Unrecognized` and render nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// `"text"`: single-line input.
    Text(TextField),

    /// `"email"`: single-line input with email semantics.
    Email(TextField),

    /// `"textarea"`: multi-line input.
    Textarea(TextField),

    /// `"select"`: drop-down, one choice.
    Select(ChoiceField),

    /// `"radio"`: exclusive radio buttons.
    Radio(ChoiceField),

    /// Any other type name. Skipped by the renderer.
    Unrecognized(String),
}

impl FieldKind {
    /// The type name as it appears in the form definition.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::Email(_) => "email",
            Self::Textarea(_) => "textarea",
            Self::Select(_) => "select",
            Self::Radio(_) => "radio",
            Self::Unrecognized(name) => name,
        }
    }

    /// Check if this kind renders a control.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Check if this is a choice kind (Select or Radio).
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select(_) | Self::Radio(_))
    }

    fn text_mut(&mut self) -> Option<&mut TextField> {
        match self {
            Self::Text(t) | Self::Email(t) | Self::Textarea(t) => Some(t),
            _ => None,
        }
    }
}

/// Configuration shared by the free-text kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    /// Hint shown while the control is empty.
    pub placeholder: Option<String>,
}

impl TextField {
    /// Create a text configuration without placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
        }
    }
}

/// Configuration for Select and Radio fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceField {
    /// The choices, in display order. May be empty, in which case the
    /// control renders without choices.
    pub options: Vec<ChoiceOption>,
}

impl ChoiceField {
    /// Create a choice configuration with the given options.
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Find the option with the given value.
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// One choice of a Select or Radio field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The value stored in `FormValues` when this choice is picked.
    pub value: String,

    /// The text shown for this choice.
    pub label: String,
}

impl ChoiceOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
