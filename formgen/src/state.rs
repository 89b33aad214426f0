//! Widget state and its transitions.
//!
//! `FormState` is an immutable snapshot of everything the widget shows.
//! `FormState::apply` computes the next snapshot for an event together with
//! the effect the owner has to carry out; it never touches the sink itself.

use formgen_types::{FieldId, FormSchema, FormValues};

use crate::constraints::missing_required;
use crate::controller::ControllerOptions;
use crate::interpret::{InterpretError, parse};
use crate::render::{FormNode, render};

/// Where the widget is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No form has been generated yet.
    #[default]
    Idle,
    /// A form is shown and can be filled in.
    FormDisplayed,
    /// The shown form was submitted. It stays on screen and can be
    /// edited and submitted again.
    Submitted,
}

/// What happens to entered values when a new form definition replaces
/// the shown one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuesPolicy {
    /// Start the new form empty.
    #[default]
    Reset,
    /// Keep every value; fields of the new form with a known id show it.
    Retain,
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The text in the definition box changed.
    SourceEdited(String),
    /// "Generate Form" was pressed.
    Generate,
    /// A control of the generated form changed.
    InputChanged { id: FieldId, value: String },
    /// The generated form was submitted.
    Submit,
    /// The user acknowledged the notice.
    DismissNotice,
}

/// What the owner of the state has to do after a transition.
#[derive(Debug)]
pub enum Effect {
    /// Nothing beyond storing the new state.
    None,
    /// A form definition was parsed and is now shown.
    Loaded { replaced: bool },
    /// The definition could not be used; the shown form is unchanged.
    Rejected(InterpretError),
    /// Submission passed the required-field check; hand the snapshot to the sink.
    Deliver(FormValues),
    /// Submission was refused because these required fields are missing.
    Blocked(Vec<FieldId>),
}

/// Result of `FormState::apply`.
#[derive(Debug)]
pub struct Transition {
    pub state: FormState,
    pub effect: Effect,
}

/// Everything the widget shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    phase: Phase,
    source: String,
    schema: Option<FormSchema>,
    values: FormValues,
    notice: Option<String>,
    success: Option<String>,
}

impl FormState {
    /// Create the initial, idle state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The text currently in the definition box.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The form definition currently shown, if any.
    pub fn schema(&self) -> Option<&FormSchema> {
        self.schema.as_ref()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Message of the last failed generation. Cleared by the next event.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Message shown after a successful submission.
    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Controls of the shown form, bound to the current values.
    pub fn view(&self) -> Vec<FormNode> {
        match &self.schema {
            Some(schema) => render(schema, &self.values),
            None => Vec::new(),
        }
    }

    /// Compute the state following `event`.
    pub fn apply(&self, event: Event, options: &ControllerOptions) -> Transition {
        let mut next = self.clone();
        next.notice = None;

        let effect = match event {
            Event::SourceEdited(source) => {
                next.source = source;
                Effect::None
            }
            Event::Generate => match parse(&next.source) {
                Ok(schema) => {
                    let replaced = next.schema.is_some();
                    if options.values_policy == ValuesPolicy::Reset {
                        next.values.clear();
                    }
                    next.schema = Some(schema);
                    next.phase = Phase::FormDisplayed;
                    next.success = None;
                    Effect::Loaded { replaced }
                }
                Err(err) => {
                    next.notice = Some(err.to_string());
                    Effect::Rejected(err)
                }
            },
            Event::InputChanged { id, value } => {
                // Only rendered controls produce changes.
                let shown = next
                    .schema
                    .as_ref()
                    .is_some_and(|schema| schema.recognized_fields().any(|f| *f.id() == id));
                if shown {
                    next.values = on_input_change(&next.values, id, value);
                }
                Effect::None
            }
            Event::Submit => match &next.schema {
                None => Effect::None,
                Some(schema) => {
                    let missing = missing_required(schema, &next.values);
                    if missing.is_empty() {
                        next.phase = Phase::Submitted;
                        next.success = Some(options.success_message.clone());
                        Effect::Deliver(next.values.clone())
                    } else {
                        Effect::Blocked(missing)
                    }
                }
            },
            Event::DismissNotice => Effect::None,
        };

        Transition {
            state: next,
            effect,
        }
    }
}

/// Set `id` to `value`, leaving every other entry as it was.
pub fn on_input_change(
    values: &FormValues,
    id: impl Into<FieldId>,
    value: impl Into<String>,
) -> FormValues {
    values.with_value(id, value)
}
