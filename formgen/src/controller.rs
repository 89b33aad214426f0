//! The single owner of the widget state.

use formgen_types::{FieldId, FormSchema, FormValues, SinkError, SubmissionSink};
use tracing::{debug, info, warn};

use crate::interpret::InterpretError;
use crate::render::FormNode;
use crate::state::{Effect, Event, FormState, Phase, Transition, ValuesPolicy};

/// Message shown after a successful submission unless configured otherwise.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Options for `FormController`.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerOptions {
    /// What happens to entered values when a new definition is generated.
    pub values_policy: ValuesPolicy,
    /// Message shown after a successful submission.
    pub success_message: String,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self {
            values_policy: ValuesPolicy::Reset,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Set the values policy applied when a new definition replaces the shown one.
    pub fn on_schema_replaced(mut self, policy: ValuesPolicy) -> Self {
        self.values_policy = policy;
        self
    }

    /// Set the success message.
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }
}

/// Outcome of `FormController::submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The snapshot was delivered to the sink.
    Submitted(FormValues),
    /// Required fields are missing; the sink was not called.
    Blocked { missing: Vec<FieldId> },
    /// There is no form to submit.
    NoForm,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Drives a `FormState` and hands submissions to a `SubmissionSink`.
///
/// # Example
/// ```
/// use formgen::{FormController, Phase, RecordingSink, SubmitOutcome};
///
/// let mut form = FormController::new(RecordingSink::new());
/// form.load(r#"{"formTitle":"T","formDescription":"D","fields":[{"id":"name","type":"text","label":"Name","required":true}]}"#)
///     .unwrap();
///
/// assert!(matches!(form.submit().unwrap(), SubmitOutcome::Blocked { .. }));
///
/// form.input_change("name", "Alice");
/// assert!(form.submit().unwrap().is_submitted());
/// assert_eq!(form.phase(), Phase::Submitted);
/// assert_eq!(form.sink().deliveries().len(), 1);
/// ```
#[derive(Debug)]
pub struct FormController<S> {
    state: FormState,
    options: ControllerOptions,
    sink: S,
}

impl<S: SubmissionSink> FormController<S> {
    /// Create a controller with default options.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, ControllerOptions::new())
    }

    /// Create a controller with custom options.
    pub fn with_options(sink: S, options: ControllerOptions) -> Self {
        Self {
            state: FormState::new(),
            options,
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        self.state.schema()
    }

    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Controls of the shown form, bound to the current values.
    pub fn view(&self) -> Vec<FormNode> {
        self.state.view()
    }

    /// Replace the text in the definition box without generating.
    pub fn edit_source(&mut self, source: impl Into<String>) {
        self.step(Event::SourceEdited(source.into()));
    }

    /// Generate a form from the text in the definition box.
    ///
    /// On failure the error is also kept as the state's notice, and the
    /// previously shown form (if any) stays as it was.
    pub fn generate(&mut self) -> Result<(), InterpretError> {
        match self.step(Event::Generate) {
            Effect::Rejected(err) => {
                warn!(error = %err, "could not generate form");
                Err(err)
            }
            Effect::Loaded { replaced } => {
                info!(
                    title = self.schema().map(|s| s.title.as_str()).unwrap_or_default(),
                    controls = self.state.view().len(),
                    replaced,
                    "form generated"
                );
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Put `source` in the definition box and generate a form from it.
    pub fn load(&mut self, source: impl Into<String>) -> Result<(), InterpretError> {
        self.edit_source(source);
        self.generate()
    }

    /// Record a new value for a control of the shown form.
    pub fn input_change(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        let id = id.into();
        match self.schema() {
            None => debug!(field = %id, "ignoring input without a form"),
            Some(schema) if !schema.recognized_fields().any(|f| *f.id() == id) => {
                debug!(field = %id, "ignoring input for a field that is not shown")
            }
            Some(_) => {}
        }
        self.step(Event::InputChanged {
            id,
            value: value.into(),
        });
    }

    /// Acknowledge the current notice.
    pub fn dismiss_notice(&mut self) {
        self.step(Event::DismissNotice);
    }

    /// Submit the shown form.
    ///
    /// When every required field is filled in, the full value snapshot is
    /// delivered to the sink and the phase becomes `Submitted`. If the sink
    /// fails, the state is left as it was before the call.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SinkError> {
        let Transition { state, effect } = self.state.apply(Event::Submit, &self.options);

        let outcome = match effect {
            Effect::Deliver(snapshot) => {
                self.sink
                    .deliver(&snapshot)
                    .map_err(SinkError::delivery)?;
                info!(fields = snapshot.len(), "form submitted");
                SubmitOutcome::Submitted(snapshot)
            }
            Effect::Blocked(missing) => {
                debug!(?missing, "submission blocked by required fields");
                SubmitOutcome::Blocked { missing }
            }
            _ => {
                debug!("nothing to submit");
                SubmitOutcome::NoForm
            }
        };

        self.state = state;
        Ok(outcome)
    }

    fn step(&mut self, event: Event) -> Effect {
        let Transition { state, effect } = self.state.apply(event, &self.options);
        self.state = state;
        effect
    }
}
