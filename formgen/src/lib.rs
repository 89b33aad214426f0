//! # formgen
//!
//! Turn a pasted JSON form description into a form, collect what the user
//! enters, and hand the values to a sink on submission.
//!
//! ## Usage
//!
//! ```rust
//! use formgen::{FormController, SubmitOutcome, TracingSink};
//!
//! let mut form = FormController::new(TracingSink::new());
//! form.load(r#"{
//!     "formTitle": "Newsletter",
//!     "formDescription": "Stay in touch",
//!     "fields": [
//!         { "id": "email", "type": "email", "label": "Email", "required": true },
//!         { "id": "freq", "type": "radio", "label": "How often?", "required": false,
//!           "options": [{ "value": "weekly", "label": "Weekly" }, { "value": "monthly", "label": "Monthly" }] }
//!     ]
//! }"#)
//! .unwrap();
//!
//! assert_eq!(form.view().len(), 2);
//!
//! form.input_change("email", "jo@example.com");
//! form.input_change("freq", "weekly");
//! assert!(matches!(form.submit().unwrap(), SubmitOutcome::Submitted(_)));
//! ```
//!
//! ## Definition format
//!
//! - `formTitle`, `formDescription` - strings shown above the form
//! - `fields` - array of field objects with `id`, `type`, `label`,
//!   optional `placeholder`, optional `required` (defaults to `false`)
//! - `type` is one of `text`, `email`, `textarea`, `select`, `radio`;
//!   `select` and `radio` also need `options: [{ value, label }]`
//! - fields of any other `type` are accepted and not rendered
//!
//! ## Front ends
//!
//! `render` produces presentation-agnostic `FormNode`s;
//! `formgen-html` turns them (and the whole widget) into HTML.

// Re-export all types from formgen-types
pub use formgen_types::*;

mod constraints;
pub use constraints::{is_satisfied, missing_required};

mod controller;
pub use controller::{
    ControllerOptions, DEFAULT_SUCCESS_MESSAGE, FormController, SubmitOutcome,
};

mod interpret;
pub use interpret::{InterpretError, SchemaError, parse};

mod render;
pub use render::{FormNode, InputType, RadioChoice, render, render_field};

mod sink;
pub use sink::{RecordingSink, RecordingSinkError, TracingSink};

mod state;
pub use state::{Effect, Event, FormState, Phase, Transition, ValuesPolicy, on_input_change};
