//! # formgen-html
//!
//! Render formgen forms as HTML.
//!
//! - `form_html` - the generated `<form>` for a schema and its current values
//! - `page_html` - the whole form builder widget for a `FormState`
//!
//! ```rust
//! use formgen::{FormController, RecordingSink};
//! use formgen_html::{HtmlOptions, page_html};
//!
//! let mut form = FormController::new(RecordingSink::new());
//! form.load(r#"{"formTitle":"Hello","formDescription":"World","fields":[]}"#)
//!     .unwrap();
//!
//! let html = page_html(form.state(), &HtmlOptions::new().full_document(false));
//! assert!(html.contains("<h2 class=\"formgen-title\">Hello</h2>"));
//! ```

mod generator;
pub use generator::{DEFAULT_HEADING, HtmlOptions, form_html, page_html};
