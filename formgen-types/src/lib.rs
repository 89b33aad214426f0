//! Core types for the formgen crates.
//!
//! This crate provides the foundational types for describing and filling forms:
//! - `FormSchema` - The top-level form structure
//! - `Field` and `FieldKind` - Individual fields and their control types
//! - `FormValues` and `FieldId` - Entered values and their keys
//! - `SubmissionSink` trait - For receiving submitted values

mod field_id;
pub use field_id::FieldId;

mod form_values;
pub use form_values::FormValues;

mod field;
pub use field::{ChoiceField, ChoiceOption, Field, FieldKind, TextField};

mod form_schema;
pub use form_schema::FormSchema;

mod error;
pub use error::SinkError;

mod traits;
pub use traits::SubmissionSink;
