//! Stock submission sinks.
//!
//! `TracingSink` writes every submission to the log, which is the developer
//! trace channel the widget reports to by default. `RecordingSink` keeps the
//! snapshots in memory so tests can inspect what was submitted.
//!
//! # Example
//!
//! ```rust
//! use formgen::{FormController, RecordingSink};
//!
//! let mut form = FormController::new(RecordingSink::new());
//! form.load(r#"{"formTitle":"Hi","formDescription":"","fields":[{"id":"name","type":"text","label":"Name"}]}"#)
//!     .unwrap();
//! form.input_change("name", "Alice");
//! form.submit().unwrap();
//!
//! let submitted = form.sink().last().unwrap();
//! assert_eq!(submitted.len(), 1);
//! ```

use formgen_types::{FormValues, SubmissionSink};
use tracing::info;

/// Logs each submission as a JSON object at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for TracingSink {
    type Error = serde_json::Error;

    fn deliver(&mut self, values: &FormValues) -> Result<(), Self::Error> {
        let data = serde_json::to_string(values)?;
        info!(target: "formgen::submission", %data, "Submitted Data");
        Ok(())
    }
}

/// A sink that keeps every delivered snapshot.
///
/// Can be told to refuse deliveries, to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    deliveries: Vec<FormValues>,
    failure: Option<String>,
}

/// Error type for RecordingSink.
#[derive(Debug, thiserror::Error)]
pub enum RecordingSinkError {
    #[error("Delivery refused: {0}")]
    Refused(String),
}

impl RecordingSink {
    /// Create a new empty recording sink.
    pub fn new() -> Self {
        Self {
            deliveries: Vec::new(),
            failure: None,
        }
    }

    /// Create a sink that refuses every delivery with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            deliveries: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// All delivered snapshots, oldest first.
    pub fn deliveries(&self) -> &[FormValues] {
        &self.deliveries
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&FormValues> {
        self.deliveries.last()
    }
}

impl SubmissionSink for RecordingSink {
    type Error = RecordingSinkError;

    fn deliver(&mut self, values: &FormValues) -> Result<(), Self::Error> {
        if let Some(message) = &self.failure {
            return Err(RecordingSinkError::Refused(message.clone()));
        }
        self.deliveries.push(values.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_snapshots_in_order() {
        let mut sink = RecordingSink::new();
        sink.deliver(&FormValues::new().with_value("n", "1")).unwrap();
        sink.deliver(&FormValues::new().with_value("n", "2")).unwrap();

        assert_eq!(sink.deliveries().len(), 2);
        assert_eq!(sink.last(), Some(&FormValues::new().with_value("n", "2")));
    }

    #[test]
    fn failing_sink_refuses() {
        let mut sink = RecordingSink::failing("offline");
        let err = sink.deliver(&FormValues::new()).unwrap_err();

        assert_eq!(err.to_string(), "Delivery refused: offline");
        assert!(sink.deliveries().is_empty());
    }

    #[test]
    fn tracing_sink_accepts_any_snapshot() {
        let mut sink = TracingSink::new();
        assert!(sink.deliver(&FormValues::new()).is_ok());
        assert!(
            sink.deliver(&FormValues::new().with_value("name", "Alice"))
                .is_ok()
        );
    }
}
