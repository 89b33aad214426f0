use crate::FormValues;

/// Collaborator that receives the submitted form values.
///
/// The form itself has no network or storage; whatever should happen with
/// a submission (logging it, posting it to an API, queueing it) is done by
/// the sink the controller was built with.
pub trait SubmissionSink {
    /// The error type for this sink.
    type Error: Into<anyhow::Error>;

    /// Take a snapshot of all values at the time of submission.
    ///
    /// Only called once the required-field check has passed.
    fn deliver(&mut self, values: &FormValues) -> Result<(), Self::Error>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for &mut S {
    type Error = S::Error;

    fn deliver(&mut self, values: &FormValues) -> Result<(), Self::Error> {
        (**self).deliver(values)
    }
}
