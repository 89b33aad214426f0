/// Error type for delivering submitted values.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The sink failed to take the snapshot (I/O, HTTP client, closed channel, etc.)
    #[error("Sink error: {0}")]
    Delivery(#[from] anyhow::Error),
}

impl SinkError {
    /// Create a delivery error from any error type.
    pub fn delivery(err: impl Into<anyhow::Error>) -> Self {
        Self::Delivery(err.into())
    }
}
