use thiserror::Error;

/// Failure reported by [`FormContext::submit`](crate::FormContext::submit).
///
/// The controller decides what a rejection means; widgets surface it unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The submit handler rejected the submission.
    #[error("form submission was rejected: {0}")]
    Rejected(String),
    /// A submission was requested while another one was still running.
    #[error("form is already submitting")]
    InProgress,
}
