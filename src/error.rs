use thiserror::Error;

/// Internal failures of the validator itself.
///
/// Malformed input is never an error: it degrades the segmentation and
/// clears the success flag. An `Err` means the grammar implementation's own
/// bookkeeping went inconsistent, which is fatal to the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidatorError {
    #[error("sub-part bookkeeping out of sync at output position {at}: {what}")]
    InvariantViolation { at: usize, what: &'static str },
}
