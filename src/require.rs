use crate::error::{Error, Operation, Result};

/// Returns `callback` unchanged if it is present, or fails with
/// [`Error::MissingCallback`] naming `operation`.
pub fn require<F>(callback: Option<F>, operation: Operation) -> Result<F> {
    callback.ok_or(Error::MissingCallback(operation))
}
