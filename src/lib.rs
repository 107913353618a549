mod error;
mod require;
mod wrapper;

pub use error::{Error, Operation, Result};
pub use require::require;
pub use wrapper::{of, Wrapper};
