use thiserror::Error;

/// Errors raised by the matrix engine and the number types.
///
/// The three kinds are kept apart so callers can tell a malformed input from
/// an index problem or from an operation whose precondition does not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Malformed sizes, mismatched row/column lengths, bad element index.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Row/column index past the current bounds, or a builder already full.
    #[error("Out of range: {0}")]
    OutOfRange(String),
    /// Non-square matrix where a square one is needed, singular inverse,
    /// incompatible operand sizes.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, MathError>;

impl MathError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        MathError::InvalidArgument(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        MathError::OutOfRange(msg.into())
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        MathError::Runtime(msg.into())
    }
}

#[cfg(feature = "python")]
impl From<MathError> for pyo3::PyErr {
    fn from(error: MathError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyValueError};

        match error {
            MathError::InvalidArgument(msg) => PyValueError::new_err(msg),
            MathError::OutOfRange(msg) => PyIndexError::new_err(msg),
            MathError::Runtime(msg) => PyRuntimeError::new_err(msg),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
