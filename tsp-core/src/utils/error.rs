#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// An error raised by core models and solvers. Each kind is distinguishable by the caller,
/// none of them is recovered inside the core.
#[derive(Clone, Debug, PartialEq)]
pub enum TspError {
    /// A tour or a start city references a city outside of the matrix bounds.
    IndexOutOfRange {
        /// An offending city index.
        index: usize,
        /// Amount of cities in the matrix.
        size: usize,
    },

    /// Spanning tree construction cannot connect all cities.
    DisconnectedGraph {
        /// Amount of accepted tree edges.
        accepted: usize,
        /// Amount of tree edges required to connect all cities.
        required: usize,
    },

    /// Matrix values violate distance matrix invariants: square, symmetric, zero diagonal, finite, non-negative.
    InvalidMatrix(String),

    /// Input data cannot be transformed into a distance matrix.
    MalformedInput(String),
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::IndexOutOfRange { index, size } => {
                write!(f, "city index {index} is out of range, matrix has {size} cities")
            }
            TspError::DisconnectedGraph { accepted, required } => {
                write!(f, "cannot connect all cities: accepted {accepted} tree edges of {required} required")
            }
            TspError::InvalidMatrix(msg) => write!(f, "invalid distance matrix: {msg}"),
            TspError::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
        }
    }
}

impl std::error::Error for TspError {}

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator.
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.as_str()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<TspError> for GenericError {
    fn from(value: TspError) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}
