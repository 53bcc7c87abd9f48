#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

/// An error type returned by map operations, strategies and the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SomError {
    /// A training or query vector has a length different from the map's input length.
    InputLength {
        /// An input length expected by the map.
        expected: usize,
        /// An actual length of the vector.
        actual: usize,
    },

    /// Two vectors passed to a distance metric have different lengths.
    LengthMismatch {
        /// A length of the first vector.
        left: usize,
        /// A length of the second vector.
        right: usize,
    },

    /// An operation is not allowed in the current map state, e.g. a strategy change after training started.
    IllegalState(String),

    /// A neuron index is outside of the grid.
    IndexRange {
        /// An offending index.
        index: usize,
        /// A total amount of neurons.
        count: usize,
    },

    /// A configuration is malformed, incomplete or references an unknown strategy.
    Configuration(String),

    /// A numeric token cannot be parsed.
    Parse(String),

    /// An underlying reader or writer failed.
    Io(String),
}

/// A type alias for result type with `SomError`.
pub type SomResult<T> = Result<T, SomError>;

impl std::fmt::Display for SomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputLength { expected, actual } => {
                write!(f, "input vector length {actual} does not match network input length {expected}")
            }
            Self::LengthMismatch { left, right } => write!(f, "vector lengths do not match: {left} != {right}"),
            Self::IllegalState(msg) => write!(f, "illegal state: {msg}"),
            Self::IndexRange { index, count } => write!(f, "invalid neuron index: {index}, neuron count is {count}"),
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for SomError {}

impl From<std::io::Error> for SomError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
