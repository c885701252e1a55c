use thiserror::Error;

/// `QueueingError` enumerates all possible errors returned by mmc
#[derive(Error, Debug)]
pub enum QueueingError {
    /// Represents a parameter outside the domain of the queueing formulas,
    /// such as a negative offered load, zero servers, or a non-positive
    /// service rate
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Represents malformed numeric text, typically from interactive input
    #[error("Could not read {expected} from {input:?}")]
    ParseError {
        input: String,
        expected: &'static str,
    },

    /// Represents a request for steady-state metrics of a system whose
    /// total service capacity does not exceed the arrival rate
    #[error("The system is unstable: capacity c*mu ({capacity}) does not exceed lambda ({arrival_rate})")]
    Unstable { capacity: f64, arrival_rate: f64 },

    /// Represents a failed conversion to num-traits Float
    #[error("Failed to convert to a Float value")]
    FloatConvError,

    /// Transparent serde_json errors
    #[error(transparent)]
    JSONError(#[from] serde_json::error::Error),

    /// Transparent serde_yaml errors
    #[error(transparent)]
    YAMLError(#[from] serde_yaml::Error),

    /// Transparent I/O errors, from scenario files and interactive sessions
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QueueingError {
    pub(crate) fn invalid<S: Into<String>>(reason: S) -> Self {
        QueueingError::InvalidArgument(reason.into())
    }

    pub(crate) fn parse(input: &str, expected: &'static str) -> Self {
        QueueingError::ParseError {
            input: input.to_string(),
            expected,
        }
    }

    /// Parse errors are recoverable by asking again; everything else ends
    /// the current computation.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, QueueingError::ParseError { .. })
    }
}
