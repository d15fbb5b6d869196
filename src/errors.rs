use std::error::Error;
use std::fmt;
use std::io;

/// Errors surfaced by the model build and the query engine. The library
/// propagates these to its callers and never handles them internally.
#[derive(Debug)]
pub enum LikewiseError {
    /// A required column or field is missing from the interaction data.
    InputFormat(String),
    /// The interaction data contains zero distinct users or zero distinct items.
    EmptyDataset,
    /// A query asked for a non-positive number of recommendations.
    InvalidQuery(String),
    Io(io::Error),
    Csv(csv::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for LikewiseError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LikewiseError::InputFormat(message) =>
                write!(f, "Malformed interaction data: {}", message),
            LikewiseError::EmptyDataset =>
                write!(f, "The interaction data contains no users or no items."),
            LikewiseError::InvalidQuery(message) =>
                write!(f, "Invalid query: {}", message),
            LikewiseError::Io(cause) =>
                write!(f, "I/O error: {}", cause),
            LikewiseError::Csv(cause) =>
                write!(f, "CSV error: {}", cause),
            LikewiseError::Serialization(cause) =>
                write!(f, "Serialization error: {}", cause),
        }
    }
}

impl Error for LikewiseError {

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LikewiseError::Io(cause) => Some(cause),
            LikewiseError::Csv(cause) => Some(cause),
            LikewiseError::Serialization(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<io::Error> for LikewiseError {
    fn from(cause: io::Error) -> Self {
        LikewiseError::Io(cause)
    }
}

impl From<csv::Error> for LikewiseError {
    fn from(cause: csv::Error) -> Self {
        LikewiseError::Csv(cause)
    }
}

impl From<serde_json::Error> for LikewiseError {
    fn from(cause: serde_json::Error) -> Self {
        LikewiseError::Serialization(cause)
    }
}
