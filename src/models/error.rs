use crate::types::TokenIndex;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnknownToken(String),
    UnknownIndex(TokenIndex),
    IndexOutOfRange {
        index: TokenIndex,
        vocabulary_size: usize,
    },
    RaggedMatrix,
    ShapeMismatch(String),
    InvalidConfig(String),
    InvalidInput(String),
    ParserError(String),
    CsvError(csv::Error),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "Empty Input Error: input sequence contains no tokens"),
            Error::UnknownToken(token) => {
                write!(f, "Unknown Token Error: {} is not in the vocabulary", token)
            }
            Error::UnknownIndex(index) => {
                write!(f, "Unknown Index Error: no token is mapped to index {}", index)
            }
            Error::IndexOutOfRange {
                index,
                vocabulary_size,
            } => write!(
                f,
                "Index Out Of Range Error: index {} is outside a vocabulary of size {}",
                index, vocabulary_size
            ),
            Error::RaggedMatrix => write!(f, "Ragged Matrix Error: rows differ in length"),
            Error::ShapeMismatch(msg) => write!(f, "Shape Mismatch Error: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid Config Error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid Input Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CsvError(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}
