use std::fmt;

/// Error types for reading a complex number from text
#[derive(Debug, PartialEq)]
pub enum ParseComplexError {
    Empty,
    Malformed(String),
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseComplexError::Empty => write!(f, "Cannot parse complex number from empty string"),
            ParseComplexError::Malformed(msg) => {
                write!(f, "Not a complex number literal: {}", msg)
            }
        }
    }
}

impl std::error::Error for ParseComplexError {}
