#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Encountered a character that starts no token of the language.
    UnexpectedCharacter {
        /// The offending source text.
        text:   String,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { text, column } => {
                write!(f, "Error at column {column}: Unexpected character '{text}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
