#[derive(Debug)]
/// Represents all errors that can occur during parsing.
///
/// Parsing stops at the first error; there is no recovery and no multi-error
/// collection.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A statement terminator `;` was expected but not found.
    ExpectedSemicolon {
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedSemicolon { column } => write!(f,
                                                         "Error at column {column}: Expected ';' after statement."),
        }
    }
}

impl std::error::Error for ParseError {}
