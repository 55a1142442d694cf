/// Lexing errors.
///
/// Defines the error raised when the scanner encounters a character that does
/// not start any token of the language.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// an AST: unexpected tokens, missing terminators, unbalanced parentheses and
/// premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised during evaluation. Division by
/// zero is deliberately absent: it follows IEEE-754 semantics and is not an
/// error.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The closed set of failures a run can end with.
///
/// Every stage of the pipeline reports through one of the three kinds below;
/// library callers receive this enum instead of a terminated process.
pub enum Error {
    /// The scanner rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
