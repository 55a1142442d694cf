use logos::Logos;

use crate::error::LexError;

/// Byte range into the source line a token was scanned from.
///
/// Re-slicing the source with a token's span reproduces the token's exact
/// text.
pub type Span = logos::Span;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens: a maximal run of ASCII digits, such as `42`.
    /// There is no decimal point, exponent or sign syntax; `3.14` scans as
    /// `3`, then fails on the `.`.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// The `print` keyword.
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Scans an entire source line into a token stream.
///
/// Each token is paired with the byte span it was read from, so callers can
/// recover the original text of any token. Scanning stops at the first
/// unrecognized character; reaching the end of input without an error is the
/// only way to obtain `Ok`, which cleanly separates genuine end-of-input from
/// the failure case.
///
/// # Parameters
/// - `source`: The source line to scan.
///
/// # Returns
/// The tokens in source order, each with its span.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] when a character starts no token
/// of the language.
///
/// # Example
/// ```
/// use tinycalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1;").unwrap();
///
/// assert_eq!(tokens[0].0, Token::Identifier("x".to_string()));
/// assert_eq!(tokens[1].0, Token::Equals);
/// assert_eq!(tokens[2].0, Token::Number(1.0));
/// assert_eq!(tokens[3].0, Token::Semicolon);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span())),
            Err(()) => {
                return Err(LexError::UnexpectedCharacter { text:   lexer.slice().to_string(),
                                                           column: lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
