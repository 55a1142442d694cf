use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary expression: the leaves of the grammar.
///
/// A primary is one of:
/// - a numeric literal,
/// - a variable reference,
/// - a parenthesized expression, which resets precedence.
///
/// Grammar: `primary := NUMBER | IDENTIFIER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a [`ParseError`] if:
/// - the next token cannot start a primary,
/// - a parenthesized expression is missing its `)`,
/// - the input ends unexpectedly.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), span)) => Ok(Expr::Number { value:  *value,
                                                                column: span.start, }),

        Some((Token::Identifier(name), span)) => Ok(Expr::Variable { name:   name.clone(),
                                                                     column: span.start, }),

        Some((Token::LParen, span)) => {
            let column = span.start;
            let expr = parse_expression(tokens)?;

            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                Some((_, span)) => Err(ParseError::ExpectedClosingParen { column: span.start }),
                None => Err(ParseError::ExpectedClosingParen { column }),
            }
        },

        Some((tok, span)) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                               column: span.start, }),

        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}
