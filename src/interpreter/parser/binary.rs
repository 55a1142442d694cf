use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Span, Token},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    while let Some((token, span)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if matches!(op, BinaryOperator::Add | BinaryOperator::Sub) => op,
            _ => break,
        };
        let column = span.start;
        tokens.next();

        let right = parse_multiplicative(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              column };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// the additive level.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// A binary expression tree combining primary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_primary(tokens)?;

    while let Some((token, span)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if matches!(op, BinaryOperator::Mul | BinaryOperator::Div) => op,
            _ => break,
        };
        let column = span.start;
        tokens.next();

        let right = parse_primary(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              column };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// arithmetic operators, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use tinycalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
