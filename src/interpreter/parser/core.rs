use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, additive, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_additive(tokens)
}

/// Parses a whole program: statements until the end of input.
///
/// Parsing stops at the first error; no statement of a rejected program is
/// ever executed, since execution only begins once the full statement list
/// exists.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The statements in source order.
///
/// # Errors
/// Propagates the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use tinycalc::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("x = 1; print x;").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
