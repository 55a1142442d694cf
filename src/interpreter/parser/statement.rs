use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `print` statement,
/// - an assignment,
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
/// Every statement form is terminated by `;`.
///
/// A bare variable reference such as `x;` is a valid expression statement
/// here: an identifier only starts an assignment when the token after it is
/// `=`.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Span)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a [`ParseError`] if no statement form matches or the terminating
/// `;` is missing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some(statement) = parse_print(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let column = tokens.peek().map_or(0, |(_, s)| s.start);
    let expr = parse_expression(tokens)?;
    expect_semicolon(tokens, column)?;

    Ok(Statement::Expression { expr, column })
}

/// Parses a print statement of the form `print <expression> ;`.
///
/// If the next token is not `print`, this function returns `Ok(None)` and
/// does not consume any input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible `print`.
///
/// # Returns
/// - `Ok(Some(Statement::Print))` if a print statement is parsed,
/// - `Ok(None)` if no print statement is present.
///
/// # Errors
/// Returns a [`ParseError`] if the expression is malformed or the `;` is
/// missing.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Print, span)) = tokens.peek() {
        let column = span.start;
        tokens.next();

        let expr = parse_expression(tokens)?;
        expect_semicolon(tokens, column)?;

        return Ok(Some(Statement::Print { expr, column }));
    }

    Ok(None)
}

/// Parses an assignment statement of the form `<identifier> = <expression> ;`.
///
/// The function performs a limited lookahead:
/// if the next token is an identifier and the following token is `=`, an
/// assignment is parsed. Otherwise the function returns `Ok(None)` without
/// consuming tokens, and the identifier falls through to expression parsing.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a [`ParseError`] if the assigned expression fails to parse or the
/// `;` is missing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Identifier(_), span)) = tokens.peek() {
        let column = span.start;
        let mut lookahead = tokens.clone();
        lookahead.next();

        if matches!(lookahead.peek(), Some((Token::Equals, _))) {
            let name = if let Some((Token::Identifier(n), _)) = tokens.next() {
                n.clone()
            } else {
                unreachable!()
            };
            tokens.next(); // consume '='

            let value = parse_expression(tokens)?;
            expect_semicolon(tokens, column)?;

            return Ok(Some(Statement::Assignment { name, value, column }));
        }
    }

    Ok(None)
}

/// Consumes the statement terminator `;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after a statement body.
/// - `column`: Column of the statement start, used when input ended.
///
/// # Errors
/// Returns [`ParseError::ExpectedSemicolon`] if the next token is not `;` or
/// the input ended.
fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>, column: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.next() {
        Some((Token::Semicolon, _)) => Ok(()),
        Some((_, span)) => Err(ParseError::ExpectedSemicolon { column: span.start }),
        None => Err(ParseError::ExpectedSemicolon { column }),
    }
}
