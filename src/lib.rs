//! # tinycalc
//!
//! tinycalc is a tiny arithmetic language interpreter written in Rust.
//! It reads one line of source text, tokenizes it, parses it by recursive
//! descent into an AST, and evaluates it immediately against a mutable
//! variable environment. The language has numeric literals, variables,
//! the four arithmetic operators, parentheses, assignment and a `print`
//! statement.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::statement::run,
        lexer::tokenize,
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source columns to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines the closed set of errors a run can fail with. It
/// standardizes error reporting and carries the source column of each
/// failure for user feedback.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage, plus a top-level wrapper.
/// - Attaches source columns and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the variable
/// environment to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs one line of source text and returns the final variable environment.
///
/// This function drives the full pipeline: tokenize, parse all statements,
/// then execute them in order against a freshly created environment. Print
/// statements write to standard output as they execute. Nothing persists
/// across calls; every run owns its own environment.
///
/// # Errors
/// Returns an [`Error`] if lexing, parsing, or any statement's evaluation
/// fails. Execution is fail-fast: statements after the failing one do not
/// run.
///
/// # Examples
/// ```
/// use tinycalc::run_source;
///
/// // Assignments are visible in the returned environment.
/// let env = run_source("x = 2 + 3 * 4;").unwrap();
/// assert_eq!(env.get("x"), Some(14.0));
///
/// // Reading a variable that was never assigned is an error.
/// let res = run_source("print y;");
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str) -> Result<Environment, Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&mut tokens.iter().peekable())?;

    let mut env = Environment::new();
    run(&program, &mut env)?;

    Ok(env)
}
