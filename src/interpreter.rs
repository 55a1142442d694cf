/// Converts raw source text into a token stream.
///
/// The lexer classifies each lexeme into one of the closed set of token
/// kinds and records the byte span it was scanned from, so the exact source
/// substring of every token can be recovered.
pub mod lexer;

/// Builds the AST from the token stream.
///
/// A recursive-descent parser with one token of lookahead, organized by
/// grammar rule: statements, additive and multiplicative binary levels, and
/// primary expressions.
pub mod parser;

/// Stores the runtime variable state.
///
/// A growable mapping from variable name to current value, created on first
/// assignment and overwritten on subsequent ones.
pub mod environment;

/// Walks the AST and produces results and side effects.
///
/// Evaluates expression trees to `f64` values and executes statements in
/// program order against an [`environment::Environment`].
pub mod evaluator;
