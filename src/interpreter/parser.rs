/// Core parsing entry points.
///
/// Contains the `ParseResult` alias, the expression entry point and the
/// program loop that parses statements until the token stream is exhausted.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the statement-starting token: `print` statements,
/// assignments and plain expression statements, each terminated by `;`.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the two precedence levels of the language, additive and
/// multiplicative, both left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Handles the leaves of the grammar: numeric literals, variable references
/// and parenthesized expressions.
pub mod primary;
