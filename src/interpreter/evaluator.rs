/// Core expression evaluation.
///
/// Contains the `EvalResult` alias, the tree-walking expression evaluator
/// and the arithmetic for the four binary operators.
pub mod core;

/// Statement execution.
///
/// Implements the side effects of the language: printing, assignment, and
/// running a statement sequence in program order.
pub mod statement;
