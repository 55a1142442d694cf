use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to its numeric value.
///
/// This is the main entry point for expression evaluation.
/// The evaluator dispatches based on expression variant: a literal yields
/// its value, a variable reference is looked up in the environment, and a
/// binary operation evaluates its left operand, then its right operand
/// (matching textual order), then combines the two.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The variable environment consulted for variable references.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// Returns [`RuntimeError::UndefinedVariable`] when a variable reference
/// names an unassigned variable. Division by zero is not an error; it
/// follows IEEE-754 semantics.
///
/// # Example
/// ```
/// use tinycalc::interpreter::{
///     environment::Environment,
///     evaluator::core::eval,
///     lexer::tokenize,
///     parser::core::parse_expression,
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
/// let env = Environment::new();
///
/// assert_eq!(eval(&expr, &env).unwrap(), 7.0);
/// ```
pub fn eval(expr: &Expr, env: &Environment) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),

        Expr::Variable { name, column } => {
            env.get(name)
               .ok_or_else(|| RuntimeError::UndefinedVariable { name:   name.clone(),
                                                                column: *column, })
        },

        Expr::Binary { left, op, right, .. } => {
            let lhs = eval(left, env)?;
            let rhs = eval(right, env)?;
            Ok(apply_binary(*op, lhs, rhs))
        },
    }
}

/// Combines two operand values with a binary operator.
///
/// All four operators are plain IEEE-754 double-precision operations.
/// Dividing by zero yields an infinity or NaN, never an error.
///
/// # Example
/// ```
/// use tinycalc::{ast::BinaryOperator, interpreter::evaluator::core::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Add, 1.0, 2.0), 3.0);
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub const fn apply_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOperator::Add => lhs + rhs,
        BinaryOperator::Sub => lhs - rhs,
        BinaryOperator::Mul => lhs * rhs,
        BinaryOperator::Div => lhs / rhs,
    }
}
