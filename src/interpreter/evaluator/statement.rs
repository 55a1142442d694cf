use crate::{
    ast::Statement,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval},
    },
};

/// Executes a single statement.
///
/// - An expression statement evaluates its expression and discards the
///   result.
/// - A print statement evaluates its expression and writes the value to
///   standard output, one line per print. The value is formatted with
///   `f64`'s `Display` implementation, which renders the shortest decimal
///   text that round-trips to the same double.
/// - An assignment evaluates its right-hand side, then writes the binding.
///
/// # Parameters
/// - `statement`: Statement to execute.
/// - `env`: The variable environment read and mutated by execution.
///
/// # Errors
/// Propagates any [`crate::error::RuntimeError`] raised while evaluating the
/// statement's expression.
pub fn exec(statement: &Statement, env: &mut Environment) -> EvalResult<()> {
    match statement {
        Statement::Expression { expr, .. } => {
            eval(expr, env)?;
            Ok(())
        },

        Statement::Print { expr, .. } => {
            let value = eval(expr, env)?;
            println!("{value}");
            Ok(())
        },

        Statement::Assignment { name, value, .. } => {
            let value = eval(value, env)?;
            env.set(name, value);
            Ok(())
        },
    }
}

/// Executes a program: its statements strictly in source order.
///
/// Execution is fail-fast: the first failing statement aborts the run, and
/// no later statement executes. Side effects of statements that already ran
/// (prints, assignments) remain observable.
///
/// # Parameters
/// - `program`: The statements, in program order.
/// - `env`: The variable environment for this run.
///
/// # Errors
/// Propagates the first [`crate::error::RuntimeError`] raised by a
/// statement.
///
/// # Example
/// ```
/// use tinycalc::interpreter::{
///     environment::Environment,
///     evaluator::statement::run,
///     lexer::tokenize,
///     parser::core::parse_program,
/// };
///
/// let tokens = tokenize("x = 2; y = x * x;").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
/// let mut env = Environment::new();
///
/// run(&program, &mut env).unwrap();
/// assert_eq!(env.get("y"), Some(4.0));
/// ```
pub fn run(program: &[Statement], env: &mut Environment) -> EvalResult<()> {
    for statement in program {
        exec(statement, env)?;
    }

    Ok(())
}
