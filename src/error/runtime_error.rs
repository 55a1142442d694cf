#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Division by zero is not listed here: `/` follows IEEE-754 semantics and
/// yields an infinity or NaN instead of failing.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, column } => {
                write!(f, "Error at column {column}: Undefined variable '{name}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
