/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the three expression shapes of the language: numeric
/// literals, variable references and binary operations. Each variant records
/// the source column (byte offset into the input line) it started at, which
/// error reporting uses. Nodes are immutable once built; children are owned
/// exclusively by their parent through `Box`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42`.
    Number {
        /// The literal value.
        value:  f64,
        /// Column in the source line.
        column: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Column in the source line.
        column: usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    Binary {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column in the source line.
        column: usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use tinycalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             column: 5, };
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Number { column, .. }
            | Self::Variable { column, .. }
            | Self::Binary { column, .. } => *column,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from the input line, each terminated by a
/// semicolon. Program order is execution order; every statement exclusively
/// owns its expression subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its side effects only; the
    /// result is discarded.
    Expression {
        /// The expression to evaluate.
        expr:   Expr,
        /// Column in the source line.
        column: usize,
    },
    /// A `print` statement, which evaluates its expression and emits the
    /// result on standard output.
    Print {
        /// The expression whose value is printed.
        expr:   Expr,
        /// Column in the source line.
        column: usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:   String,
        /// The value which is being assigned.
        value:  Expr,
        /// Column in the source line.
        column: usize,
    },
}

/// Represents a binary operator.
///
/// The language has the four arithmetic operators, all left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
