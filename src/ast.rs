/// Represents a numeric literal in the language.
///
/// A literal is an integer if its lexeme contains no decimal point and a real
/// otherwise. The distinction is made once by the lexer and never revisited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// An expression is either a single atom (number, string, variable reference,
/// or function call) or exactly one `<` comparison between two atoms. The
/// grammar admits no other operators, so comparisons never nest.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, quotes stripped and escapes resolved.
    StringLit {
        /// The string contents.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a local variable by name (without the `$` sigil).
    /// Resolved against the current scope at evaluation time, never earlier.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A strictly-less-than comparison, the language's only binary operator.
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `add($x, 1)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use zlang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::StringLit { line, .. }
            | Self::Variable { line, .. }
            | Self::Comparison { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Represents one executable unit inside a function or condition body.
///
/// Statements run strictly in sequence; execution never reorders them.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment (`$x <- expr`), defining or overwriting a local.
    Assignment {
        /// The name of the variable (without the `$` sigil).
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional block (`if (expr) { ... }`). There is no `else`.
    /// The body shares the enclosing function's scope.
    Condition {
        /// The test expression.
        test: Expr,
        /// Statements executed when the test is truthy.
        body: Vec<Statement>,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its effect; the result is
    /// discarded unless the expression is a `return` call.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a user-defined function definition.
///
/// Built once from the parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order (possibly empty).
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}
