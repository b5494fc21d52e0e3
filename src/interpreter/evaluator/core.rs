use std::collections::HashMap;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{evaluator::builtin, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Every runtime error is fatal; the
/// language has no recovery construct.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum number of nested user-function invocations.
///
/// Deep recursion is cut off with a `RecursionLimit` error instead of letting
/// the host call stack overflow.
pub const MAX_CALL_DEPTH: usize = 500;

/// The per-invocation mapping from variable names to values.
///
/// A scope is created fresh for every user-function call, binding parameters
/// first, and is discarded when the call returns. Condition bodies run in the
/// enclosing scope; no statement introduces a new one.
pub type Scope = HashMap<String, Value>;

/// The outcome of executing one statement.
///
/// A `return` is propagated as an explicit variant rather than an ambient
/// flag, so a returned falsy value (`0`, `""`, `false`) halts the invocation
/// exactly like any other, and a `return` inside a nested condition halts the
/// whole function.
#[derive(Debug)]
pub enum Flow {
    /// The statement executed normally; continue with the next one.
    Normal,
    /// The statement was a `return`; stop the current invocation with this
    /// value.
    Return(Value),
}

/// Stores the program registry and runtime state.
///
/// This struct holds the interpreter state: the mapping from function names
/// to their definitions and the current call depth. The registry is built
/// once from the parsed program and is read-only afterwards; the only mutable
/// runtime state lives in per-invocation [`Scope`]s.
pub struct Context {
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Later definitions of the same name replace earlier ones.
    pub functions: HashMap<String, FunctionDef>,
    depth:         usize,
}

impl Context {
    /// Creates the evaluation context for a parsed program.
    ///
    /// Functions are registered in source order, so a duplicate name shadows
    /// every earlier definition (last-definition-wins). This is intentional,
    /// not an error.
    #[must_use]
    pub fn new(program: Vec<FunctionDef>) -> Self {
        let mut functions = HashMap::new();
        for function in program {
            functions.insert(function.name.clone(), function);
        }
        Self { functions,
               depth: 0 }
    }

    /// Runs the program by invoking `main` with zero arguments.
    ///
    /// # Errors
    /// - `MissingEntryPoint` if no function named `main` exists. This is
    ///   checked before any execution begins.
    /// - Any runtime error raised while executing the program.
    pub fn run(&mut self) -> EvalResult<Value> {
        let line = match self.functions.get("main") {
            Some(main) => main.line,
            None => return Err(RuntimeError::MissingEntryPoint),
        };
        self.invoke("main", Vec::new(), line)
    }

    /// Invokes a function or built-in by name with already-evaluated
    /// arguments.
    ///
    /// User-defined functions are consulted first, so a user definition
    /// shadows a built-in of the same name. Built-ins are called directly
    /// with the materialized argument list and never allocate a scope.
    ///
    /// # Parameters
    /// - `name`: Function name to resolve.
    /// - `arguments`: Evaluated argument values, in order.
    /// - `line`: Line number of the call site, for error reporting.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name resolves to neither a user function
    ///   nor a built-in.
    /// - Arity and argument errors from the callee.
    pub fn invoke(&mut self, name: &str, arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
        if let Some(function) = self.functions.get(name).cloned() {
            return self.call_user_function(&function, arguments, line);
        }
        if let Some(builtin) = builtin::find(name) {
            return builtin.call(&arguments, line);
        }
        Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                            line })
    }

    /// Executes a user-defined function.
    ///
    /// The argument count must match the parameter count exactly. A fresh
    /// scope binds each parameter to the corresponding argument; the body
    /// statements then run in order until a `return` occurs or the list is
    /// exhausted. Without a `return`, the result is `Value::Absent`.
    fn call_user_function(&mut self,
                          function: &FunctionDef,
                          arguments: Vec<Value>,
                          line: usize)
                          -> EvalResult<Value> {
        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name: function.name.clone(),
                                                     line });
        }
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { line });
        }

        let mut scope: Scope = function.params.iter().cloned().zip(arguments).collect();

        self.depth += 1;
        let mut result = Value::Absent;
        for statement in &function.body {
            match self.eval_statement(statement, &mut scope) {
                Ok(Flow::Normal) => {},
                Ok(Flow::Return(value)) => {
                    result = value;
                    break;
                },
                Err(e) => {
                    self.depth -= 1;
                    return Err(e);
                },
            }
        }
        self.depth -= 1;

        Ok(result)
    }

    /// Executes a single statement against the given scope.
    ///
    /// - Assignments evaluate their value and store it in the same scope,
    ///   overwriting any prior binding.
    /// - Conditions evaluate their test; a truthy result runs the body in the
    ///   enclosing scope. A `return` inside the body halts the entire current
    ///   invocation, not just the condition.
    /// - Expression statements evaluate and discard their result, except for
    ///   `return(...)`, which is recognized here and produces
    ///   [`Flow::Return`].
    ///
    /// # Returns
    /// The control-flow outcome of the statement.
    pub fn eval_statement(&mut self, statement: &Statement, scope: &mut Scope) -> EvalResult<Flow> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval_expr(value, scope)?;
                scope.insert(name.clone(), value);
                Ok(Flow::Normal)
            },
            Statement::Condition { test, body, .. } => {
                let test = self.eval_expr(test, scope)?;
                if !test.is_truthy() {
                    return Ok(Flow::Normal);
                }
                for statement in body {
                    if let Flow::Return(value) = self.eval_statement(statement, scope)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            },
            Statement::Expression { expr, .. } => {
                if let Expr::FunctionCall { name,
                                            arguments,
                                            line, } = expr
                {
                    if name == "return" {
                        return self.eval_return(arguments, *line, scope);
                    }
                }
                self.eval_expr(expr, scope)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Evaluates a `return` statement.
    ///
    /// `return` takes exactly one argument; the evaluated value becomes the
    /// result of the current invocation.
    fn eval_return(&mut self, arguments: &[Expr], line: usize, scope: &Scope) -> EvalResult<Flow> {
        if arguments.len() != 1 {
            return Err(RuntimeError::ArityMismatch { name: "return".to_string(),
                                                     line });
        }
        let value = self.eval_expr(&arguments[0], scope)?;
        Ok(Flow::Return(value))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals return themselves; variables are looked up in the current
    /// scope; a comparison evaluates both sides left to right; a call
    /// evaluates its arguments left to right and dispatches through
    /// [`Context::invoke`]. `return` is not an expression; encountering it
    /// here is a fatal `MisplacedReturn`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: The current invocation's local scope.
    ///
    /// # Errors
    /// - `UnknownVariable` for an unbound variable reference.
    /// - `ExpectedNumber` for a comparison over non-numeric values.
    /// - Any error raised by a called function.
    pub fn eval_expr(&mut self, expr: &Expr, scope: &Scope) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::StringLit { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Variable { name, line } => {
                scope.get(name)
                     .cloned()
                     .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                    line: *line, })
            },
            Expr::Comparison { left, right, line } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                eval_comparison(&left, &right, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                if name == "return" {
                    return Err(RuntimeError::MisplacedReturn { line: *line });
                }
                let mut values = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    values.push(self.eval_expr(argument, scope)?);
                }
                self.invoke(name, values, *line)
            },
        }
    }
}

/// Compares two values with strict less-than.
///
/// Integers compare exactly; mixed numeric operands are promoted to reals.
/// Comparing anything non-numeric is a fatal type error.
fn eval_comparison(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => Ok(Value::Bool(l < r)),
        _ => Ok(Value::Bool(left.as_real(line)? < right.as_real(line)?)),
    }
}
