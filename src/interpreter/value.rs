use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and condition tests. Values are cloned on
/// assignment and on argument passing; variables never alias each other.
/// Materialized argument lists live as plain `Vec<Value>` at the call
/// boundary and are not a value variant of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64-bit signed).
    Integer(i64),
    /// A real value (double precision floating-point).
    Real(f64),
    /// A string value.
    Str(String),
    /// A boolean value, produced by `<` comparisons and by `not`.
    /// Displays as the literal words `true`/`false`.
    Bool(bool),
    /// The absent value: the result of a function that never executed a
    /// `return`, and of `print`.
    Absent,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&crate::ast::LiteralValue> for Value {
    fn from(lit: &crate::ast::LiteralValue) -> Self {
        match lit {
            crate::ast::LiteralValue::Integer(i) => (*i).into(),
            crate::ast::LiteralValue::Real(r) => (*r).into(),
        }
    }
}

impl Value {
    /// Determines whether the value counts as true in a condition test.
    ///
    /// Non-zero numbers, non-empty strings, and `true` are truthy; everything
    /// else, including the absent value, is falsy.
    ///
    /// # Example
    /// ```
    /// use zlang::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(1).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Absent.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Absent => false,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Integer` and `Value::Real`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or a safe integer.
    /// - `Err(RuntimeError::ExpectedNumber | LiteralTooLarge)`: If not
    ///   numeric or not representable.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                if n.unsigned_abs() > MAX_SAFE_INT {
                    return Err(RuntimeError::LiteralTooLarge { line });
                }
                Ok(*n as f64)
            },
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Returns the name of the value's type, used in type-error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Absent => "nothing",
        }
    }

    /// Returns `true` if the value is [`Integer`] or [`Real`].
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }
}

impl std::fmt::Display for Value {
    /// Formats the value the way `print` displays it.
    ///
    /// Reals always carry a decimal point so that `5.0` stays distinguishable
    /// from the integer `5`.
    ///
    /// # Example
    /// ```
    /// use zlang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Real(4.0).to_string(), "4.0");
    /// assert_eq!(Value::Real(0.5).to_string(), "0.5");
    /// assert_eq!(Value::Bool(true).to_string(), "true");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Self::Absent => write!(f, "none"),
        }
    }
}
