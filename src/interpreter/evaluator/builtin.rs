use std::io::{self, BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line
/// number. It returns the resulting value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin needs `n` or more arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`
///   (listed in ascending order).
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (lookup metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub(crate) struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "add"   => { arity: Arity::AtLeast(2), func: add },
    "not"   => { arity: Arity::AtLeast(1), func: not },
    "print" => { arity: Arity::OneOf(&[0, 1]), func: print },
    "get"   => { arity: Arity::Exact(0), func: get },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }

    /// The smallest argument count this arity accepts.
    const fn min(&self) -> usize {
        match self {
            Self::Exact(m) | Self::AtLeast(m) => *m,
            Self::OneOf(arr) => arr[0],
        }
    }
}

impl BuiltinDef {
    /// Calls the builtin after validating its argument count.
    ///
    /// Too few arguments raise `MissingArguments`; any other count violation
    /// raises `ArityMismatch` naming the builtin.
    pub(crate) fn call(&self, args: &[Value], line: usize) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            if args.len() < self.arity.min() {
                return Err(RuntimeError::MissingArguments { name: self.name.to_string(),
                                                            line });
            }
            return Err(RuntimeError::ArityMismatch { name: self.name.to_string(),
                                                     line });
        }
        (self.func)(args, line)
    }
}

/// Looks up a builtin by name.
///
/// Returns `None` if no builtin with that name exists; the caller then
/// reports an undefined function.
pub(crate) fn find(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Adds two values.
///
/// Two integers add exactly (overflow is fatal). Any other numeric mix is
/// promoted to reals. Two strings concatenate. Every other combination is a
/// fatal type error. Extra arguments beyond the first two are ignored.
///
/// # Parameters
/// - `args`: Slice containing at least two arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The sum or concatenation.
fn add(args: &[Value], line: usize) -> EvalResult<Value> {
    match (&args[0], &args[1]) {
        (Value::Integer(l), Value::Integer(r)) => {
            l.checked_add(*r)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        (l, r) if l.is_numeric() && r.is_numeric() => {
            Ok(Value::Real(l.as_real(line)? + r.as_real(line)?))
        },
        (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
        (l, r) => {
            Err(RuntimeError::TypeError { details: format!("cannot add {} and {}",
                                                           l.type_name(),
                                                           r.type_name()),
                                          line })
        },
    }
}

/// Negates the truthiness of a value.
///
/// Accepts any value; the result is always a boolean. Extra arguments beyond
/// the first are ignored.
///
/// # Parameters
/// - `args`: Slice containing at least one argument.
/// - `line`: Line number for error reporting (unused; `not` cannot fail).
fn not(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Bool(!args[0].is_truthy()))
}

/// Writes a value to standard output.
///
/// With one argument, the value's display form is written with no trailing
/// newline; booleans appear as the literal words `true`/`false`. With no
/// argument, a single newline is written. Output is flushed immediately since
/// no newline terminates it.
///
/// # Parameters
/// - `args`: Slice containing zero or one argument.
/// - `line`: Line number for error reporting (unused; `print` cannot fail).
///
/// # Returns
/// `Value::Absent`.
fn print(args: &[Value], _line: usize) -> EvalResult<Value> {
    match args.first() {
        Some(value) => {
            print!("{value}");
            io::stdout().flush().ok();
        },
        None => println!(),
    }
    Ok(Value::Absent)
}

/// Reads one line from standard input and interprets it as a value.
///
/// The trailing newline is stripped. If the remaining text contains a `.` it
/// is parsed as a real, otherwise as an integer; if parsing fails, the raw
/// text is returned as a string.
///
/// # Parameters
/// - `args`: Empty slice; `get` takes no arguments.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `InputFailed` if standard input is exhausted or unreadable.
fn get(_args: &[Value], line: usize) -> EvalResult<Value> {
    let mut content = String::new();
    let bytes = io::stdin().lock()
                           .read_line(&mut content)
                           .map_err(|_| RuntimeError::InputFailed { line })?;
    if bytes == 0 {
        return Err(RuntimeError::InputFailed { line });
    }

    let text = content.trim_end_matches(['\n', '\r']);
    let parsed = if text.contains('.') {
        text.trim().parse::<f64>().ok().map(Value::Real)
    } else {
        text.trim().parse::<i64>().ok().map(Value::Integer)
    };

    Ok(parsed.unwrap_or_else(|| Value::Str(text.to_string())))
}
