#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// The program defines no `main` function.
    MissingEntryPoint,
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A built-in was invoked with fewer arguments than it requires.
    MissingArguments {
        /// The name of the built-in.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was too large to be represented safely as a real.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The call stack grew past the interpreter's depth limit.
    RecursionLimit {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `return` appeared somewhere other than statement position.
    MisplacedReturn {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading a line from standard input failed.
    InputFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEntryPoint => write!(f, "Program needs a main function."),
            Self::ArityMismatch { name, line } => write!(f,
                                                         "Error on line {line}: Incorrect number of arguments to function '{name}'."),
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Undefined function '{name}'.")
            },
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::MissingArguments { name, line } => write!(f,
                                                            "Error on line {line}: No arguments provided to function '{name}'."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::RecursionLimit { line } => {
                write!(f, "Error on line {line}: Recursion limit exceeded.")
            },
            Self::MisplacedReturn { line } => write!(f,
                                                     "Error on line {line}: 'return' may only be used as a statement."),
            Self::InputFailed { line } => write!(f,
                                                 "Error on line {line}: Failed to read a line from standard input."),
        }
    }
}

impl std::error::Error for RuntimeError {}
