/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, and
/// premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: missing
/// entry point, unknown names, arity problems, type errors, and resource
/// exhaustion. The language has no recovery construct, so every runtime error
/// is fatal.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
