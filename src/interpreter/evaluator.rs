/// Core evaluation logic and context management.
///
/// Contains the program registry, per-invocation scopes, statement and
/// expression evaluation, and `return` propagation.
pub mod core;

/// Built-in function implementations.
///
/// Contains the native operations (`add`, `not`, `print`, `get`) available by
/// default in the interpreter, callable exactly like user-defined functions.
pub mod builtin;
