/// Core expression parsing.
///
/// Contains the expression and atom productions. An expression is one atom
/// optionally followed by a single `<` comparison.
pub mod core;

/// Statement, function, and program parsing.
///
/// Parses assignments, conditions, expression statements, function
/// definitions, and whole programs.
pub mod statement;

/// Shared parsing utilities.
///
/// Provides helpers for comma-separated lists and for expecting specific
/// tokens.
pub mod utils;
