//! # zlang
//!
//! zlang is an interpreter for a minimal imperative teaching language written
//! in Rust. Programs are collections of functions with parameters, local
//! variables, a single `<` comparison, `if` blocks, and four built-in
//! operations (`add`, `not`, `print`, `get`). Source text is lexed, parsed
//! into a syntax tree, and executed directly by a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::FunctionDef,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::statement::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Statement`, and `FunctionDef` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Is built exactly once per run and read-only thereafter.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Every error is fatal: the interpreted language has no
/// exception or recovery construct of its own.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the built-in library to provide a complete runtime
/// for programs in the language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and running programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Lexes and parses a program, returning its function definitions in source
/// order.
///
/// No semantic checks happen here; scope and arity problems surface at
/// evaluation time.
///
/// # Errors
/// Returns a [`ParseError`] if the source does not conform to the grammar.
///
/// # Examples
/// ```
/// let program = zlang::parse_source("function main() { $x <- 1 }").unwrap();
///
/// assert_eq!(program.len(), 1);
/// assert_eq!(program[0].name, "main");
/// ```
pub fn parse_source(source: &str) -> Result<Vec<FunctionDef>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses and executes a whole program.
///
/// The program must define a `main` function, which is invoked with zero
/// arguments. Execution stops at the first error.
///
/// # Errors
/// Returns an error if parsing fails, if `main` is missing, or if any runtime
/// error occurs.
///
/// # Examples
/// ```
/// // A valid program runs to completion.
/// let res = zlang::run_program("function main() { $x <- 1 }");
/// assert!(res.is_ok());
///
/// // 'y' is never assigned, so evaluation fails.
/// let res = zlang::run_program("function main() { $x <- $y }");
/// assert!(res.is_err());
/// ```
pub fn run_program(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_source(source)?;

    let mut context = Context::new(program);
    context.run()?;

    Ok(())
}
