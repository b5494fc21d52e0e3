/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements in order, resolves
/// variables against per-invocation scopes, dispatches function calls, and
/// propagates `return` values. It is the core execution engine of the
/// interpreter.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens with
/// line numbers: keywords, `$`-variables, bare names, numeric and string
/// literals, and punctuation. Comments and whitespace are discarded here.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the typed AST of functions, statements, and expressions. It performs only
/// structural shaping; scope and arity checks belong to the evaluator.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (integers, reals, strings, booleans, and the
/// absent value) together with truthiness, numeric conversion, and display
/// rules.
pub mod value;
