use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_name, parse_variable_name},
        },
    },
};

/// Parses a whole program: zero or more function definitions up to the end of
/// input.
///
/// Grammar: `program := function*`
///
/// Duplicate definitions are not rejected here; the registry applies
/// last-definition-wins when the program is loaded.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The function definitions in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<FunctionDef>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut functions = Vec::new();
    while tokens.peek().is_some() {
        functions.push(parse_function(tokens)?);
    }
    Ok(functions)
}

/// Parses one function definition.
///
/// Grammar: `function := "function" NAME "(" paramlist? ")" "{" statement* "}"`
///
/// A parameter list is detected structurally: if the parentheses are empty,
/// the function simply has no parameters.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `function` keyword.
///
/// # Returns
/// A parsed [`FunctionDef`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the `function` keyword, name, or delimiters are missing,
/// - a parameter is not a `$`-variable,
/// - a body statement fails to parse,
/// - input ends before the closing `}`.
pub fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Function, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected 'function', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let name = parse_name(tokens)?;
    expect(tokens, &Token::LParen, "'(' after function name", line)?;
    let params = parse_comma_separated(tokens, parse_variable_name, &Token::RParen)?;
    expect(tokens, &Token::LBrace, "'{' to open the function body", line)?;
    let body = parse_block(tokens, line)?;

    Ok(FunctionDef { name,
                     params,
                     body,
                     line })
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a condition (`if (expr) { ... }`),
/// - an assignment (`$x <- expr`),
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_condition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses a condition statement of the form `if "(" expression ")" "{"
/// statement* "}"`.
///
/// Conditions have no `else` branch. The body shares the enclosing scope at
/// evaluation time, so no scope bookkeeping happens here.
///
/// If the next token is not `if`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible `if`.
///
/// # Returns
/// - `Ok(Some(Statement::Condition))` if a condition is parsed,
/// - `Ok(None)` if no condition is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the parentheses or braces are missing,
/// - the test expression is malformed,
/// - input ends unexpectedly.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::If, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        expect(tokens, &Token::LParen, "'(' after 'if'", line)?;
        let test = parse_expression(tokens)?;
        expect(tokens, &Token::RParen, "')' after the condition", line)?;
        expect(tokens, &Token::LBrace, "'{' to open the condition body", line)?;
        let body = parse_block(tokens, line)?;

        return Ok(Some(Statement::Condition { test, body, line }));
    }

    Ok(None)
}

/// Parses an assignment statement of the form `$name <- expression`.
///
/// The function performs a limited lookahead: if the next token is a
/// `$`-variable and the following token is `<-`, an assignment is parsed.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens; the variable may still be a bare expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential variable.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Variable(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Arrow, _)) = lookahead.peek() {
            let (name, line) = match tokens.next() {
                Some((Token::Variable(n), line)) => (n.clone(), *line),
                _ => unreachable!(),
            };
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}

/// Parses statements until the matching `}` and consumes it.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first body statement.
/// - `line`: Line of the opening brace, used when input ends early.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// Returns a `ParseError` if a statement is malformed or input ends before
/// the closing `}`.
fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
}
