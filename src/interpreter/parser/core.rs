use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{lexer::Token, parser::utils::{expect, parse_comma_separated}},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// Grammar: `expression := atom ("<" atom)?`
///
/// At most one comparison may appear per expression; `a < b < c` is not
/// expressible. The comparison's line is taken from the `<` token.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_atom(tokens)?;

    if let Some((Token::Less, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let right = parse_atom(tokens)?;
        return Ok(Expr::Comparison { left: Box::new(left),
                                     right: Box::new(right),
                                     line });
    }

    Ok(left)
}

/// Parses a single atom: a number, a string, a `$`-variable, or a function
/// call.
///
/// Grammar: `atom := number | string | VAR | NAME "(" arglist? ")"`
///
/// A bare name is only valid as the head of a call, so it must be followed by
/// `(`. A call with no children between the parentheses has an empty argument
/// list; no separate marker distinguishes the two shapes.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the atom.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token cannot begin an atom,
/// - a call is missing its parentheses or argument separators,
/// - the input ends unexpectedly.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Integer(*value),
                               line:  *line, })
        },
        Some((Token::Real(value), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Real(*value),
                               line:  *line, })
        },
        Some((Token::Str(value), line)) => {
            Ok(Expr::StringLit { value: value.clone(),
                                 line:  *line, })
        },
        Some((Token::Variable(name), line)) => {
            Ok(Expr::Variable { name: name.clone(),
                                line: *line, })
        },
        Some((Token::Name(name), line)) => {
            let name = name.clone();
            let line = *line;

            expect(tokens, &Token::LParen, "'(' after function name", line)?;
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    line })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an expression, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
