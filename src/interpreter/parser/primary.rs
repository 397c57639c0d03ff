use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer and boolean literals
/// - identifiers and function calls
/// - list literals (`[ ... ]`)
/// - parenthesized expressions and tuples
///
/// Grammar:
/// ```text
///     primary := NUMBER | "true" | "false"
///              | IDENTIFIER [ "(" arguments ")" ]
///              | "[" elements "]"
///              | "(" expression ("," expression)* ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next()
                      .ok_or_else(|| unexpected("expression", None))?;
    let pos = token.position();

    match token.kind {
        TokenKind::Number => parse_integer(token),
        TokenKind::True => Ok(Expr::Boolean { value: true,
                                              pos }),
        TokenKind::False => Ok(Expr::Boolean { value: false,
                                               pos }),
        TokenKind::Identifier => parse_identifier_or_call(tokens, token),
        TokenKind::LBracket => {
            let elements = parse_comma_separated(tokens, parse_expression, TokenKind::RBracket)?;
            Ok(Expr::ListLiteral { elements, pos })
        },
        TokenKind::LParen => parse_grouping_or_tuple(tokens, token),
        _ => Err(unexpected("expression", Some(token))),
    }
}

/// Converts a number token into an integer literal.
///
/// # Errors
/// Returns `ParseError::IntegerTooLarge` if the literal does not fit in an
/// `i64`.
fn parse_integer(token: &Token) -> ParseResult<Expr> {
    let value = token.text
                     .parse::<i64>()
                     .map_err(|_| ParseError::IntegerTooLarge { literal: token.text.clone(),
                                                                line:    token.line,
                                                                column:  token.column, })?;
    Ok(Expr::Number { value,
                      pos: token.position() })
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The identifier token has already been consumed. If the next token is `(`,
/// a function-call expression is parsed; otherwise the identifier is a variable
/// reference.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   identifier: &Token)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let name = identifier.text.clone();
    let pos = identifier.position();

    if tokens.next_if(|token| token.kind == TokenKind::LParen)
             .is_some()
    {
        let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       pos });
    }

    Ok(Expr::Identifier { name, pos })
}

/// Parses a parenthesized expression or a tuple.
///
/// Expected forms `( expression )` and `( expression, expression, ... )`.
///
/// A single expression is plain grouping and is returned as-is (no wrapper
/// node). Two or more comma-separated expressions produce an
/// `Expr::ListLiteral`, which doubles as the tuple representation.
///
/// # Errors
/// Returns a `ParseError` if the closing `)` is missing or an element fails to
/// parse. `()` is rejected since it contains no expression.
fn parse_grouping_or_tuple<'a, I>(tokens: &mut Peekable<I>, open: &Token) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut elements = vec![parse_expression(tokens)?];
    while tokens.next_if(|token| token.kind == TokenKind::Comma)
                .is_some()
    {
        elements.push(parse_expression(tokens)?);
    }
    expect(tokens, TokenKind::RParen, "')'")?;

    if elements.len() == 1 {
        return Ok(elements.remove(0));
    }

    Ok(Expr::ListLiteral { elements,
                           pos: open.position() })
}
