use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind of the next token without consuming it.
///
/// A missing token is reported as [`TokenKind::Eof`] so callers need not
/// distinguish a token slice lacking its terminator.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(TokenKind::Eof, |token| token.kind)
}

/// Builds the error for a token that does not fit the grammar.
///
/// `Eof` (or no token at all) becomes `UnexpectedEndOfInput`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 token: Option<&Token>)
                                                 -> ParseError {
    match token {
        Some(token) if token.kind != TokenKind::Eof => {
            ParseError::UnexpectedToken { expected: expected.to_string(),
                                          found:    token.text.clone(),
                                          line:     token.line,
                                          column:   token.column, }
        },
        Some(token) => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                          line:     token.line,
                                                          column:   token.column, },
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                   line:     0,
                                                   column:   0, },
    }
}

/// Consumes the next token, which must be of kind `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: Description of the construct used in the error message.
///
/// # Returns
/// The consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| token.kind == kind) {
        Some(token) => Ok(token),
        None => Err(unexpected(expected, tokens.peek().copied())),
    }
}

/// Skips any number of `;` separators.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|token| token.kind == TokenKind::Semicolon)
                .is_some()
    {}
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, function argument lists,
/// parameter lists and tuple patterns. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A comma
/// directly before the closing token is an error.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if tokens.next_if(|token| token.kind == closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if token.kind == closing => break,
            token => {
                return Err(unexpected(&format!("',' or {}", closing.describe()), token));
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name and position.
///
/// The next token must be [`TokenKind::Identifier`]; keywords are rejected.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Identifier, "identifier")?;
    Ok((token.text.clone(), token.position()))
}
