use std::iter::Peekable;

use crate::{
    ast::{Expr, TUPLE_ACCESSOR},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, peek_kind, skip_separators, unexpected},
        },
    },
};

/// Parses a block `{ e1 ... en }`.
///
/// A block evaluates its expressions in order and yields the value of the last
/// one. It opens no scope: it is rewritten into
/// `<get_tuple_element>([e1, ..., en], n - 1)`, whose list literal evaluates
/// every element in the enclosing environment. The accessor is called through
/// its internal name, so rebinding `get_tuple_element` does not affect blocks.
/// A block holding one expression is replaced by that expression.
///
/// # Errors
/// - `EmptyBlock` for `{}`.
/// - `UnexpectedEndOfInput` if the closing `}` is missing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, TokenKind::LBrace, "'{'")?;
    let pos = open.position();

    let mut expressions = Vec::new();
    loop {
        skip_separators(tokens);
        match peek_kind(tokens) {
            TokenKind::RBrace => {
                tokens.next();
                break;
            },
            TokenKind::Eof => return Err(unexpected("'}' to close block", tokens.peek().copied())),
            _ => expressions.push(parse_expression(tokens)?),
        }
    }

    if expressions.len() <= 1 {
        return expressions.pop()
                          .ok_or(ParseError::EmptyBlock { line:   pos.line,
                                                          column: pos.column, });
    }

    let last = i64::try_from(expressions.len() - 1).unwrap_or(i64::MAX);

    Ok(Expr::FunctionCall { name: TUPLE_ACCESSOR.to_string(),
                            arguments: vec![Expr::ListLiteral { elements: expressions,
                                                                pos },
                                            Expr::Number { value: last,
                                                           pos }],
                            pos })
}
