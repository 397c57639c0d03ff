use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses one left-associative precedence level.
///
/// `parse_operand` parses the next-higher level; `accepts` selects the
/// operators handled at this level. Each operator found folds the expression
/// parsed so far into the left side of a new `Expr::BinaryOp`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 parse_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 accepts: fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some(&token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && accepts(op)
        {
            tokens.next();
            let right = parse_operand(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    pos: token.position() };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles the left-associative operators `>`, `<` and `=`. Chains such as
/// `a < b < c` parse as `(a < b) < c`.
///
/// The rule is: `comparison := term ((">" | "<" | "=") term)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, parse_term, BinaryOperator::is_comparison)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, parse_factor, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := primary (("*" | "/") primary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, parse_primary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use fplang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(TokenKind::Equals), Some(BinaryOperator::Equal));
/// assert_eq!(token_to_binary_operator(TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::Equals => Some(BinaryOperator::Equal),
        _ => None,
    }
}
