use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_comparison,
            binding::{parse_function_definition, parse_let_binding},
            block::parse_block,
            utils::{expect, peek_kind, skip_separators},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token sequence into its top-level expressions.
///
/// Expressions are parsed one after another until [`TokenKind::Eof`]; `;`
/// separators between them are optional. The first error aborts parsing of the
/// remaining input.
///
/// # Parameters
/// - `tokens`: Tokens as produced by [`tokenize`].
///
/// # Returns
/// The parsed expressions in source order.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use fplang::{ast::Expr, interpreter::{lexer::tokenize, parser::core::parse}};
///
/// let tokens = tokenize("def double(x) = x * 2\ndouble(21)").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Expr::FunctionDef { .. }));
/// assert_eq!(program[1].to_string(), "double(21)");
/// ```
///
/// [`tokenize`]: crate::interpreter::lexer::tokenize
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Expr>> {
    let mut iter = tokens.iter().peekable();
    let mut expressions = Vec::new();

    loop {
        skip_separators(&mut iter);
        if peek_kind(&mut iter) == TokenKind::Eof {
            break;
        }
        expressions.push(parse_expression(&mut iter)?);
    }

    Ok(expressions)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Keyword-led forms are
/// dispatched on their first token; everything else begins at the lowest
/// precedence binary level.
///
/// Grammar:
/// `expression := function_def | let_binding | if_expr | block | comparison`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match peek_kind(tokens) {
        TokenKind::Def => parse_function_definition(tokens),
        TokenKind::Let => parse_let_binding(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::LBrace => parse_block(tokens),
        _ => parse_comparison(tokens),
    }
}

/// Parses an `if` expression.
///
/// Syntax:
/// ```text
///     if <condition> then <expr> else <expr>
/// ```
/// Both branches are mandatory; `else if` chains fall out of the grammar since
/// the else branch is itself an expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// An `Expr::IfExpr` node.
///
/// # Errors
/// - `UnexpectedToken` if `then` or `else` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let pos = expect(tokens, TokenKind::If, "'if'")?.position();
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::Then, "'then' after if condition")?;
    let then_branch = parse_expression(tokens)?;
    expect(tokens, TokenKind::Else, "'else' after then branch")?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      pos })
}
