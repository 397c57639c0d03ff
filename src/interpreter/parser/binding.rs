use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, TUPLE_ACCESSOR},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier, skip_separators},
        },
    },
};

/// Internal name the destructured value is bound to.
///
/// It contains characters the lexer never accepts in an identifier, so user
/// code can neither read nor shadow it.
const TUPLE_BINDING: &str = "<tuple>";

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     def name(p1, p2, ...) = body
/// ```
/// The parameter list may be empty. The body is a full expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `def` keyword.
///
/// # Returns
/// An `Expr::FunctionDef` node.
///
/// # Errors
/// - `UnexpectedToken` if the name, parentheses or `=` are missing.
/// - `DuplicateParameter` if a parameter name occurs twice.
pub fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let pos = expect(tokens, TokenKind::Def, "'def'")?.position();
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LParen, "'(' after function name")?;

    let params = parse_comma_separated(tokens, parse_identifier, TokenKind::RParen)?;
    let mut names: Vec<String> = Vec::with_capacity(params.len());
    for (param, param_pos) in params {
        if names.contains(&param) {
            return Err(ParseError::DuplicateParameter { name:   param,
                                                        line:   param_pos.line,
                                                        column: param_pos.column, });
        }
        names.push(param);
    }

    expect(tokens, TokenKind::Equals, "'=' after parameter list")?;
    let body = parse_expression(tokens)?;

    Ok(Expr::FunctionDef { name,
                           params: names,
                           body: body.into(),
                           pos })
}

/// Parses a `let` binding.
///
/// Syntax:
/// ```text
///     let name = value body
///     let (n1, n2, ...) = value body
/// ```
/// The body has no terminator; it is whatever expression follows the value,
/// optionally after a `;`.
///
/// The tuple form is rewritten here, so the evaluator only ever sees plain
/// bindings: the value is bound to an internal name and each pattern name is
/// bound in turn to `<get_tuple_element>(<tuple>, i)`. The last name ends up
/// innermost, closest to `body`.
///
/// # Errors
/// - `UnexpectedToken` if the pattern, `=`, value or body is malformed.
/// - `UnexpectedToken` for an empty tuple pattern `()`.
pub fn parse_let_binding<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let pos = expect(tokens, TokenKind::Let, "'let'")?.position();

    if let Some(open) = tokens.next_if(|token| token.kind == TokenKind::LParen) {
        let names = parse_comma_separated(tokens, parse_identifier, TokenKind::RParen)?;
        if names.is_empty() {
            return Err(ParseError::UnexpectedToken { expected: "identifier in tuple pattern".to_string(),
                                                     found:    ")".to_string(),
                                                     line:     open.line,
                                                     column:   open.column + 1, });
        }
        let value = parse_bound_value(tokens)?;
        let body = parse_expression(tokens)?;
        return Ok(desugar_tuple_pattern(names, value, body, pos));
    }

    let (name, _) = parse_identifier(tokens)?;
    let value = parse_bound_value(tokens)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::LetBinding { name,
                          value: Box::new(value),
                          body: Box::new(body),
                          pos })
}

/// Parses `= value` and any `;` that follows it.
fn parse_bound_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Equals, "'=' in let binding")?;
    let value = parse_expression(tokens)?;
    skip_separators(tokens);
    Ok(value)
}

/// Rewrites `let (n0, n1, ...) = value body` into nested bindings.
///
/// Produces:
/// ```text
///     let <tuple> = value
///       let n0 = <get_tuple_element>(<tuple>, 0)
///         let n1 = <get_tuple_element>(<tuple>, 1)
///           body
/// ```
fn desugar_tuple_pattern(names: Vec<(String, Position)>,
                         value: Expr,
                         body: Expr,
                         pos: Position)
                         -> Expr {
    let indexed: Vec<(i64, (String, Position))> = (0_i64..).zip(names).collect();

    let nested = indexed.into_iter()
                        .rev()
                        .fold(body, |body, (index, (name, name_pos))| {
                            let element = Expr::FunctionCall {
                                name:      TUPLE_ACCESSOR.to_string(),
                                arguments: vec![Expr::Identifier { name: TUPLE_BINDING.to_string(),
                                                                   pos:  name_pos, },
                                                Expr::Number { value: index,
                                                               pos:   name_pos, }],
                                pos:       name_pos,
                            };
                            Expr::LetBinding { name,
                                               value: Box::new(element),
                                               body: Box::new(body),
                                               pos: name_pos }
                        });

    Expr::LetBinding { name: TUPLE_BINDING.to_string(),
                       value: Box::new(value),
                       body: Box::new(nested),
                       pos }
}
