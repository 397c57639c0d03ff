//! # fplang
//!
//! fplang is a small, strictly evaluated functional expression language
//! written in Rust. Source text is tokenized, parsed into expression trees and
//! evaluated by a tree-walking interpreter with lexically scoped closures,
//! lists, tuples and recursion.
//!
//! ```
//! use fplang::interpreter::session::Session;
//!
//! let mut session = Session::new();
//! session.run("def fact(n) = if n < 2 then 1 else n * fact(n - 1)");
//!
//! assert_eq!(session.run("fact(10)"), "3628800");
//! assert_eq!(session.run("let (a, b) = (1, 2); a + b"), "3");
//! ```

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::{Error, LexError, ParseError},
    interpreter::{lexer::Token, session::Session, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per language construct.
/// - Attaches source positions to every node for error reporting.
/// - Renders nodes back to a source-like text for error messages.
pub mod ast;
/// Interpreter settings.
///
/// Holds `SessionConfig`, the knobs a session reads at construction.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// phase has its own error type carrying the location of the failure, and the
/// umbrella `Error` type tags them by phase.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, values and evaluation to
/// provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides sessions that keep definitions across runs.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Conversions between `i64`, `usize` and `f64` that report failure instead of
/// silently wrapping.
pub mod util;

/// Converts source text into tokens.
///
/// Shorthand for [`interpreter::lexer::tokenize`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    interpreter::lexer::tokenize(source)
}

/// Parses tokens into top-level expressions.
///
/// Shorthand for [`interpreter::parser::core::parse`].
pub fn parse(tokens: &[Token]) -> Result<Vec<Expr>, ParseError> {
    interpreter::parser::core::parse(tokens)
}

/// Evaluates `source` in a fresh session and returns the value of its last
/// top-level expression.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use fplang::{evaluate_source, interpreter::value::core::Value};
///
/// let value = evaluate_source("(2 + 3) * 4").unwrap();
/// assert_eq!(value, Some(Value::Integer(20)));
///
/// // `y` is not defined.
/// assert!(evaluate_source("let x = y + 1 x").is_err());
///
/// assert_eq!(evaluate_source("// nothing here").unwrap(), None);
/// ```
pub fn evaluate_source(source: &str) -> Result<Option<Value>, Error> {
    Session::new().eval_source(source)
}
