/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, a keyword, an operator or a bracket. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, text and source location.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs one expression tree per top-level form.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes following the operator precedence.
/// - Rewrites blocks and tuple destructuring into core expressions.
/// - Reports the first syntax error with its location.
pub mod parser;
/// Lexical scopes.
///
/// Defines the `Environment`, a chain of scopes mapping names to values, used
/// for `let`, function parameters and closure capture.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (integers, floats, booleans, lists and
/// functions) and the function values themselves.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies operators, binds names, calls
/// functions and produces values. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every `Expr` variant.
/// - Implements user-defined and built-in function calls.
/// - Reports runtime errors together with the failing expression.
pub mod evaluator;
/// Interpreter sessions.
///
/// Ties the lexer, parser and evaluator together around one persistent root
/// scope.
pub mod session;
