use std::rc::Rc;

/// Internal name of the built-in `get_tuple_element`.
///
/// Desugared blocks and tuple patterns are rewritten into calls to it. The
/// lexer never produces an identifier containing `<`, so user code can neither
/// call nor rebind this name and both desugars keep working when
/// `get_tuple_element` is shadowed.
pub const TUPLE_ACCESSOR: &str = "<get_tuple_element>";

/// A location in the source text.
///
/// Both fields are 1-based. The column counts characters, not bytes, from the
/// start of the line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number in the source code.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// The variant set is closed: the parser produces nothing else and the
/// evaluator matches every variant exhaustively. Sugar such as blocks and tuple
/// destructuring is rewritten by the parser into these variants, so the
/// evaluator never sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
        /// Position in the source code.
        pos:   Position,
    },
    /// A boolean literal (`true` or `false`).
    Boolean {
        /// The literal value.
        value: bool,
        /// Position in the source code.
        pos:   Position,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Position in the source code.
        pos:  Position,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position of the operator token.
        pos:   Position,
    },
    /// A named function definition, `def name(params) = body`.
    ///
    /// The body is reference counted because closures created from this node
    /// keep it alive after the surrounding tree is dropped.
    FunctionDef {
        /// Name the function is bound to.
        name:   String,
        /// Parameter names, in order.
        params: Vec<String>,
        /// The body expression evaluated when the function is called.
        body:   Rc<Self>,
        /// Position in the source code.
        pos:    Position,
    },
    /// Function call expression (e.g. `head(xs)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position in the source code.
        pos:       Position,
    },
    /// Conditional (`if-then-else`) expression.
    IfExpr {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is truthy.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise.
        else_branch: Box<Self>,
        /// Position in the source code.
        pos:         Position,
    },
    /// `let name = value body`.
    LetBinding {
        /// The bound name.
        name:  String,
        /// The value, evaluated in the enclosing scope.
        value: Box<Self>,
        /// The body, evaluated in a new scope containing `name`.
        body:  Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// List literal, also used for tuples.
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Position in the source code.
        pos:      Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use fplang::ast::{Expr, Position};
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               pos:  Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { pos, .. }
            | Self::Boolean { pos, .. }
            | Self::Identifier { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::FunctionDef { pos, .. }
            | Self::FunctionCall { pos, .. }
            | Self::IfExpr { pos, .. }
            | Self::LetBinding { pos, .. }
            | Self::ListLiteral { pos, .. } => *pos,
        }
    }
}

/// Writes `items` separated by `", "`.
fn write_separated<T: std::fmt::Display>(f: &mut std::fmt::Formatter<'_>,
                                         items: &[T])
                                         -> std::fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionDef { name, params, body, .. } => {
                write!(f, "def {name}(")?;
                write_separated(f, params)?;
                write!(f, ") = {body}")
            },
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                write!(f, "if {condition} then {then_branch} else {else_branch}")
            },
            Self::LetBinding { name, value, body, .. } => write!(f, "let {name} = {value} {body}"),
            Self::ListLiteral { elements, .. } => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            },
        }
    }
}

/// Represents a binary operator.
///
/// The language has exactly seven: the four arithmetic operators and three
/// comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or list concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`=`)
    Equal,
}

impl BinaryOperator {
    /// Returns `true` for `<`, `>` and `=`.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Less | Self::Greater | Self::Equal)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
        };
        write!(f, "{operator}")
    }
}
