use log::trace;
use logos::Logos;

use crate::{ast::Position, error::LexError};

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language. The literal
/// text of each token is kept separately in [`Token`].
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// Identifier tokens; variable or function names such as `xs` or `head`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `def`
    #[token("def")]
    Def,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`, an optional separator between expressions.
    #[token(";")]
    Semicolon,
    /// `// Comments.` Longest match keeps this apart from `/`.
    #[token("//", skip_comment)]
    Comment,
    /// Newlines are skipped but advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// End of input. Never matched; appended once by [`tokenize`].
    Eof,
}

impl TokenKind {
    /// Human-readable name used in parse error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Def => "'def'",
            Self::Let => "'let'",
            Self::If => "'if'",
            Self::Then => "'then'",
            Self::Else => "'else'",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Greater => "'>'",
            Self::Less => "'<'",
            Self::Equals => "'='",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Eof => "end of input",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which it starts so
/// that every token can be given a line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A token with its literal text and the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The source text the token was produced from.
    pub text:   String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// The position of the token's first character.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Skips the remainder of a `//` comment, leaving the newline in place so the
/// line counter still sees it.
fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let rest = lex.remainder();
    let length = rest.find('\n').unwrap_or(rest.len());
    lex.bump(length);
    logos::Skip
}

/// Counts the characters between the start of the line and `offset`.
fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(0, |prefix| prefix.chars().count())
          + 1
}

/// Converts source text into a sequence of tokens terminated by
/// [`TokenKind::Eof`].
///
/// # Errors
/// Returns a [`LexError`] carrying the first character that starts no token.
///
/// # Example
/// ```
/// use fplang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("def f(x) = x // identity").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Def,
///             TokenKind::Identifier,
///             TokenKind::LParen,
///             TokenKind::Identifier,
///             TokenKind::RParen,
///             TokenKind::Equals,
///             TokenKind::Identifier,
///             TokenKind::Eof]);
/// assert_eq!((tokens[2].line, tokens[2].column), (1, 6));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;
        let column = column_at(source, lexer.extras.line_start, span.start);

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            text: lexer.slice().to_string(),
                                            line,
                                            column }),
            Err(()) => {
                let character = source.get(span.start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError { character,
                                      line,
                                      column });
            },
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        text:   String::new(),
                        line:   lexer.extras.line,
                        column: column_at(source, lexer.extras.line_start, source.len()), });

    trace!("tokens: {:?}",
           tokens.iter()
                 .map(|t| format!("{:?}({})", t.kind, t.text))
                 .collect::<Vec<_>>());

    Ok(tokens)
}
