//! Token types

use crate::util::span::{Position, Span};
use serde::Serialize;
use std::fmt;

/// Lexer error
///
/// Tokenization is all-or-nothing: the first error aborts the whole call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated {kind} literal at {position}")]
    UnterminatedLiteral {
        kind: &'static str,
        position: Position,
    },
    #[error("malformed numeric literal `{text}` at {position}")]
    MalformedNumber { text: String, position: Position },
    #[error("improperly terminated {token} at {position}: unexpected '{found}' after it")]
    ImproperTermination {
        token: String,
        found: char,
        position: Position,
    },
    #[error("unrecognized character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },
}

impl LexError {
    /// Position the error is reported at
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedLiteral { position, .. }
            | LexError::MalformedNumber { position, .. }
            | LexError::ImproperTermination { position, .. }
            | LexError::UnexpectedChar { position, .. } => *position,
        }
    }

    pub fn line(&self) -> usize {
        self.position().line
    }

    pub fn column(&self) -> usize {
        self.position().column
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Keywords (4 total)
    KwRt,
    KwDecl,
    KwReturn,
    KwConst,

    // Operators
    At,
    Dollar,
    Star,
    Slash,
    Plus,
    Minus,
    Eq,
    Tilde,
    Amp,
    Pipe,
    Caret,
    Not,
    AndAnd,
    OrOr,
    EqEq,
    LtGt,
    Lt,
    Gt,
    Le,
    Ge,

    // Delimiters
    Dot,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Colon,
    Semicolon,
    Comma,

    // Literals
    StringLiteral,
    CharLiteral,
    BinLiteral,
    OctLiteral,
    DecLiteral,
    HexLiteral,

    // Identifiers
    Identifier,
}

impl TokenKind {
    /// Fixed source spelling of keyword and symbol kinds
    pub fn as_str(&self) -> Option<&'static str> {
        super::symbols::spelling(*self)
    }

    /// Literals and identifiers: the text varies per occurrence
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::BinLiteral
                | TokenKind::OctLiteral
                | TokenKind::DecLiteral
                | TokenKind::HexLiteral
                | TokenKind::Identifier
        )
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KwRt | TokenKind::KwDecl | TokenKind::KwReturn | TokenKind::KwConst
        )
    }

    pub fn is_numeric_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::BinLiteral
                | TokenKind::OctLiteral
                | TokenKind::DecLiteral
                | TokenKind::HexLiteral
        )
    }

    /// Radix of a numeric literal kind
    pub fn radix(&self) -> Option<u32> {
        match self {
            TokenKind::BinLiteral => Some(2),
            TokenKind::OctLiteral => Some(8),
            TokenKind::DecLiteral => Some(10),
            TokenKind::HexLiteral => Some(16),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if let Some(spelling) = self.as_str() {
            return write!(f, "'{}'", spelling);
        }
        let name = match self {
            TokenKind::StringLiteral => "string literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::BinLiteral => "binary literal",
            TokenKind::OctLiteral => "octal literal",
            TokenKind::DecLiteral => "decimal literal",
            TokenKind::HexLiteral => "hex literal",
            _ => "identifier",
        };
        f.write_str(name)
    }
}

/// Token
///
/// `text` is `Some` exactly for dynamic kinds and holds the matched source
/// text, quotes included for string and char literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: Option<String>,
        span: Span,
    ) -> Self {
        Self { kind, text, span }
    }

    /// Line of the first character (1-indexed)
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// Column of the first character (1-indexed)
    pub fn column(&self) -> usize {
        self.span.start.column
    }

    pub fn position(&self) -> Position {
        self.span.start
    }

    /// Matched text for dynamic tokens, fixed spelling otherwise
    pub fn lexeme(&self) -> &str {
        match &self.text {
            Some(text) => text,
            None => self.kind.as_str().unwrap_or(""),
        }
    }

    /// Numeric value of an integer literal token
    pub fn int_value(&self) -> Option<u64> {
        let radix = self.kind.radix()?;
        let text = self.text.as_deref()?;
        let digits = match radix {
            2 | 16 => &text[2..],
            _ => text,
        };
        u64::from_str_radix(digits, radix).ok()
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} `{}` at {}", self.kind, text, self.span.start),
            None => write!(f, "{} at {}", self.kind, self.span.start),
        }
    }
}

/// Ordered, appendable token collection produced by the lexer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        token: Token,
    ) {
        self.tokens.push(token);
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds in order, handy for assertions and dumps
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Forward-only cursor starting at the first token
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(&self.tokens)
    }

}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Forward-only cursor with one token of look-ahead
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Next token without consuming it
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Index of the next token to be consumed
    pub fn index(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Span of the most recently consumed token
    pub fn last_span(&self) -> Option<Span> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
    }
}

impl<'a> Iterator for TokenCursor<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}
