//! Parser state and error handling

use crate::frontend::core::lexer::tokens::*;
use crate::util::span::Position;

/// Parse error types
///
/// Every variant carries the position of the token parsing stopped at.
/// End of input is reported at the last token that was consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input after {position}, expected {expected}")]
    UnexpectedEof {
        expected: String,
        position: Position,
    },
    #[error("expected 'const' or 'decl' at {position}, found {found}")]
    ExpectedDeclaration { found: String, position: Position },
    #[error("expected identifier at {position}, found {found}")]
    ExpectedIdentifier { found: String, position: Position },
    #[error("expected type at {position}, found {found}")]
    ExpectedType { found: String, position: Position },
    #[error("unknown type `{name}` at {position}")]
    UnknownType { name: String, position: Position },
    #[error("expected {expected} at {position}, found {found}")]
    ExpectedToken {
        expected: String,
        found: String,
        position: Position,
    },
    #[error("declaration of `{symbol}` has neither type nor value: expected ':', '=' or ';' at {position}, found {found}")]
    MissingTypeAndValue {
        symbol: String,
        found: String,
        position: Position,
    },
    #[error("expected value or end of declaration at {position}, found {found}")]
    ExpectedValueOrEnd { found: String, position: Position },
    #[error("unexpected {found} at {position} after a complete type")]
    TrailingTokens { found: String, position: Position },
    #[error("type nested deeper than {limit} levels at {position}")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedEof { position, .. }
            | ParseError::ExpectedDeclaration { position, .. }
            | ParseError::ExpectedIdentifier { position, .. }
            | ParseError::ExpectedType { position, .. }
            | ParseError::UnknownType { position, .. }
            | ParseError::ExpectedToken { position, .. }
            | ParseError::MissingTypeAndValue { position, .. }
            | ParseError::ExpectedValueOrEnd { position, .. }
            | ParseError::TrailingTokens { position, .. }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }

    pub fn line(&self) -> usize {
        self.position().line
    }

    pub fn column(&self) -> usize {
        self.position().column
    }
}

/// Short description of a token for diagnostics: `'='`, `identifier `x``
pub fn describe(token: &Token) -> String {
    match &token.text {
        Some(text) => format!("{} `{}`", token.kind, text),
        None => token.kind.to_string(),
    }
}

/// Forward-only cursor with one token of lookahead
///
/// Productions consume exactly the tokens they commit to; there is no
/// backtracking.
pub struct ParserState<'a> {
    cursor: TokenCursor<'a>,
    type_depth: usize,
    max_type_depth: usize,
}

/// Deepest type nesting accepted before `NestingTooDeep`
pub const MAX_TYPE_DEPTH: usize = 256;

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            type_depth: 0,
            max_type_depth: MAX_TYPE_DEPTH,
        }
    }

    pub fn with_max_type_depth(
        mut self,
        max_type_depth: usize,
    ) -> Self {
        self.max_type_depth = max_type_depth;
        self
    }

    /// Enter one level of type nesting, failing past the limit
    pub fn inc_type_depth(&mut self) -> Result<(), ParseError> {
        if self.type_depth >= self.max_type_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_type_depth,
                position: self
                    .current()
                    .map(Token::position)
                    .unwrap_or_else(|| self.eof_position()),
            });
        }
        self.type_depth += 1;
        Ok(())
    }

    pub fn dec_type_depth(&mut self) {
        self.type_depth = self.type_depth.saturating_sub(1);
    }

    pub fn at_end(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Next unconsumed token
    pub fn current(&self) -> Option<&'a Token> {
        self.cursor.peek()
    }

    /// Number of tokens consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor.index()
    }

    pub fn at(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    pub fn bump(&mut self) -> Option<&'a Token> {
        self.cursor.next()
    }

    /// Consume the current token if it is `kind`
    pub fn skip(
        &mut self,
        kind: TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Where end of input is reported: the last consumed token
    pub fn eof_position(&self) -> Position {
        self.cursor
            .last_span()
            .map(|span| span.start)
            .unwrap_or_else(Position::start)
    }

    /// Consume the next token, failing at end of input
    pub fn next_or_eof(
        &mut self,
        expected: &str,
    ) -> Result<&'a Token, ParseError> {
        let position = self.eof_position();
        self.bump().ok_or_else(|| ParseError::UnexpectedEof {
            expected: expected.to_string(),
            position,
        })
    }

    /// Consume a token of `kind` or fail at the offending token
    pub fn expect(
        &mut self,
        kind: TokenKind,
    ) -> Result<&'a Token, ParseError> {
        let expected = kind.to_string();
        let token = self.next_or_eof(&expected)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::ExpectedToken {
                expected,
                found: describe(token),
                position: token.position(),
            })
        }
    }
}
