//! Tokenizer implementation
//! Main lexer structure and token generation logic

use super::literals::{is_digit, is_quote, scan_identifier, scan_number, scan_quoted};
use super::symbols::{keyword_glued_to_digit, longest_static_match, COMMENT_START, WHITESPACE};
use crate::frontend::core::lexer::tokens::*;
use crate::util::span::{Position, Span};

/// Main lexer structure
///
/// Walks the source left to right keeping a 1-based line and column counter.
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            failed: false,
        }
    }

    /// Get current position
    pub fn current_position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Unconsumed part of the source
    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Advance over `len` bytes that contain no newline
    fn advance_within_line(
        &mut self,
        len: usize,
    ) {
        let consumed = &self.source[self.offset..self.offset + len];
        self.column += consumed.chars().count();
        self.offset += len;
    }

    /// Skip whitespace and `#` line comments
    ///
    /// Returns false once the end of input is reached.
    fn skip_to_next_token(&mut self) -> bool {
        while let Some(c) = self.rest().chars().next() {
            if c == COMMENT_START {
                let len = self.rest().find('\n').unwrap_or(self.rest().len());
                self.advance_within_line(len);
            } else if c == '\n' {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
            } else if WHITESPACE.contains(&c) {
                self.advance_within_line(c.len_utf8());
            } else {
                return true;
            }
        }
        false
    }

    /// Length and kind of the token starting at the current position
    ///
    /// Tried in priority order: quoted literal, number, keyword/symbol
    /// (longest match), identifier.
    fn determine_token_length_and_type(&self) -> Result<(usize, TokenKind), LexError> {
        let rest = self.rest();
        let start = self.current_position();
        // skip_to_next_token guarantees at least one character here
        let first = rest.chars().next().unwrap_or('\0');

        if is_quote(first) {
            return scan_quoted(rest, start);
        }
        if is_digit(first) {
            return scan_number(rest, start);
        }
        if let Some(found) = longest_static_match(rest) {
            return Ok(found);
        }
        if let Some((keyword, found)) = keyword_glued_to_digit(rest) {
            return Err(LexError::ImproperTermination {
                token: format!("keyword `{}`", keyword),
                found,
                position: start,
            });
        }
        scan_identifier(rest, start)
    }

    /// Generate next token
    ///
    /// `Ok(None)` marks the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if !self.skip_to_next_token() {
            return Ok(None);
        }

        let start = self.current_position();
        let (len, kind) = self.determine_token_length_and_type()?;
        let text = kind
            .is_dynamic()
            .then(|| self.rest()[..len].to_string());
        self.advance_within_line(len);

        Ok(Some(Token::new(kind, text, Span::new(start, self.current_position()))))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_token().transpose();
        self.failed = matches!(item, Some(Err(_)));
        item
    }
}
