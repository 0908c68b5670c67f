//! Literal scanning implementations
//! Handles string, character and numeric literals, plus identifiers
//!
//! Every scanner looks at the remaining input `rest` (which starts at the
//! token) and returns the byte length of the match together with its kind.
//! Nothing is consumed here; the tokenizer advances afterwards.

use super::symbols::is_proper_termination;
use super::tokens::{LexError, TokenKind};
use crate::util::span::Position;

const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

/// Scan a string (`"`) or character (`'`) literal, quotes included
///
/// A backslash followed by another backslash or by the opening quote is a
/// two-character escape. Newline, tab and end of input end the literal
/// prematurely.
pub fn scan_quoted(
    rest: &str,
    start: Position,
) -> Result<(usize, TokenKind), LexError> {
    let mut chars = rest.char_indices();
    let (kind, quote, name) = match chars.next() {
        Some((_, '"')) => (TokenKind::StringLiteral, '"', "string"),
        Some((_, '\'')) => (TokenKind::CharLiteral, '\'', "char"),
        other => {
            return Err(LexError::UnexpectedChar {
                ch: other.map_or('\0', |(_, c)| c),
                position: start,
            })
        }
    };
    let unterminated = LexError::UnterminatedLiteral {
        kind: name,
        position: start,
    };

    let mut escaped = false;
    let end = loop {
        match chars.next() {
            None | Some((_, '\n')) | Some((_, '\t')) => return Err(unterminated),
            Some((i, c)) if c == quote && !escaped => break i + c.len_utf8(),
            Some((_, c)) => {
                let next = chars.clone().next().map(|(_, n)| n);
                escaped = !escaped && c == '\\' && (next == Some('\\') || next == Some(quote));
            }
        }
    };

    check_termination(rest, end, start)?;
    Ok((end, kind))
}

/// Scan a numeric literal; base is chosen from the prefix
///
/// `0x`/`0X` hex, `0b`/`0B` binary, other leading `0` octal, anything else
/// decimal. Digits of the chosen base are consumed greedily; a `0x` or `0b`
/// prefix with no digits after it is still a literal of that base.
pub fn scan_number(
    rest: &str,
    start: Position,
) -> Result<(usize, TokenKind), LexError> {
    let bytes = rest.as_bytes();
    let (kind, digits, prefix_len) = match (bytes.first(), bytes.get(1)) {
        (Some(b'0'), Some(b'x' | b'X')) => (TokenKind::HexLiteral, HEX_DIGITS, 2),
        (Some(b'0'), Some(b'b' | b'B')) => (TokenKind::BinLiteral, &HEX_DIGITS[..2], 2),
        (Some(b'0'), _) => (TokenKind::OctLiteral, &HEX_DIGITS[..8], 1),
        _ => (TokenKind::DecLiteral, &HEX_DIGITS[..10], 0),
    };

    let digit_count = rest[prefix_len..]
        .chars()
        .take_while(|c| digits.contains(*c))
        .count();
    let end = prefix_len + digit_count;

    check_termination(rest, end, start)?;
    Ok((end, kind))
}

/// Scan an identifier: ASCII letters, digits and underscores
pub fn scan_identifier(
    rest: &str,
    start: Position,
) -> Result<(usize, TokenKind), LexError> {
    let end = rest
        .char_indices()
        .find(|(_, c)| !is_identifier_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    if end == 0 {
        let ch = rest.chars().next().unwrap_or('\0');
        return Err(LexError::UnexpectedChar { ch, position: start });
    }

    check_termination(rest, end, start)?;
    Ok((end, TokenKind::Identifier))
}

fn check_termination(
    rest: &str,
    end: usize,
    start: Position,
) -> Result<(), LexError> {
    let after = &rest[end..];
    if is_proper_termination(after) {
        return Ok(());
    }
    Err(LexError::ImproperTermination {
        token: format!("`{}`", &rest[..end]),
        found: after.chars().next().unwrap_or('\0'),
        position: start,
    })
}

/// Check if character can start a numeric literal
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if character can start a string or char literal
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Check if character can continue an identifier
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
