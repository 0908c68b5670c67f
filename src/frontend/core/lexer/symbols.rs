//! Fixed token table
//!
//! Every non-dynamic token has a predefined spelling. Keywords must be
//! followed by a proper terminator, symbols need not be.

use super::tokens::TokenKind;

/// Keywords, matched only when properly terminated
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("rt", TokenKind::KwRt),
    ("decl", TokenKind::KwDecl),
    ("return", TokenKind::KwReturn),
    ("const", TokenKind::KwConst),
];

/// Non-keyword symbols; their first characters also terminate dynamic tokens
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("@", TokenKind::At),
    ("$", TokenKind::Dollar),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("=", TokenKind::Eq),
    ("~", TokenKind::Tilde),
    ("&", TokenKind::Amp),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("!", TokenKind::Not),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("==", TokenKind::EqEq),
    ("<>", TokenKind::LtGt),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    (".", TokenKind::Dot),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
    (",", TokenKind::Comma),
];

/// Characters skipped between tokens
pub const WHITESPACE: &[char] = &['\t', '\r', '\n', ' '];

/// Starts a line comment running to end of line
pub const COMMENT_START: char = '#';

/// Fixed spelling of a keyword or symbol kind
pub fn spelling(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .chain(SYMBOLS.iter())
        .find(|(_, k)| *k == kind)
        .map(|(s, _)| *s)
}

/// Whatever follows a dynamic or keyword token must be whitespace, end of
/// input, or the beginning of a non-keyword symbol.
pub fn is_proper_termination(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) if WHITESPACE.contains(&c) => true,
        Some(_) => SYMBOLS.iter().any(|(s, _)| rest.starts_with(s)),
    }
}

/// Keyword immediately followed by a digit, e.g. `decl2`
///
/// A letter or underscore after a keyword simply makes a longer identifier
/// (`returned`), but a digit there is rejected instead of being read as one
/// identifier.
pub fn keyword_glued_to_digit(rest: &str) -> Option<(&'static str, char)> {
    KEYWORDS.iter().find_map(|(s, _)| {
        let next = rest.strip_prefix(s)?.chars().next()?;
        next.is_ascii_digit().then_some((*s, next))
    })
}

/// Longest keyword or symbol matching at the start of `rest`
///
/// Keyword candidates are discarded unless properly terminated.
pub fn longest_static_match(rest: &str) -> Option<(usize, TokenKind)> {
    let keywords = KEYWORDS
        .iter()
        .filter(|(s, _)| rest.starts_with(s) && is_proper_termination(&rest[s.len()..]));
    let symbols = SYMBOLS.iter().filter(|(s, _)| rest.starts_with(s));

    keywords
        .chain(symbols)
        .fold(None, |best: Option<(usize, TokenKind)>, (s, kind)| match best {
            Some((len, _)) if len >= s.len() => best,
            _ => Some((s.len(), *kind)),
        })
}
