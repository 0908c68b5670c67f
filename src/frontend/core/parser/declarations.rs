//! Declaration parsing
//!
//! ```text
//! declaration := ('decl' | 'const') identifier ( ':' type )? ( '=' value )? ';'
//! ```
//!
//! Either the type or the value may be omitted, not both. Values have no
//! grammar yet; their tokens are kept verbatim.

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::Declaration;
use crate::frontend::core::parser::parser_state::{describe, ParseError, ParserState};

impl<'a> ParserState<'a> {
    /// Parse one declaration including its closing `;`
    pub fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let keyword = self.next_or_eof("'const' or 'decl'")?;
        let is_const = match keyword.kind {
            TokenKind::KwConst => true,
            TokenKind::KwDecl => false,
            _ => {
                return Err(ParseError::ExpectedDeclaration {
                    found: describe(keyword),
                    position: keyword.position(),
                })
            }
        };

        let name = self.next_or_eof("identifier")?;
        if name.kind != TokenKind::Identifier {
            return Err(ParseError::ExpectedIdentifier {
                found: describe(name),
                position: name.position(),
            });
        }
        let symbol = name.lexeme().to_string();

        let ty = if self.skip(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let next = self.next_or_eof("'=' or ';'")?;
        let (value, end) = match next.kind {
            TokenKind::Semicolon => (None, next),
            TokenKind::Eq => {
                let (value, end) = self.parse_value()?;
                (Some(value), end)
            }
            _ if ty.is_none() => {
                return Err(ParseError::MissingTypeAndValue {
                    symbol,
                    found: describe(next),
                    position: next.position(),
                })
            }
            _ => {
                return Err(ParseError::ExpectedValueOrEnd {
                    found: describe(next),
                    position: next.position(),
                })
            }
        };

        Ok(Declaration {
            position: keyword.span.to(end.span),
            is_const,
            symbol,
            ty,
            value,
        })
    }

    /// Tokens after `=` up to the terminating `;`, which is returned separately
    fn parse_value(&mut self) -> Result<(Vec<Token>, &'a Token), ParseError> {
        let mut value = Vec::new();
        loop {
            let token = self.next_or_eof("';'")?;
            if token.kind == TokenKind::Semicolon {
                return Ok((value, token));
            }
            value.push(token.clone());
        }
    }
}
