//! Type parsing implementation
//!
//! ```text
//! type    := 'rt' ( '[' args? ']' )? ':' type
//!          | '>' type
//!          | identifier
//! args    := type ( ',' type )*
//! ```

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::parser_state::{describe, ParseError, ParserState};
use crate::frontend::core::type_system::TypeInfo;

impl<'a> ParserState<'a> {
    /// Parse one type starting at the current token
    ///
    /// Each nested `>` or `rt` counts against the depth limit.
    pub fn parse_type(&mut self) -> Result<TypeInfo, ParseError> {
        self.inc_type_depth()?;
        let ty = self.parse_type_at_depth();
        self.dec_type_depth();
        ty
    }

    fn parse_type_at_depth(&mut self) -> Result<TypeInfo, ParseError> {
        let token = self.next_or_eof("type")?;
        match token.kind {
            TokenKind::KwRt => self.parse_routine_type(),
            TokenKind::Gt => Ok(TypeInfo::pointer_to(self.parse_type()?)),
            TokenKind::Identifier => parse_builtin_type(token),
            _ => Err(ParseError::ExpectedType {
                found: describe(token),
                position: token.position(),
            }),
        }
    }

    /// Routine type after `rt`
    ///
    /// A missing bracket pair and `[]` both mean no arguments.
    fn parse_routine_type(&mut self) -> Result<TypeInfo, ParseError> {
        let args = if self.skip(TokenKind::LBracket) {
            self.parse_routine_args()?
        } else {
            Vec::new()
        };

        self.expect(TokenKind::Colon)?;
        let ret = self.parse_type()?;
        Ok(TypeInfo::routine(args, ret))
    }

    /// Argument list after `[`, up to and including `]`
    fn parse_routine_args(&mut self) -> Result<Vec<TypeInfo>, ParseError> {
        let mut args = Vec::new();
        if self.skip(TokenKind::RBracket) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_type()?);

            let token = self.next_or_eof("',' or ']'")?;
            match token.kind {
                TokenKind::RBracket => return Ok(args),
                TokenKind::Comma => continue,
                _ => {
                    return Err(ParseError::ExpectedToken {
                        expected: "',' or ']'".to_string(),
                        found: describe(token),
                        position: token.position(),
                    })
                }
            }
        }
    }
}

/// Builtin type named by an identifier token
// TODO: resolve user-defined structural types once declarations can introduce them
fn parse_builtin_type(token: &Token) -> Result<TypeInfo, ParseError> {
    let name = token.lexeme();
    TypeInfo::builtin(name).ok_or_else(|| ParseError::UnknownType {
        name: name.to_string(),
        position: token.position(),
    })
}
