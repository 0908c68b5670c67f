//! Parser module
//!
//! Recursive-descent parser turning a token stream into the global scope
//! of declarations. Types are parsed recursively; value bodies are kept
//! as raw tokens.

pub mod ast;
pub mod declarations;
pub mod parser_state;
pub mod types;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::{Declaration, GlobalScope};
pub use parser_state::{ParseError, ParserState, MAX_TYPE_DEPTH};

use crate::frontend::core::lexer::tokens::{TokenKind, TokenStream};
use crate::frontend::core::type_system::TypeInfo;

/// Parse tokens into the global scope
///
/// Stray `;` between declarations are skipped. The first error aborts the
/// whole parse; no partial scope is returned.
pub fn parse(tokens: &TokenStream) -> Result<GlobalScope, ParseError> {
    tracing::debug!("Parsing {} tokens", tokens.len());

    let mut state = ParserState::new(tokens.as_slice());
    let mut scope = GlobalScope::new();

    while !state.at_end() {
        if state.skip(TokenKind::Semicolon) {
            continue;
        }

        let decl = state
            .parse_declaration()
            .inspect_err(|e| tracing::debug!("Parsing failed: {}", e))?;
        tracing::debug!(
            "{} `{}` at {}: {}",
            if decl.is_const { "const" } else { "decl" },
            decl.symbol,
            decl.position.start,
            decl.ty
                .as_ref()
                .map_or_else(|| "(to infer)".to_string(), |ty| ty.to_string())
        );
        scope.push(decl);
    }

    tracing::debug!("Parsing complete, {} declarations", scope.len());
    Ok(scope)
}

/// Parse a token stream holding exactly one type
pub fn parse_type_tokens(tokens: &TokenStream) -> Result<TypeInfo, ParseError> {
    let mut state = ParserState::new(tokens.as_slice());
    let ty = state.parse_type()?;

    match state.current() {
        Some(extra) => Err(ParseError::TrailingTokens {
            found: parser_state::describe(extra),
            position: extra.position(),
        }),
        None => Ok(ty),
    }
}
