//! Lexer module
//! Split into the fixed token table, literal scanners and the tokenizer loop

pub mod literals;
pub mod symbols;
pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenCursor, TokenKind, TokenStream};

/// Tokenize source code
///
/// Whitespace (`\t \r \n` and space) and `#` line comments separate tokens.
/// The first lexical error aborts the whole call; no partial stream is
/// returned.
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    tracing::debug!("Lexing {} bytes", source.len());

    let mut tokens = TokenStream::new();
    for token in Lexer::new(source) {
        let token = token.inspect_err(|e| tracing::debug!("Lexing failed: {}", e))?;
        log_token(&token);
        tokens.push(token);
    }

    tracing::debug!("Lexing complete, {} tokens", tokens.len());
    Ok(tokens)
}

/// Log a token for debugging
fn log_token(token: &Token) {
    let class = if token.kind.is_keyword() {
        "keyword"
    } else if token.kind.is_numeric_literal() {
        "number"
    } else if token.kind.is_dynamic() {
        "dynamic"
    } else {
        "symbol"
    };
    tracing::trace!("{} {} at {}", class, token.lexeme(), token.span.start);
}
