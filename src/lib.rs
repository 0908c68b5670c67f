//! Decrout (declare routine) compiler front end
//!
//! Source text goes through the lexer into a token stream and through the
//! declaration parser into the global scope, whose declarations carry
//! types from the recursive type model.
//!
//! # Example
//!
//! ```
//! use decrout::compile;
//!
//! let scope = compile("const pi: u32; decl f: rt [ u32, >u8 ]: bool;").unwrap();
//! assert_eq!(scope.len(), 2);
//! assert_eq!(scope.find("f").unwrap().ty.as_ref().unwrap().to_string(), "rt [ u32, >u8 ]: bool");
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::core::lexer::{tokenize, LexError, Token, TokenKind, TokenStream};
pub use frontend::core::parser::{parse, parse_type_tokens, Declaration, GlobalScope, ParseError};
pub use frontend::core::type_system::TypeInfo;
pub use frontend::{CompileConfig, CompileError, Compiler, OutputFormat, OutputStage, StageOutput};

use std::fs;
use std::path::Path;
use tracing::debug;

/// Compiler version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compiler name
pub const NAME: &str = "dcrtc - decrout (declare routine) compiler";

/// Tokenize and parse source code into the global scope
pub fn compile(source: &str) -> std::result::Result<GlobalScope, CompileError> {
    Compiler::new().parse(source)
}

/// Read a file and run it up to the configured stage
pub fn compile_file(
    path: &Path,
    config: &CompileConfig,
) -> Result<StageOutput> {
    debug!("Compiling file: {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let output = Compiler::with_config(config.clone())
        .compile(&source)
        .with_context(|| format!("Failed to compile: {}", path.display()))?;
    Ok(output)
}
