//! Frontend compilation pipeline
//!
//! This module contains the lexer, the type model and the declaration parser.
//! The frontend turns source text into tokens and then into the global scope.

use crate::util::span::Position;
use thiserror::Error;
use tracing::debug;

pub mod config;
pub mod core;
pub mod output;

pub use config::{CompileConfig, OutputFormat, OutputStage};
pub use output::StageOutput;

use self::core::lexer::{self, LexError, TokenStream};
use self::core::parser::{self, GlobalScope, ParseError};

/// Compiler context
#[derive(Debug, Default)]
pub struct Compiler {
    config: CompileConfig,
}

impl Compiler {
    /// Create a new compiler
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_config(config: CompileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Lexical analysis only
    pub fn tokenize(
        &self,
        source: &str,
    ) -> Result<TokenStream, CompileError> {
        debug!("Tokenizing source code ({} bytes)", source.len());
        let tokens = lexer::tokenize(source)?;
        debug!("Tokenized into {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Lexical and syntax analysis
    pub fn parse(
        &self,
        source: &str,
    ) -> Result<GlobalScope, CompileError> {
        let tokens = self.tokenize(source)?;

        debug!("Starting parsing...");
        let scope = parser::parse(&tokens)?;
        debug!("Parsing successful, got {} declarations", scope.len());
        Ok(scope)
    }

    /// Run up to the configured stage and return its result
    pub fn compile(
        &self,
        source: &str,
    ) -> Result<StageOutput, CompileError> {
        debug!("Compiling up to the {} stage", self.config.stage);
        match self.config.stage {
            OutputStage::Lex => self.tokenize(source).map(StageOutput::Tokens),
            OutputStage::Parse => self.parse(source).map(StageOutput::Global),
        }
    }
}

/// Compilation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl CompileError {
    /// Source position the error is reported at
    pub fn position(&self) -> Position {
        match self {
            CompileError::Lex(e) => e.position(),
            CompileError::Parse(e) => e.position(),
        }
    }

    /// Name of the stage that failed
    pub fn stage(&self) -> OutputStage {
        match self {
            CompileError::Lex(_) => OutputStage::Lex,
            CompileError::Parse(_) => OutputStage::Parse,
        }
    }
}
