//! Core algorithm layer
//! Lexer, type model and parser, each in its own module

pub mod lexer;
pub mod parser;
pub mod type_system;

// Re-export commonly used items
pub use lexer::tokenize;
pub use parser::{parse, parse_type_tokens};
