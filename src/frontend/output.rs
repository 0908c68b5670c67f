//! Stage output printers
//!
//! Read-only views of the lexer and parser results, either as text records
//! or as JSON.

use crate::frontend::config::OutputFormat;
use crate::frontend::core::lexer::TokenStream;
use crate::frontend::core::parser::GlobalScope;
use std::io::{self, Write};

/// One `Token { ... }` record per token
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &TokenStream,
) -> io::Result<()> {
    for token in tokens {
        write!(
            out,
            "Token {{\n\tkind - {}\n\tcontents - {}\n\tline - {}\n\tchar - {}\n}}\n",
            token.kind,
            token.text.as_deref().unwrap_or("(empty)"),
            token.line(),
            token.column()
        )?;
    }
    Ok(())
}

/// `Global { ... }` holding one `Declaration { ... }` record per declaration
pub fn write_global_scope<W: Write>(
    out: &mut W,
    scope: &GlobalScope,
) -> io::Result<()> {
    write!(out, "Global {{")?;
    for decl in scope {
        let ty = decl
            .ty
            .as_ref()
            .map_or_else(|| "(to infer)".to_string(), |ty| ty.to_string());
        write!(
            out,
            "\n\tDeclaration {{\n\t\tsymbol - {}\n\t\tis const - {}\n\t\ttype - {}\n\t\tline - {}\n\t\tchar - {}\n\t}}",
            decl.symbol,
            u8::from(decl.is_const),
            ty,
            decl.line(),
            decl.column()
        )?;
    }
    writeln!(out, "\n}}")
}

pub fn write_tokens_json<W: Write>(
    out: &mut W,
    tokens: &TokenStream,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)
}

pub fn write_global_scope_json<W: Write>(
    out: &mut W,
    scope: &GlobalScope,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, scope)?;
    writeln!(out)
}

/// Result of the last stage that ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutput {
    Tokens(TokenStream),
    Global(GlobalScope),
}

impl StageOutput {
    pub fn write<W: Write>(
        &self,
        out: &mut W,
        format: OutputFormat,
    ) -> io::Result<()> {
        match (self, format) {
            (StageOutput::Tokens(tokens), OutputFormat::Text) => write_tokens(out, tokens),
            (StageOutput::Tokens(tokens), OutputFormat::Json) => write_tokens_json(out, tokens),
            (StageOutput::Global(scope), OutputFormat::Text) => write_global_scope(out, scope),
            (StageOutput::Global(scope), OutputFormat::Json) => {
                write_global_scope_json(out, scope)
            }
        }
    }

    /// Render into a string
    pub fn render(
        &self,
        format: OutputFormat,
    ) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, format)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
