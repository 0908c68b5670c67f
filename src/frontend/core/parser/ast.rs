//! Abstract Syntax Tree types
//!
//! Only the declaration level exists so far: a program is a flat list of
//! global declarations, each with an optional type annotation and an
//! unparsed value body.

use crate::frontend::core::lexer::tokens::Token;
use crate::frontend::core::type_system::TypeInfo;
use crate::util::span::Span;
use serde::Serialize;

/// Global declaration, `decl x: T = ...;` or `const x: T;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// From the `decl`/`const` keyword to the closing `;`
    pub position: Span,
    pub is_const: bool,
    pub symbol: String,
    /// `None` when the type is left to be inferred
    #[serde(rename = "type")]
    pub ty: Option<TypeInfo>,
    /// Raw tokens between `=` and `;`; `None` when no value was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Token>>,
}

impl Declaration {
    /// Line of the introducing keyword
    pub fn line(&self) -> usize {
        self.position.start.line
    }

    /// Column of the introducing keyword
    pub fn column(&self) -> usize {
        self.position.start.column
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// Root of the tree: every top-level declaration in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalScope {
    pub decls: Vec<Declaration>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        decl: Declaration,
    ) {
        self.decls.push(decl);
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Declaration> {
        self.decls.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.decls.iter()
    }

    /// First declaration of `symbol`
    pub fn find(
        &self,
        symbol: &str,
    ) -> Option<&Declaration> {
        self.decls.iter().find(|d| d.symbol == symbol)
    }
}

impl<'a> IntoIterator for &'a GlobalScope {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.decls.iter()
    }
}
