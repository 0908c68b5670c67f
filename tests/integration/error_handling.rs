//! Error handling integration tests
//!
//! Every failure aborts its stage and carries a source position.

use decrout::{compile, CompileError, Compiler, LexError, ParseError};

#[test]
fn test_glued_keyword_is_lex_error() {
    let err = compile("decl2 x;").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Lex(LexError::ImproperTermination { .. })
    ));
    assert!(compile("decl _2;").is_ok());
}

#[test]
fn test_unterminated_string_produces_no_tokens() {
    let err = Compiler::new().tokenize("decl s = \"abc").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Lex(LexError::UnterminatedLiteral { .. })
    ));
}

#[test]
fn test_error_positions_on_later_lines() {
    let err = compile("decl a: u8;\n\n  decl b: u9;").unwrap_err();
    assert!(matches!(err, CompileError::Parse(ParseError::UnknownType { .. })));
    assert_eq!((err.position().line, err.position().column), (3, 11));
}

#[test]
fn test_missing_semicolon_at_end() {
    let err = compile("decl a: u8").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_wrong_statement_start() {
    let err = compile("rt: u8;").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::ExpectedDeclaration { .. })
    ));
}

#[test]
fn test_anyhow_keeps_compile_error() {
    let err: anyhow::Error = compile("decl x: ;").unwrap_err().into();
    let inner = err.downcast_ref::<CompileError>().unwrap();
    assert_eq!(inner.position().column, 9);
}
