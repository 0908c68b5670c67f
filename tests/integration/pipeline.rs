//! End-to-end tests from source text to the global scope

use decrout::{
    compile, compile_file, parse, parse_type_tokens, tokenize, CompileConfig, OutputFormat,
    OutputStage, StageOutput, TokenKind, TypeInfo,
};
use std::fs;
use tempfile::TempDir;

const PROGRAM: &str = r#"# globals
const width: u16;
const height: u16 = 0x1E0;

decl buffer: >u8;
decl counter = 0;

# callbacks
decl on_draw: >rt [ >u8, u16, u16 ]: void;
decl main: rt: i32 = { return 0 };
"#;

#[test]
fn test_program_declarations() {
    let scope = compile(PROGRAM).unwrap();
    let symbols: Vec<&str> = scope.iter().map(|d| d.symbol.as_str()).collect();
    assert_eq!(
        symbols,
        vec!["width", "height", "buffer", "counter", "on_draw", "main"]
    );

    let height = scope.find("height").unwrap();
    assert!(height.is_const);
    assert_eq!((height.line(), height.column()), (3, 1));
    assert_eq!(height.value.as_ref().unwrap()[0].int_value(), Some(480));

    let counter = scope.find("counter").unwrap();
    assert!(counter.ty.is_none());
    assert!(!counter.is_const);

    let on_draw = scope.find("on_draw").unwrap().ty.as_ref().unwrap();
    assert_eq!(
        on_draw.pointee().unwrap().to_string(),
        "rt [ >u8, u16, u16 ]: void"
    );
}

#[test]
fn test_sample_program_tokens() {
    let tokens = tokenize("decl x: u32;").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![
            TokenKind::KwDecl,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_type_round_trip() {
    let rendered = "rt [ u32, >u32 ]: bool";
    let ty = parse_type_tokens(&tokenize(rendered).unwrap()).unwrap();
    assert_eq!(ty.to_string(), rendered);

    let again = parse_type_tokens(&tokenize(&ty.to_string()).unwrap()).unwrap();
    assert_eq!(again, ty);
}

#[test]
fn test_parse_reuses_token_stream() {
    let tokens = tokenize("const pi: u32; decl y;").unwrap();
    let first = parse(&tokens).unwrap();
    let second = parse(&tokens).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get(0).unwrap().ty, TypeInfo::builtin("u32"));
}

#[test]
fn test_compile_file_stages() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("program.dcrt");
    fs::write(&path, PROGRAM).unwrap();

    let lexed = compile_file(&path, &CompileConfig::new().with_stage(OutputStage::Lex)).unwrap();
    assert!(matches!(lexed, StageOutput::Tokens(ref t) if t.len() > 20));

    let parsed = compile_file(&path, &CompileConfig::new()).unwrap();
    let text = parsed.render(OutputFormat::Text).unwrap();
    assert!(text.starts_with("Global {\n\tDeclaration {\n\t\tsymbol - width\n"));
    assert!(text.contains("\t\ttype - (rt [ >u8, u16, u16 ]: void)>\n"));
    assert!(text.contains("\t\ttype - (to infer)\n"));
}

#[test]
fn test_compile_file_missing() {
    let dir = TempDir::new().unwrap();
    let err = compile_file(&dir.path().join("absent.dcrt"), &CompileConfig::new()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read file"));
}
