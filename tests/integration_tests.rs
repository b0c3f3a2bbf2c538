//! End-to-end tests: source text in, rendered CST or diagnostic out.

use std::fs;

use slate::cli::{commands, ExitCode};
use slate_core::lang::tokens::TokenKind;

#[test]
fn test_enum_renders_as_a_graph_dump() {
    let tree = slate_syntax::parser::parse(b"enum Color { RED, GREEN }").unwrap();
    insta::assert_snapshot!(tree.to_string().trim_end(), @r#"
    0 [label="ROOT"]
    0 -> 1
    1 [label="Enum: enum"]
    1 -> 2
    1 -> 3
    1 -> 4
    2 [label="Identifier: Color"]
    3 [label="Identifier: RED"]
    4 [label="Identifier: GREEN"]
    "#);
}

#[test]
fn test_missing_struct_name_diagnostic_message() {
    let err = slate_syntax::parser::parse(b"struct { }").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"unexpected token at 0:7: expected one of identifier, 'trait', 'enum', found "{ }""#
    );
}

#[test]
fn test_full_program_parses() {
    let source = br#"
struct Vec2 {
    f32 x;
    f32 y;
}

trait Shape : Object {
    f32 area();
}

enum Mode { IDLE, RUNNING = 2 }

f32 length(Vec2* v) {
    return sqrt(v.x * v.x + v.y * v.y);
}

i32 main() {
    total = 0;
    for (i32 i = 0; i < 10; i = i + 1;) {
        total = total + i;
    }
    do { step(); } while (total < 100);
    if (total == 45) { return 0; } else { return 1; }
}
"#;
    let tree = slate_syntax::parser::parse(source).unwrap();
    let kinds: Vec<TokenKind> = tree
        .children()
        .iter()
        .map(|node| node.token().unwrap().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Struct,
            TokenKind::Trait,
            TokenKind::Enum,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );

    let rendered = tree.to_string();
    assert!(rendered.contains("[label=\"Struct: struct\"]"));
    assert!(rendered.contains("[label=\"Identifier: main\"]"));
    assert!(rendered.contains("[label=\"For: for\"]"));
}

#[test]
fn test_cli_parse_file_round_trip() {
    let path = std::env::temp_dir().join("slate_cli_round_trip.slate");
    fs::write(&path, "struct Point { i32 x; i32 y; }").unwrap();
    let result = commands::parse_file(&path);
    fs::remove_file(&path).ok();
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_cli_dump_tokens() {
    let path = std::env::temp_dir().join("slate_cli_tokens.slate");
    fs::write(&path, "total >>= 2;").unwrap();
    let result = commands::dump_tokens(&path);
    fs::remove_file(&path).ok();
    assert_eq!(result.unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_cli_reports_missing_file() {
    let path = std::env::temp_dir().join("slate_cli_no_such_file.slate");
    let err = commands::parse_file(&path).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("cannot read"));
}

#[test]
fn test_cli_reports_syntax_errors_non_zero() {
    let path = std::env::temp_dir().join("slate_cli_bad_source.slate");
    fs::write(&path, "struct { }").unwrap();
    let err = commands::parse_file(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(!err.message.is_empty());
}
