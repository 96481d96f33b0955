//! End-to-end checks through the public pipeline

use loopcheck::frontend::lexer::{tokenize, TokenKind};
use loopcheck::{analyze_source, Dialect};
use pretty_assertions::assert_eq;

fn kinds(source: &str, dialect: Dialect) -> Vec<TokenKind> {
    tokenize(source, dialect.spec()).iter().map(|token| token.kind).collect()
}

#[test]
fn malformed_number_is_one_unknown_token() {
    for dialect in Dialect::ALL {
        let tokens = tokenize("123abc", dialect.spec());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "123abc");
    }
}

#[test]
fn loop_keywords_are_classified() {
    assert_eq!(kinds("for", Dialect::Js), vec![TokenKind::For]);
    assert_eq!(kinds("for", Dialect::C), vec![TokenKind::For]);
    assert_eq!(kinds("do while", Dialect::Js), vec![TokenKind::Do, TokenKind::While]);
}

#[test]
fn reference_js_loop_is_valid() {
    let source = "let total = 0;\nfor (let i = 0; i < 10; i++) {\n  total += i;\n  console.log(total);\n}\n";
    let analysis = analyze_source(source, Dialect::Js);

    assert!(analysis.syntax_messages().is_empty(), "{:?}", analysis.syntax_messages());
    assert!(analysis.is_valid(), "{:#?}", analysis.semantic_info());
    assert!(analysis
        .semantic_info()
        .contains(&"The loop will run approximately 11 iterations".to_string()));
}

#[test]
fn condition_variable_mismatch() {
    let analysis = analyze_source("for (let i = 0; j < 5; i++) {}", Dialect::Js);
    assert!(analysis
        .semantic_info()
        .contains(&"❌ ERROR SEMÁNTICO: Condition variable 'j' does not match control variable 'i'".to_string()));
    assert!(!analysis.is_valid());
}

#[test]
fn undeclared_assignment() {
    let analysis = analyze_source("x = 5;", Dialect::Js);
    assert!(analysis
        .semantic_info()
        .contains(&"❌ ERROR SEMÁNTICO: Variable 'x' used without being declared (line 1)".to_string()));
    assert!(!analysis.is_valid());
}

#[test]
fn unused_declaration_is_only_a_warning() {
    let analysis = analyze_source("let y = 1;", Dialect::Js);
    assert!(analysis
        .semantic_info()
        .contains(&"⚠️ Variable 'y' declared but never used".to_string()));
    assert!(analysis.is_valid());
}

#[test]
fn c_accumulating_loop() {
    let source = "int sum = 0;\nfor (int i = 0; i < 4; i++) {\n  sum = sum + i;\n}\n";
    let analysis = analyze_source(source, Dialect::C);
    assert!(analysis.syntax_messages().is_empty(), "{:?}", analysis.syntax_messages());
    assert!(analysis.is_valid(), "{:#?}", analysis.semantic_info());
}

#[test]
fn c_self_initialisation() {
    let analysis = analyze_source("int a = a;", Dialect::C);
    assert!(analysis.semantic_info().iter().any(|line| line.contains("initialised with itself")));
    assert!(!analysis.is_valid());
}

fn java_program(body: &str) -> String {
    format!("public class Main {{\n  public static void main(String[] args) {{\n{body}\n  }}\n}}\n")
}

#[test]
fn java_println_rejects_two_arguments() {
    let analysis = analyze_source(&java_program("System.out.println(\"a\", \"b\");"), Dialect::Java);
    assert!(analysis.semantic_info().iter().any(|line| {
        line.starts_with("❌ ERROR SEMÁNTICO: System.out.println() accepts only ONE argument")
    }));
    assert!(!analysis.is_valid());
}

#[test]
fn java_println_accepts_concatenation() {
    let analysis = analyze_source(&java_program("System.out.println(\"a\" + \"b\");"), Dialect::Java);
    assert!(analysis.syntax_messages().is_empty(), "{:?}", analysis.syntax_messages());
    assert!(analysis
        .semantic_info()
        .contains(&"✓ Valid string concatenation - Java joins elements with '+'".to_string()));
    assert!(analysis.is_valid(), "{:#?}", analysis.semantic_info());
}

#[test]
fn java_full_program() {
    let body = "    int count = 3;\n    String label = \"count\";\n    if (count > 2) {\n      System.out.println(label + count);\n    }";
    let analysis = analyze_source(&java_program(body), Dialect::Java);
    assert!(analysis.syntax_messages().is_empty(), "{:?}", analysis.syntax_messages());
    assert!(analysis.is_valid(), "{:#?}", analysis.semantic_info());
    assert!(analysis
        .semantic_info()
        .contains(&"📊 Type summary: 1 int variables, 1 String variables".to_string()));
}

#[test]
fn warnings_alone_keep_validity() {
    let analysis = analyze_source("let n = 0;\nwhile (n < 3) {}", Dialect::Js);
    assert!(analysis.semantic_info().iter().any(|line| line.starts_with("⚠️ POSSIBLE INFINITE LOOP")));
    assert!(analysis.is_valid());
}

#[test]
fn java_system_prefixed_variable_is_valid() {
    let body = "    int systemCount = 3;\n    System.out.println(systemCount);";
    let analysis = analyze_source(&java_program(body), Dialect::Java);
    assert!(analysis.syntax_messages().is_empty(), "{:?}", analysis.syntax_messages());
    assert!(analysis.is_valid(), "{:#?}", analysis.semantic_info());
}

#[test]
fn loop_bound_at_i64_max_does_not_overflow() {
    let analysis = analyze_source("for(let i=0;i<9223372036854775807;i++){}", Dialect::Js);
    assert!(analysis.syntax_messages().is_empty(), "{:?}", analysis.syntax_messages());
    assert!(!analysis.semantic_info().iter().any(|line| line.contains("iterations")));
}
