//! Property-based tests for the scanners.
//!
//! Whatever the input, every dialect must produce tokens whose text is the
//! source slice at their offset, in increasing offset order, with line and
//! column agreeing with the offset. The gaps between tokens hold only
//! whitespace, plus `//` and `/* */` comments for C and Java.

use loopcheck::frontend::lexer::tokenize;
use loopcheck::frontend::Dialect;
use proptest::prelude::*;

/// Printable ASCII plus newlines and tabs
fn source() -> impl Strategy<Value = String> {
    "[ -~\n\t]{0,120}"
}

/// Inputs built from loop-like fragments, so keywords and operators show up often
fn loopish_source() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("for".to_string()),
        Just("do".to_string()),
        Just("while".to_string()),
        Just("let".to_string()),
        Just("int".to_string()),
        Just("i++".to_string()),
        Just("<=".to_string()),
        Just("===".to_string()),
        Just("+=".to_string()),
        Just(";".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("\n".to_string()),
        "[a-z_][a-z0-9_]{0,6}",
        "[0-9]{1,4}[a-z]{0,2}",
        "\"[a-z ]{0,5}\"?",
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.join(" "))
}

/// Source text sprinkled with comments, some left unterminated
fn commented_source() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[ -~\n\t]{0,12}",
        "//[ -~]{0,10}\n?",
        "/\\*[ -~\n]{0,10}(\\*/)?",
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

/// What is left of a gap once comments are cut out
fn without_comments(gap: &str) -> String {
    let mut rest = gap;
    let mut kept = String::new();
    while !rest.is_empty() {
        if let Some(comment) = rest.strip_prefix("//") {
            rest = comment.find('\n').map_or("", |end| &comment[end..]);
        } else if let Some(comment) = rest.strip_prefix("/*") {
            rest = comment.find("*/").map_or("", |end| &comment[end + 2..]);
        } else {
            let mut chars = rest.chars();
            kept.extend(chars.next());
            rest = chars.as_str();
        }
    }
    kept
}

fn check_gaps(source: &str, dialect: Dialect) -> Result<(), TestCaseError> {
    let tokens = tokenize(source, dialect.spec());
    let mut cursor = 0;
    for token in &tokens {
        let gap = &source[cursor..token.offset];
        prop_assert!(without_comments(gap).chars().all(char::is_whitespace), "gap {:?}", gap);
        cursor = token.offset + token.text.len();
    }
    let tail = &source[cursor..];
    prop_assert!(without_comments(tail).chars().all(char::is_whitespace), "tail {:?}", tail);
    Ok(())
}

fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = source[line_start..offset].chars().count() + 1;
    (line, column)
}

fn check_positions(source: &str, dialect: Dialect) -> Result<(), TestCaseError> {
    let tokens = tokenize(source, dialect.spec());
    let mut previous_end = 0;

    for token in &tokens {
        prop_assert!(token.offset >= previous_end, "overlapping token {:?}", token);
        prop_assert_eq!(&source[token.offset..token.offset + token.text.len()], token.text.as_str());
        prop_assert_eq!((token.line, token.column), line_and_column(source, token.offset));
        prop_assert!(!token.text.is_empty());
        previous_end = token.offset + token.text.len();
    }
    Ok(())
}

proptest! {
    #[test]
    fn tokens_match_source_slices(src in source()) {
        for dialect in Dialect::ALL {
            check_positions(&src, dialect)?;
        }
    }

    #[test]
    fn loopish_tokens_match_source_slices(src in loopish_source()) {
        for dialect in Dialect::ALL {
            check_positions(&src, dialect)?;
        }
    }

    #[test]
    fn js_gaps_are_whitespace(src in source()) {
        let tokens = tokenize(&src, Dialect::Js.spec());
        let mut cursor = 0;
        for token in &tokens {
            prop_assert!(src[cursor..token.offset].chars().all(char::is_whitespace));
            cursor = token.offset + token.text.len();
        }
        prop_assert!(src[cursor..].chars().all(char::is_whitespace));
    }

    #[test]
    fn c_and_java_gaps_are_whitespace_or_comments(src in commented_source()) {
        for dialect in [Dialect::C, Dialect::Java] {
            check_gaps(&src, dialect)?;
        }
    }

    #[test]
    fn c_and_java_gaps_in_plain_text(src in source()) {
        for dialect in [Dialect::C, Dialect::Java] {
            check_gaps(&src, dialect)?;
        }
    }

    #[test]
    fn validity_follows_error_findings(src in loopish_source()) {
        for dialect in Dialect::ALL {
            let analysis = loopcheck::analyze_source(&src, dialect);
            let errors = analysis.findings.iter().any(|finding| finding.is_error());
            prop_assert_eq!(analysis.is_valid(), analysis.syntax_errors.is_empty() && !errors);
        }
    }
}
