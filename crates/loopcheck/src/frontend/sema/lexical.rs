//! Passes that report what the scanner let through: `UNKNOWN` tokens and
//! operands written next to each other

use super::analyzer::SemanticAnalyzer;
use crate::common::{ErrorClass, Finding};
use crate::frontend::lexer::{juxtaposition, Token, TokenKind};

fn starts_with_digit(token: &Token) -> bool {
    token.text.starts_with(|c: char| c.is_ascii_digit())
}

impl SemanticAnalyzer<'_> {
    pub(super) fn malformed_numbers(&mut self) {
        let tokens = self.tokens;
        for token in tokens.iter().filter(|t| t.is(TokenKind::Unknown) && starts_with_digit(t)) {
            self.push(
                Finding::error(
                    ErrorClass::Lexical,
                    format!(
                        "Malformed number '{}' at line {}, column {}",
                        token.text, token.line, token.column
                    ),
                )
                .with_span(token.span()),
            );
        }
    }

    /// Adjacent operands on one line. Builtin words are exempt so that
    /// `console log` style sequences stay quiet.
    pub(super) fn juxtaposition(&mut self) {
        let tokens = self.tokens;
        for pair in tokens.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            if first.line != second.line {
                continue;
            }

            let exempt = match (first.kind, second.kind) {
                (TokenKind::Identifier, TokenKind::Number) => self.is_builtin(&first.text),
                (TokenKind::Identifier, TokenKind::Identifier) => {
                    self.is_builtin(&first.text) || self.is_builtin(&second.text)
                }
                _ => false,
            };
            if exempt {
                continue;
            }

            if let Some(description) = juxtaposition(first, second) {
                self.push(
                    Finding::error(
                        ErrorClass::Syntax,
                        format!("{description} without an operator on line {}", first.line),
                    )
                    .with_span(second.span()),
                );
            }
        }
    }

    /// Java: classify unknown tokens, catch `println` typos and reject
    /// arithmetic on string literals
    pub(super) fn malformed_tokens(&mut self) {
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Unknown => {
                    let message = if token.text.contains("print") {
                        format!("'{}' is misspelled - it must be 'println' at line {}", token.text, token.line)
                    } else if starts_with_digit(token) {
                        format!("Malformed number '{}' at line {}", token.text, token.line)
                    } else {
                        format!("Invalid token '{}' at line {}", token.text, token.line)
                    };
                    self.push(Finding::error(ErrorClass::Lexical, message).with_span(token.span()));
                }
                TokenKind::Identifier if token.text.contains("print") || token.text.contains("prnt") => {
                    let message = if token.text == "prntln" {
                        format!(
                            "'prntln' is misspelled - it must be 'println' (missing 'i') at line {}",
                            token.line
                        )
                    } else {
                        format!(
                            "'{}' looks like a typo - it must be exactly 'println' at line {}",
                            token.text, token.line
                        )
                    };
                    self.push(Finding::error(ErrorClass::Lexical, message).with_span(token.span()));
                }
                TokenKind::String => {
                    let Some(next) = self.token(i + 1) else {
                        continue;
                    };
                    if next.is(TokenKind::Operator) && next.text != "+" {
                        self.push(
                            Finding::error(
                                ErrorClass::Syntax,
                                format!(
                                    "Operator '{}' after a String is not allowed at line {} - use '+' for concatenation",
                                    next.text, next.line
                                ),
                            )
                            .with_span(next.span()),
                        );
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::frontend::sema::analyzer::tests::pass_lines;
    use crate::frontend::sema::Pass;
    use crate::frontend::Dialect;

    #[test]
    fn test_malformed_number() {
        assert_eq!(
            pass_lines("let a = 123abc;", Dialect::Js, Pass::MalformedNumbers),
            vec!["❌ ERROR LÉXICO: Malformed number '123abc' at line 1, column 9"]
        );
    }

    #[test]
    fn test_unknown_symbols_are_not_numbers() {
        assert!(pass_lines("a # b", Dialect::C, Pass::MalformedNumbers).is_empty());
    }

    #[test]
    fn test_juxtaposition_pairs() {
        assert_eq!(
            pass_lines("x = 2 y;\nz = 1 2;", Dialect::Js, Pass::Juxtaposition),
            vec![
                "❌ ERROR SINTÁCTICO: number '2' followed by identifier 'y' without an operator on line 1",
                "❌ ERROR SINTÁCTICO: two consecutive numbers '1' '2' without an operator on line 2",
            ]
        );
    }

    #[test]
    fn test_juxtaposition_skips_builtins_and_line_breaks() {
        assert!(pass_lines("length 3;", Dialect::Js, Pass::Juxtaposition).is_empty());
        assert!(pass_lines("a\nb", Dialect::C, Pass::Juxtaposition).is_empty());
        assert_eq!(
            pass_lines("int a b;", Dialect::C, Pass::Juxtaposition),
            vec!["❌ ERROR SINTÁCTICO: two consecutive identifiers 'a' 'b' without an operator on line 1"]
        );
    }

    #[test]
    fn test_java_malformed_tokens() {
        assert_eq!(
            pass_lines("prntln 7x # printline", Dialect::Java, Pass::MalformedTokens),
            vec![
                "❌ ERROR LÉXICO: 'prntln' is misspelled - it must be 'println' (missing 'i') at line 1",
                "❌ ERROR LÉXICO: Malformed number '7x' at line 1",
                "❌ ERROR LÉXICO: Invalid token '#' at line 1",
                "❌ ERROR LÉXICO: 'printline' looks like a typo - it must be exactly 'println' at line 1",
            ]
        );
    }

    #[test]
    fn test_java_operator_after_string() {
        assert_eq!(
            pass_lines("\"a\" - 1; \"b\" + 2;", Dialect::Java, Pass::MalformedTokens),
            vec!["❌ ERROR SINTÁCTICO: Operator '-' after a String is not allowed at line 1 - use '+' for concatenation"]
        );
    }
}
