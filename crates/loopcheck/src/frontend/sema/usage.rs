//! Variable usage passes

use std::collections::{HashMap, HashSet};

use super::analyzer::SemanticAnalyzer;
use crate::common::{ErrorClass, Finding};
use crate::frontend::lexer::{Token, TokenKind};

impl<'t> SemanticAnalyzer<'t> {
    /// Identifiers that are not builtins, first occurrence of each name
    fn first_uses(&self) -> Vec<&'t Token> {
        let tokens = self.tokens;
        let mut seen = HashSet::new();
        let mut uses = Vec::new();
        for token in tokens.iter().filter(|t| t.is(TokenKind::Identifier)) {
            if !self.is_builtin(&token.text) && seen.insert(token.text.as_str()) {
                uses.push(token);
            }
        }
        uses
    }

    pub(super) fn undeclared(&mut self) {
        for token in self.first_uses() {
            if !self.symbols.contains(&token.text) {
                self.push(
                    Finding::error(
                        ErrorClass::Semantic,
                        format!("Variable '{}' used without being declared (line {})", token.text, token.line),
                    )
                    .with_span(token.span()),
                );
            }
        }
    }

    /// A declared name counts as used when it appears anywhere except
    /// where it is declared
    pub(super) fn unused(&mut self) {
        let tokens = self.tokens;
        let findings: Vec<Finding> = self
            .symbols
            .iter()
            .map(|variable| {
                let used = tokens.iter().any(|t| {
                    t.is(TokenKind::Identifier)
                        && t.text == variable.name
                        && !self.symbols.is_declaration_site(t.offset)
                });
                if used {
                    Finding::confirmation(format!("Variable '{}' declared and used correctly", variable.name))
                } else {
                    Finding::warning(format!("Variable '{}' declared but never used", variable.name))
                }
            })
            .collect();

        for finding in findings {
            self.push(finding);
        }
    }

    /// `Type name = name`
    pub(super) fn self_reference(&mut self) {
        let tokens = self.tokens;
        for window in tokens.windows(4) {
            let [ty, name, assign, value] = window else {
                continue;
            };
            if ty.is(TokenKind::Type)
                && name.is(TokenKind::Identifier)
                && assign.is(TokenKind::Assignment)
                && value.is(TokenKind::Identifier)
                && name.text == value.text
            {
                self.push(
                    Finding::error(
                        ErrorClass::Semantic,
                        format!(
                            "Variable '{}' is initialised with itself at line {} - this causes undefined behaviour",
                            name.text, ty.line
                        ),
                    )
                    .with_span(value.span()),
                );
            }
        }
    }

    /// Any use on a line before the name's first declaration
    pub(super) fn use_before_declaration(&mut self) {
        let tokens = self.tokens;
        let mut declared_at: HashMap<&str, usize> = HashMap::new();
        for pair in tokens.windows(2) {
            if pair[0].is(TokenKind::Type) && pair[1].is(TokenKind::Identifier) {
                declared_at.entry(pair[1].text.as_str()).or_insert(pair[0].line);
            }
        }

        for token in tokens.iter().filter(|t| t.is(TokenKind::Identifier)) {
            if self.is_builtin(&token.text) {
                continue;
            }
            if let Some(&line) = declared_at.get(token.text.as_str()) {
                if token.line < line {
                    self.push(
                        Finding::error(
                            ErrorClass::Semantic,
                            format!(
                                "Variable '{}' used at line {} before being declared at line {line}",
                                token.text, token.line
                            ),
                        )
                        .with_span(token.span()),
                    );
                }
            }
        }
    }
}
