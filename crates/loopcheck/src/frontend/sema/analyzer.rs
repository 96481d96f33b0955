//! Pass driver and the declaration scan

use super::symbols::{SymbolTable, VariableInfo};
use super::{Pass, Semantics};
use crate::common::Finding;
use crate::frontend::lexer::{Token, TokenKind};

/// Runs a dialect's semantic passes over one token stream
pub struct SemanticAnalyzer<'t> {
    pub(super) tokens: &'t [Token],
    pub(super) semantics: &'static Semantics,
    pub(super) symbols: SymbolTable,
    findings: Vec<Finding>,
}

impl<'t> SemanticAnalyzer<'t> {
    pub fn new(tokens: &'t [Token], semantics: &'static Semantics) -> Self {
        Self {
            tokens,
            semantics,
            symbols: SymbolTable::new(),
            findings: Vec::new(),
        }
    }

    /// Run every pass in order and return the findings
    pub fn analyze(mut self) -> Vec<Finding> {
        let passes = self.semantics.passes;
        for &pass in passes {
            self.run(pass);
        }
        self.findings
    }

    /// Symbol table built so far
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    fn run(&mut self, pass: Pass) {
        match pass {
            Pass::Declarations => self.declarations(),
            Pass::SelfReference => self.self_reference(),
            Pass::UseBeforeDeclaration => self.use_before_declaration(),
            Pass::ForLoop => self.for_loop(),
            Pass::DoWhile => self.do_while(),
            Pass::Undeclared => self.undeclared(),
            Pass::Unused => self.unused(),
            Pass::InfiniteLoop => self.infinite_loop(),
            Pass::MalformedNumbers => self.malformed_numbers(),
            Pass::Juxtaposition => self.juxtaposition(),
            Pass::ClassSkeleton => self.class_skeleton(),
            Pass::IfConditions => self.if_conditions(),
            Pass::PrintlnCalls => self.println_calls(),
            Pass::TypeSummary => self.type_summary(),
            Pass::MalformedTokens => self.malformed_tokens(),
        }
    }

    pub(super) fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub(super) fn token(&self, index: usize) -> Option<&'t Token> {
        self.tokens.get(index)
    }

    /// Kind of the token at `index`, if any
    pub(super) fn kind_at(&self, index: usize) -> Option<TokenKind> {
        self.token(index).map(|token| token.kind)
    }

    pub(super) fn is_builtin(&self, word: &str) -> bool {
        self.semantics.is_builtin(word)
    }

    /// Find `(keyword | type) name [: type] [= value]` and record each one.
    ///
    /// Uses its own cursor; after a declaration it resumes past the
    /// initializer.
    fn declarations(&mut self) {
        let tokens = self.tokens;
        let rule = self.semantics.declaration;
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = &tokens[cursor];
            let Some(name) = tokens.get(cursor + 1).filter(|next| {
                rule.starts_with(token.kind) && next.is(TokenKind::Identifier)
            }) else {
                cursor += 1;
                continue;
            };

            let mut declared_type = rule.naming.type_name(&token.text);
            let mut next = cursor + 2;

            if rule.annotations && self.kind_at(next) == Some(TokenKind::Colon) {
                next += 1;
                if let Some(annotation) = self
                    .token(next)
                    .filter(|t| matches!(t.kind, TokenKind::Type | TokenKind::Identifier))
                {
                    declared_type = annotation.text.clone();
                    next += 1;
                }
            }

            let mut initial_value = String::new();
            if self.kind_at(next) == Some(TokenKind::Assignment) {
                next += 1;
                if let Some(value) = self.token(next) {
                    if !rule.checked || super::java::is_checked_value(value) {
                        initial_value = value.text.clone();
                    }
                }
            }

            if rule.checked {
                self.check_assignment(&declared_type, &initial_value, token.line);
            }

            self.push(
                Finding::info(if rule.checked {
                    format!(
                        "Variable '{}' declared as '{}' with value '{}' at line {}",
                        name.text, declared_type, initial_value, token.line
                    )
                } else {
                    format!(
                        "Variable '{}' declared as type '{}' with initial value '{}' at line {}",
                        name.text, declared_type, initial_value, token.line
                    )
                })
                .with_span(name.span()),
            );

            self.symbols.declare(
                VariableInfo {
                    name: name.text.clone(),
                    declared_type,
                    initial_value,
                    line: token.line,
                    column: token.column,
                },
                name.offset,
            );

            cursor = next + 1;
        }
    }
}

/// Run the passes of `semantics` over `tokens`
pub fn analyze(tokens: &[Token], semantics: &'static Semantics) -> Vec<Finding> {
    SemanticAnalyzer::new(tokens, semantics).analyze()
}

#[cfg(test)]
pub(super) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::frontend::lexer::tokenize;
    use crate::frontend::Dialect;

    /// Rendered findings for `source`
    pub(in crate::frontend::sema) fn lines(source: &str, dialect: Dialect) -> Vec<String> {
        let spec = dialect.spec();
        let tokens = tokenize(source, spec);
        analyze(&tokens, &spec.semantics)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Rendered findings of a single pass, after the declaration scan
    pub(in crate::frontend::sema) fn pass_lines(source: &str, dialect: Dialect, pass: Pass) -> Vec<String> {
        let spec = dialect.spec();
        let tokens = tokenize(source, spec);
        let mut analyzer = SemanticAnalyzer::new(&tokens, &spec.semantics);
        if pass != Pass::Declarations {
            analyzer.run(Pass::Declarations);
            analyzer.findings.clear();
        }
        analyzer.run(pass);
        analyzer.findings.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_js_declaration_types() {
        assert_eq!(
            pass_lines("let a = 1; const b = 'x'; var c", Dialect::Js, Pass::Declarations),
            vec![
                "Variable 'a' declared as type 'variable' with initial value '1' at line 1",
                "Variable 'b' declared as type 'constant' with initial value ''x'' at line 1",
                "Variable 'c' declared as type 'variable' with initial value '' at line 1",
            ]
        );
    }

    #[test]
    fn test_js_annotation_overrides_type() {
        assert_eq!(
            pass_lines("let n: number = 4;", Dialect::Js, Pass::Declarations),
            vec!["Variable 'n' declared as type 'number' with initial value '4' at line 1"]
        );
    }

    #[test]
    fn test_c_declaration_keeps_type_name() {
        assert_eq!(
            pass_lines("float ratio = 0.5;", Dialect::C, Pass::Declarations),
            vec!["Variable 'ratio' declared as type 'float' with initial value '0.5' at line 1"]
        );
    }

    #[test]
    fn test_redeclaration_overwrites() {
        let spec = Dialect::C.spec();
        let tokens = tokenize("int a = 1;\nfloat a = 2;", spec);
        let mut analyzer = SemanticAnalyzer::new(&tokens, &spec.semantics);
        analyzer.run(Pass::Declarations);
        assert_eq!(analyzer.symbols().len(), 1);
        assert_eq!(analyzer.symbols().type_of("a"), Some("float"));
    }

    #[test]
    fn test_passes_run_in_dialect_order() {
        let output = lines("let y = 1;", Dialect::Js);
        assert_eq!(
            output,
            vec![
                "Variable 'y' declared as type 'variable' with initial value '1' at line 1",
                "⚠️ Variable 'y' declared but never used",
            ]
        );
    }
}
