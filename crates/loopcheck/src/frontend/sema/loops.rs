//! Loop structure passes: `for`, `do-while` and the infinite-loop heuristic
//!
//! These scan the whole stream rather than one loop at a time, so a
//! program with several loops gets the state of the last one seen.

use super::analyzer::SemanticAnalyzer;
use crate::common::{ErrorClass, Finding};
use crate::frontend::lexer::TokenKind;

/// Loop variables collected by the `for` pass
#[derive(Debug, Default)]
struct ForLoopState {
    found: bool,
    control: Option<String>,
    condition: Option<String>,
    increment: Option<String>,
    start: Option<i64>,
    end: Option<i64>,
    has_condition: bool,
}

/// Inclusive count from `start` to `end`, zero when the range is empty and
/// `None` when the count does not fit in an `i64`
fn iterations(start: i64, end: i64) -> Option<i64> {
    if start <= end {
        end.checked_sub(start)?.checked_add(1)
    } else {
        Some(0)
    }
}

impl SemanticAnalyzer<'_> {
    pub(super) fn for_loop(&mut self) {
        let tokens = self.tokens;
        let rule = self.semantics.declaration;
        let mut state = ForLoopState::default();

        for (i, token) in tokens.iter().enumerate() {
            if token.is(TokenKind::For) {
                state.found = true;
                self.push(Finding::info("'for' loop detected - analysing structure").with_span(token.span()));
            }
            if !state.found {
                continue;
            }

            let previous = i.checked_sub(1).and_then(|p| self.token(p));
            let next = self.token(i + 1);

            match token.kind {
                TokenKind::Identifier if previous.is_some_and(|p| rule.starts_with(p.kind)) => {
                    state.control = Some(token.text.clone());
                    let start = next
                        .filter(|n| n.is(TokenKind::Assignment))
                        .and_then(|_| self.token(i + 2))
                        .and_then(|value| value.text.parse::<i64>().ok());
                    if let Some(start) = start {
                        state.start = Some(start);
                        self.push(Finding::info(format!(
                            "Control variable '{}' initialised with value {start}",
                            token.text
                        )));
                    }
                }
                TokenKind::Comparison => {
                    let (Some(previous), Some(next)) = (previous, next) else {
                        continue;
                    };
                    state.has_condition = true;
                    if previous.is(TokenKind::Identifier) && next.is(TokenKind::Number) {
                        state.condition = Some(previous.text.clone());
                        if let Ok(end) = next.text.parse::<i64>() {
                            state.end = Some(end);
                            self.push(Finding::info(format!(
                                "Condition: '{} {} {end}' - control variable compared against {end}",
                                previous.text, token.text
                            )));
                            if let Some(start) = state.start {
                                self.check_condition_coherence(&token.text, start, end);
                            }
                        }
                    }
                }
                TokenKind::Increment => {
                    let variable = previous
                        .filter(|p| p.is(TokenKind::Identifier))
                        .or_else(|| next.filter(|n| n.is(TokenKind::Identifier)))
                        .map(|t| t.text.clone());
                    self.push(Finding::info(format!(
                        "Increment detected for variable '{}' ({})",
                        variable.as_deref().unwrap_or_default(),
                        token.text
                    )));
                    if variable.is_some() {
                        state.increment = variable;
                    }
                }
                _ => {}
            }
        }

        if let Some(control) = state.control.as_deref() {
            self.check_loop_variables(control, state.condition.as_deref(), state.increment.as_deref());
        }

        if state.has_condition {
            if let (Some(start), Some(end)) = (state.start, state.end) {
                if let Some(count) = iterations(start, end).filter(|&count| count > 0) {
                    self.push(Finding::info(format!("The loop will run approximately {count} iterations")));
                }
            }
        }
    }

    fn check_condition_coherence(&mut self, operator: &str, start: i64, end: i64) {
        let never_true = match operator {
            "<" | "<=" if start > end => Some("start value greater than end value"),
            ">" | ">=" if start < end => Some("start value less than end value"),
            _ => None,
        };
        if let Some(reason) = never_true {
            self.push(Finding::warning(format!(
                "WARNING: the loop condition may never be true ({reason})"
            )));
        }
    }

    fn check_loop_variables(&mut self, control: &str, condition: Option<&str>, increment: Option<&str>) {
        match condition {
            Some(condition) if condition != control => self.push(Finding::error(
                ErrorClass::Semantic,
                format!("Condition variable '{condition}' does not match control variable '{control}'"),
            )),
            Some(condition) => self.push(Finding::confirmation(format!(
                "Condition variable '{condition}' matches the control variable"
            ))),
            None => {}
        }

        match increment {
            Some(increment) if increment != control => self.push(Finding::error(
                ErrorClass::Semantic,
                format!("Increment variable '{increment}' does not match control variable '{control}'"),
            )),
            Some(increment) => self.push(Finding::confirmation(format!(
                "Increment variable '{increment}' matches the control variable"
            ))),
            None => {}
        }

        if condition.is_none() {
            self.push(Finding::warning("WARNING: no variable detected in the loop condition"));
        }
        if increment.is_none() {
            self.push(Finding::warning("WARNING: no variable detected in the loop increment"));
        }
    }

    pub(super) fn do_while(&mut self) {
        let tokens = self.tokens;
        let mut do_found = false;
        let mut while_found = false;

        for (i, token) in tokens.iter().enumerate() {
            if token.is(TokenKind::Do) {
                do_found = true;
                self.push(Finding::info("'do-while' loop detected - analysing structure").with_span(token.span()));
            }

            if !(token.is(TokenKind::While) && do_found) {
                continue;
            }
            while_found = true;
            self.push(Finding::info("'while' clause found for the do-while loop").with_span(token.span()));

            if self.kind_at(i + 1) != Some(TokenKind::LParen) || i + 2 >= tokens.len() {
                continue;
            }
            let variable = tokens[i + 2..]
                .iter()
                .take_while(|t| !t.is(TokenKind::RParen))
                .find(|t| t.is(TokenKind::Identifier));

            if let Some(variable) = variable {
                let name = &variable.text;
                self.push(Finding::info(format!("Variable in do-while condition: '{name}'")));
                if self.symbols.contains(name) {
                    self.push(Finding::confirmation(format!(
                        "Variable '{name}' in the do-while condition is declared"
                    )));
                } else {
                    self.push(
                        Finding::error(
                            ErrorClass::Semantic,
                            format!("Variable '{name}' in the do-while condition is not declared"),
                        )
                        .with_span(variable.span()),
                    );
                }
            }
        }

        if do_found && while_found {
            self.push(Finding::confirmation("Complete do-while structure detected"));
        } else if do_found {
            self.push(Finding::error(
                ErrorClass::Semantic,
                "'do' loop without a matching 'while' clause",
            ));
        }
    }

    /// Comparison anywhere with no increment anywhere
    pub(super) fn infinite_loop(&mut self) {
        let has_increment = self.tokens.iter().any(|t| t.is(TokenKind::Increment));
        let has_condition = self.tokens.iter().any(|t| t.is(TokenKind::Comparison));

        match (has_condition, has_increment) {
            (true, false) => self.push(Finding::warning(
                "POSSIBLE INFINITE LOOP: no increment of the control variable detected",
            )),
            (true, true) => self.push(Finding::confirmation(
                "Valid loop structure: it has a condition and an increment",
            )),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::iterations;
    use crate::frontend::sema::analyzer::tests::pass_lines;
    use crate::frontend::sema::Pass;
    use crate::frontend::Dialect;

    #[test]
    fn test_iterations() {
        assert_eq!(iterations(0, 5), Some(6));
        assert_eq!(iterations(3, 3), Some(1));
        assert_eq!(iterations(5, 0), Some(0));
        assert_eq!(iterations(0, i64::MAX), None);
        assert_eq!(iterations(i64::MIN, 0), None);
    }

    #[test]
    fn test_for_loop_bound_at_i64_max() {
        let output = pass_lines("for(let i=0;i<9223372036854775807;i++){}", Dialect::Js, Pass::ForLoop);
        assert!(output.contains(
            &"Condition: 'i < 9223372036854775807' - control variable compared against 9223372036854775807"
                .to_string()
        ));
        assert!(!output.iter().any(|line| line.contains("iterations")));
    }

    #[test]
    fn test_for_loop_consistent() {
        assert_eq!(
            pass_lines("for(let i=0;i<5;i++){}", Dialect::Js, Pass::ForLoop),
            vec![
                "'for' loop detected - analysing structure",
                "Control variable 'i' initialised with value 0",
                "Condition: 'i < 5' - control variable compared against 5",
                "Increment detected for variable 'i' (++)",
                "✓ Condition variable 'i' matches the control variable",
                "✓ Increment variable 'i' matches the control variable",
                "The loop will run approximately 6 iterations",
            ]
        );
    }

    #[test]
    fn test_for_loop_condition_mismatch() {
        let output = pass_lines("for(let i=0;j<5;i++){}", Dialect::Js, Pass::ForLoop);
        assert!(output.contains(
            &"❌ ERROR SEMÁNTICO: Condition variable 'j' does not match control variable 'i'".to_string()
        ));
    }

    #[test]
    fn test_for_loop_increment_mismatch_in_c() {
        let output = pass_lines("for (int i = 0; i < 3; k++) {}", Dialect::C, Pass::ForLoop);
        assert!(output.contains(
            &"❌ ERROR SEMÁNTICO: Increment variable 'k' does not match control variable 'i'".to_string()
        ));
    }

    #[test]
    fn test_for_loop_never_true() {
        let output = pass_lines("for(let i=10;i<5;i++){}", Dialect::Js, Pass::ForLoop);
        assert!(output.contains(
            &"⚠️ WARNING: the loop condition may never be true (start value greater than end value)".to_string()
        ));
        assert!(!output.iter().any(|line| line.contains("iterations")));
    }

    #[test]
    fn test_for_loop_missing_increment_variable() {
        let output = pass_lines("for(let i=0;i<5;){}", Dialect::Js, Pass::ForLoop);
        assert!(output.contains(&"⚠️ WARNING: no variable detected in the loop increment".to_string()));
        assert!(!output.iter().any(|line| line.contains("no variable detected in the loop condition")));
    }

    #[test]
    fn test_do_while_declared() {
        assert_eq!(
            pass_lines("let n = 0; do { n++; } while (n < 3);", Dialect::Js, Pass::DoWhile),
            vec![
                "'do-while' loop detected - analysing structure",
                "'while' clause found for the do-while loop",
                "Variable in do-while condition: 'n'",
                "✓ Variable 'n' in the do-while condition is declared",
                "✓ Complete do-while structure detected",
            ]
        );
    }

    #[test]
    fn test_do_without_while() {
        let output = pass_lines("do { x++; }", Dialect::C, Pass::DoWhile);
        assert_eq!(
            output.last().map(String::as_str),
            Some("❌ ERROR SEMÁNTICO: 'do' loop without a matching 'while' clause")
        );
    }

    #[test]
    fn test_infinite_loop_heuristic() {
        assert_eq!(
            pass_lines("while (x < 3) {}", Dialect::C, Pass::InfiniteLoop),
            vec!["⚠️ POSSIBLE INFINITE LOOP: no increment of the control variable detected"]
        );
        assert_eq!(
            pass_lines("x < 3; x++;", Dialect::C, Pass::InfiniteLoop),
            vec!["✓ Valid loop structure: it has a condition and an increment"]
        );
        assert!(pass_lines("x = 3;", Dialect::C, Pass::InfiniteLoop).is_empty());
    }
}
