//! Java passes: class skeleton, typed assignments, `if` conditions and
//! the `System.out.println` validator

use super::analyzer::SemanticAnalyzer;
use crate::common::{ErrorClass, Finding};
use crate::frontend::lexer::{Token, TokenKind};

/// Values whose text is recorded as a declaration's initial value
pub(super) fn is_checked_value(token: &Token) -> bool {
    matches!(token.kind, TokenKind::String | TokenKind::Number | TokenKind::Identifier)
        || (token.is(TokenKind::Keyword) && matches!(token.text.as_str(), "true" | "false" | "null"))
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// Spelled close enough to `System` to be an attempt at it
fn resembles_system(token: &Token) -> bool {
    if !matches!(token.kind, TokenKind::Identifier | TokenKind::Keyword) {
        return false;
    }
    let lower = token.text.to_lowercase();
    lower.contains("syste") || lower == "sistem"
}

/// Running state of one `println( ... )` argument list
#[derive(Debug, Default)]
struct PrintArguments {
    elements: usize,
    expect_element: bool,
    /// Last thing seen was a `+`
    trailing_plus: bool,
    concatenated: bool,
    errors: bool,
}

impl SemanticAnalyzer<'_> {
    /// `System` itself, or a near miss used as a receiver (`Systen.`).
    /// A plain variable such as `systemCount` is left alone.
    fn looks_like_system(&self, index: usize) -> bool {
        let token = &self.tokens[index];
        token.text == "System"
            || (resembles_system(token) && self.kind_at(index + 1) == Some(TokenKind::Dot))
    }

    fn is_variable_of_type(&self, name: &str, ty: &str) -> bool {
        self.symbols.type_of(name) == Some(ty)
    }

    fn semantic_error(&mut self, message: String) {
        self.push(Finding::error(ErrorClass::Semantic, message));
    }

    /// Check a declaration's initial value against its declared type.
    ///
    /// Runs before the variable itself is recorded, so `int a = a;` only
    /// passes if an earlier `int a` exists.
    pub(super) fn check_assignment(&mut self, ty: &str, value: &str, line: usize) {
        if value.is_empty() {
            return;
        }

        match ty {
            "int" => {
                if value.parse::<i64>().is_ok() || self.is_variable_of_type(value, "int") {
                    self.push(Finding::confirmation(format!(
                        "Valid assignment: value '{value}' compatible with type 'int'"
                    )));
                } else {
                    self.semantic_error(format!(
                        "Value '{value}' is not compatible with type 'int' at line {line}"
                    ));
                }
            }
            "String" => {
                if is_quoted(value) {
                    self.push(Finding::confirmation(format!(
                        "Valid assignment: String {value} declared correctly"
                    )));
                } else if !self.is_variable_of_type(value, "String") {
                    self.semantic_error(format!(
                        "Value '{value}' is not compatible with type 'String' at line {line}"
                    ));
                }
            }
            "boolean" => {
                if !matches!(value, "true" | "false") && !self.is_variable_of_type(value, "boolean") {
                    self.semantic_error(format!(
                        "Value '{value}' is not compatible with type 'boolean' at line {line}"
                    ));
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // Class skeleton
    // =========================================================================

    pub(super) fn class_skeleton(&mut self) {
        let tokens = self.tokens;
        let (mut public, mut class, mut main) = (false, false, false);

        for (i, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Public if !public => {
                    public = true;
                    self.push(Finding::confirmation(
                        "'public' modifier found - class is publicly accessible",
                    ));
                }
                TokenKind::Class if public && !class => {
                    class = true;
                    if let Some(name) = self.token(i + 1).filter(|t| t.is(TokenKind::Identifier)) {
                        self.push(
                            Finding::confirmation(format!("Class '{}' declared correctly", name.text))
                                .with_span(name.span()),
                        );
                    }
                }
                TokenKind::Main if !main => {
                    main = true;
                    self.push(Finding::confirmation("main method found - program entry point"));
                }
                _ => {}
            }
        }

        if !public {
            self.semantic_error("Missing 'public' modifier on the class".to_string());
        }
        if !class {
            self.semantic_error("Missing class declaration".to_string());
        }
        if !main {
            self.semantic_error("Missing main method - the program has no entry point".to_string());
        }
        if public && class && main {
            self.push(Finding::confirmation("Basic Java class structure complete"));
        }
    }

    // =========================================================================
    // if conditions
    // =========================================================================

    pub(super) fn if_conditions(&mut self) {
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            if !token.is(TokenKind::If) {
                continue;
            }
            self.push(Finding::info("'if' statement detected - analysing condition").with_span(token.span()));

            if self.kind_at(i + 1) != Some(TokenKind::LParen) {
                continue;
            }
            let start = i + 2;
            if let Some(end) = self.matching_paren(i + 1) {
                if end > start {
                    self.condition(start, end);
                }
            }
        }
    }

    /// Index of the `)` closing the `(` at `open`
    fn matching_paren(&self, open: usize) -> Option<usize> {
        let mut depth = 1usize;
        for (i, token) in self.tokens.iter().enumerate().skip(open + 1) {
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn condition(&mut self, start: usize, end: usize) {
        let tokens = self.tokens;
        let mut left: Option<&str> = None;
        let mut operator: Option<&str> = None;
        let mut right: Option<&str> = None;
        let mut equals_call = false;

        for i in start..end {
            let token = &tokens[i];
            match token.kind {
                TokenKind::Identifier => {
                    if !self.symbols.contains(&token.text) && !self.is_builtin(&token.text) {
                        self.push(
                            Finding::error(
                                ErrorClass::Semantic,
                                format!("Variable '{}' used in a condition but not declared", token.text),
                            )
                            .with_span(token.span()),
                        );
                    }

                    if left.is_none() {
                        left = Some(token.text.as_str());
                    } else if operator.is_some() && right.is_none() {
                        right = Some(token.text.as_str());
                    }

                    let calls_equals = i + 2 < end
                        && tokens[i + 1].is(TokenKind::Dot)
                        && tokens[i + 2].text == "equals";
                    if calls_equals {
                        equals_call = true;
                        self.equals_call(i, end);
                    }
                }
                TokenKind::Comparison => operator = Some(token.text.as_str()),
                TokenKind::Number | TokenKind::String if right.is_none() => right = Some(token.text.as_str()),
                _ => {}
            }
        }

        if let (Some(left), Some(operator), Some(right)) = (left, operator, right) {
            self.comparison(left, operator, right);
        }
        if equals_call {
            self.push(Finding::confirmation(".equals() call detected for String comparison"));
        }
    }

    /// Type of a literal or declared variable, `unknown` otherwise
    fn operand_type(&self, operand: &str) -> String {
        if operand.parse::<i64>().is_ok() {
            "int".to_string()
        } else if let Some(ty) = self.symbols.type_of(operand) {
            ty.to_string()
        } else if is_quoted(operand) {
            "String".to_string()
        } else {
            "unknown".to_string()
        }
    }

    fn comparison(&mut self, left: &str, operator: &str, right: &str) {
        let left_type = self.operand_type(left);
        let right_type = self.operand_type(right);

        self.push(Finding::info(format!("Comparison detected: '{left} {operator} {right}'")));

        match (left_type.as_str(), right_type.as_str()) {
            ("int", "int") => self.push(Finding::confirmation(
                "Valid numeric comparison: both operands are int",
            )),
            ("String", "String") if operator == "==" => self.push(Finding::warning(
                "WARNING: String comparison with '==' - use .equals() instead",
            )),
            ("String", "String") => {
                self.semantic_error("Strings cannot be compared with operators like >, <".to_string());
            }
            (l, r) if l != r => {
                self.semantic_error(format!("Comparison between incompatible types: {l} vs {r}"));
            }
            _ => self.push(Finding::confirmation("Valid comparison")),
        }
    }

    /// `receiver.equals("literal")` with the receiver at `receiver`
    fn equals_call(&mut self, receiver: usize, end: usize) {
        let tokens = self.tokens;
        let name = &tokens[receiver].text;

        let receiver_type = self.symbols.type_of(name).map(str::to_string);
        match receiver_type.as_deref() {
            Some("String") => self.push(Finding::confirmation(format!(
                ".equals() used correctly on String variable '{name}'"
            ))),
            Some(ty) => {
                let message =
                    format!(".equals() used on variable '{name}' of type '{ty}' - only valid for Strings");
                self.semantic_error(message);
            }
            None => self.semantic_error(format!("Variable '{name}' not declared in .equals() call")),
        }

        for i in receiver..end {
            if tokens[i].text != "equals" || i + 2 >= end {
                continue;
            }
            if tokens[i + 1].is(TokenKind::LParen) && tokens[i + 2].is(TokenKind::String) {
                self.push(Finding::confirmation(format!(
                    "Valid .equals() argument: {}",
                    tokens[i + 2].text
                )));
            }
        }
    }

    // =========================================================================
    // System.out.println
    // =========================================================================

    pub(super) fn println_calls(&mut self) {
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            if self.looks_like_system(i) {
                self.println_call(i);
            }

            let orphan = match token.kind {
                TokenKind::Identifier => token.text.contains("outprint") || token.text.contains("println"),
                TokenKind::Keyword => token.text == "out",
                _ => false,
            };
            if orphan && !self.follows_system_dot(i) {
                self.push(
                    Finding::error(
                        ErrorClass::Syntax,
                        format!(
                            "'{}' must be part of 'System.out.println()' at line {}",
                            token.text, token.line
                        ),
                    )
                    .with_span(token.span()),
                );
            }
        }
    }

    /// Misspelled `System`s count too; those are reported on their own
    fn follows_system_dot(&self, index: usize) -> bool {
        index >= 2
            && self.looks_like_system(index - 2)
            && self.tokens[index - 1].is(TokenKind::Dot)
    }

    fn misspelled(&mut self, token: &Token, expected: &str) {
        self.push(
            Finding::error(
                ErrorClass::Lexical,
                format!(
                    "'{}' is misspelled - it must be exactly '{expected}' at line {}",
                    token.text, token.line
                ),
            )
            .with_span(token.span()),
        );
    }

    fn call_syntax_error(&mut self, message: String) {
        self.push(Finding::error(ErrorClass::Syntax, message));
    }

    /// Walk `System . out . println (` from `start`; each check stops the walk
    fn println_call(&mut self, start: usize) {
        let tokens = self.tokens;
        let system = &tokens[start];
        if system.text != "System" {
            self.misspelled(system, "System");
            return;
        }

        if self.kind_at(start + 1) != Some(TokenKind::Dot) {
            self.call_syntax_error(format!("Missing '.' after 'System' at line {}", system.line));
            return;
        }

        let Some(out) = self.token(start + 2) else {
            self.call_syntax_error(format!(
                "Incomplete call - 'out' is missing after 'System.' at line {}",
                system.line
            ));
            return;
        };
        if out.text != "out" {
            self.misspelled(out, "out");
            return;
        }

        if self.kind_at(start + 3) != Some(TokenKind::Dot) {
            self.call_syntax_error(format!("Missing '.' after 'out' at line {}", out.line));
            return;
        }

        let Some(println) = self.token(start + 4) else {
            self.call_syntax_error(format!(
                "Incomplete call - 'println' is missing after 'System.out.' at line {}",
                system.line
            ));
            return;
        };
        if println.text != "println" {
            self.misspelled(println, "println");
            return;
        }

        if self.kind_at(start + 5) != Some(TokenKind::LParen) {
            self.call_syntax_error(format!("Missing '(' after 'println' at line {}", println.line));
            return;
        }

        if self.println_arguments(start + 6, system.line) {
            self.push(Finding::confirmation("System.out.println() is completely valid"));
        }
    }

    /// Validate `element (+ element)*` up to the closing paren; true when clean
    fn println_arguments(&mut self, start: usize, line: usize) -> bool {
        let tokens = self.tokens;
        let mut args = PrintArguments {
            expect_element: true,
            ..PrintArguments::default()
        };
        let mut position = start;

        while let Some(token) = tokens.get(position).filter(|t| !t.is(TokenKind::RParen)) {
            position += 1;

            if is_checked_value(token) {
                if !args.expect_element {
                    args.errors = true;
                    self.call_syntax_error(format!(
                        "Element '{}' follows another element without '+' at line {}",
                        token.text, token.line
                    ));
                    continue;
                }
                args.elements += 1;
                args.expect_element = false;
                args.trailing_plus = false;
                self.print_element(token, &mut args);
                continue;
            }

            match token.kind {
                TokenKind::Operator if token.text == "+" => {
                    if args.expect_element {
                        args.errors = true;
                        self.call_syntax_error(format!(
                            "Operator '+' without a valid preceding element at line {}",
                            token.line
                        ));
                    } else {
                        args.concatenated = true;
                        args.expect_element = true;
                        args.trailing_plus = true;
                        self.push(Finding::confirmation("Concatenation detected - '+' joins the elements"));
                    }
                }
                TokenKind::Operator => {
                    args.errors = true;
                    args.expect_element = true;
                    self.call_syntax_error(format!(
                        "Operator '{}' is not allowed inside println() - only '+' for concatenation at line {}",
                        token.text, token.line
                    ));
                }
                TokenKind::Comma => {
                    args.errors = true;
                    args.expect_element = true;
                    self.semantic_error(format!(
                        "System.out.println() accepts only ONE argument - multiple arguments are not allowed at line {}",
                        token.line
                    ));
                }
                TokenKind::Unknown => {
                    args.errors = true;
                    self.push(Finding::error(
                        ErrorClass::Lexical,
                        format!("Invalid token '{}' inside println() at line {}", token.text, token.line),
                    ));
                }
                _ => {
                    args.errors = true;
                    self.call_syntax_error(format!(
                        "Token '{}' is not allowed inside println() at line {}",
                        token.text, token.line
                    ));
                }
            }
        }

        if tokens.get(position).is_none() {
            args.errors = true;
            self.call_syntax_error(format!("Missing ')' in println() at line {line}"));
        }
        if args.trailing_plus {
            args.errors = true;
            self.call_syntax_error(format!(
                "Operator '+' without a following element in println() at line {line}"
            ));
        }

        if args.elements == 0 {
            self.push(Finding::info("ℹ️ println() without arguments - prints an empty line"));
        } else if args.concatenated && !args.errors {
            self.push(Finding::confirmation(
                "Valid string concatenation - Java joins elements with '+'",
            ));
        }

        !args.errors
    }

    fn print_element(&mut self, token: &Token, args: &mut PrintArguments) {
        match token.kind {
            TokenKind::String => {
                self.push(Finding::confirmation(format!("Valid String argument: {}", token.text)));
            }
            TokenKind::Number => {
                self.push(Finding::confirmation(format!("Valid number argument: {}", token.text)));
            }
            TokenKind::Identifier if self.symbols.contains(&token.text) => {
                self.push(Finding::confirmation(format!(
                    "Variable '{}' is a valid argument",
                    token.text
                )));
            }
            TokenKind::Identifier => {
                args.errors = true;
                self.push(
                    Finding::error(
                        ErrorClass::Semantic,
                        format!(
                            "Variable '{}' is not declared in println() at line {}",
                            token.text, token.line
                        ),
                    )
                    .with_span(token.span()),
                );
            }
            _ => {
                self.push(Finding::confirmation(format!("Valid literal argument: {}", token.text)));
            }
        }
    }

    // =========================================================================
    // Summary
    // =========================================================================

    pub(super) fn type_summary(&mut self) {
        let count = |ty: &str| {
            self.symbols
                .iter()
                .filter(|variable| variable.declared_type == ty)
                .count()
        };
        let (ints, strings) = (count("int"), count("String"));

        self.push(Finding::info(format!(
            "📊 Type summary: {ints} int variables, {strings} String variables"
        )));
        if ints > 0 && strings > 0 {
            self.push(Finding::confirmation("Diverse use of data types"));
        }
    }
}
