//! Recursive descent checker for loop constructs
//!
//! The parser builds no tree. It walks the token stream with one cursor
//! and records a [`SyntaxError`] whenever a production finds a token it
//! does not expect. A failing production returns early and the top-level
//! loop carries on from wherever the cursor stopped; there is no
//! resynchronisation.

mod class;
mod loops;

use crate::common::{Span, SyntaxError};
use crate::frontend::lexer::{Token, TokenKind};

/// Top-level shape of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramShape {
    /// Loops and declarations anywhere; every other token is skipped
    Statements,
    /// Exactly one `public class` wrapping `main`
    Class,
}

/// How a declaration must be terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemicolonRule {
    /// A missing `;` is only an error when the next token shares the line
    SameLine,
    Required,
}

/// Grammar knobs that differ between dialects
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub shape: ProgramShape,
    /// Token kinds that open a declaration (`let`, `int`, ...)
    pub declaration_starts: &'static [TokenKind],
    /// TypeScript-style `name: type`
    pub type_annotations: bool,
    pub semicolon: SemicolonRule,
    /// Whether loop bodies accept declarations
    pub body_declarations: bool,
}

impl Grammar {
    fn starts_declaration(&self, kind: TokenKind) -> bool {
        self.declaration_starts.contains(&kind)
    }
}

/// Loop-grammar checker over one token stream
pub struct Parser<'t> {
    tokens: Vec<&'t Token>,
    position: usize,
    grammar: &'static Grammar,
    errors: Vec<SyntaxError>,
}

impl<'t> Parser<'t> {
    /// Create a parser over `tokens`; whitespace tokens are filtered out
    pub fn new(tokens: &'t [Token], grammar: &'static Grammar) -> Self {
        let tokens = tokens
            .iter()
            .filter(|token| !token.is(TokenKind::Whitespace))
            .collect();

        Self {
            tokens,
            position: 0,
            grammar,
            errors: Vec::new(),
        }
    }

    /// Check the whole stream and return the syntax errors in order
    pub fn parse(mut self) -> Vec<SyntaxError> {
        match self.grammar.shape {
            ProgramShape::Class => self.parse_class(),
            ProgramShape::Statements => self.parse_program(),
        }
        self.errors
    }

    fn parse_program(&mut self) {
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::For => self.parse_for_statement(),
                TokenKind::Do => self.parse_do_while_statement(),
                kind if self.grammar.starts_declaration(kind) => self.parse_variable_declaration(),
                _ => self.advance(),
            }
        }
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position).copied()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.is(kind))
    }

    fn check_text(&self, text: &str) -> bool {
        self.current().is_some_and(|token| token.text == text)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Advance past the current token if it has kind `kind`
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance past a token of kind `expected` or record an error.
    ///
    /// On failure the cursor does not move; callers return early.
    fn consume(&mut self, expected: TokenKind) -> bool {
        match self.current() {
            None => {
                self.error(format!("expected {expected} but reached end of input"), None);
                false
            }
            Some(token) if token.is(expected) => {
                self.advance();
                true
            }
            Some(token) => {
                self.error_at(
                    format!("expected {expected} but found {} at {}", token.describe(), location(token)),
                    token,
                );
                false
            }
        }
    }

    fn error(&mut self, message: impl Into<String>, span: Option<Span>) {
        self.errors.push(SyntaxError::new(message, span));
    }

    fn error_at(&mut self, message: impl Into<String>, token: &Token) {
        self.error(message, Some(token.span()));
    }
}

/// `line L, column C` of a token
fn location(token: &Token) -> String {
    format!("line {}, column {}", token.line, token.column)
}
