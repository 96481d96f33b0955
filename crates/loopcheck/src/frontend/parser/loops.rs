//! `for`, `do-while` and declaration productions

use super::{location, Parser, SemicolonRule};
use crate::frontend::lexer::{juxtaposition, Token, TokenKind};

impl<'t> Parser<'t> {
    // =========================================================================
    // Loops
    // =========================================================================

    /// `for ( init ; condition ; increment ) { statements }`
    pub(super) fn parse_for_statement(&mut self) {
        if !self.consume(TokenKind::For) || !self.consume(TokenKind::LParen) {
            return;
        }

        self.parse_initialization();
        if !self.consume(TokenKind::Semicolon) {
            return;
        }

        self.parse_condition();
        if !self.consume(TokenKind::Semicolon) {
            return;
        }

        self.parse_increment();
        if !self.consume(TokenKind::RParen) || !self.consume(TokenKind::LBrace) {
            return;
        }

        self.parse_statements();
        self.consume(TokenKind::RBrace);
    }

    /// `do { statements } while ( condition ) ;`
    pub(super) fn parse_do_while_statement(&mut self) {
        if !self.consume(TokenKind::Do) || !self.consume(TokenKind::LBrace) {
            return;
        }

        self.parse_statements();
        if !self.consume(TokenKind::RBrace)
            || !self.consume(TokenKind::While)
            || !self.consume(TokenKind::LParen)
        {
            return;
        }

        self.parse_condition();
        if !self.consume(TokenKind::RParen) {
            return;
        }
        self.consume(TokenKind::Semicolon);
    }

    fn parse_initialization(&mut self) {
        let Some(token) = self.current() else {
            self.error("expected a variable declaration in the loop initialization", None);
            return;
        };
        if self.grammar.starts_declaration(token.kind) {
            self.advance();
        }

        if !self.consume(TokenKind::Identifier) {
            return;
        }

        if self.grammar.type_annotations && self.eat(TokenKind::Colon) {
            if self.check(TokenKind::Type) || self.check(TokenKind::Identifier) {
                self.advance();
            }
        }

        if !self.consume(TokenKind::Assignment) {
            return;
        }

        match self.current() {
            None => self.error("expected a value in the loop initialization", None),
            Some(value) if value.kind.is_operand() => self.advance(),
            Some(value) => self.error_at(
                format!("expected a number or identifier in the loop initialization, found {}", value.kind),
                value,
            ),
        }
    }

    /// `identifier COMPARISON (number | identifier)`
    fn parse_condition(&mut self) {
        if !self.consume(TokenKind::Identifier) || !self.consume(TokenKind::Comparison) {
            return;
        }

        match self.current() {
            None => self.error("expected a value in the condition", None),
            Some(value) if value.kind.is_operand() => self.advance(),
            Some(value) => self.error_at(
                format!("expected a number or identifier in the condition, found {}", value.kind),
                value,
            ),
        }
    }

    /// `++i`, `i++` or `i += value`
    fn parse_increment(&mut self) {
        let Some(token) = self.current() else {
            self.error("expected an increment expression", None);
            return;
        };

        match token.kind {
            TokenKind::Increment => {
                self.advance();
                self.consume(TokenKind::Identifier);
            }
            TokenKind::Identifier => {
                self.advance();
                match self.current() {
                    None => self.error("expected an increment operator", None),
                    Some(next) if next.is(TokenKind::Increment) => self.advance(),
                    Some(next) if next.is(TokenKind::Assignment) => {
                        self.advance();
                        match self.current() {
                            None => self.error("expected a value after the assignment operator", None),
                            Some(value) if value.kind.is_operand() => self.advance(),
                            Some(value) => self.error_at(
                                "expected a number or identifier after the assignment operator",
                                value,
                            ),
                        }
                    }
                    Some(next) => self.error_at("expected an increment or assignment operator", next),
                }
            }
            _ => self.error_at("expected an identifier or increment operator", token),
        }
    }

    // =========================================================================
    // Loop bodies
    // =========================================================================

    /// Statements up to the closing brace; anything unrecognised is skipped
    fn parse_statements(&mut self) {
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::RBrace => break,
                TokenKind::Type if self.grammar.body_declarations => self.parse_variable_declaration(),
                TokenKind::Identifier | TokenKind::Keyword => self.parse_statement(),
                _ => self.advance(),
            }
        }
    }

    /// `name[.member]` followed by a call `( args )` or an assignment `= expr`
    fn parse_statement(&mut self) {
        self.advance();

        if self.check_text(".") {
            self.advance();
            self.eat(TokenKind::Identifier);
        }

        if self.eat(TokenKind::LParen) {
            while let Some(token) = self.current() {
                if token.is(TokenKind::RParen) {
                    break;
                }
                if token.is(TokenKind::Unknown) {
                    self.report_invalid_token(token);
                }
                self.advance();
            }
            self.eat(TokenKind::RParen);
        } else if self.eat(TokenKind::Assignment) {
            self.parse_expression();
        }

        self.eat(TokenKind::Semicolon);
    }

    /// Maximal run of numbers, identifiers, operators and unknown tokens
    fn parse_expression(&mut self) {
        let mut previous: Option<&'t Token> = None;

        while let Some(token) = self.current() {
            if !matches!(
                token.kind,
                TokenKind::Number | TokenKind::Identifier | TokenKind::Operator | TokenKind::Unknown
            ) {
                break;
            }

            if token.is(TokenKind::Unknown) {
                self.report_invalid_token(token);
            }

            if let Some(prev) = previous.filter(|prev| prev.line == token.line) {
                if let Some(pair) = juxtaposition(prev, token) {
                    self.error_at(
                        format!("syntax error: {pair} without an operator at {}", location(token)),
                        token,
                    );
                }
            }

            previous = Some(token);
            self.advance();
        }
    }

    fn report_invalid_token(&mut self, token: &Token) {
        self.error_at(
            format!("invalid token '{}' in expression at {}", token.text, location(token)),
            token,
        );
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// `[keyword | type] name [: type] = value [;]`
    pub(super) fn parse_variable_declaration(&mut self) {
        if self.current().is_some_and(|token| self.grammar.starts_declaration(token.kind)) {
            self.advance();
        }

        if !self.consume(TokenKind::Identifier) {
            return;
        }

        if self.grammar.type_annotations && self.eat(TokenKind::Colon) {
            if self.check(TokenKind::Type) || self.check(TokenKind::Identifier) {
                self.advance();
            } else {
                let span = self.current().map(Token::span);
                self.error("expected a type after ':'", span);
                return;
            }
        }

        if !self.consume(TokenKind::Assignment) {
            return;
        }

        let Some(value) = self.current() else {
            self.error("expected a value in the declaration", None);
            return;
        };

        match value.kind {
            TokenKind::Number | TokenKind::Identifier => self.advance(),
            TokenKind::Unknown => {
                self.error_at(format!("malformed number '{}' at {}", value.text, location(value)), value);
                self.advance();
                return;
            }
            other => {
                self.error_at(format!("expected a number or identifier, found {other}"), value);
                return;
            }
        }

        match self.grammar.semicolon {
            SemicolonRule::Required => {
                self.consume(TokenKind::Semicolon);
            }
            SemicolonRule::SameLine => {
                if !self.eat(TokenKind::Semicolon) {
                    if let Some(next) = self.current().filter(|next| next.line == value.line) {
                        self.error_at(
                            format!(
                                "expected ';' or a line break after the declaration at line {}",
                                value.line
                            ),
                            next,
                        );
                    }
                }
            }
        }
    }
}
