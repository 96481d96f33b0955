//! Fixed Java skeleton: `public class Name { public static void main(String[] args) { ... } }`

use super::Parser;
use crate::frontend::lexer::{Token, TokenKind};

/// Keywords that stand for a literal value
const LITERAL_KEYWORDS: [&str; 3] = ["true", "false", "null"];

fn is_literal_keyword(token: &Token) -> bool {
    token.is(TokenKind::Keyword) && LITERAL_KEYWORDS.contains(&token.text.as_str())
}

/// String, number, identifier or literal keyword
fn is_value(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Number | TokenKind::String | TokenKind::Identifier)
        || is_literal_keyword(token)
}

impl<'t> Parser<'t> {
    pub(super) fn parse_class(&mut self) {
        if !self.consume(TokenKind::Public)
            || !self.consume(TokenKind::Class)
            || !self.consume(TokenKind::Identifier)
            || !self.consume(TokenKind::LBrace)
        {
            return;
        }

        self.parse_main_method();
        self.consume(TokenKind::RBrace);
    }

    fn parse_main_method(&mut self) {
        let signature = [
            TokenKind::Public,
            TokenKind::Static,
            TokenKind::Void,
            TokenKind::Main,
            TokenKind::LParen,
            TokenKind::Type,
            TokenKind::LBracket,
            TokenKind::RBracket,
        ];
        if !signature.into_iter().all(|kind| self.consume(kind)) {
            return;
        }

        // `args` is reserved, any other identifier is fine too
        match self.current() {
            None => {
                self.error("expected a parameter name after String[]", None);
                return;
            }
            Some(token) if token.is(TokenKind::Identifier) || (token.is(TokenKind::Keyword) && token.text == "args") => {
                self.advance();
            }
            Some(token) => {
                self.error_at(format!("expected a parameter name, found {}", token.describe()), token);
                return;
            }
        }

        if !self.consume(TokenKind::RParen) || !self.consume(TokenKind::LBrace) {
            return;
        }

        self.parse_method_body();
        self.consume(TokenKind::RBrace);
    }

    fn parse_method_body(&mut self) {
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::RBrace => break,
                TokenKind::Type => self.parse_typed_declaration(),
                TokenKind::If => self.parse_if_statement(),
                _ if token.text == "System" => self.parse_println(),
                TokenKind::Identifier => self.parse_assignment(),
                _ => self.advance(),
            }
        }
    }

    /// `Type name = value ;`
    fn parse_typed_declaration(&mut self) {
        if !self.consume(TokenKind::Type)
            || !self.consume(TokenKind::Identifier)
            || !self.consume(TokenKind::Assignment)
        {
            return;
        }

        match self.current() {
            None => {
                self.error("expected a value in the variable declaration", None);
                return;
            }
            Some(value) if is_value(value) => self.advance(),
            Some(value) => {
                self.error_at(
                    format!("expected a valid value in the declaration, found {}", value.kind),
                    value,
                );
                return;
            }
        }

        self.consume(TokenKind::Semicolon);
    }

    /// `name = value ;`
    fn parse_assignment(&mut self) {
        self.advance();
        if self.eat(TokenKind::Assignment) {
            self.advance();
            self.eat(TokenKind::Semicolon);
        }
    }

    // =========================================================================
    // if
    // =========================================================================

    fn parse_if_statement(&mut self) {
        if !self.consume(TokenKind::If) || !self.consume(TokenKind::LParen) {
            return;
        }

        self.parse_if_condition();
        if !self.consume(TokenKind::RParen) || !self.consume(TokenKind::LBrace) {
            return;
        }

        while let Some(token) = self.current() {
            if token.is(TokenKind::RBrace) {
                break;
            }
            if token.text == "System" {
                self.parse_println();
            } else {
                self.advance();
            }
        }
        self.consume(TokenKind::RBrace);
    }

    /// `name COMPARISON value` or `name.equals("literal")`
    fn parse_if_condition(&mut self) {
        let Some(token) = self.current() else {
            self.error("expected a condition in the if statement", None);
            return;
        };
        if !token.is(TokenKind::Identifier) {
            return;
        }
        self.advance();

        if self.eat(TokenKind::Dot) {
            if self.check_text("equals") {
                self.advance();
                if !self.consume(TokenKind::LParen) {
                    return;
                }
                self.eat(TokenKind::String);
                self.consume(TokenKind::RParen);
            }
        } else if self.eat(TokenKind::Comparison) {
            if self.current().is_some_and(is_value) {
                self.advance();
            }
        }
    }

    // =========================================================================
    // System.out.println
    // =========================================================================

    /// `System . out . println ( element (+ element)* ) ;`
    fn parse_println(&mut self) {
        self.advance();
        if !self.consume(TokenKind::Dot) {
            return;
        }

        if self.check_text("out") {
            self.advance();
        } else {
            let span = self.current().map(Token::span);
            self.error("expected 'out' after 'System.'", span);
            return;
        }
        if !self.consume(TokenKind::Dot) {
            return;
        }

        if self.check_text("println") {
            self.advance();
        } else {
            let span = self.current().map(Token::span);
            self.error("expected 'println' after 'System.out.'", span);
            return;
        }
        if !self.consume(TokenKind::LParen) {
            return;
        }

        if !self.eat_print_element() {
            let span = self.current().map(Token::span);
            self.error("expected an argument in System.out.println()", span);
            return;
        }
        while self.check(TokenKind::Operator) && self.check_text("+") {
            self.advance();
            if !self.eat_print_element() {
                let span = self.current().map(Token::span);
                self.error("expected an element after '+' in System.out.println()", span);
                return;
            }
        }

        if !self.consume(TokenKind::RParen) {
            return;
        }
        self.consume(TokenKind::Semicolon);
    }

    fn eat_print_element(&mut self) -> bool {
        if self.current().is_some_and(is_value) {
            self.advance();
            true
        } else {
            false
        }
    }
}
