//! Raw lexemes of the JavaScript / TypeScript subset

use logos::Logos;

use crate::frontend::lexer::{quoted, Lexeme, TokenKind};

/// No comment syntax; `.` and `_` are not part of any lexeme and come out
/// as `UNKNOWN`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum JsLexeme {
    #[regex(r"[0-9][0-9.]*")]
    Number,

    /// Digits running straight into letters (`123abc`)
    #[regex(r"[0-9][0-9.]*\p{L}[\p{L}\p{Nd}]*")]
    MalformedNumber,

    #[regex(r"\p{L}[\p{L}\p{Nd}_]*")]
    Word,

    #[token("\"", |lex| quoted(lex, '"'))]
    #[token("'", |lex| quoted(lex, '\''))]
    Str,

    #[token("===")]
    #[token("!==")]
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("<")]
    #[token(">")]
    Comparison,

    #[token("++")]
    #[token("--")]
    Increment,

    #[token("=")]
    #[token("+=")]
    #[token("-=")]
    Assignment,

    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
}

impl Lexeme for JsLexeme {
    fn kind(self) -> Option<TokenKind> {
        Some(match self {
            JsLexeme::Number => TokenKind::Number,
            JsLexeme::MalformedNumber => TokenKind::Unknown,
            JsLexeme::Word => TokenKind::Identifier,
            JsLexeme::Str => TokenKind::String,
            JsLexeme::Comparison => TokenKind::Comparison,
            JsLexeme::Increment => TokenKind::Increment,
            JsLexeme::Assignment => TokenKind::Assignment,
            JsLexeme::Operator => TokenKind::Operator,
            JsLexeme::LParen => TokenKind::LParen,
            JsLexeme::RParen => TokenKind::RParen,
            JsLexeme::LBrace => TokenKind::LBrace,
            JsLexeme::RBrace => TokenKind::RBrace,
            JsLexeme::Semicolon => TokenKind::Semicolon,
            JsLexeme::Colon => TokenKind::Colon,
        })
    }
}
