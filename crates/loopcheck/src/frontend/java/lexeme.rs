//! Raw lexemes of the Java subset

use logos::Logos;

use crate::frontend::lexer::{block_comment, quoted, Lexeme, TokenKind};

/// Only double quotes open a string; `'` comes out as `UNKNOWN`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum JavaLexeme {
    #[regex(r"[0-9][0-9.]*")]
    Number,

    #[regex(r"[0-9][0-9.]*\p{L}[\p{L}\p{Nd}]*")]
    MalformedNumber,

    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Word,

    #[token("\"", |lex| quoted(lex, '"'))]
    Str,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("<")]
    #[token(">")]
    Comparison,

    #[token("=")]
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
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
}

impl Lexeme for JavaLexeme {
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            JavaLexeme::LineComment | JavaLexeme::BlockComment => return None,
            JavaLexeme::Number => TokenKind::Number,
            JavaLexeme::MalformedNumber => TokenKind::Unknown,
            JavaLexeme::Word => TokenKind::Identifier,
            JavaLexeme::Str => TokenKind::String,
            JavaLexeme::Comparison => TokenKind::Comparison,
            JavaLexeme::Assignment => TokenKind::Assignment,
            JavaLexeme::Operator => TokenKind::Operator,
            JavaLexeme::LParen => TokenKind::LParen,
            JavaLexeme::RParen => TokenKind::RParen,
            JavaLexeme::LBrace => TokenKind::LBrace,
            JavaLexeme::RBrace => TokenKind::RBrace,
            JavaLexeme::LBracket => TokenKind::LBracket,
            JavaLexeme::RBracket => TokenKind::RBracket,
            JavaLexeme::Semicolon => TokenKind::Semicolon,
            JavaLexeme::Dot => TokenKind::Dot,
            JavaLexeme::Comma => TokenKind::Comma,
        };
        Some(kind)
    }
}
