//! Raw lexemes of the C subset

use logos::Logos;

use crate::frontend::lexer::{block_comment, quoted, Lexeme, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum CLexeme {
    #[regex(r"[0-9][0-9.]*")]
    Number,

    #[regex(r"[0-9][0-9.]*\p{L}[\p{L}\p{Nd}]*")]
    MalformedNumber,

    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Word,

    #[token("\"", |lex| quoted(lex, '"'))]
    #[token("'", |lex| quoted(lex, '\''))]
    Str,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

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
    #[token("*=")]
    #[token("/=")]
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
}

impl Lexeme for CLexeme {
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            CLexeme::LineComment | CLexeme::BlockComment => return None,
            CLexeme::Number => TokenKind::Number,
            CLexeme::MalformedNumber => TokenKind::Unknown,
            CLexeme::Word => TokenKind::Identifier,
            CLexeme::Str => TokenKind::String,
            CLexeme::Comparison => TokenKind::Comparison,
            CLexeme::Increment => TokenKind::Increment,
            CLexeme::Assignment => TokenKind::Assignment,
            CLexeme::Operator => TokenKind::Operator,
            CLexeme::LParen => TokenKind::LParen,
            CLexeme::RParen => TokenKind::RParen,
            CLexeme::LBrace => TokenKind::LBrace,
            CLexeme::RBrace => TokenKind::RBrace,
            CLexeme::Semicolon => TokenKind::Semicolon,
        };
        Some(kind)
    }
}
