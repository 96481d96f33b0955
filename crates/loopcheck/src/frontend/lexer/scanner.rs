//! Generic scanner driving a dialect's logos lexeme set

use logos::Logos;

use super::token::{Token, TokenKind};
use crate::common::{LineIndex, Span};
use crate::frontend::DialectSpec;

/// Raw lexeme set of one dialect.
///
/// Implemented by the `#[derive(Logos)]` enums in each dialect module.
pub trait Lexeme: Copy {
    /// Token category, or `None` for trivia such as comments
    fn kind(self) -> Option<TokenKind>;
}

/// Unclassified token: category before reserved-word lookup plus its span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub span: Span,
}

/// Run the logos lexer for `L` over the whole source.
///
/// Input logos cannot match becomes `UNKNOWN`; nothing is ever rejected.
pub fn scan_with<L>(source: &str) -> Vec<RawToken>
where
    L: Lexeme + for<'s> Logos<'s, Source = str, Error = (), Extras = ()>,
{
    let mut lexer = L::lexer(source);
    let mut raw = Vec::with_capacity(source.len() / 4);

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(lexeme) => match lexeme.kind() {
                Some(kind) => kind,
                None => continue,
            },
            Err(()) => TokenKind::Unknown,
        };
        raw.push(RawToken {
            kind,
            span: lexer.span().into(),
        });
    }

    raw
}

/// Logos callback for string literals opened by `quote`.
///
/// A backslash escapes the following character. An unterminated literal
/// runs to the end of the input.
pub fn quoted<'s, L>(lex: &mut logos::Lexer<'s, L>, quote: char)
where
    L: Logos<'s, Source = str>,
{
    let rest = lex.remainder();
    let mut chars = rest.char_indices();
    let mut end = rest.len();

    while let Some((index, ch)) = chars.next() {
        if ch == quote {
            end = index + ch.len_utf8();
            break;
        }
        if ch == '\\' {
            chars.next();
        }
    }

    lex.bump(end);
}

/// Logos callback for `/* ... */`; an unclosed comment runs to the end of the input
pub fn block_comment<'s, L>(lex: &mut logos::Lexer<'s, L>)
where
    L: Logos<'s, Source = str>,
{
    let rest = lex.remainder();
    let end = rest.find("*/").map_or(rest.len(), |index| index + 2);
    lex.bump(end);
}

/// Tokenizer for one dialect
pub struct Lexer<'a> {
    source: &'a str,
    dialect: &'static DialectSpec,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str, dialect: &'static DialectSpec) -> Self {
        Self { source, dialect }
    }

    /// Tokenize the entire source.
    ///
    /// Identifiers found in the dialect's reserved-word table take the
    /// table's category instead of `IDENTIFIER`.
    pub fn tokenize_all(self) -> Vec<Token> {
        let lines = LineIndex::new(self.source);

        (self.dialect.scan)(self.source)
            .into_iter()
            .map(|raw| {
                let text = &self.source[raw.span.start..raw.span.end];
                let kind = match raw.kind {
                    TokenKind::Identifier => self.dialect.reserved_kind(text).unwrap_or(TokenKind::Identifier),
                    other => other,
                };
                let (line, column) = lines.location(self.source, raw.span.start);
                Token::new(kind, text, raw.span.start, line, column)
            })
            .collect()
    }
}

/// Tokenize `source` with the given dialect
pub fn tokenize(source: &str, dialect: &'static DialectSpec) -> Vec<Token> {
    Lexer::new(source, dialect).tokenize_all()
}
