//! Token definitions shared by every dialect

use serde::Serialize;

use crate::common::Span;

/// Classified lexeme with its position in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text, quotes included for strings
    pub text: String,
    /// Byte offset of the first character
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
            line,
            column,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.text.len())
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// `kind 'text'` form used in parser messages
    pub fn describe(&self) -> String {
        format!("{} '{}'", self.kind, self.text)
    }
}

/// Closed set of token categories.
///
/// Each dialect produces a subset: `COLON` only comes out of the JS/TS
/// dialect, `LBRACKET`/`RBRACKET`/`DOT`/`COMMA` and the class-skeleton
/// tags only out of the Java dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    // Loop keywords
    For,
    Do,
    While,

    // Words
    Identifier,
    Keyword,
    Type,

    // Java class skeleton
    Public,
    Class,
    Static,
    Void,
    Main,
    If,
    Else,

    // Literals
    Number,
    String,

    // Operators
    Operator,
    Comparison,
    Increment,
    Assignment,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Dot,
    Comma,

    Unknown,
    // Never produced by the scanners; kept so token views can filter it
    Whitespace,
}

impl TokenKind {
    /// Upper-case tag used in messages and serialized reports
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::For => "FOR",
            TokenKind::Do => "DO",
            TokenKind::While => "WHILE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Type => "TYPE",
            TokenKind::Public => "PUBLIC",
            TokenKind::Class => "CLASS",
            TokenKind::Static => "STATIC",
            TokenKind::Void => "VOID",
            TokenKind::Main => "MAIN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Comparison => "COMPARISON",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Number or identifier, the operands of the juxtaposition check
    pub fn is_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Identifier)
    }
}

/// Describe two operands standing next to each other with no operator
/// between them, e.g. `number '2' followed by identifier 'x'`.
///
/// Returns `None` unless both tokens are numbers or identifiers.
pub fn juxtaposition(first: &Token, second: &Token) -> Option<String> {
    let description = match (first.kind, second.kind) {
        (TokenKind::Number, TokenKind::Identifier) => {
            format!("number '{}' followed by identifier '{}'", first.text, second.text)
        }
        (TokenKind::Identifier, TokenKind::Number) => {
            format!("identifier '{}' followed by number '{}'", first.text, second.text)
        }
        (TokenKind::Number, TokenKind::Number) => {
            format!("two consecutive numbers '{}' '{}'", first.text, second.text)
        }
        (TokenKind::Identifier, TokenKind::Identifier) => {
            format!("two consecutive identifiers '{}' '{}'", first.text, second.text)
        }
        _ => return None,
    };
    Some(description)
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
