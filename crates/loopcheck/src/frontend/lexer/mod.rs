//! Lexer module: token model and the generic logos-driven scanner

mod scanner;
mod token;

pub use scanner::{block_comment, quoted, scan_with, tokenize, Lexeme, Lexer, RawToken};
pub use token::{juxtaposition, Token, TokenKind};
