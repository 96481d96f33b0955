//! C dialect
//!
//! Declarations always start with a type, semicolons are mandatory and
//! `//` and `/* */` comments are dropped by the lexer. Adds the
//! self-initialization and use-before-declaration checks.

mod lexeme;

pub use lexeme::CLexeme;

use crate::frontend::lexer::{scan_with, TokenKind};
use crate::frontend::parser::{Grammar, ProgramShape, SemicolonRule};
use crate::frontend::sema::{DeclarationRule, Naming, Pass, Semantics};
use crate::frontend::DialectSpec;

const RESERVED: &[(&str, TokenKind)] = &[
    ("for", TokenKind::For),
    ("do", TokenKind::Do),
    ("while", TokenKind::While),
    ("if", TokenKind::Keyword),
    ("else", TokenKind::Keyword),
    ("return", TokenKind::Keyword),
    ("break", TokenKind::Keyword),
    ("continue", TokenKind::Keyword),
    ("printf", TokenKind::Keyword),
    ("scanf", TokenKind::Keyword),
    ("include", TokenKind::Keyword),
    ("main", TokenKind::Keyword),
    ("stdio", TokenKind::Keyword),
    ("int", TokenKind::Type),
    ("float", TokenKind::Type),
    ("double", TokenKind::Type),
    ("char", TokenKind::Type),
    ("void", TokenKind::Type),
    ("long", TokenKind::Type),
    ("short", TokenKind::Type),
];

pub static C: DialectSpec = DialectSpec {
    name: "c",
    extensions: &[".c", ".h"],
    scan: scan_with::<CLexeme>,
    reserved: RESERVED,
    grammar: Grammar {
        shape: ProgramShape::Statements,
        declaration_starts: &[TokenKind::Type],
        type_annotations: false,
        semicolon: SemicolonRule::Required,
        body_declarations: true,
    },
    semantics: Semantics {
        passes: &[
            Pass::Declarations,
            Pass::SelfReference,
            Pass::UseBeforeDeclaration,
            Pass::ForLoop,
            Pass::DoWhile,
            Pass::Unused,
            Pass::InfiniteLoop,
            Pass::Undeclared,
            Pass::MalformedNumbers,
            Pass::Juxtaposition,
        ],
        declaration: DeclarationRule {
            starts: &[TokenKind::Type],
            naming: Naming::Verbatim,
            annotations: false,
            checked: false,
        },
        builtins: &[
            "printf", "scanf", "main", "stdio", "include", "return", "if", "else", "for", "while",
            "do", "break", "continue",
        ],
    },
};
