//! Java dialect
//!
//! A program is exactly one `public class` holding
//! `public static void main(String[] args)`. Semantic checks replace the
//! loop passes with class-skeleton, type-compatibility, `if` condition and
//! `System.out.println` validation.

mod lexeme;

pub use lexeme::JavaLexeme;

use crate::frontend::lexer::{scan_with, TokenKind};
use crate::frontend::parser::{Grammar, ProgramShape, SemicolonRule};
use crate::frontend::sema::{DeclarationRule, Naming, Pass, Semantics};
use crate::frontend::DialectSpec;

const RESERVED: &[(&str, TokenKind)] = &[
    ("public", TokenKind::Public),
    ("class", TokenKind::Class),
    ("static", TokenKind::Static),
    ("void", TokenKind::Void),
    ("main", TokenKind::Main),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Keyword),
    ("break", TokenKind::Keyword),
    ("continue", TokenKind::Keyword),
    ("while", TokenKind::Keyword),
    ("for", TokenKind::Keyword),
    ("System", TokenKind::Keyword),
    ("out", TokenKind::Keyword),
    ("println", TokenKind::Keyword),
    ("print", TokenKind::Keyword),
    ("equals", TokenKind::Keyword),
    ("args", TokenKind::Keyword),
    ("true", TokenKind::Keyword),
    ("false", TokenKind::Keyword),
    ("null", TokenKind::Keyword),
    ("int", TokenKind::Type),
    ("String", TokenKind::Type),
    ("boolean", TokenKind::Type),
    ("double", TokenKind::Type),
    ("float", TokenKind::Type),
    ("char", TokenKind::Type),
    ("long", TokenKind::Type),
];

pub static JAVA: DialectSpec = DialectSpec {
    name: "java",
    extensions: &[".java"],
    scan: scan_with::<JavaLexeme>,
    reserved: RESERVED,
    grammar: Grammar {
        shape: ProgramShape::Class,
        declaration_starts: &[TokenKind::Type],
        type_annotations: false,
        semicolon: SemicolonRule::Required,
        body_declarations: false,
    },
    semantics: Semantics {
        passes: &[
            Pass::ClassSkeleton,
            Pass::Declarations,
            Pass::IfConditions,
            Pass::PrintlnCalls,
            Pass::Unused,
            Pass::TypeSummary,
            Pass::MalformedTokens,
            Pass::Juxtaposition,
        ],
        declaration: DeclarationRule {
            starts: &[TokenKind::Type],
            naming: Naming::Verbatim,
            annotations: false,
            checked: true,
        },
        builtins: &[
            "system", "out", "println", "print", "equals", "length", "args", "public", "class",
            "static", "void", "main", "if", "else", "true", "false", "null",
        ],
    },
};
