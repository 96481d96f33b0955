//! JavaScript / TypeScript dialect
//!
//! The most complete dialect: `let`/`const`/`var` declarations with
//! optional `: type` annotations, ASI-style lenient semicolons after
//! top-level declarations, and the full loop pass battery.

mod lexeme;

pub use lexeme::JsLexeme;

use crate::frontend::lexer::{scan_with, TokenKind};
use crate::frontend::parser::{Grammar, ProgramShape, SemicolonRule};
use crate::frontend::sema::{DeclarationRule, Naming, Pass, Semantics};
use crate::frontend::DialectSpec;

const RESERVED: &[(&str, TokenKind)] = &[
    ("for", TokenKind::For),
    ("do", TokenKind::Do),
    ("while", TokenKind::While),
    ("let", TokenKind::Keyword),
    ("const", TokenKind::Keyword),
    ("var", TokenKind::Keyword),
    ("console", TokenKind::Keyword),
    ("int", TokenKind::Type),
    ("string", TokenKind::Type),
    ("number", TokenKind::Type),
    ("boolean", TokenKind::Type),
];

/// Declaring word to the semantic type it implies
const INFERRED_TYPES: &[(&str, &str)] = &[
    ("int", "number"),
    ("string", "string"),
    ("let", "variable"),
    ("const", "constant"),
    ("var", "variable"),
];

pub static JS: DialectSpec = DialectSpec {
    name: "js",
    extensions: &[".js", ".ts", ".mjs", ".cjs"],
    scan: scan_with::<JsLexeme>,
    reserved: RESERVED,
    grammar: Grammar {
        shape: ProgramShape::Statements,
        declaration_starts: &[TokenKind::Keyword, TokenKind::Type],
        type_annotations: true,
        semicolon: SemicolonRule::SameLine,
        body_declarations: false,
    },
    semantics: Semantics {
        passes: &[
            Pass::Declarations,
            Pass::ForLoop,
            Pass::Undeclared,
            Pass::Unused,
            Pass::InfiniteLoop,
            Pass::MalformedNumbers,
            Pass::Juxtaposition,
            Pass::DoWhile,
        ],
        declaration: DeclarationRule {
            starts: &[TokenKind::Keyword, TokenKind::Type],
            naming: Naming::Inferred(INFERRED_TYPES),
            annotations: true,
            checked: false,
        },
        builtins: &["console", "log", "system", "out", "println", "print", "length"],
    },
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::frontend::lexer::tokenize;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source, &JS).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_for_header() {
        assert_eq!(
            kinds("for(let i=0;i<5;i++)"),
            vec![
                TokenKind::For,
                TokenKind::LParen,
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Assignment,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Comparison,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Increment,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_strict_equality_is_one_token() {
        let tokens = tokenize("a !== b", &JS);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Comparison);
        assert_eq!(tokens[1].text, "!==");
    }

    #[test]
    fn test_malformed_number() {
        let tokens = tokenize("123abc", &JS);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "123abc");
    }

    #[test]
    fn test_decimal_number() {
        let tokens = tokenize("3.14", &JS);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
    }

    #[test]
    fn test_type_annotation() {
        assert_eq!(
            kinds("let n: number = 1"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Type,
                TokenKind::Assignment,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_dot_is_unknown() {
        let tokens = tokenize("console.log", &JS);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].text, ".");
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_strings_both_quotes() {
        let tokens = tokenize(r#""a\"b" 'c'"#, &JS);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, r#""a\"b""#);
        assert_eq!(tokens[1].text, "'c'");
        assert!(tokens.iter().all(|t| t.kind == TokenKind::String));
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = tokenize("x = \"open", &JS);
        assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("\"open"));
    }

    #[test]
    fn test_no_comment_syntax() {
        assert_eq!(
            kinds("// x"),
            vec![TokenKind::Operator, TokenKind::Operator, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("let a = 1\n  a++", &JS);
        let last = &tokens[tokens.len() - 1];
        assert_eq!(last.kind, TokenKind::Increment);
        assert_eq!((last.line, last.column), (2, 4));
        assert_eq!(last.offset, 13);
    }
}
