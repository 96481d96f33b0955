//! Dialect frontends
//!
//! A dialect is not a type but a value: a [`DialectSpec`] bundling the
//! dialect's lexeme set, reserved-word table, grammar description and
//! semantic pass list. The lexer, parser and analyzer are generic over it:
//! 1. Lexing source into classified tokens
//! 2. Checking loop grammar over the token stream
//! 3. Running the semantic passes over the same stream

pub mod c;
pub mod java;
pub mod js;
pub mod lexer;
pub mod parser;
pub mod sema;

use std::fmt;
use std::path::Path;

use crate::common::{CheckError, CheckResult};
use lexer::{RawToken, TokenKind};

pub use parser::{Grammar, ProgramShape, SemicolonRule};
pub use sema::{DeclarationRule, Naming, Pass, Semantics};

/// Options passed down from the command line
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub dump_tokens: bool,
    pub verbose: bool,
}

/// Immutable description of one dialect
#[derive(Debug)]
pub struct DialectSpec {
    /// Display name (e.g., "js", "c")
    pub name: &'static str,
    /// File extensions handled, with the leading dot
    pub extensions: &'static [&'static str],
    /// Raw logos scan producing unclassified tokens
    pub scan: fn(&str) -> Vec<RawToken>,
    /// Words that replace the `IDENTIFIER` category when matched exactly
    pub reserved: &'static [(&'static str, TokenKind)],
    pub grammar: Grammar,
    pub semantics: Semantics,
}

impl DialectSpec {
    /// Category a reserved word takes, if `text` is one
    pub fn reserved_kind(&self, text: &str) -> Option<TokenKind> {
        self.reserved
            .iter()
            .find(|(word, _)| *word == text)
            .map(|&(_, kind)| kind)
    }

    /// True if this dialect handles files with extension `ext` (with dot)
    pub fn handles_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// The supported dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// JavaScript / TypeScript subset
    Js,
    /// C subset
    C,
    /// Java subset (single class with `main`)
    Java,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Js, Dialect::C, Dialect::Java];

    pub fn spec(self) -> &'static DialectSpec {
        match self {
            Dialect::Js => &js::JS,
            Dialect::C => &c::C,
            Dialect::Java => &java::JAVA,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Resolve a dialect from its name; `ts` is an alias of `js`
    pub fn from_name(name: &str) -> CheckResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "js" | "ts" | "javascript" | "typescript" => Ok(Dialect::Js),
            "c" => Ok(Dialect::C),
            "java" => Ok(Dialect::Java),
            _ => Err(CheckError::unknown_dialect(name)),
        }
    }

    /// Find the dialect handling `ext` (with or without the leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{ext}")
        };
        Self::ALL.into_iter().find(|d| d.spec().handles_extension(&ext))
    }

    /// Detect the dialect of a file from its extension
    pub fn detect(path: &Path) -> CheckResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| CheckError::undetected_dialect(path.display().to_string()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
