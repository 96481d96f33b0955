//! Semantic analysis over the token stream
//!
//! The analyzer does not look at parser output. It scans the raw tokens,
//! builds a flat symbol table and runs the dialect's passes in order, each
//! appending [`Finding`](crate::common::Finding)s to one shared list.

mod analyzer;
mod java;
mod lexical;
mod loops;
mod symbols;
mod usage;

pub use analyzer::{analyze, SemanticAnalyzer};
pub use symbols::{SymbolTable, VariableInfo};

use crate::frontend::lexer::TokenKind;

/// One semantic check; a dialect lists the ones it runs, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Fill the symbol table from declaration patterns
    Declarations,
    /// `int x = x;`
    SelfReference,
    UseBeforeDeclaration,
    ForLoop,
    DoWhile,
    Undeclared,
    Unused,
    /// Whole-stream check for a comparison without any increment
    InfiniteLoop,
    MalformedNumbers,
    /// Adjacent operands with no operator between them
    Juxtaposition,
    ClassSkeleton,
    IfConditions,
    PrintlnCalls,
    TypeSummary,
    MalformedTokens,
}

/// How a declared variable's type is named
#[derive(Debug, Clone, Copy)]
pub enum Naming {
    /// Map the declaring word through a table; unmapped words give `unknown`
    Inferred(&'static [(&'static str, &'static str)]),
    /// The declaring word is the type
    Verbatim,
}

impl Naming {
    pub fn type_name(self, word: &str) -> String {
        match self {
            Naming::Verbatim => word.to_string(),
            Naming::Inferred(table) => {
                let lower = word.to_lowercase();
                table
                    .iter()
                    .find(|(declaring, _)| *declaring == lower)
                    .map_or("unknown", |&(_, ty)| ty)
                    .to_string()
            }
        }
    }
}

/// Shape of the declarations the symbol table is built from
#[derive(Debug, Clone, Copy)]
pub struct DeclarationRule {
    /// Kinds of the token before the declared name
    pub starts: &'static [TokenKind],
    pub naming: Naming,
    /// `name: type` overrides the inferred type
    pub annotations: bool,
    /// Validate the initial value against the declared type
    pub checked: bool,
}

impl DeclarationRule {
    pub fn starts_with(&self, kind: TokenKind) -> bool {
        self.starts.contains(&kind)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Semantics {
    pub passes: &'static [Pass],
    pub declaration: DeclarationRule,
    /// Names never treated as variables, compared case-insensitively
    pub builtins: &'static [&'static str],
}

impl Semantics {
    pub fn is_builtin(&self, word: &str) -> bool {
        self.builtins.iter().any(|builtin| builtin.eq_ignore_ascii_case(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inferred_naming() {
        let naming = Naming::Inferred(&[("let", "variable"), ("int", "number")]);
        assert_eq!(naming.type_name("let"), "variable");
        assert_eq!(naming.type_name("INT"), "number");
        assert_eq!(naming.type_name("boolean"), "unknown");
        assert_eq!(Naming::Verbatim.type_name("float"), "float");
    }

    #[test]
    fn test_builtins_ignore_case() {
        let semantics = crate::frontend::Dialect::Java.spec().semantics;
        assert!(semantics.is_builtin("System"));
        assert!(semantics.is_builtin("ARGS"));
        assert!(!semantics.is_builtin("count"));
    }
}
