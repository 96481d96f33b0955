//! Flat symbol table: one entry per name, no scopes

use std::collections::{HashMap, HashSet};

/// A declared variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInfo {
    pub name: String,
    pub declared_type: String,
    /// Text of the first token of the initializer, empty if none
    pub initial_value: String,
    pub line: usize,
    pub column: usize,
}

/// Declared variables of one analysis run.
///
/// Redeclaring a name overwrites its entry but keeps its position in
/// declaration order.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: HashMap<String, VariableInfo>,
    order: Vec<String>,
    /// Offsets of the name tokens at declaration sites
    sites: HashSet<usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration whose name token starts at `site`
    pub fn declare(&mut self, info: VariableInfo, site: usize) {
        self.sites.insert(site);
        if !self.variables.contains_key(&info.name) {
            self.order.push(info.name.clone());
        }
        self.variables.insert(info.name.clone(), info);
    }

    pub fn get(&self, name: &str) -> Option<&VariableInfo> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Declared type of `name`, if declared
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|info| info.declared_type.as_str())
    }

    /// True if a token at `offset` is the name in a declaration
    pub fn is_declaration_site(&self, offset: usize) -> bool {
        self.sites.contains(&offset)
    }

    /// Entries in first-declaration order
    pub fn iter(&self) -> impl Iterator<Item = &VariableInfo> {
        self.order.iter().filter_map(|name| self.variables.get(name))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, ty: &str, line: usize) -> VariableInfo {
        VariableInfo {
            name: name.to_string(),
            declared_type: ty.to_string(),
            initial_value: String::new(),
            line,
            column: 1,
        }
    }

    #[test]
    fn test_redeclaration_overwrites_in_place() {
        let mut table = SymbolTable::new();
        table.declare(info("a", "int", 1), 4);
        table.declare(info("b", "int", 2), 14);
        table.declare(info("a", "float", 3), 24);

        assert_eq!(table.len(), 2);
        assert_eq!(table.type_of("a"), Some("float"));
        let names: Vec<_> = table.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(table.is_declaration_site(4));
        assert!(table.is_declaration_site(24));
        assert!(!table.is_declaration_site(5));
    }
}
