//! Scoped symbol table
//!
//! Scopes live in an arena and are addressed by [`ScopeId`]; each scope keeps
//! its parent handle, fixed when the scope is created.  Symbols live in a
//! second arena addressed by [`SymbolId`], so the AST and other symbols refer
//! to them by handle and the table stays the single owner.
//!
//! # Lookup
//!
//! ```text
//! find(scope, n)        scope → parent → ... → root
//! find_local(scope, n)  scope only
//! ```

use super::symbol::{Symbol, SymbolId, Usage};
use rustc_hash::FxHashMap;
use std::fmt;

/// Handle to a scope inside a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// Names pre-declared in the root scope.
pub const BUILTIN_TYPES: [&str; 4] = ["int", "char", "float", "string"];

#[derive(Debug, Clone)]
struct Scope {
    parent: Option<ScopeId>,
    owner: Option<String>,
    entries: FxHashMap<String, SymbolId>,
    counter: usize, // last number handed out by gen_name
}

/// Why a label could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The symbol exists but was declared as something other than a label
    NotALabel(Usage),
    /// The label was already declared on the given line
    AlreadyDefined(usize),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotALabel(usage) => write!(f, "symbol is a {}, not a label", usage),
            ResolveError::AlreadyDefined(line) => {
                write!(f, "label already defined on line {}", line)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table with a root scope holding the built-in types.
    pub fn new() -> Self {
        let mut table = Self {
            scopes: vec![Scope {
                parent: None,
                owner: None,
                entries: FxHashMap::default(),
                counter: 0,
            }],
            symbols: Vec::new(),
        };
        table.init_global();
        table
    }

    fn init_global(&mut self) {
        let root = self.root();
        for name in BUILTIN_TYPES {
            self.add(root, Symbol::builtin_type(name));
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Open a scope nested in `parent`. `owner` names the declaration that
    /// owns it and feeds [`SymbolTable::gen_name`].
    pub fn new_scope(&mut self, parent: ScopeId, owner: Option<&str>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent: Some(parent),
            owner: owner.map(str::to_string),
            entries: FxHashMap::default(),
            counter: 0,
        });
        id
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0].parent
    }

    /// Add `symbol` to `scope`.
    ///
    /// If the scope already has an entry with the same name, that entry is
    /// returned and `symbol` is discarded.
    pub fn add(&mut self, scope: ScopeId, symbol: Symbol) -> SymbolId {
        if let Some(&existing) = self.scopes[scope.0].entries.get(symbol.name()) {
            return existing;
        }

        let id = SymbolId(self.symbols.len());
        self.scopes[scope.0]
            .entries
            .insert(symbol.name().to_string(), id);
        self.symbols.push(symbol);
        id
    }

    /// Look `name` up in `scope` and then its ancestors.
    pub fn find(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(&symbol) = scope.entries.get(name) {
                return Some(symbol);
            }
            current = scope.parent;
        }
        None
    }

    pub fn find_local(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        self.scopes[scope.0].entries.get(name).copied()
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    /// Convenience: find by name and borrow the record.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Symbol> {
        self.find(scope, name).map(|id| self.symbol(id))
    }

    /// Names declared directly in `scope`, sorted.
    pub fn names(&self, scope: ScopeId) -> Vec<&str> {
        let mut names: Vec<&str> = self.scopes[scope.0]
            .entries
            .keys()
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    /// Mint a name no visible symbol uses yet.
    ///
    /// Root scope names are `__ANON_<n>`; nested scopes prefix the counter
    /// with the owner chain, e.g. `__ANON_Point_1`.
    pub fn gen_name(&mut self, scope: ScopeId) -> String {
        let prefix = self.name_prefix(scope);
        loop {
            self.scopes[scope.0].counter += 1;
            let name = format!("{}_{}", prefix, self.scopes[scope.0].counter);
            if self.find(scope, &name).is_none() {
                return name;
            }
        }
    }

    fn name_prefix(&self, scope: ScopeId) -> String {
        let entry = &self.scopes[scope.0];
        match entry.parent {
            None => "__ANON".to_string(),
            Some(parent) => {
                let owner = entry.owner.as_deref().unwrap_or("ANON");
                format!("{}_{}", self.name_prefix(parent), owner)
            }
        }
    }

    /// Resolve a forward-referenced label at its declaration line.
    ///
    /// Only an undefined `Label` may be resolved, and only once.
    pub fn resolve_label(&mut self, id: SymbolId, line: usize) -> Result<(), ResolveError> {
        let symbol = &mut self.symbols[id.0];
        if symbol.usage() != Usage::Label {
            return Err(ResolveError::NotALabel(symbol.usage()));
        }
        if !symbol.is_undefined() {
            return Err(ResolveError::AlreadyDefined(symbol.line()));
        }
        symbol.define_at(line);
        Ok(())
    }

    /// Flag a type whose declaration was cut short by a syntax error.
    pub fn mark_malformed(&mut self, id: SymbolId) {
        self.symbols[id.0].mark_malformed();
    }

    /// Labels that were referenced but never declared, in order of first use.
    pub fn undefined_labels(&self) -> Vec<SymbolId> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| s.usage() == Usage::Label && s.is_undefined())
            .map(|(i, _)| SymbolId(i))
            .collect()
    }

    /// Total number of symbols across all scopes.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_seeded() {
        let table = SymbolTable::new();
        let root = table.root();
        assert_eq!(table.names(root), vec!["char", "float", "int", "string"]);
        for name in BUILTIN_TYPES {
            let symbol = table.lookup(root, name).unwrap();
            assert!(symbol.is_special());
            assert!(symbol.is_type());
        }
        assert_eq!(table.parent(root), None);
    }

    #[test]
    fn test_gen_name_root_and_nested() {
        let mut table = SymbolTable::new();
        let root = table.root();
        assert_eq!(table.gen_name(root), "__ANON_1");
        assert_eq!(table.gen_name(root), "__ANON_2");

        let point = table.new_scope(root, Some("Point"));
        assert_eq!(table.gen_name(point), "__ANON_Point_1");

        let inner = table.new_scope(point, None);
        assert_eq!(table.gen_name(inner), "__ANON_Point_ANON_1");
    }

    #[test]
    fn test_gen_name_skips_taken_names() {
        let mut table = SymbolTable::new();
        let root = table.root();
        table.add(root, Symbol::new("__ANON_1", Usage::Variable, 1));
        assert_eq!(table.gen_name(root), "__ANON_2");
    }

    #[test]
    fn test_resolve_label_transitions_once() {
        let mut table = SymbolTable::new();
        let root = table.root();
        let label = table.add(root, Symbol::new("top", Usage::Label, 2).undefined());

        assert_eq!(table.undefined_labels(), vec![label]);
        assert_eq!(table.resolve_label(label, 7), Ok(()));
        assert_eq!(table.symbol(label).line(), 7);
        assert!(table.undefined_labels().is_empty());
        assert_eq!(
            table.resolve_label(label, 9),
            Err(ResolveError::AlreadyDefined(7))
        );
    }

    #[test]
    fn test_resolve_rejects_non_label() {
        let mut table = SymbolTable::new();
        let root = table.root();
        let var = table.add(root, Symbol::new("x", Usage::Variable, 1).undefined());
        assert_eq!(
            table.resolve_label(var, 3),
            Err(ResolveError::NotALabel(Usage::Variable))
        );
        assert!(table.symbol(var).is_undefined());
    }
}
