//! Symbol records
//!
//! A [`Symbol`] is immutable once it is added to the table, with two
//! exceptions: a forward-referenced label may move from
//! [`SymbolState::Undefined`] to [`SymbolState::Defined`], and only through
//! [`super::SymbolTable::resolve_label`]; a type whose declaration turned out
//! broken is flagged by [`super::SymbolTable::mark_malformed`].

use super::table::ScopeId;
use crate::parser::token::Value;
use std::fmt;

/// Handle to a symbol owned by a [`super::SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub(crate) usize);

/// The syntactic role a name was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    Variable,
    Constant,
    Label,
    Type,
    Function,
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Usage::Variable => "variable",
            Usage::Constant => "constant",
            Usage::Label => "label",
            Usage::Type => "type",
            Usage::Function => "function",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolState {
    Defined,
    /// Referenced before (or without) a declaration
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Enum,
}

/// Member namespace of a user-declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub name: String,
    /// Scope holding the members; its parent is the declaring scope
    pub members: ScopeId,
}

/// A named entry in a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: String,
    usage: Usage,
    type_ref: Option<SymbolId>,
    type_definition: Option<TypeDecl>,
    state: SymbolState,
    special: bool,
    malformed: bool,
    line: usize,
    value: Option<Value>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, usage: Usage, line: usize) -> Self {
        Self {
            name: name.into(),
            usage,
            type_ref: None,
            type_definition: None,
            state: SymbolState::Defined,
            special: false,
            malformed: false,
            line,
            value: None,
        }
    }

    /// Built-in type such as `int`.
    pub fn builtin_type(name: &str) -> Self {
        Self {
            special: true,
            ..Self::new(name, Usage::Type, 0)
        }
    }

    pub fn with_type(mut self, type_ref: SymbolId) -> Self {
        self.type_ref = Some(type_ref);
        self
    }

    pub fn with_definition(mut self, definition: TypeDecl) -> Self {
        self.type_definition = Some(definition);
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Mark the symbol as a placeholder for a name that was never declared.
    pub fn undefined(mut self) -> Self {
        self.state = SymbolState::Undefined;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    pub fn type_ref(&self) -> Option<SymbolId> {
        self.type_ref
    }

    pub fn type_definition(&self) -> Option<&TypeDecl> {
        self.type_definition.as_ref()
    }

    pub fn state(&self) -> SymbolState {
        self.state
    }

    pub fn is_undefined(&self) -> bool {
        self.state == SymbolState::Undefined
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    /// Declared with a missing name or brace; later stages should skip it.
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_type(&self) -> bool {
        self.usage == Usage::Type
    }

    pub(super) fn define_at(&mut self, line: usize) {
        self.state = SymbolState::Defined;
        self.line = line;
    }

    pub(super) fn mark_malformed(&mut self) {
        self.malformed = true;
    }
}
