//! Name resolution
//!
//! - [`symbol`]: [`Symbol`] records and their handles
//! - [`table`]: the scope arena, [`SymbolTable`]
//!
//! Only labels may be referenced before they are declared.  Such a reference
//! creates an undefined `Label` symbol which the declaration later resolves.

pub mod symbol;
pub mod table;

pub use symbol::{Symbol, SymbolId, SymbolState, TypeDecl, TypeKind, Usage};
pub use table::{ResolveError, ScopeId, SymbolTable, BUILTIN_TYPES};
