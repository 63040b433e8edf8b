//! Tern source parser
//!
//! This module transforms Tern source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds, literal values and spans
//! - [`lexer`]: Tokenization (line-buffered source → tokens)
//! - [`parse`]: The [`Parser`] and its recovery machinery
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Types: built-in `int`, `char`, `float`, `string`, plus `class` and `enum`
//! - Statements: `var`/`const` declarations, assignments, blocks, labels,
//!   `goto`, `while`, expression statements
//! - Expressions: equality, relational, shift and arithmetic operators,
//!   prefix unary operators, casts, `sizeof`/`typeof`, calls
//!
//! # Parser Implementation
//!
//! Hand-written single-pass recursive descent parser.  Names are bound to
//! [`crate::symbols::SymbolTable`] entries while parsing.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use parse::Parser;
