//! # Introduction
//!
//! Tern is the front end of a small compiled language.  It turns source text
//! into an AST whose identifiers are already bound to symbol-table entries,
//! in a single pass and with panic-mode error recovery.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser ⇄ SymbolTable → Module (+ SymbolTable)
//!                    ↓
//!                 Reporter
//! ```
//!
//! 1. [`parser::lexer`]: line-buffered tokenizer with one token of lookahead.
//! 2. [`symbols`]: arena of nested scopes; labels may be forward-referenced.
//! 3. [`parser`]: recursive descent over statements, precedence climbing
//!    over expressions, binding names as it goes.
//! 4. [`diagnostics`]: numeric error codes and the [`diagnostics::Reporter`]
//!    sink; the core never formats text itself.
//!
//! Code generation, module loading and type checking beyond symbol kinds are
//! left to the consumers of the returned [`CompilationUnit`].

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod symbols;

use std::io::BufRead;

use config::FrontendConfig;
use diagnostics::Reporter;
use error::FrontendError;
use parser::ast::Module;
use parser::lexer::Lexer;
use parser::Parser;
use symbols::SymbolTable;

/// Output of one compilation unit.
#[derive(Debug)]
pub struct CompilationUnit {
    pub module: Module,
    pub symbols: SymbolTable,
    /// An unterminated block comment ended the input early
    pub truncated: bool,
}

/// Lex and parse everything `input` yields.
///
/// Diagnostics go to `reporter`; check its error count before handing the
/// unit to later stages.
pub fn compile<R: BufRead>(
    input: R,
    config: &FrontendConfig,
    reporter: &mut dyn Reporter,
) -> Result<CompilationUnit, FrontendError> {
    let mut symbols = SymbolTable::new();
    let lexer = Lexer::new(input, config.clone());

    let (module, truncated) = {
        let mut parser = Parser::new(lexer, &mut symbols, reporter);
        let module = parser.parse_module()?;
        (module, parser.truncated())
    };

    Ok(CompilationUnit {
        module,
        symbols,
        truncated,
    })
}

/// [`compile`] over an in-memory string.
pub fn parse_source(
    source: &str,
    config: &FrontendConfig,
    reporter: &mut dyn Reporter,
) -> Result<CompilationUnit, FrontendError> {
    compile(source.as_bytes(), config, reporter)
}
