//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the token helpers shared by
//! every grammar module, panic-mode error recovery and the module entry
//! point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, recovery and coordination
//! - `declarations`: `var`/`const`, `class`, `enum` and `import`
//! - `statements`: labels, assignments, blocks, `while`, `goto`
//! - `expressions`: precedence climbing through [`Parser::parse_binary`]
//!
//! # Error Recovery
//!
//! A mismatch reports one diagnostic and then skips tokens until a
//! synchronising token (`;`, `}` or a caller-supplied set) is current.  Once a
//! syntax error has been reported the parser is *recovering*: further syntax
//! errors are swallowed until the next statement begins.  Semantic errors
//! (undeclared names, redefinitions, misuse of types) are always reported.

use crate::diagnostics::{Arg, ErrorCode, Reporter};
use crate::error::FrontendError;
use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use crate::symbols::{Symbol, SymbolId, SymbolTable, ScopeId, Usage};
use std::io::BufRead;

/// Recursive descent parser for Tern
pub struct Parser<'a, R: BufRead> {
    pub(crate) lexer: Lexer<R>,
    pub(crate) symbols: &'a mut SymbolTable,
    pub(crate) reporter: &'a mut dyn Reporter,
    /// Scope new declarations go into
    pub(crate) scope: ScopeId,
    pub(crate) recovering: bool,
}

impl<'a, R: BufRead> Parser<'a, R> {
    pub fn new(
        lexer: Lexer<R>,
        symbols: &'a mut SymbolTable,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        let scope = symbols.root();
        let mut parser = Self {
            lexer,
            symbols,
            reporter,
            scope,
            recovering: false,
        };
        parser.flush_lexer();
        parser
    }

    /// Parse the whole unit.
    ///
    /// Always yields a [`Module`] unless the input stream itself fails.
    pub fn parse_module(&mut self) -> Result<Module, FrontendError> {
        let mut module = Module::new();

        while !self.is_at_end() {
            self.recovering = false;
            match self.current().kind() {
                TokenKind::Class => self.parse_class(),
                TokenKind::Enum => self.parse_enum(),
                TokenKind::Import => {
                    if let Some(import) = self.parse_import() {
                        module.imports.push(import);
                    }
                }
                _ => {
                    if let Some(stmt) = self.parse_statement() {
                        module.statements.push(stmt);
                    }
                }
            }
        }

        self.report_undefined_labels();
        self.flush_lexer();

        if let Some(err) = self.lexer.take_io_error() {
            return Err(FrontendError::Io(err));
        }
        Ok(module)
    }

    /// Whether an unterminated block comment cut the input short.
    pub fn truncated(&self) -> bool {
        self.lexer.is_truncated()
    }

    fn report_undefined_labels(&mut self) {
        for id in self.symbols.undefined_labels() {
            let symbol = self.symbols.symbol(id);
            let line = symbol.line();
            let name = symbol.name().to_string();
            self.reporter
                .report_error(line, ErrorCode::ParseUndefinedLabel, vec![Arg::Symbol(name)]);
        }
    }

    // ===== Helper methods =====

    pub(crate) fn current(&self) -> &Token {
        self.lexer.current()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lexer.current().is(kind)
    }

    pub(crate) fn check_next(&self, kind: TokenKind) -> bool {
        self.lexer.lookahead().is(kind)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfFile)
    }

    pub(crate) fn location(&self) -> SourceLocation {
        SourceLocation::of(self.current())
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.lexer.current().clone();
        self.lexer.advance();
        self.flush_lexer();
        if self.check(TokenKind::Error) {
            // Already reported by the lexer.
            self.recovering = true;
        }
        token
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn flush_lexer(&mut self) {
        for diagnostic in self.lexer.take_diagnostics() {
            self.reporter.report(diagnostic);
        }
    }

    // ===== Diagnostics =====

    /// Report `code` at the current token's line.
    pub(crate) fn error(&mut self, code: ErrorCode, args: Vec<Arg>) {
        let line = self.current().line();
        self.error_at(line, code, args);
    }

    pub(crate) fn error_at(&mut self, line: usize, code: ErrorCode, args: Vec<Arg>) {
        if code.is_syntax() {
            if self.recovering || self.check(TokenKind::Error) {
                self.recovering = true;
                return;
            }
            self.recovering = true;
        }
        self.reporter.report_error(line, code, args);
    }

    /// Report that the current token is not `expected`.
    pub(crate) fn error_expected(&mut self, expected: TokenKind) {
        if self.is_at_end() {
            self.error(ErrorCode::ParseUnexpectedEOF, vec![Arg::Kind(expected)]);
        } else {
            let found = self.current().clone();
            self.error(
                ErrorCode::ParseExpectedSymbol,
                vec![Arg::Token(found), Arg::Kind(expected)],
            );
        }
    }

    // ===== Recovery =====

    /// Skip tokens until one of `kind`, `;`, `}` or `extra` is current.
    pub(crate) fn resync(&mut self, kind: Option<TokenKind>, extra: &[TokenKind]) {
        while !self.is_at_end() {
            let current = self.current().kind();
            if Some(current) == kind
                || current == TokenKind::Semicolon
                || current == TokenKind::RBrace
                || extra.contains(&current)
            {
                break;
            }
            self.advance();
        }
    }

    /// Consume `kind`, or report and resynchronise.
    ///
    /// Returns `false` on a mismatch, even when resynchronising landed on
    /// `kind` and consumed it.
    pub(crate) fn expect(&mut self, kind: TokenKind, extra: &[TokenKind]) -> bool {
        if self.match_token(kind) {
            return true;
        }

        self.error_expected(kind);
        self.resync(Some(kind), extra);
        self.match_token(kind);
        false
    }

    /// Abandon the current statement: skip to its end and eat the `;`.
    pub(crate) fn skip_statement(&mut self) {
        self.resync(None, &[]);
        self.match_token(TokenKind::Semicolon);
    }

    // ===== Symbols =====

    /// Resolve a name used as a value, inserting an undefined placeholder
    /// the first time an undeclared name is seen.
    pub(crate) fn resolve_variable(&mut self, token: &Token) -> SymbolId {
        if let Some(id) = self.symbols.find(self.scope, token.literal()) {
            return id;
        }

        self.error_at(
            token.line(),
            ErrorCode::ParseUndeclaredVar,
            vec![Arg::Symbol(token.literal().to_string())],
        );
        self.symbols.add(
            self.scope,
            Symbol::new(token.literal(), Usage::Variable, token.line()).undefined(),
        )
    }

    /// Handle of a built-in type such as `int`.
    pub(crate) fn builtin(&mut self, name: &str) -> SymbolId {
        let root = self.symbols.root();
        // Idempotent: returns the seeded entry.
        self.symbols.add(root, Symbol::builtin_type(name))
    }

    /// Report `name` as already declared on `previous`'s line.
    pub(crate) fn error_already_defined(&mut self, line: usize, name: &str, previous: SymbolId) {
        let previous_line = self.symbols.symbol(previous).line() as i64;
        self.error_at(
            line,
            ErrorCode::ParseAlreadyDefined,
            vec![Arg::Symbol(name.to_string()), Arg::Number(previous_line)],
        );
    }
}
