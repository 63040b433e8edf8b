//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= ';'
//!             | identifier ':' statement
//!             | identifier '=' expression ';'
//!             | '{' statement* '}'
//!             | ('var' | 'const') identifier ':' type ';'
//!             | 'while' '(' expression ')' statement
//!             | 'goto' identifier ';'
//!             | expression ';'
//! ```
//!
//! One token of lookahead past an identifier picks between a label, an
//! assignment and an expression statement.  Parsing a statement always
//! consumes at least one token, so the block and module loops terminate.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::diagnostics::{Arg, ErrorCode};
use crate::parser::ast::*;
use crate::parser::expressions::starts_expression;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use crate::symbols::{ResolveError, Symbol, Usage};
use std::io::BufRead;

impl<'a, R: BufRead> Parser<'a, R> {
    /// Parse a statement. Empty and abandoned statements yield `None`.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        self.recovering = false;

        match self.current().kind() {
            TokenKind::Semicolon => {
                self.advance();
                None
            }
            TokenKind::LBrace => Some(self.parse_compound_statement()),
            TokenKind::Var | TokenKind::Const => self.parse_declaration(),
            TokenKind::While => Some(self.parse_while_statement()),
            TokenKind::Goto => self.parse_goto_statement(),
            TokenKind::Identifier if self.check_next(TokenKind::Colon) => {
                Some(self.parse_labeled_statement())
            }
            TokenKind::Identifier if self.check_next(TokenKind::Assign) => {
                Some(self.parse_assignment_statement())
            }
            kind if starts_expression(kind) => Some(self.parse_expression_statement()),
            _ => {
                let found = self.current().clone();
                self.error(ErrorCode::ParseUnexpectedSymbol, vec![Arg::Token(found)]);
                self.advance();
                self.skip_statement();
                None
            }
        }
    }

    /// Statement after a label or loop header; `None` before `}` or end of file.
    fn parse_nested_statement(&mut self) -> Option<Box<Stmt>> {
        if self.check(TokenKind::RBrace) || self.is_at_end() {
            return None;
        }
        self.parse_statement().map(Box::new)
    }

    /// `{ statement* }`. Blocks do not open a scope.
    fn parse_compound_statement(&mut self) -> Stmt {
        let location = self.location();
        self.advance(); // {

        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
        }
        self.expect(TokenKind::RBrace, &[]);

        Stmt::Compound {
            statements,
            location,
        }
    }

    fn parse_while_statement(&mut self) -> Stmt {
        let location = self.location();
        self.advance(); // while

        self.expect(TokenKind::LParen, &[TokenKind::RParen]);
        let condition = self.parse_expression();
        self.expect(TokenKind::RParen, &[TokenKind::LBrace]);
        let body = self.parse_nested_statement();

        Stmt::While {
            condition,
            body,
            location,
        }
    }

    /// `name: statement`, resolving any earlier `goto name`.
    fn parse_labeled_statement(&mut self) -> Stmt {
        let location = self.location();
        let ident = self.advance();
        self.advance(); // :

        let name = ident.literal();
        let label = match self.symbols.find(self.scope, name) {
            Some(id) => {
                match self.symbols.resolve_label(id, ident.line()) {
                    Ok(()) => {}
                    Err(ResolveError::NotALabel(_)) | Err(ResolveError::AlreadyDefined(_)) => {
                        self.error_already_defined(ident.line(), name, id);
                    }
                }
                id
            }
            None => self
                .symbols
                .add(self.scope, Symbol::new(name, Usage::Label, ident.line())),
        };

        let statement = self.parse_nested_statement();
        Stmt::Labeled {
            label,
            statement,
            location,
        }
    }

    /// `goto name;`. An unseen name becomes an undefined label.
    fn parse_goto_statement(&mut self) -> Option<Stmt> {
        let location = self.location();
        self.advance(); // goto

        if !self.check(TokenKind::Identifier) {
            self.error_expected(TokenKind::Identifier);
            self.skip_statement();
            return None;
        }

        let ident = self.advance();
        let label = match self.symbols.find(self.scope, ident.literal()) {
            Some(id) if self.symbols.symbol(id).usage() == Usage::Label => id,
            Some(_) => {
                self.error_at(
                    ident.line(),
                    ErrorCode::ParseExpectedSymbol,
                    vec![Arg::Token(ident), Arg::Text("label".to_string())],
                );
                self.skip_statement();
                return None;
            }
            None => self.symbols.add(
                self.scope,
                Symbol::new(ident.literal(), Usage::Label, ident.line()).undefined(),
            ),
        };

        self.expect(TokenKind::Semicolon, &[]);
        Some(Stmt::Goto { label, location })
    }

    /// `name = expression;`
    fn parse_assignment_statement(&mut self) -> Stmt {
        let location = self.location();
        let ident = self.advance();
        let target = self.resolve_variable(&ident);

        if self.symbols.symbol(target).usage() != Usage::Variable {
            self.error_at(
                ident.line(),
                ErrorCode::ParseAssignToNonVar,
                vec![Arg::Symbol(ident.literal().to_string())],
            );
        }

        self.advance(); // =
        let value = self.parse_expression();
        self.expect(TokenKind::Semicolon, &[]);

        Stmt::Assignment {
            target,
            value,
            location,
        }
    }

    fn parse_expression_statement(&mut self) -> Stmt {
        let location = self.location();
        let expr = self.parse_expression();
        self.expect(TokenKind::Semicolon, &[]);
        Stmt::Expression { expr, location }
    }
}
