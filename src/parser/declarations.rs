//! Declaration parsing implementation
//!
//! - Variables and constants: `var x : int ;`, `const k : float ;`
//! - Classes: `class Point { var x : int ; var y : int ; }`
//! - Enums: `enum Color { Red, Green = 4, Blue }`
//! - Imports: `import io ;`
//!
//! `class`, `enum` and `import` are only accepted at module level.  Class and
//! enum bodies get their own scope, nested in the declaring scope and named
//! after the type.

use crate::diagnostics::{Arg, ErrorCode};
use crate::parser::ast::*;
use crate::parser::parse::Parser;
use crate::parser::token::{TokenKind, Value};
use crate::symbols::{Symbol, SymbolId, TypeDecl, TypeKind, Usage};
use std::io::BufRead;
use std::mem;

impl<'a, R: BufRead> Parser<'a, R> {
    /// Parse `('var' | 'const') identifier ':' type ';'` into the current scope.
    ///
    /// A name visible anywhere in the scope chain is a redefinition.  When
    /// the type is unusable the variable is still declared, so later uses do
    /// not cascade, but no statement is produced.
    pub(crate) fn parse_declaration(&mut self) -> Option<Stmt> {
        let location = self.location();
        let modifier = match self.advance().kind() {
            TokenKind::Const => DeclModifier::Const,
            _ => DeclModifier::Var,
        };

        if !self.check(TokenKind::Identifier) {
            self.error_expected(TokenKind::Identifier);
            self.skip_statement();
            return None;
        }
        let ident = self.advance();
        let existing = self.symbols.find(self.scope, ident.literal());

        self.expect(TokenKind::Colon, &[TokenKind::Identifier]);
        let ty = self.parse_type_name(ident.literal());

        if let Some(existing) = existing {
            self.error_already_defined(ident.line(), ident.literal(), existing);
            self.expect(TokenKind::Semicolon, &[]);
            return None;
        }

        let usage = match modifier {
            DeclModifier::Const => Usage::Constant,
            DeclModifier::Var => Usage::Variable,
        };
        let mut symbol = Symbol::new(ident.literal(), usage, ident.line());
        if let Some(ty) = ty {
            symbol = symbol.with_type(ty);
        }
        let symbol = self.symbols.add(self.scope, symbol);

        self.expect(TokenKind::Semicolon, &[]);

        ty.map(|ty| Stmt::VariableDecl {
            modifier,
            ty,
            symbol,
            location,
        })
    }

    /// Type name after the `:` of a declaration of `declaring`.
    ///
    /// An undeclared name gets a placeholder `Type`, unless it is the name
    /// being declared.
    fn parse_type_name(&mut self, declaring: &str) -> Option<SymbolId> {
        if !self.check(TokenKind::Identifier) {
            self.error_expected(TokenKind::Identifier);
            return None;
        }

        let name = self.advance();
        match self.symbols.find(self.scope, name.literal()) {
            Some(id) if self.symbols.symbol(id).is_type() => Some(id),
            Some(_) => {
                self.error_at(
                    name.line(),
                    ErrorCode::ParseTypeExpected,
                    vec![Arg::Kind(TokenKind::Colon)],
                );
                None
            }
            None => {
                self.error_at(
                    name.line(),
                    ErrorCode::ParseTypeUndefined,
                    vec![Arg::Symbol(name.literal().to_string())],
                );
                if name.literal() == declaring {
                    return None;
                }
                let placeholder = Symbol::new(name.literal(), Usage::Type, name.line()).undefined();
                Some(self.symbols.add(self.scope, placeholder))
            }
        }
    }

    /// Name of a new class or enum, or a generated one when it is missing or taken.
    ///
    /// The flag is `false` when the name was missing.
    fn declared_type_name(&mut self) -> (String, usize, bool) {
        let line = self.current().line();

        if !self.check(TokenKind::Identifier) {
            self.error_expected(TokenKind::Identifier);
            return (self.symbols.gen_name(self.scope), line, false);
        }

        let ident = self.advance();
        if let Some(existing) = self.symbols.find(self.scope, ident.literal()) {
            self.error_already_defined(ident.line(), ident.literal(), existing);
            return (self.symbols.gen_name(self.scope), ident.line(), true);
        }

        (ident.literal().to_string(), ident.line(), true)
    }

    /// Register a `Type` symbol owning a fresh member scope.
    fn declare_type(&mut self, kind: TypeKind, name: String, line: usize) -> (SymbolId, TypeDecl) {
        let members = self.symbols.new_scope(self.scope, Some(name.as_str()));
        let definition = TypeDecl {
            kind,
            name: name.clone(),
            members,
        };
        let symbol = Symbol::new(name, Usage::Type, line).with_definition(definition.clone());
        (self.symbols.add(self.scope, symbol), definition)
    }

    /// `class Name { member* }`
    ///
    /// The type is registered before its body so members may refer to it.
    pub(crate) fn parse_class(&mut self) {
        self.advance(); // class
        let (name, line, named) = self.declared_type_name();
        let (class_type, definition) = self.declare_type(TypeKind::Class, name, line);

        let opened = self.expect(TokenKind::LBrace, &[]);

        let outer = mem::replace(&mut self.scope, definition.members);
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            self.recovering = false;
            match self.current().kind() {
                TokenKind::Var | TokenKind::Const => {
                    self.parse_declaration();
                }
                TokenKind::Semicolon => {
                    self.advance();
                }
                _ => {
                    let found = self.current().clone();
                    self.error(ErrorCode::ParseUnexpectedSymbol, vec![Arg::Token(found)]);
                    self.advance();
                    self.skip_statement();
                }
            }
        }
        self.scope = outer;

        let closed = self.expect(TokenKind::RBrace, &[]);
        if !(named && opened && closed) {
            self.symbols.mark_malformed(class_type);
        }
    }

    /// `enum Name { A, B = 4, C }`
    ///
    /// Enumerators are constants of the enum type; unnumbered ones continue
    /// from the previous value, starting at 0.
    pub(crate) fn parse_enum(&mut self) {
        self.advance(); // enum
        let (name, line, named) = self.declared_type_name();
        let (enum_type, definition) = self.declare_type(TypeKind::Enum, name, line);
        let members = definition.members;

        let opened = self.expect(TokenKind::LBrace, &[]);

        let mut next: i64 = 0;
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if !self.check(TokenKind::Identifier) {
                self.error_expected(TokenKind::Identifier);
                self.resync(None, &[TokenKind::Comma]);
                if !self.match_token(TokenKind::Comma) {
                    self.match_token(TokenKind::Semicolon);
                }
                continue;
            }

            let ident = self.advance();
            if self.match_token(TokenKind::Assign) {
                if let Some(value) = self.parse_enum_value() {
                    next = value;
                }
            }

            if let Some(existing) = self.symbols.find(members, ident.literal()) {
                self.error_already_defined(ident.line(), ident.literal(), existing);
            } else {
                let constant = Symbol::new(ident.literal(), Usage::Constant, ident.line())
                    .with_type(enum_type)
                    .with_value(Value::Int(next));
                self.symbols.add(members, constant);
            }
            next = next.wrapping_add(1);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        let closed = self.expect(TokenKind::RBrace, &[]);
        if !(named && opened && closed) {
            self.symbols.mark_malformed(enum_type);
        }
    }

    /// Explicit enumerator value: an integer constant, optionally negated.
    fn parse_enum_value(&mut self) -> Option<i64> {
        let negative = self.match_token(TokenKind::Minus);

        if !self.check(TokenKind::IntConst) {
            self.error_expected(TokenKind::IntConst);
            return None;
        }

        let value = self.advance().value().and_then(|v| v.as_int())?;
        Some(if negative { value.wrapping_neg() } else { value })
    }

    /// `import name;`
    pub(crate) fn parse_import(&mut self) -> Option<Import> {
        let location = self.location();
        self.advance(); // import

        if !self.check(TokenKind::Identifier) {
            self.error_expected(TokenKind::Identifier);
            self.skip_statement();
            return None;
        }

        let ident = self.advance();
        if !self.expect(TokenKind::Semicolon, &[]) {
            return None;
        }

        Some(Import {
            name: ident.literal().to_string(),
            location,
        })
    }
}
