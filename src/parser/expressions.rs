//! Expression parsing implementation
//!
//! Binary levels are built from one combinator, [`Parser::parse_binary`],
//! fed a sub-parser and an operator table.  Lower levels bind tighter.
//!
//! # Grammar
//!
//! ```text
//! expression     ::= equality
//! equality       ::= relational     (('==' | '!=') relational)*
//! relational     ::= shift          (('<' | '>' | '<=' | '>=') shift)*
//! shift          ::= additive       (('<<' | '>>') additive)*
//! additive       ::= multiplicative (('+' | '-') multiplicative)*
//! multiplicative ::= cast           (('*' | '/' | '%') cast)*
//! cast           ::= '(' type ')' cast | unary
//! unary          ::= ('+' | '-' | '*' | '&' | '~' | '!') cast
//!                  | ('sizeof' | 'typeof') '(' identifier ')'
//!                  | primary
//! primary        ::= identifier | identifier '(' args ')' | constant
//!                  | '(' expression ')'
//! ```
//!
//! A parenthesis starts a cast only when the token after it names a type.
//! Every rule returns an [`Expr`]; failures become [`Expr::Dummy`].

use crate::diagnostics::{Arg, ErrorCode};
use crate::parser::ast::*;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use crate::symbols::{Symbol, SymbolId, Usage};
use std::io::BufRead;

type OperatorTable = [(TokenKind, BinaryOp)];

const EQUALITY: &OperatorTable = &[
    (TokenKind::Equals, BinaryOp::Eq),
    (TokenKind::NotEqual, BinaryOp::Ne),
];

const RELATIONAL: &OperatorTable = &[
    (TokenKind::Less, BinaryOp::Lt),
    (TokenKind::Greater, BinaryOp::Gt),
    (TokenKind::LessEqual, BinaryOp::Le),
    (TokenKind::GreaterEqual, BinaryOp::Ge),
];

const SHIFT: &OperatorTable = &[
    (TokenKind::ShiftLeft, BinaryOp::Shl),
    (TokenKind::ShiftRight, BinaryOp::Shr),
];

const ADDITIVE: &OperatorTable = &[
    (TokenKind::Plus, BinaryOp::Add),
    (TokenKind::Minus, BinaryOp::Sub),
];

const MULTIPLICATIVE: &OperatorTable = &[
    (TokenKind::Star, BinaryOp::Mul),
    (TokenKind::Slash, BinaryOp::Div),
    (TokenKind::Percent, BinaryOp::Mod),
];

/// Whether `kind` can begin an expression.
pub(crate) fn starts_expression(kind: TokenKind) -> bool {
    kind.is_literal()
        || matches!(
            kind,
            TokenKind::Identifier
                | TokenKind::LParen
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Amp
                | TokenKind::Tilde
                | TokenKind::Bang
                | TokenKind::SizeOf
                | TokenKind::TypeOf
        )
}

impl<'a, R: BufRead> Parser<'a, R> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Expr {
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> Expr {
        self.parse_binary(Self::parse_relational, EQUALITY)
    }

    fn parse_relational(&mut self) -> Expr {
        self.parse_binary(Self::parse_shift, RELATIONAL)
    }

    fn parse_shift(&mut self) -> Expr {
        self.parse_binary(Self::parse_additive, SHIFT)
    }

    fn parse_additive(&mut self) -> Expr {
        self.parse_binary(Self::parse_multiplicative, ADDITIVE)
    }

    fn parse_multiplicative(&mut self) -> Expr {
        self.parse_binary(Self::parse_cast, MULTIPLICATIVE)
    }

    /// One left-associative precedence level.
    pub(crate) fn parse_binary(
        &mut self,
        sub: fn(&mut Self) -> Expr,
        operators: &OperatorTable,
    ) -> Expr {
        let mut left = sub(self);

        loop {
            let kind = self.current().kind();
            let Some(&(_, op)) = operators.iter().find(|(k, _)| *k == kind) else {
                break;
            };

            let location = self.location();
            self.advance();
            let right = sub(self);
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }

        left
    }

    /// Type named by the lookahead token, if any.
    fn lookahead_type(&self) -> Option<SymbolId> {
        let next = self.lexer.lookahead();
        if !next.is(TokenKind::Identifier) {
            return None;
        }
        self.symbols
            .find(self.scope, next.literal())
            .filter(|&id| self.symbols.symbol(id).is_type())
    }

    fn parse_cast(&mut self) -> Expr {
        if self.check(TokenKind::LParen) {
            if let Some(ty) = self.lookahead_type() {
                let location = self.location();
                self.advance(); // (
                self.advance(); // type name

                if !self.expect(TokenKind::RParen, &[]) {
                    return Expr::Dummy { location };
                }

                let operand = self.parse_cast();
                return Expr::Cast {
                    ty,
                    operand: Box::new(operand),
                    location,
                };
            }
        }

        self.parse_unary()
    }

    fn parse_unary(&mut self) -> Expr {
        let op = match self.current().kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Star => UnaryOp::Deref,
            TokenKind::Amp => UnaryOp::AddrOf,
            TokenKind::Tilde => UnaryOp::BitNot,
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::SizeOf => return self.parse_type_op(TypeOperator::SizeOf),
            TokenKind::TypeOf => return self.parse_type_op(TypeOperator::TypeOf),
            _ => return self.parse_primary(),
        };

        let location = self.location();
        self.advance();
        let operand = self.parse_cast();
        Expr::Unary {
            op,
            operand: Box::new(operand),
            location,
        }
    }

    /// `sizeof(name)` / `typeof(name)`; the operand must be a type.
    fn parse_type_op(&mut self, op: TypeOperator) -> Expr {
        let location = self.location();
        let keyword = self.advance().kind();
        self.expect(TokenKind::LParen, &[TokenKind::Identifier, TokenKind::RParen]);

        if !self.check(TokenKind::Identifier) {
            self.error(ErrorCode::ParseTypeExpected, vec![Arg::Kind(keyword)]);
            self.expect(TokenKind::RParen, &[]);
            return Expr::Dummy { location };
        }

        let name = self.advance();
        let ty = match self.symbols.find(self.scope, name.literal()) {
            Some(id) => id,
            None => {
                self.error_at(
                    name.line(),
                    ErrorCode::ParseTypeUndefined,
                    vec![Arg::Symbol(name.literal().to_string())],
                );
                self.symbols.add(
                    self.scope,
                    Symbol::new(name.literal(), Usage::Type, name.line()).undefined(),
                )
            }
        };

        self.expect(TokenKind::RParen, &[]);

        if !self.symbols.symbol(ty).is_type() {
            self.error_at(name.line(), ErrorCode::ParseTypeExpected, vec![Arg::Kind(keyword)]);
            return Expr::Dummy { location };
        }

        Expr::TypeOp { op, ty, location }
    }

    fn parse_primary(&mut self) -> Expr {
        let location = self.location();

        match self.current().kind() {
            TokenKind::Identifier if self.check_next(TokenKind::LParen) => {
                self.parse_function_call()
            }

            TokenKind::Identifier => {
                let token = self.advance();
                let symbol = self.resolve_variable(&token);
                if self.symbols.symbol(symbol).is_type() {
                    self.error_at(
                        token.line(),
                        ErrorCode::ParseTypeNotValidHere,
                        vec![Arg::Symbol(token.literal().to_string())],
                    );
                }
                Expr::Variable { symbol, location }
            }

            kind @ (TokenKind::IntConst
            | TokenKind::FloatConst
            | TokenKind::CharConst
            | TokenKind::StringConst) => {
                let type_name = match kind {
                    TokenKind::IntConst => "int",
                    TokenKind::FloatConst => "float",
                    TokenKind::CharConst => "char",
                    _ => "string",
                };
                let ty = self.builtin(type_name);
                let token = self.advance();
                Expr::Const {
                    token,
                    ty,
                    location,
                }
            }

            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression();
                self.expect(TokenKind::RParen, &[]);
                expr
            }

            TokenKind::Error => {
                // The lexer has already reported this token.
                self.advance();
                Expr::Dummy { location }
            }

            _ => {
                let found = self.current().clone();
                self.error(ErrorCode::ParseUnexpectedSymbol, vec![Arg::Token(found)]);
                Expr::Dummy { location }
            }
        }
    }

    /// `name(arg, ...)`; the callee is left for a later pass to bind.
    fn parse_function_call(&mut self) -> Expr {
        let location = self.location();
        let name = self.advance();
        self.advance(); // (

        if let Some(id) = self.symbols.find(self.scope, name.literal()) {
            if self.symbols.symbol(id).is_type() {
                self.error_at(
                    name.line(),
                    ErrorCode::ParseTypeNotValidHere,
                    vec![Arg::Symbol(name.literal().to_string())],
                );
            }
        }

        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression());
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, &[]);

        Expr::FunctionCall {
            name: name.literal().to_string(),
            args,
            location,
        }
    }
}
