//! Reporter contract between the front end and its host
//!
//! The lexer and parser never format text.  They hand an [`ErrorCode`] and a
//! list of structured [`Arg`]s to a [`Reporter`]; turning those into messages,
//! counting them and deciding what to do about them is the host's job.

use super::codes::ErrorCode;
use crate::parser::token::{Token, TokenKind};
use std::fmt;

/// Structured argument attached to a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// The offending token as it was lexed
    Token(Token),
    /// A token kind that was expected
    Kind(TokenKind),
    /// A symbol name (already resolved or about to be)
    Symbol(String),
    /// Another diagnostic code, e.g. the cause of a placeholder
    Code(ErrorCode),
    Char(char),
    Text(String),
    Number(i64),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Token(token) => write!(f, "{}", token),
            Arg::Kind(kind) => write!(f, "{}", kind),
            Arg::Symbol(name) => write!(f, "'{}'", name),
            Arg::Code(code) => write!(f, "{}", code),
            Arg::Char(c) => write!(f, "'{}'", c.escape_default()),
            Arg::Text(text) => write!(f, "{}", text),
            Arg::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One reported condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub code: ErrorCode,
    pub args: Vec<Arg>,
}

impl Diagnostic {
    pub fn new(line: usize, code: ErrorCode, args: Vec<Arg>) -> Self {
        Self { line, code, args }
    }

    /// Render the code's template with this diagnostic's arguments.
    pub fn message(&self) -> String {
        let mut message = self.code.template().to_string();
        for (index, arg) in self.args.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), &arg.to_string());
        }
        message
    }
}

/// Sink for diagnostics raised while lexing and parsing.
pub trait Reporter {
    fn report_error(&mut self, line: usize, code: ErrorCode, args: Vec<Arg>);

    /// Number of errors reported so far.
    fn error_count(&self) -> usize;

    fn report(&mut self, diagnostic: Diagnostic) {
        self.report_error(diagnostic.line, diagnostic.code, diagnostic.args);
    }
}

/// Reporter that simply keeps every diagnostic, in order.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    /// How many times `code` was reported.
    pub fn count(&self, code: ErrorCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Reporter for DiagnosticLog {
    fn report_error(&mut self, line: usize, code: ErrorCode, args: Vec<Arg>) {
        self.diagnostics.push(Diagnostic::new(line, code, args));
    }

    fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}
