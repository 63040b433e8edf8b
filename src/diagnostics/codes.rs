//! Stable numeric error taxonomy
//!
//! Codes are partitioned by range: lexical errors live in `1000..=1999`,
//! parse errors in `2000..=2999`.  The numbers are part of the public contract
//! with reporters and must never be renumbered.

use std::fmt;

/// Every diagnostic the front end can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Lexing errors
    LexHangingEscape = 1000,
    LexUnterminatedString = 1001,
    LexInvalidConstant = 1002,
    LexIdentifierTooLong = 1003,
    LexInvalidHexChar = 1004,
    LexUnknownEscape = 1005,
    LexExpectedEndOfString = 1006,
    LexExpectedEndOfChar = 1007,
    LexBadHex = 1008,
    LexBadBin = 1009,
    LexUnterminatedComment = 1010,

    LexUnknownError = 1999,

    // Parsing errors
    ParseUnexpectedSymbol = 2001,
    ParseExpectedSymbol = 2002,
    ParseUnexpectedEOF = 2003,
    ParseAlreadyDefined = 2004,
    ParseUndeclaredVar = 2005,
    ParseAssignToNonVar = 2006,
    ParseTypeNotValidHere = 2007,
    ParseTypeExpected = 2008,
    ParseTypeUndefined = 2009,
    ParseUndefinedLabel = 2010,

    ParseUnknownError = 2999,
}

impl ErrorCode {
    /// Numeric value of the code.
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn is_lex(self) -> bool {
        (1000..2000).contains(&self.code())
    }

    pub fn is_parse(self) -> bool {
        (2000..3000).contains(&self.code())
    }

    /// Syntax errors put the parser into panic mode; semantic ones do not.
    pub fn is_syntax(self) -> bool {
        matches!(
            self,
            ErrorCode::ParseUnexpectedSymbol
                | ErrorCode::ParseExpectedSymbol
                | ErrorCode::ParseUnexpectedEOF
        )
    }

    /// Message template used by [`super::ConsoleReporter`].
    ///
    /// `{0}`, `{1}`, ... are replaced with the diagnostic's arguments in order.
    pub fn template(self) -> &'static str {
        match self {
            ErrorCode::LexHangingEscape => "Start of escape sequence at end of line",
            ErrorCode::LexUnterminatedString => "Unterminated literal, expecting {0}",
            ErrorCode::LexInvalidConstant => "Invalid constant {0}",
            ErrorCode::LexIdentifierTooLong => "Identifier {0} is longer than {1} characters",
            ErrorCode::LexInvalidHexChar => "Invalid hexadecimal escape \\{0}",
            ErrorCode::LexUnknownEscape => "Unknown escape character {0}",
            ErrorCode::LexExpectedEndOfString => "Unexpected {0}, expecting '\"'",
            ErrorCode::LexExpectedEndOfChar => "Unexpected {0}, expecting '''",
            ErrorCode::LexBadHex => "Invalid hexadecimal number {0}",
            ErrorCode::LexBadBin => "Invalid binary number {0}",
            ErrorCode::LexUnterminatedComment => "Block comment opened on line {0} is never closed",
            ErrorCode::LexUnknownError => "Unexpected character {0}",
            ErrorCode::ParseUnexpectedSymbol => "Unexpected {0}",
            ErrorCode::ParseExpectedSymbol => "Unexpected {0}, expecting {1}",
            ErrorCode::ParseUnexpectedEOF => "Unexpected end of file, expecting {0}",
            ErrorCode::ParseAlreadyDefined => "Symbol {0} is already defined on line {1}",
            ErrorCode::ParseUndeclaredVar => "Undeclared identifier {0}",
            ErrorCode::ParseAssignToNonVar => "Cannot assign to {0}, it is not a variable",
            ErrorCode::ParseTypeNotValidHere => "Type {0} is not valid here",
            ErrorCode::ParseTypeExpected => "Expected a type name after {0}",
            ErrorCode::ParseTypeUndefined => "Undefined type {0}",
            ErrorCode::ParseUndefinedLabel => "Label {0} is referenced but never declared",
            ErrorCode::ParseUnknownError => "Unknown parse error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert!(ErrorCode::LexBadHex.is_lex());
        assert!(!ErrorCode::LexBadHex.is_parse());
        assert!(ErrorCode::ParseTypeUndefined.is_parse());
        assert_eq!(ErrorCode::ParseUndeclaredVar.code(), 2005);
        assert_eq!(ErrorCode::LexUnknownError.to_string(), "E1999");
    }

    #[test]
    fn test_syntax_codes() {
        assert!(ErrorCode::ParseExpectedSymbol.is_syntax());
        assert!(!ErrorCode::ParseUndeclaredVar.is_syntax());
        assert!(!ErrorCode::LexBadHex.is_syntax());
    }
}
