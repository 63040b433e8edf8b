//! Lexer (tokenizer) for Tern source code
//!
//! Reads the input one line at a time and hands the parser a [`Token`] stream
//! with exactly one token of lookahead.  Recoverable lexical errors are
//! queued as [`Diagnostic`]s and answered with a [`TokenKind::Error`] token so
//! the parser can resynchronize; the parser drains the queue with
//! [`Lexer::take_diagnostics`] after each advance.
//!
//! An unterminated block comment is the one condition the lexer cannot
//! recover from: it is reported, the lexer is marked truncated and the token
//! stream ends.

use super::token::{Token, TokenKind, Value};
use crate::config::FrontendConfig;
use crate::diagnostics::{Arg, Diagnostic, ErrorCode};
use std::io::{self, BufRead};
use std::mem;

/// Multi-character operators, longest first so the first hit is the
/// maximal munch.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("<<=", TokenKind::LeftAssign),
    (">>=", TokenKind::RightAssign),
    ("<=>", TokenKind::Spaceship),
    ("...", TokenKind::Spread),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("<<", TokenKind::ShiftLeft),
    ("<=", TokenKind::LessEqual),
    (">>", TokenKind::ShiftRight),
    (">=", TokenKind::GreaterEqual),
    ("&&", TokenKind::LogicalAnd),
    ("||", TokenKind::LogicalOr),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEqual),
    ("->", TokenKind::Arrow),
    ("+=", TokenKind::AddAssign),
    ("-=", TokenKind::SubAssign),
    ("&=", TokenKind::AndAssign),
    ("|=", TokenKind::OrAssign),
    ("*=", TokenKind::MulAssign),
    ("/=", TokenKind::DivAssign),
    ("%=", TokenKind::ModAssign),
    ("^=", TokenKind::XorAssign),
    ("..", TokenKind::Range),
];

/// Escapes that stand for a control character.
fn control_escape(c: char) -> Option<char> {
    match c {
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        _ => None,
    }
}

/// A lexical error found while scanning a literal.
struct LexFault {
    code: ErrorCode,
    args: Vec<Arg>,
}

impl LexFault {
    fn new(code: ErrorCode, args: Vec<Arg>) -> Self {
        Self { code, args }
    }
}

/// Fraction digits kept for a float; later digits are below `f64` precision.
const MAX_FRACTION_DIGITS: usize = 19;

/// Result of scanning a run of digits.
#[derive(Default)]
struct DigitRun {
    value: u64,
    digits: usize,
    overflow: bool,
}

/// Streaming lexer over any buffered reader.
///
/// The reader is owned, so it is released whenever the lexer is dropped.
pub struct Lexer<R: BufRead> {
    input: R,
    config: FrontendConfig,
    line: Vec<char>,
    line_number: usize,
    position: usize,
    exhausted: bool,
    truncated: bool,
    io_error: Option<io::Error>,
    current: Token,
    lookahead: Token,
    diagnostics: Vec<Diagnostic>,
}

impl<R: BufRead> Lexer<R> {
    /// Create a lexer and prime the current and lookahead tokens.
    pub fn new(input: R, config: FrontendConfig) -> Self {
        let mut lexer = Self {
            input,
            config,
            line: Vec::new(),
            line_number: 0,
            position: 0,
            exhausted: false,
            truncated: false,
            io_error: None,
            current: Token::end_of_file(0, 1),
            lookahead: Token::end_of_file(0, 1),
            diagnostics: Vec::new(),
        };
        lexer.current = lexer.read_token();
        lexer.lookahead = lexer.read_token();
        lexer
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Move to the next token.
    ///
    /// Returns `false` once `EndOfFile` is current; the stream never moves
    /// past it.
    pub fn advance(&mut self) -> bool {
        if self.current.is(TokenKind::EndOfFile) {
            return false;
        }
        let next = self.read_token();
        self.current = mem::replace(&mut self.lookahead, next);
        true
    }

    /// Diagnostics raised since the last call, in order.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        mem::take(&mut self.diagnostics)
    }

    /// Whether the token stream was cut short by an unterminated block comment.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The read failure that ended the stream early, if any.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    /// Drain the whole stream, `EndOfFile` included.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = vec![self.current.clone()];
        while self.advance() {
            tokens.push(self.current.clone());
        }
        (tokens, self.diagnostics)
    }

    // ===== Line buffer =====

    fn read_line(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.exhausted = true;
                false
            }
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                // Invalid UTF-8 becomes U+FFFD and is lexed as an unknown character.
                self.line = String::from_utf8_lossy(&buf).chars().collect();
                self.line_number += 1;
                self.position = 0;
                true
            }
            Err(err) => {
                self.io_error = Some(err);
                self.exhausted = true;
                false
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.line.get(self.position).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.line.get(self.position + offset).copied()
    }

    fn starts_with(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, c)| self.peek_ahead(i) == Some(c))
    }

    fn text_from(&self, start: usize) -> String {
        self.line[start..self.position].iter().collect()
    }

    fn make(&self, kind: TokenKind, start: usize, value: Option<Value>) -> Token {
        Token::new(
            kind,
            self.text_from(start),
            value,
            self.line_number,
            start + 1,
            self.position + 1,
        )
    }

    fn error_token(&self, start: usize) -> Token {
        self.make(TokenKind::Error, start, None)
    }

    fn error(&mut self, code: ErrorCode, args: Vec<Arg>) {
        self.diagnostics
            .push(Diagnostic::new(self.line_number, code, args));
    }

    fn fault(&mut self, fault: LexFault) {
        self.error(fault.code, fault.args);
    }

    // ===== Trivia =====

    /// Skip whitespace and comments; `false` means the stream has ended.
    fn skip_whitespace_and_comments(&mut self) -> bool {
        loop {
            match self.peek() {
                None => {
                    if !self.read_line() {
                        return false;
                    }
                }
                Some(c) if c.is_whitespace() => self.position += 1,
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    self.position = self.line.len();
                }
                Some('/') if self.peek_ahead(1) == Some('*') => {
                    if !self.skip_block_comment() {
                        return false;
                    }
                }
                Some(_) => return true,
            }
        }
    }

    fn skip_block_comment(&mut self) -> bool {
        let opened_on = self.line_number;
        self.position += 2;

        loop {
            let mut idx = self.position;
            while idx + 1 < self.line.len() {
                if self.line[idx] == '*' && self.line[idx + 1] == '/' {
                    self.position = idx + 2;
                    return true;
                }
                idx += 1;
            }

            if !self.read_line() {
                if self.io_error.is_none() {
                    self.error(
                        ErrorCode::LexUnterminatedComment,
                        vec![Arg::Number(opened_on as i64)],
                    );
                }
                self.truncated = true;
                return false;
            }
        }
    }

    // ===== Tokens =====

    fn read_token(&mut self) -> Token {
        if self.truncated || !self.skip_whitespace_and_comments() {
            return Token::end_of_file(self.line_number, self.position + 1);
        }

        match self.peek() {
            Some(c) if c.is_ascii_digit() => self.number_literal(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.identifier_or_keyword(),
            Some('"') => self.string_literal(),
            Some('\'') => self.char_literal(),
            _ => self.read_operator(),
        }
    }

    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.position += 1;
        }

        let word = self.text_from(start);
        let max = self.config.max_identifier_len;
        if word.len() > max {
            self.error(
                ErrorCode::LexIdentifierTooLong,
                vec![Arg::Text(word), Arg::Number(max as i64)],
            );
            return self.error_token(start);
        }

        let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
        self.make(kind, start, None)
    }

    fn read_operator(&mut self) -> Token {
        let start = self.position;

        for (text, kind) in OPERATORS {
            if self.starts_with(text) {
                self.position += text.len();
                return self.make(*kind, start, None);
            }
        }

        let c = match self.peek() {
            Some(c) => c,
            None => return Token::end_of_file(self.line_number, self.position + 1),
        };
        self.position += 1;

        match TokenKind::from_symbol_char(c) {
            Some(kind) => self.make(kind, start, None),
            None => {
                self.error(ErrorCode::LexUnknownError, vec![Arg::Char(c)]);
                self.error_token(start)
            }
        }
    }

    // ===== Numbers =====

    /// Scan digits of `radix`, skipping `_` separators.
    fn read_digits(&mut self, radix: u32) -> DigitRun {
        let mut run = DigitRun::default();

        while let Some(c) = self.peek() {
            if c == '_' {
                self.position += 1;
                continue;
            }
            let Some(digit) = c.to_digit(radix) else {
                break;
            };

            match run
                .value
                .checked_mul(u64::from(radix))
                .and_then(|v| v.checked_add(u64::from(digit)))
            {
                Some(v) => run.value = v,
                None => run.overflow = true,
            }
            run.digits += 1;
            self.position += 1;
        }

        run
    }

    /// Scan the digits after a decimal point, keeping the leading
    /// [`MAX_FRACTION_DIGITS`] and consuming the rest.
    fn read_fraction(&mut self) -> DigitRun {
        let mut run = DigitRun::default();

        while let Some(c) = self.peek() {
            if c == '_' {
                self.position += 1;
                continue;
            }
            let Some(digit) = c.to_digit(10) else {
                break;
            };

            if run.digits < MAX_FRACTION_DIGITS {
                run.value = run.value * 10 + u64::from(digit);
                run.digits += 1;
            }
            self.position += 1;
        }

        run
    }

    fn number_literal(&mut self) -> Token {
        let start = self.position;

        if self.peek() == Some('0') {
            match self.peek_ahead(1) {
                Some('x') | Some('X') => return self.read_radix(start, 16, ErrorCode::LexBadHex),
                Some('b') | Some('B') => return self.read_radix(start, 2, ErrorCode::LexBadBin),
                _ => {}
            }
        }

        let whole = self.read_digits(10);
        let mut is_float = false;
        let mut fraction = DigitRun::default();
        let mut exponent = DigitRun::default();
        let mut negative_exponent = false;

        if self.peek() == Some('.') && matches!(self.peek_ahead(1), Some(c) if c.is_ascii_digit()) {
            self.position += 1;
            fraction = self.read_fraction();
            is_float = true;
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            let signed = matches!(self.peek_ahead(1), Some('+') | Some('-'));
            let digit_at = if signed { 2 } else { 1 };

            if matches!(self.peek_ahead(digit_at), Some(c) if c.is_ascii_digit()) {
                negative_exponent = self.peek_ahead(1) == Some('-');
                self.position += digit_at;
                exponent = self.read_digits(10);
                is_float = true;
            }
        }

        if !is_float {
            return match i64::try_from(whole.value) {
                Ok(value) if !whole.overflow => {
                    self.make(TokenKind::IntConst, start, Some(Value::Int(value)))
                }
                _ => self.invalid_constant(start),
            };
        }

        if whole.overflow || exponent.overflow {
            return self.invalid_constant(start);
        }
        let Ok(mut exp) = i32::try_from(exponent.value) else {
            return self.invalid_constant(start);
        };
        if negative_exponent {
            exp = -exp;
        }
        let Ok(fraction_digits) = i32::try_from(fraction.digits) else {
            return self.invalid_constant(start);
        };

        // (whole + fraction / 10^digits) * 10^exp in f64, narrowed once.
        let mut result = fraction.value as f64;
        result /= 10f64.powi(fraction_digits);
        result += whole.value as f64;
        result *= 10f64.powi(exp);

        let value = result as f32;
        if !value.is_finite() {
            return self.invalid_constant(start);
        }

        self.make(TokenKind::FloatConst, start, Some(Value::Float(value)))
    }

    fn read_radix(&mut self, start: usize, radix: u32, bad: ErrorCode) -> Token {
        self.position += 2; // 0x / 0b
        let run = self.read_digits(radix);

        if run.digits == 0 {
            let literal = self.text_from(start);
            self.error(bad, vec![Arg::Text(literal)]);
            return self.error_token(start);
        }

        match i64::try_from(run.value) {
            Ok(value) if !run.overflow => {
                self.make(TokenKind::IntConst, start, Some(Value::Int(value)))
            }
            _ => self.invalid_constant(start),
        }
    }

    fn invalid_constant(&mut self, start: usize) -> Token {
        let literal = self.text_from(start);
        self.error(ErrorCode::LexInvalidConstant, vec![Arg::Text(literal)]);
        self.error_token(start)
    }

    // ===== Strings and characters =====

    fn string_literal(&mut self) -> Token {
        let start = self.position;
        self.position += 1; // opening quote
        let mut parsed = String::new();

        loop {
            match self.peek() {
                None => {
                    self.error(ErrorCode::LexUnterminatedString, vec![Arg::Char('"')]);
                    return self.error_token(start);
                }
                Some('"') => {
                    self.position += 1;
                    break;
                }
                Some(_) => match self.read_single_char() {
                    Ok(c) => parsed.push(c),
                    Err(fault) => {
                        self.fault(fault);
                        self.skip_past('"');
                        return self.error_token(start);
                    }
                },
            }
        }

        self.make(TokenKind::StringConst, start, Some(Value::Str(parsed)))
    }

    fn char_literal(&mut self) -> Token {
        let start = self.position;
        self.position += 1; // opening quote

        match self.peek() {
            None => {
                self.error(ErrorCode::LexUnterminatedString, vec![Arg::Char('\'')]);
                return self.error_token(start);
            }
            Some('\'') => {
                self.position += 1;
                self.error(ErrorCode::LexInvalidConstant, vec![Arg::Text("''".to_string())]);
                return self.error_token(start);
            }
            Some(_) => {}
        }

        let c = match self.read_single_char() {
            Ok(c) => c,
            Err(fault) => {
                self.fault(fault);
                self.skip_past('\'');
                return self.error_token(start);
            }
        };

        match self.peek() {
            Some('\'') => {
                self.position += 1;
                self.make(TokenKind::CharConst, start, Some(Value::Char(c)))
            }
            None => {
                self.error(ErrorCode::LexUnterminatedString, vec![Arg::Char('\'')]);
                self.error_token(start)
            }
            Some(other) => {
                self.error(ErrorCode::LexExpectedEndOfChar, vec![Arg::Char(other)]);
                self.skip_past('\'');
                self.error_token(start)
            }
        }
    }

    /// Read one possibly escaped character of a string or char literal.
    fn read_single_char(&mut self) -> Result<char, LexFault> {
        let Some(c) = self.peek() else {
            return Err(LexFault::new(ErrorCode::LexUnterminatedString, vec![]));
        };
        self.position += 1;

        if c != '\\' {
            return Ok(c);
        }

        let Some(escaped) = self.peek() else {
            return Err(LexFault::new(ErrorCode::LexHangingEscape, vec![]));
        };

        match escaped {
            '"' | '\'' | '\\' => {
                self.position += 1;
                Ok(escaped)
            }
            '0' => Ok(self.read_octal_escape()),
            'x' => self.read_hex_escape(),
            _ => {
                self.position += 1;
                control_escape(escaped).ok_or_else(|| {
                    LexFault::new(ErrorCode::LexUnknownEscape, vec![Arg::Char(escaped)])
                })
            }
        }
    }

    /// `\0oo`: up to three octal digits, the leading `0` included.
    fn read_octal_escape(&mut self) -> char {
        let mut value = 0u8;
        let mut count = 0;

        while count < 3 {
            match self.peek() {
                Some(c @ '0'..='7') => {
                    value = value * 8 + (c as u8 - b'0');
                    self.position += 1;
                    count += 1;
                }
                _ => break,
            }
        }

        char::from(value)
    }

    /// `\xhh` is a byte, `\xhhhh` a UTF-16 code unit; other lengths are errors.
    fn read_hex_escape(&mut self) -> Result<char, LexFault> {
        self.position += 1; // x
        let mut value = 0u32;
        let mut digits = String::new();

        while digits.len() < 4 {
            let Some(digit) = self.peek().and_then(|c| c.to_digit(16)) else {
                break;
            };
            if let Some(c) = self.peek() {
                digits.push(c);
            }
            value = value * 16 + digit;
            self.position += 1;
        }

        let invalid = || LexFault::new(ErrorCode::LexInvalidHexChar, vec![Arg::Text(format!("x{digits}"))]);

        match digits.len() {
            2 => Ok(char::from(value as u8)),
            4 => char::from_u32(value).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }

    /// Skip to just past `quote` on this line, honouring escapes.
    fn skip_past(&mut self, quote: char) {
        while let Some(c) = self.peek() {
            self.position += 1;
            if c == quote {
                return;
            }
            if c == '\\' && self.peek().is_some() {
                self.position += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        Lexer::new(source.as_bytes(), FrontendConfig::default()).tokenize()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).0.iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("var x : int ;"),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_lookahead_and_advance() {
        let mut lexer = Lexer::new("a = 1".as_bytes(), FrontendConfig::default());
        assert_eq!(lexer.current().literal(), "a");
        assert!(lexer.lookahead().is(TokenKind::Assign));

        assert!(lexer.advance());
        assert!(lexer.advance());
        assert!(lexer.current().is(TokenKind::IntConst));
        assert!(lexer.lookahead().is(TokenKind::EndOfFile));

        assert!(lexer.advance());
        assert!(lexer.current().is(TokenKind::EndOfFile));
        assert!(!lexer.advance());
        assert!(!lexer.advance());
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(
            kinds("< <= << <<= <=> ... .. ."),
            vec![
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::ShiftLeft,
                TokenKind::LeftAssign,
                TokenKind::Spaceship,
                TokenKind::Spread,
                TokenKind::Range,
                TokenKind::Dot,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_comments_span_lines() {
        let (tokens, diagnostics) = lex("a // tail\n/* one\ntwo */ b");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].literal(), "a");
        assert_eq!(tokens[1].literal(), "b");
        assert_eq!(tokens[1].line(), 3);
        assert!(tokens[2].is(TokenKind::EndOfFile));
    }

    #[test]
    fn test_columns() {
        let (tokens, _) = lex("  abc <<= 7");
        assert_eq!((tokens[0].start_col(), tokens[0].end_col()), (3, 6));
        assert_eq!((tokens[1].start_col(), tokens[1].end_col()), (7, 10));
        assert_eq!((tokens[2].start_col(), tokens[2].end_col()), (11, 12));
    }

    #[test]
    fn test_unterminated_block_comment_truncates() {
        let mut lexer = Lexer::new("a /* never\nclosed".as_bytes(), FrontendConfig::default());
        assert_eq!(lexer.current().literal(), "a");
        assert!(lexer.lookahead().is(TokenKind::EndOfFile));
        assert!(lexer.is_truncated());

        let diagnostics = lexer.take_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, ErrorCode::LexUnterminatedComment);
        assert_eq!(diagnostics[0].args, vec![Arg::Number(1)]);
    }

    #[test]
    fn test_float_reconstruction() {
        let (tokens, _) = lex("1.5 2.25e2 3e-1 7E+0");
        assert_eq!(tokens[0].value(), Some(&Value::Float(1.5)));
        assert_eq!(tokens[1].value(), Some(&Value::Float(225.0)));
        assert_eq!(tokens[2].value(), Some(&Value::Float((3.0f64 * 10f64.powi(-1)) as f32)));
        assert_eq!(tokens[3].value(), Some(&Value::Float(7.0)));
    }

    #[test]
    fn test_long_fraction_is_rounded() {
        let (tokens, diagnostics) = lex("3.1415926535897932384626433 0.0000000000000000000000001");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].value(), Some(&Value::Float(std::f32::consts::PI)));
        assert_eq!(tokens[1].value(), Some(&Value::Float(0.0)));
        assert!(tokens[2].is(TokenKind::EndOfFile));
    }

    #[test]
    fn test_integer_overflow_is_invalid() {
        let (tokens, diagnostics) = lex("99999999999999999999");
        assert!(tokens[0].is(TokenKind::Error));
        assert_eq!(diagnostics[0].code, ErrorCode::LexInvalidConstant);
    }

    #[test]
    fn test_dot_without_digit_is_not_float() {
        assert_eq!(
            kinds("1..2"),
            vec![
                TokenKind::IntConst,
                TokenKind::Range,
                TokenKind::IntConst,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_exponent_needs_digits() {
        let (tokens, _) = lex("2e");
        assert!(tokens[0].is(TokenKind::IntConst));
        assert!(tokens[1].is(TokenKind::Identifier));
    }

    #[test]
    fn test_hex_escape_lengths() {
        let (tokens, diagnostics) = lex(r#"'\x41' '\x0041' '\x4' '\x414'"#);
        assert_eq!(tokens[0].value(), Some(&Value::Char('A')));
        assert_eq!(tokens[1].value(), Some(&Value::Char('A')));
        assert!(tokens[2].is(TokenKind::Error));
        assert!(tokens[3].is(TokenKind::Error));
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.code == ErrorCode::LexInvalidHexChar));
    }

    #[test]
    fn test_octal_escape() {
        let (tokens, _) = lex(r#""\012\0""#);
        assert_eq!(tokens[0].value(), Some(&Value::Str("\n\0".to_string())));
    }

    #[test]
    fn test_invalid_utf8_is_source_content() {
        let source: &[u8] = b"a // caf\xe9\nb \xff c\n";
        let mut lexer = Lexer::new(source, FrontendConfig::default());
        let mut tokens = vec![lexer.current().clone()];
        while lexer.advance() {
            tokens.push(lexer.current().clone());
        }
        let diagnostics = lexer.take_diagnostics();

        assert!(lexer.take_io_error().is_none());
        let literals: Vec<&str> = tokens.iter().map(|t| t.literal()).collect();
        assert_eq!(literals[..2], ["a", "b"]);
        assert!(tokens[2].is(TokenKind::Error));
        assert_eq!(tokens[3].literal(), "c");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, ErrorCode::LexUnknownError);
        assert_eq!(diagnostics[0].line, 2);
    }

    #[test]
    fn test_unknown_character() {
        let (tokens, diagnostics) = lex("a # b");
        assert!(tokens[1].is(TokenKind::Error));
        assert_eq!(tokens[2].literal(), "b");
        assert_eq!(diagnostics[0].code, ErrorCode::LexUnknownError);
    }
}
