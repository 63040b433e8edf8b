//! Tokens produced by the lexer
//!
//! A [`Token`] is immutable once the lexer hands it out: the fields are
//! private and only readable through accessors.  The parser moves or clones
//! tokens into AST nodes but never edits them.

use std::fmt;

/// Every token kind the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literal classes
    Identifier,
    IntConst,
    FloatConst,
    StringConst,
    CharConst,

    // Keywords
    Discard, // _
    Class,
    Const,
    Enum,
    For,
    Func,
    Goto,
    Import,
    Private,
    Protected,
    Public,
    SizeOf,
    Struct,
    TypeOf,
    Var,
    While,

    // Single-character symbols
    At,           // @
    Dot,          // .
    Comma,        // ,
    Colon,        // :
    Semicolon,    // ;
    LParen,       // (
    RParen,       // )
    Question,     // ?
    Assign,       // =
    LBracket,     // [
    RBracket,     // ]
    LBrace,       // {
    RBrace,       // }
    Bang,         // !
    Tilde,        // ~
    Star,         // *
    Slash,        // /
    Percent,      // %
    Plus,         // +
    Minus,        // -
    Less,         // <
    Greater,      // >
    Amp,          // &
    Caret,        // ^
    Pipe,         // |

    // Multi-character operators
    Increment,    // ++
    Decrement,    // --
    ShiftLeft,    // <<
    LessEqual,    // <=
    ShiftRight,   // >>
    GreaterEqual, // >=
    LogicalAnd,   // &&
    LogicalOr,    // ||
    Equals,       // ==
    NotEqual,     // !=
    Arrow,        // ->
    AddAssign,    // +=
    SubAssign,    // -=
    AndAssign,    // &=
    OrAssign,     // |=
    MulAssign,    // *=
    DivAssign,    // /=
    ModAssign,    // %=
    XorAssign,    // ^=
    Range,        // ..
    LeftAssign,   // <<=
    RightAssign,  // >>=
    Spaceship,    // <=>
    Spread,       // ...

    // Sentinels
    EndOfFile,
    Error,
}

impl TokenKind {
    /// Kind of a single-character symbol, if `c` is one.
    pub fn from_symbol_char(c: char) -> Option<TokenKind> {
        let kind = match c {
            '@' => TokenKind::At,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '?' => TokenKind::Question,
            '=' => TokenKind::Assign,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '!' => TokenKind::Bang,
            '~' => TokenKind::Tilde,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '&' => TokenKind::Amp,
            '^' => TokenKind::Caret,
            '|' => TokenKind::Pipe,
            _ => return None,
        };
        Some(kind)
    }

    /// Character code of a single-character symbol kind.
    pub fn symbol_char(self) -> Option<char> {
        let c = match self {
            TokenKind::At => '@',
            TokenKind::Dot => '.',
            TokenKind::Comma => ',',
            TokenKind::Colon => ':',
            TokenKind::Semicolon => ';',
            TokenKind::LParen => '(',
            TokenKind::RParen => ')',
            TokenKind::Question => '?',
            TokenKind::Assign => '=',
            TokenKind::LBracket => '[',
            TokenKind::RBracket => ']',
            TokenKind::LBrace => '{',
            TokenKind::RBrace => '}',
            TokenKind::Bang => '!',
            TokenKind::Tilde => '~',
            TokenKind::Star => '*',
            TokenKind::Slash => '/',
            TokenKind::Percent => '%',
            TokenKind::Plus => '+',
            TokenKind::Minus => '-',
            TokenKind::Less => '<',
            TokenKind::Greater => '>',
            TokenKind::Amp => '&',
            TokenKind::Caret => '^',
            TokenKind::Pipe => '|',
            _ => return None,
        };
        Some(c)
    }

    /// Keyword lookup for an identifier-shaped word.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "_" => TokenKind::Discard,
            "class" => TokenKind::Class,
            "const" => TokenKind::Const,
            "enum" => TokenKind::Enum,
            "for" => TokenKind::For,
            "func" => TokenKind::Func,
            "goto" => TokenKind::Goto,
            "import" => TokenKind::Import,
            "private" => TokenKind::Private,
            "protected" => TokenKind::Protected,
            "public" => TokenKind::Public,
            "sizeof" => TokenKind::SizeOf,
            "struct" => TokenKind::Struct,
            "typeof" => TokenKind::TypeOf,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntConst
                | TokenKind::FloatConst
                | TokenKind::StringConst
                | TokenKind::CharConst
        )
    }

    fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Discard => "_",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Enum => "enum",
            TokenKind::For => "for",
            TokenKind::Func => "func",
            TokenKind::Goto => "goto",
            TokenKind::Import => "import",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::SizeOf => "sizeof",
            TokenKind::Struct => "struct",
            TokenKind::TypeOf => "typeof",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::ShiftLeft => "<<",
            TokenKind::LessEqual => "<=",
            TokenKind::ShiftRight => ">>",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LogicalAnd => "&&",
            TokenKind::LogicalOr => "||",
            TokenKind::Equals => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Arrow => "->",
            TokenKind::AddAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::AndAssign => "&=",
            TokenKind::OrAssign => "|=",
            TokenKind::MulAssign => "*=",
            TokenKind::DivAssign => "/=",
            TokenKind::ModAssign => "%=",
            TokenKind::XorAssign => "^=",
            TokenKind::Range => "..",
            TokenKind::LeftAssign => "<<=",
            TokenKind::RightAssign => ">>=",
            TokenKind::Spaceship => "<=>",
            TokenKind::Spread => "...",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(c) = self.symbol_char() {
            return write!(f, "'{}'", c);
        }
        if let Some(text) = self.spelling() {
            return write!(f, "'{}'", text);
        }
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntConst => write!(f, "integer constant"),
            TokenKind::FloatConst => write!(f, "float constant"),
            TokenKind::StringConst => write!(f, "string constant"),
            TokenKind::CharConst => write!(f, "character constant"),
            TokenKind::EndOfFile => write!(f, "end of file"),
            _ => write!(f, "invalid token"),
        }
    }
}

/// Parsed payload of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f32),
    Char(char),
    Str(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Char(c) => write!(f, "'{}'", c.escape_default()),
            Value::Str(s) => write!(f, "\"{}\"", s.escape_default()),
        }
    }
}

/// A lexed token with its source span.
///
/// Columns are 1-based; `end_col` points one past the last character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    value: Option<Value>,
    line: usize,
    start_col: usize,
    end_col: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        value: Option<Value>,
        line: usize,
        start_col: usize,
        end_col: usize,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            value,
            line,
            start_col,
            end_col,
        }
    }

    pub fn end_of_file(line: usize, col: usize) -> Self {
        Self::new(TokenKind::EndOfFile, "", None, line, col, col)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn end_col(&self) -> usize {
        self.end_col
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.literal),
            TokenKind::IntConst
            | TokenKind::FloatConst
            | TokenKind::StringConst
            | TokenKind::CharConst => write!(f, "{} {}", self.kind, self.literal),
            TokenKind::Error => write!(f, "invalid token '{}'", self.literal),
            _ => write!(f, "{}", self.kind),
        }
    }
}
