// AST (Abstract Syntax Tree) definitions for Tern

use super::token::Token;
use crate::symbols::SymbolId;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location of the first character of `token`
    pub fn of(token: &Token) -> Self {
        Self::new(token.line(), token.start_col())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Equality
    Eq,
    Ne,
    // Relational
    Lt,
    Gt,
    Le,
    Ge,
    // Shift
    Shl,
    Shr,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,   // +x
    Neg,    // -x
    Deref,  // *x
    AddrOf, // &x
    BitNot, // ~x
    Not,    // !x
}

/// `sizeof` / `typeof`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOperator {
    SizeOf,
    TypeOf,
}

/// `var` or `const`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclModifier {
    Var,
    Const,
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal, tagged with its built-in type
    Const {
        token: Token,
        ty: SymbolId,
        location: SourceLocation,
    },
    Variable {
        symbol: SymbolId,
        location: SourceLocation,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        location: SourceLocation,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
    Cast {
        ty: SymbolId,
        operand: Box<Expr>,
        location: SourceLocation,
    },
    TypeOp {
        op: TypeOperator,
        ty: SymbolId,
        location: SourceLocation,
    },
    FunctionCall {
        name: String,
        args: Vec<Expr>,
        location: SourceLocation,
    },
    /// Stand-in for an expression that failed to parse; never evaluated
    Dummy { location: SourceLocation },
}

impl Expr {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Expr::Const { location, .. } => location,
            Expr::Variable { location, .. } => location,
            Expr::Unary { location, .. } => location,
            Expr::Binary { location, .. } => location,
            Expr::Cast { location, .. } => location,
            Expr::TypeOp { location, .. } => location,
            Expr::FunctionCall { location, .. } => location,
            Expr::Dummy { location } => location,
        }
    }

    pub fn is_dummy(&self) -> bool {
        matches!(self, Expr::Dummy { .. })
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VariableDecl {
        modifier: DeclModifier,
        ty: SymbolId,
        symbol: SymbolId,
        location: SourceLocation,
    },
    Assignment {
        target: SymbolId,
        value: Expr,
        location: SourceLocation,
    },
    Expression {
        expr: Expr,
        location: SourceLocation,
    },
    /// `label: statement`; an empty statement after the colon is `None`
    Labeled {
        label: SymbolId,
        statement: Option<Box<Stmt>>,
        location: SourceLocation,
    },
    Compound {
        statements: Vec<Stmt>,
        location: SourceLocation,
    },
    While {
        condition: Expr,
        body: Option<Box<Stmt>>,
        location: SourceLocation,
    },
    Goto {
        label: SymbolId,
        location: SourceLocation,
    },
}

impl Stmt {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Stmt::VariableDecl { location, .. } => location,
            Stmt::Assignment { location, .. } => location,
            Stmt::Expression { location, .. } => location,
            Stmt::Labeled { location, .. } => location,
            Stmt::Compound { location, .. } => location,
            Stmt::While { location, .. } => location,
            Stmt::Goto { location, .. } => location,
        }
    }
}

/// `import name;` at top level, left for the module loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub location: SourceLocation,
}

/// Root of a parsed compilation unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub statements: Vec<Stmt>,
    pub imports: Vec<Import>,
}

impl Module {
    pub fn new() -> Self {
        Module::default()
    }
}
