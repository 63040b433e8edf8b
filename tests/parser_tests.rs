// Integration tests for the parser

use tern::config::FrontendConfig;
use tern::diagnostics::{DiagnosticLog, ErrorCode};
use tern::parser::ast::{BinaryOp, Expr, Module, Stmt, UnaryOp};
use tern::parser::token::Value;
use tern::symbols::{SymbolTable, Usage};
use tern::{parse_source, CompilationUnit};

fn compile(source: &str) -> (CompilationUnit, DiagnosticLog) {
    let mut log = DiagnosticLog::new();
    let unit = parse_source(source, &FrontendConfig::default(), &mut log).expect("parse failed");
    (unit, log)
}

/// Minimal stack machine: compile the tree to postfix, then run it.
enum Op {
    Push(i64),
    Neg,
    Bin(BinaryOp),
}

fn emit(expr: &Expr, code: &mut Vec<Op>) {
    match expr {
        Expr::Const { token, .. } => {
            let value = token.value().and_then(Value::as_int).expect("integer constant");
            code.push(Op::Push(value));
        }
        Expr::Unary {
            op: UnaryOp::Neg,
            operand,
            ..
        } => {
            emit(operand, code);
            code.push(Op::Neg);
        }
        Expr::Unary {
            op: UnaryOp::Plus,
            operand,
            ..
        } => emit(operand, code),
        Expr::Binary {
            op, left, right, ..
        } => {
            emit(left, code);
            emit(right, code);
            code.push(Op::Bin(*op));
        }
        other => panic!("cannot evaluate {:?}", other),
    }
}

fn evaluate(expr: &Expr) -> i64 {
    let mut code = Vec::new();
    emit(expr, &mut code);

    let mut stack: Vec<i64> = Vec::new();
    for op in code {
        match op {
            Op::Push(n) => stack.push(n),
            Op::Neg => {
                let n = stack.pop().unwrap();
                stack.push(-n);
            }
            Op::Bin(op) => {
                let rhs = stack.pop().unwrap();
                let lhs = stack.pop().unwrap();
                stack.push(match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Sub => lhs - rhs,
                    BinaryOp::Mul => lhs * rhs,
                    BinaryOp::Div => lhs / rhs,
                    BinaryOp::Mod => lhs % rhs,
                    BinaryOp::Shl => lhs << rhs,
                    BinaryOp::Shr => lhs >> rhs,
                    BinaryOp::Eq => (lhs == rhs) as i64,
                    BinaryOp::Ne => (lhs != rhs) as i64,
                    BinaryOp::Lt => (lhs < rhs) as i64,
                    BinaryOp::Gt => (lhs > rhs) as i64,
                    BinaryOp::Le => (lhs <= rhs) as i64,
                    BinaryOp::Ge => (lhs >= rhs) as i64,
                });
            }
        }
    }

    assert_eq!(stack.len(), 1);
    stack[0]
}

fn assignment_value(module: &Module, index: usize) -> &Expr {
    match &module.statements[index] {
        Stmt::Assignment { value, .. } => value,
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_declaration_only() {
    let (unit, log) = compile("var x : int ;");
    assert!(log.is_empty());
    assert_eq!(unit.module.statements.len(), 1);
    assert!(matches!(unit.module.statements[0], Stmt::VariableDecl { .. }));

    let x = unit.symbols.lookup(unit.symbols.root(), "x").unwrap();
    assert_eq!(x.usage(), Usage::Variable);
}

#[test]
fn test_precedence_and_evaluation() {
    let (unit, log) = compile("var x : int ;\nx = 1 + 2 * 3 ;");
    assert!(log.is_empty());
    assert_eq!(unit.module.statements.len(), 2);

    let value = assignment_value(&unit.module, 1);
    match value {
        Expr::Binary {
            op: BinaryOp::Add,
            left,
            right,
            ..
        } => {
            assert!(matches!(**left, Expr::Const { .. }));
            assert!(matches!(**right, Expr::Binary { op: BinaryOp::Mul, .. }));
        }
        other => panic!("Expected addition at the root, got {:?}", other),
    }
    assert_eq!(evaluate(value), 7);
}

#[test]
fn test_full_precedence_ladder() {
    let (unit, log) = compile("var r : int ;\nr = 1 + 2 << 1 < 7 == 0 ;\nr = -(4 - 6) % 3 ;");
    assert!(log.is_empty());
    // ((1 + 2) << 1) = 6; 6 < 7 = 1; 1 == 0 = 0
    assert_eq!(evaluate(assignment_value(&unit.module, 1)), 0);
    assert_eq!(evaluate(assignment_value(&unit.module, 2)), 2);
}

#[test]
fn test_undeclared_assignment_is_recorded() {
    let (unit, log) = compile("y = 1 ;");
    assert_eq!(log.codes(), vec![ErrorCode::ParseUndeclaredVar]);
    assert_eq!(log.diagnostics()[0].line, 1);
    assert_eq!(unit.module.statements.len(), 1);
    assert!(matches!(unit.module.statements[0], Stmt::Assignment { .. }));
}

#[test]
fn test_undeclared_reported_once() {
    let (unit, log) = compile("var a : int ;\na = ghost ;\na = ghost + 1 ;\na = ghost * 2 ;");
    assert_eq!(log.count(ErrorCode::ParseUndeclaredVar), 1);
    assert_eq!(log.diagnostics().len(), 1);
    assert!(unit
        .symbols
        .lookup(unit.symbols.root(), "ghost")
        .unwrap()
        .is_undefined());
}

#[test]
fn test_missing_identifier_resyncs() {
    let (unit, log) = compile("var : int ;\nvar z : int ;");
    assert_eq!(log.codes(), vec![ErrorCode::ParseExpectedSymbol]);
    assert_eq!(unit.module.statements.len(), 1);
    assert!(unit.symbols.lookup(unit.symbols.root(), "z").is_some());
}

#[test]
fn test_redeclaration_keeps_first() {
    let (unit, log) = compile("var x : int ;\nconst x : float ;");
    assert_eq!(log.codes(), vec![ErrorCode::ParseAlreadyDefined]);
    let x = unit.symbols.lookup(unit.symbols.root(), "x").unwrap();
    assert_eq!(x.usage(), Usage::Variable);
    assert_eq!(x.line(), 1);
}

#[test]
fn test_class_member_shadowing_outer_name() {
    let (_, log) = compile("var x : int ;\nclass P { var x : int ; }");
    assert_eq!(log.codes(), vec![ErrorCode::ParseAlreadyDefined]);
}

#[test]
fn test_forward_label_resolves() {
    let (unit, log) = compile("goto out ;\n{ ; }\nout: ;");
    assert!(log.is_empty());
    let out = unit.symbols.lookup(unit.symbols.root(), "out").unwrap();
    assert_eq!(out.usage(), Usage::Label);
    assert!(!out.is_undefined());
    assert_eq!(out.line(), 3);
}

#[test]
fn test_lex_error_does_not_cascade() {
    let (unit, log) = compile("var x : int ;\nx = 0x ;\nx = 2 ;");
    assert_eq!(log.codes(), vec![ErrorCode::LexBadHex]);
    assert_eq!(unit.module.statements.len(), 3);
    assert!(assignment_value(&unit.module, 1).is_dummy());
}

#[test]
fn test_unterminated_comment_truncates() {
    let (unit, log) = compile("var x : int ;\n/* never closed\nx = 1 ;");
    assert!(unit.truncated);
    assert_eq!(log.codes(), vec![ErrorCode::LexUnterminatedComment]);
    assert_eq!(unit.module.statements.len(), 1);
}

#[test]
fn test_statements_after_error_in_block() {
    let (unit, log) = compile("var a : int ;\n{\n a = ;\n a = 3 ;\n}");
    assert_eq!(log.codes(), vec![ErrorCode::ParseUnexpectedSymbol]);
    match &unit.module.statements[1] {
        Stmt::Compound { statements, .. } => assert_eq!(statements.len(), 2),
        other => panic!("Expected block, got {:?}", other),
    }
}

#[test]
fn test_symbol_table_is_returned() {
    let (unit, _) = compile("enum E { A, B }\nclass C { const k : int ; }");
    let symbols: &SymbolTable = &unit.symbols;
    let e = symbols.lookup(symbols.root(), "E").unwrap();
    let c = symbols.lookup(symbols.root(), "C").unwrap();
    assert!(e.is_type() && c.is_type());
    assert_eq!(
        symbols.names(c.type_definition().unwrap().members),
        vec!["k"]
    );
}

#[test]
fn test_invalid_utf8_keeps_module() {
    let mut log = DiagnosticLog::new();
    let source: &[u8] = b"var x : int ;\n// caf\xe9\nx = 1 ;\nx = \xff ;\n";
    let unit = tern::compile(source, &FrontendConfig::default(), &mut log).expect("parse failed");

    assert_eq!(unit.module.statements.len(), 3);
    assert_eq!(log.codes(), vec![ErrorCode::LexUnknownError]);
    assert_eq!(log.diagnostics()[0].line, 4);
    assert!(assignment_value(&unit.module, 2).is_dummy());
}

#[test]
fn test_high_precision_float_constant() {
    let (unit, log) = compile("var f : float ;\nf = 2.7182818284590452353602874713 ;");
    assert!(log.is_empty());
    match assignment_value(&unit.module, 1) {
        Expr::Const { token, .. } => {
            assert_eq!(token.value(), Some(&Value::Float(std::f32::consts::E)));
        }
        other => panic!("Expected constant, got {:?}", other),
    }
}
