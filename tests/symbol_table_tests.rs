// Integration tests for scoped name resolution

use tern::parser::token::Value;
use tern::symbols::{ResolveError, Symbol, SymbolTable, TypeDecl, TypeKind, Usage, BUILTIN_TYPES};

#[test]
fn test_builtins_visible_from_nested_scopes() {
    let mut table = SymbolTable::new();
    let root = table.root();
    let outer = table.new_scope(root, Some("Outer"));
    let inner = table.new_scope(outer, Some("Inner"));

    for name in BUILTIN_TYPES {
        let id = table.find(inner, name).unwrap();
        assert!(table.symbol(id).is_special());
        assert_eq!(table.find_local(inner, name), None);
    }
}

#[test]
fn test_find_from_descendants() {
    let mut table = SymbolTable::new();
    let root = table.root();
    let a = table.new_scope(root, Some("A"));
    let b = table.new_scope(a, Some("B"));
    let c = table.new_scope(b, None);

    let declared = table.add(a, Symbol::new("depth", Usage::Variable, 1));

    for scope in [a, b, c] {
        assert_eq!(table.find(scope, "depth"), Some(declared));
    }
    for scope in [b, c] {
        assert_eq!(table.find_local(scope, "depth"), None);
    }
    assert_eq!(table.find(root, "depth"), None);
}

#[test]
fn test_add_keeps_first_declaration() {
    let mut table = SymbolTable::new();
    let root = table.root();

    let first = table.add(root, Symbol::new("n", Usage::Variable, 1));
    let second = table.add(root, Symbol::new("n", Usage::Constant, 5));

    assert_eq!(first, second);
    assert_eq!(table.symbol(first).usage(), Usage::Variable);
    assert_eq!(table.symbol(first).line(), 1);
}

#[test]
fn test_shadowing_in_child_scope() {
    let mut table = SymbolTable::new();
    let root = table.root();
    let child = table.new_scope(root, Some("Child"));

    let outer = table.add(root, Symbol::new("v", Usage::Variable, 1));
    let inner = table.add(child, Symbol::new("v", Usage::Constant, 2));

    assert_ne!(outer, inner);
    assert_eq!(table.find(child, "v"), Some(inner));
    assert_eq!(table.find(root, "v"), Some(outer));
}

#[test]
fn test_type_definition_members() {
    let mut table = SymbolTable::new();
    let root = table.root();
    let members = table.new_scope(root, Some("Color"));
    let color = table.add(
        root,
        Symbol::new("Color", Usage::Type, 1).with_definition(TypeDecl {
            kind: TypeKind::Enum,
            name: "Color".to_string(),
            members,
        }),
    );
    table.add(
        members,
        Symbol::new("Red", Usage::Constant, 1)
            .with_type(color)
            .with_value(Value::Int(0)),
    );

    let definition = table.symbol(color).type_definition().unwrap();
    assert_eq!(table.parent(definition.members), Some(root));
    let red = table.lookup(definition.members, "Red").unwrap();
    assert_eq!(red.type_ref(), Some(color));
    assert_eq!(red.value(), Some(&Value::Int(0)));
}

#[test]
fn test_gen_name_never_collides() {
    let mut table = SymbolTable::new();
    let root = table.root();
    let mut seen = Vec::new();

    for _ in 0..5 {
        let name = table.gen_name(root);
        assert!(table.find(root, &name).is_none());
        assert!(!seen.contains(&name));
        table.add(root, Symbol::new(name.clone(), Usage::Type, 1));
        seen.push(name);
    }
}

#[test]
fn test_label_state_machine() {
    let mut table = SymbolTable::new();
    let root = table.root();
    let label = table.add(root, Symbol::new("retry", Usage::Label, 3).undefined());

    assert!(table.symbol(label).is_undefined());
    table.resolve_label(label, 10).unwrap();
    assert!(!table.symbol(label).is_undefined());
    assert_eq!(table.symbol(label).line(), 10);

    assert_eq!(
        table.resolve_label(label, 12),
        Err(ResolveError::AlreadyDefined(10))
    );
    assert_eq!(table.symbol(label).line(), 10);
}

#[test]
fn test_special_types_cannot_be_resolved() {
    let mut table = SymbolTable::new();
    let root = table.root();
    let int = table.find(root, "int").unwrap();

    assert_eq!(
        table.resolve_label(int, 1),
        Err(ResolveError::NotALabel(Usage::Type))
    );
    assert!(table.symbol(int).is_special());
}
