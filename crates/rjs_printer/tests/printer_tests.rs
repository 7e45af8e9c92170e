//! Printer tests.
//!
//! Verifies the S-expression rendering of hand-built ASTs.

use rjs_ast::node::*;
use rjs_ast::operators::{AssignmentOperator, BinaryOperator, PrePost};
use rjs_core::collections::FxIndexMap;
use rjs_core::text::Position;
use rjs_printer::{print_node, Printer, PrinterOptions};

fn node(kind: NodeKind) -> Node {
    Node::new(Position::UNKNOWN, kind)
}

fn boxed(kind: NodeKind) -> Box<Node> {
    Box::new(node(kind))
}

fn ident(name: &str) -> Box<Node> {
    boxed(NodeKind::Identifier(name.to_string()))
}

#[test]
fn test_print_literals() {
    assert_eq!(print_node(&node(NodeKind::IntNumber(42))), "(IntNumber 42)");
    assert_eq!(print_node(&node(NodeKind::FloatNumber(3.5))), "(FloatNumber 3.5)");
    assert_eq!(print_node(&node(NodeKind::String("a\"b".into()))), r#"(String "a\"b")"#);
    assert_eq!(print_node(&node(NodeKind::Boolean(false))), "(Boolean false)");
    assert_eq!(print_node(&node(NodeKind::Null)), "(Null)");
}

#[test]
fn test_print_nested_binary() {
    let tree = node(NodeKind::Binary {
        op: BinaryOperator::Sub,
        left: boxed(NodeKind::Binary {
            op: BinaryOperator::Sub,
            left: ident("a"),
            right: ident("b"),
        }),
        right: ident("c"),
    });
    assert_eq!(
        print_node(&tree),
        "(Sub (Sub (Identifier a) (Identifier b)) (Identifier c))"
    );
}

#[test]
fn test_print_assignments() {
    let assign = node(NodeKind::SimpleAssignment {
        target: boxed(NodeKind::VariableIdentifier { depth: 1, name: "x".into() }),
        value: Some(boxed(NodeKind::IntNumber(1))),
        op: AssignmentOperator::AddAssign,
        pre_post: None,
    });
    assert_eq!(print_node(&assign), "(SimpleAssignment += (VariableIdentifier 1 x) (IntNumber 1))");

    let increment = node(NodeKind::MemberDotAssignment {
        object: ident("o"),
        name: "count".into(),
        value: None,
        op: AssignmentOperator::Increment,
        pre_post: Some(PrePost::Post),
    });
    assert_eq!(print_node(&increment), "(MemberDotAssignment ++ post (Identifier o) count _)");
}

#[test]
fn test_print_source_elements() {
    let function = node(NodeKind::FunctionStatement(Function {
        name: Some("f".into()),
        params: vec!["a".into(), "b".into()],
        body: None,
    }));
    let mut func_decls = FxIndexMap::default();
    func_decls.insert("f".to_string(), function);
    let elements = node(NodeKind::SourceElements(SourceElements {
        var_names: vec!["x".into()],
        func_decls,
        statements: vec![node(NodeKind::Empty)],
        source_name: "test.js".into(),
    }));
    assert_eq!(
        print_node(&node(NodeKind::Program(Box::new(elements)))),
        "(Program (SourceElements (vars x) (funcs (FunctionStatement f (params a b) _)) (Empty)))"
    );
}

#[test]
fn test_print_for_with_empty_slots() {
    let tree = node(NodeKind::For {
        init: None,
        condition: boxed(NodeKind::Boolean(true)),
        update: None,
        body: boxed(NodeKind::Break(None)),
    });
    assert_eq!(print_node(&tree), "(For _ (Boolean true) _ (Break _))");
}

#[test]
fn test_print_with_positions() {
    let tree = Node::new(Position::new(2, 4, 5), NodeKind::Identifier("x".into()));
    let mut printer = Printer::with_options(PrinterOptions { include_positions: true });
    assert_eq!(printer.print(&tree), "(Identifier@2:4..5 x)");
    // The printer is reusable
    assert_eq!(printer.print(&tree), "(Identifier@2:4..5 x)");
}
