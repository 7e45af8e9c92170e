//! AST traversal.
//!
//! Provides an `AstVisitor` trait for customizable traversal and a
//! `for_each_child` function for generic iteration over all children.

use crate::node::*;

/// A visitor over the AST. The default `visit_node` walks into every child;
/// override it and call [`walk_node`] to keep descending.
pub trait AstVisitor {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }
}

/// Visit every child of `node` with `visitor`.
pub fn walk_node<V: AstVisitor + ?Sized>(visitor: &mut V, node: &Node) {
    for_each_child(node, |child| visitor.visit_node(child));
}

/// Call `f` on each direct child of `node`, in source order.
///
/// Function declarations harvested into a `SourceElements` are visited
/// before its statements, the order in which they are hoisted.
pub fn for_each_child<'n>(node: &'n Node, mut f: impl FnMut(&'n Node)) {
    fn opt<'n>(node: &'n OptionalNode, f: &mut impl FnMut(&'n Node)) {
        if let Some(n) = node {
            f(n);
        }
    }

    match &node.kind {
        NodeKind::IntNumber(_)
        | NodeKind::FloatNumber(_)
        | NodeKind::String(_)
        | NodeKind::Boolean(_)
        | NodeKind::Null
        | NodeKind::Identifier(_)
        | NodeKind::VariableIdentifier { .. }
        | NodeKind::This
        | NodeKind::Break(_)
        | NodeKind::Continue(_)
        | NodeKind::Empty => {}

        NodeKind::Binary { left, right, .. } => {
            f(left);
            f(right);
        }
        NodeKind::Unary { operand, .. } => f(operand),
        NodeKind::Member { object, index } => {
            f(object);
            f(index);
        }
        NodeKind::MemberDot { object, .. } => f(object),
        NodeKind::Call { callee, arguments } | NodeKind::NewWithArgs { callee, arguments } => {
            f(callee);
            f(arguments);
        }
        NodeKind::New(callee) => f(callee),
        NodeKind::Array(items)
        | NodeKind::ObjectInit(items)
        | NodeKind::ArgumentList(items)
        | NodeKind::VariableDeclList(items)
        | NodeKind::Block(items) => items.iter().for_each(f),
        NodeKind::PropertyInit { key, value } => {
            f(key);
            f(value);
        }

        NodeKind::SimpleAssignment { target, value, .. } => {
            f(target);
            opt(value, &mut f);
        }
        NodeKind::MemberAssignment { object, index, value, .. } => {
            f(object);
            f(index);
            opt(value, &mut f);
        }
        NodeKind::MemberDotAssignment { object, value, .. } => {
            f(object);
            opt(value, &mut f);
        }
        NodeKind::SimpleIncrement { target, .. } => f(target),

        NodeKind::Program(body) => f(body),
        NodeKind::SourceElements(elements) => {
            elements.func_decls.values().for_each(&mut f);
            elements.statements.iter().for_each(f);
        }
        NodeKind::If { condition, then_branch, else_branch } => {
            f(condition);
            f(then_branch);
            opt(else_branch, &mut f);
        }
        NodeKind::While { condition, body } => {
            f(condition);
            f(body);
        }
        NodeKind::Do { body, condition } => {
            f(body);
            f(condition);
        }
        NodeKind::For { init, condition, update, body } => {
            opt(init, &mut f);
            f(condition);
            opt(update, &mut f);
            f(body);
        }
        NodeKind::ForIn { iterable, body, .. } => {
            f(iterable);
            f(body);
        }
        NodeKind::ForVarIn { target, iterable, body } => {
            f(target);
            f(iterable);
            f(body);
        }
        NodeKind::VariableDeclaration { identifier, init } => {
            f(identifier);
            opt(init, &mut f);
        }
        NodeKind::Variable(inner)
        | NodeKind::ExprStatement(inner)
        | NodeKind::Throw(inner) => f(inner),
        NodeKind::Return(value) => opt(value, &mut f),
        NodeKind::Try { block, catch_param, catch_block, finally_block } => {
            f(block);
            opt(catch_param, &mut f);
            opt(catch_block, &mut f);
            opt(finally_block, &mut f);
        }
        NodeKind::With { object, body } => {
            f(object);
            f(body);
        }
        NodeKind::FunctionStatement(function) => opt(&function.body, &mut f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::BinaryOperator;
    use rjs_core::text::Position;

    fn leaf(kind: NodeKind) -> Box<Node> {
        Box::new(Node::new(Position::UNKNOWN, kind))
    }

    struct Counter(usize);

    impl AstVisitor for Counter {
        fn visit_node(&mut self, node: &Node) {
            self.0 += 1;
            walk_node(self, node);
        }
    }

    #[test]
    fn test_visitor_counts_every_node() {
        let tree = Node::new(
            Position::UNKNOWN,
            NodeKind::ExprStatement(leaf(NodeKind::Binary {
                op: BinaryOperator::Plus,
                left: leaf(NodeKind::IntNumber(1)),
                right: leaf(NodeKind::Identifier("x".into())),
            })),
        );
        let mut counter = Counter(0);
        counter.visit_node(&tree);
        assert_eq!(counter.0, 4);
    }

    #[test]
    fn test_for_each_child_skips_absent_slots() {
        let tree = Node::new(
            Position::UNKNOWN,
            NodeKind::For {
                init: None,
                condition: leaf(NodeKind::Boolean(true)),
                update: None,
                body: leaf(NodeKind::Empty),
            },
        );
        let mut names = Vec::new();
        for_each_child(&tree, |child| names.push(child.kind.name()));
        assert_eq!(names, vec!["Boolean", "Empty"]);
    }
}
