//! Assignment target classification.
//!
//! Shared by `=`-style assignments and by prefix/postfix `++`/`--`, so an
//! lvalue means the same thing everywhere one is required.

use crate::error::{BuildError, BuildResult};
use rjs_ast::{AssignmentOperator, Node, NodeKind, OptionalNode, PrePost};
use rjs_core::text::Position;

/// Pick the assignment variant for `target`.
///
/// `pre_post` is `Some` for `++`/`--`; in that context a target that is not a
/// reference degrades to `SimpleIncrement`. A plain assignment to such a
/// target fails with [`BuildError::InvalidAssignmentTarget`].
pub fn classify_assignment(
    pos: Position,
    target: Node,
    op: AssignmentOperator,
    value: OptionalNode,
    pre_post: Option<PrePost>,
) -> BuildResult<Node> {
    let kind = match target.kind {
        NodeKind::Identifier(_) | NodeKind::VariableIdentifier { .. } => {
            NodeKind::SimpleAssignment {
                target: Box::new(target),
                value,
                op,
                pre_post,
            }
        }
        NodeKind::Member { object, index } => NodeKind::MemberAssignment {
            object,
            index,
            value,
            op,
            pre_post,
        },
        NodeKind::MemberDot { object, name } => NodeKind::MemberDotAssignment {
            object,
            name,
            value,
            op,
            pre_post,
        },
        other if pre_post.is_some() => NodeKind::SimpleIncrement {
            target: Box::new(Node::new(target.pos, other)),
            op,
        },
        _ => return Err(BuildError::invalid_lefthand(pos)),
    };
    Ok(Node::new(pos, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: NodeKind) -> Node {
        Node::new(Position::new(1, 0, 1), kind)
    }

    #[test]
    fn test_call_target_is_rejected_for_assignment() {
        let call = leaf(NodeKind::Call {
            callee: Box::new(leaf(NodeKind::Identifier("f".into()))),
            arguments: Box::new(leaf(NodeKind::ArgumentList(vec![]))),
        });
        let pos = Position::new(1, 4, 5);
        let err = classify_assignment(pos, call, AssignmentOperator::Assign, None, None)
            .unwrap_err();
        assert_eq!(err.position(), pos);
        assert_eq!(err.to_string(), "invalid lefthand expression");
    }

    #[test]
    fn test_literal_target_degrades_for_update() {
        let built = classify_assignment(
            Position::UNKNOWN,
            leaf(NodeKind::IntNumber(1)),
            AssignmentOperator::Increment,
            None,
            Some(PrePost::Pre),
        )
        .unwrap();
        match built.kind {
            NodeKind::SimpleIncrement { target, op } => {
                assert_eq!(target.kind, NodeKind::IntNumber(1));
                assert_eq!(target.pos, Position::new(1, 0, 1));
                assert_eq!(op, AssignmentOperator::Increment);
            }
            other => panic!("expected SimpleIncrement, got {:?}", other),
        }
    }
}
