//! Expression handlers.
//!
//! The grammar leaves operator chains flat (`operand (op operand)*`); they
//! are folded here, strictly left to right. Member access and calls are
//! folded by the same loop, so `a.b(c)[d]` nests as
//! `Member(Call(MemberDot(a, b), (c)), d)`.

use crate::assignment::classify_assignment;
use crate::builder::{child, terminal, token_text, Builder};
use crate::error::{BuildError, BuildResult};
use crate::literal;
use crate::position::position_of;
use rjs_ast::{AssignmentOperator, BinaryOperator, Node, NodeKind, PrePost, UnaryOperator};
use rjs_cst::{GrammarSymbol, ParseNode};

impl Builder {
    // ========================================================================
    // Literals and names
    // ========================================================================

    pub(crate) fn build_decimal(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let token = terminal(node)?;
        Ok(Node::new(position_of(node), literal::decimal_literal(&token.text)))
    }

    pub(crate) fn build_radix(&mut self, node: &ParseNode, radix: u32) -> BuildResult<Node> {
        let token = terminal(node)?;
        let pos = position_of(node);
        let value = literal::radix_literal(&token.text, radix).ok_or_else(|| {
            BuildError::malformed(
                node.symbol(),
                pos,
                format!("'{}' is not a base-{} integer", token.text, radix),
            )
        })?;
        Ok(Node::new(pos, NodeKind::IntNumber(value)))
    }

    pub(crate) fn build_string(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let token = terminal(node)?;
        Ok(Node::new(
            position_of(node),
            NodeKind::String(literal::string_literal(&token.text)),
        ))
    }

    /// A name bound by an enclosing `var` becomes a `VariableIdentifier`;
    /// anything else is left for run-time lookup.
    pub(crate) fn build_identifier(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let name = terminal(node)?.text.clone();
        let depth = if self.options.static_resolution {
            self.scopes.resolve(&name)
        } else {
            None
        };
        let kind = match depth {
            Some(depth) => NodeKind::VariableIdentifier { depth, name },
            None => NodeKind::Identifier(name),
        };
        Ok(Node::new(position_of(node), kind))
    }

    pub(crate) fn build_keyword_literal(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let kind = match token_text(node, 0)? {
            "true" => NodeKind::Boolean(true),
            "false" => NodeKind::Boolean(false),
            "null" => NodeKind::Null,
            other => {
                return Err(BuildError::malformed(
                    node.symbol(),
                    position_of(node),
                    format!("unknown literal '{}'", other),
                ))
            }
        };
        Ok(Node::new(position_of(node), kind))
    }

    pub(crate) fn build_this(&mut self, node: &ParseNode) -> Node {
        Node::new(position_of(node), NodeKind::This)
    }

    // ========================================================================
    // Operator chains
    // ========================================================================

    pub(crate) fn build_binary_chain(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let first = self.build_child(node, 0)?;
        self.fold_chain(node, first, 1)
    }

    pub(crate) fn build_call_chain(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let callee = self.build_child(node, 0)?;
        self.fold_chain(node, callee, 1)
    }

    /// `new X(args)...`, `new X...` or a plain member chain.
    pub(crate) fn build_member_chain(&mut self, node: &ParseNode) -> BuildResult<Node> {
        if !child(node, 0)?.is_token("new") {
            let first = self.build_child(node, 0)?;
            return self.fold_chain(node, first, 1);
        }

        let pos = position_of(node);
        let callee = Box::new(self.build_child(node, 1)?);
        let (head, rest) = match node.child(2) {
            Some(args) if is_arguments(args) => {
                let arguments = Box::new(self.build_node(args)?);
                (NodeKind::NewWithArgs { callee, arguments }, 3)
            }
            _ => (NodeKind::New(callee), 2),
        };
        self.fold_chain(node, Node::new(pos, head), rest)
    }

    /// Fold `node.children[start..]` onto `left`.
    ///
    /// Operator tokens consume the following child as their operand and the
    /// result is positioned at the operator. An `arguments` child applies a
    /// call, positioned at the chain itself.
    fn fold_chain(&mut self, node: &ParseNode, mut left: Node, start: usize) -> BuildResult<Node> {
        let mut index = start;
        while let Some(current) = node.child(index) {
            let Some(op) = current.as_terminal() else {
                if !is_arguments(current) {
                    return Err(BuildError::malformed(
                        node.symbol(),
                        position_of(current),
                        format!("expected an operator, found '{}'", current.symbol()),
                    ));
                }
                let arguments = Box::new(self.build_node(current)?);
                left = Node::new(
                    position_of(node),
                    NodeKind::Call {
                        callee: Box::new(left),
                        arguments,
                    },
                );
                index += 1;
                continue;
            };

            let pos = position_of(current);
            let operand = child(node, index + 1)?;
            let object = Box::new(left);
            let kind = match op.text.as_str() {
                "." => NodeKind::MemberDot {
                    object,
                    name: terminal(operand)?.text.clone(),
                },
                "[" => NodeKind::Member {
                    object,
                    index: Box::new(self.build_node(operand)?),
                },
                text => {
                    let op = BinaryOperator::from_token(text).ok_or_else(|| {
                        BuildError::malformed(
                            node.symbol(),
                            pos,
                            format!("unknown binary operator '{}'", text),
                        )
                    })?;
                    NodeKind::Binary {
                        op,
                        left: object,
                        right: Box::new(self.build_node(operand)?),
                    }
                }
            };
            left = Node::new(pos, kind);
            index += 2;
        }
        Ok(left)
    }

    // ========================================================================
    // Unary, update and assignment
    // ========================================================================

    pub(crate) fn build_unary(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let op_node = child(node, 0)?;
        let text = terminal(op_node)?.text.as_str();
        let pos = position_of(op_node);
        let operand = self.build_child(node, 1)?;

        if let Some(update) = update_operator(text) {
            return classify_assignment(pos, operand, update, None, Some(PrePost::Pre));
        }
        let op = UnaryOperator::from_token(text).ok_or_else(|| {
            BuildError::malformed(node.symbol(), pos, format!("unknown unary operator '{}'", text))
        })?;
        Ok(Node::new(
            pos,
            NodeKind::Unary {
                op,
                operand: Box::new(operand),
            },
        ))
    }

    /// Every postfix expression is an update.
    pub(crate) fn build_postfix(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let op_node = child(node, 1)?;
        let text = terminal(op_node)?.text.as_str();
        let pos = position_of(op_node);
        let operand = self.build_child(node, 0)?;
        let update = update_operator(text).ok_or_else(|| {
            BuildError::malformed(
                node.symbol(),
                pos,
                format!("unknown postfix operator '{}'", text),
            )
        })?;
        classify_assignment(pos, operand, update, None, Some(PrePost::Post))
    }

    pub(crate) fn build_assignment(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(node);
        let target = self.build_child(node, 0)?;
        let text = token_text(node, 1)?;
        let op = AssignmentOperator::from_token(text)
            .filter(|op| !op.is_update())
            .ok_or_else(|| {
                BuildError::malformed(
                    node.symbol(),
                    pos,
                    format!("unknown assignment operator '{}'", text),
                )
            })?;
        let value = self.build_child(node, 2)?;
        classify_assignment(pos, target, op, Some(Box::new(value)), None)
    }

    /// `cond ? then : else` builds the same node as an `if` statement.
    pub(crate) fn build_conditional(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let condition = self.build_child(node, 0)?;
        let then_branch = self.build_child(node, 2)?;
        let else_branch = self.build_child(node, 3)?;
        Ok(Node::new(
            position_of(node),
            NodeKind::If {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Some(Box::new(else_branch)),
            },
        ))
    }

    /// `new X` without arguments; a single child is passed through.
    pub(crate) fn build_new(&mut self, node: &ParseNode) -> BuildResult<Node> {
        if node.children().len() == 1 {
            return self.build_child(node, 0);
        }
        let callee = self.build_child(node, 1)?;
        Ok(Node::new(position_of(node), NodeKind::New(Box::new(callee))))
    }

    // ========================================================================
    // Lists
    // ========================================================================

    pub(crate) fn build_arguments(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let items = self.build_children_from(node, 1)?;
        Ok(Node::new(position_of(node), NodeKind::ArgumentList(items)))
    }

    pub(crate) fn build_formal_parameters(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let items = self.build_children_from(node, 0)?;
        Ok(Node::new(position_of(node), NodeKind::ArgumentList(items)))
    }

    pub(crate) fn build_array(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(child(node, 0)?);
        let items = self.build_children_from(node, 1)?;
        Ok(Node::new(pos, NodeKind::Array(items)))
    }

    pub(crate) fn build_object(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(child(node, 0)?);
        let items = self.build_children_from(node, 1)?;
        Ok(Node::new(pos, NodeKind::ObjectInit(items)))
    }

    /// A bare name key is a property name, never a variable reference.
    pub(crate) fn build_property(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let key_node = child(node, 0)?;
        let key = if key_node.symbol() == GrammarSymbol::IdentifierName.name() {
            let name = terminal(key_node)?.text.clone();
            Node::new(position_of(key_node), NodeKind::Identifier(name))
        } else {
            self.build_node(key_node)?
        };
        let value = self.build_child(node, 1)?;
        Ok(Node::new(
            position_of(node),
            NodeKind::PropertyInit {
                key: Box::new(key),
                value: Box::new(value),
            },
        ))
    }
}

fn is_arguments(node: &ParseNode) -> bool {
    !node.is_terminal() && node.symbol() == GrammarSymbol::Arguments.name()
}

fn update_operator(text: &str) -> Option<AssignmentOperator> {
    AssignmentOperator::from_token(text).filter(|op| op.is_update())
}
