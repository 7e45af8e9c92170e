//! Statement and body handlers.
//!
//! Entering a `sourceelements` node opens a scope frame; leaving it attaches
//! the frame's `var` names and function declarations to the resulting
//! `SourceElements` node.

use crate::builder::{child, terminal, token_text, Builder};
use crate::error::{BuildError, BuildResult};
use crate::position::position_of;
use rjs_ast::{Function, Node, NodeKind, SourceElements};
use rjs_core::collections::FxIndexMap;
use rjs_cst::ParseNode;

/// Tokens that mark an absent slot in `for` headers and function nodes.
const EMPTY_SLOT_TOKENS: [&str; 4] = [";", ")", "(", "}"];

impl Builder {
    // ========================================================================
    // Program structure
    // ========================================================================

    /// A program without statements has no `sourceelements` child, or only
    /// the end-of-input token.
    pub(crate) fn build_program(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(node);
        let body = match node.child(0) {
            Some(first) if !first.is_terminal() => self.build_node(first)?,
            _ => Node::new(
                pos,
                NodeKind::SourceElements(SourceElements {
                    var_names: Vec::new(),
                    func_decls: FxIndexMap::default(),
                    statements: Vec::new(),
                    source_name: self.options.source_name.clone(),
                }),
            ),
        };
        Ok(Node::new(pos, NodeKind::Program(Box::new(body))))
    }

    pub(crate) fn build_source_elements(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(node);
        self.scopes.push_frame();
        let statements = self.build_children_from(node, 0)?;
        let harvest = self.scopes.pop_frame().ok_or_else(|| {
            BuildError::malformed(node.symbol(), pos, "scope frame already closed")
        })?;
        Ok(Node::new(
            pos,
            NodeKind::SourceElements(SourceElements {
                var_names: harvest.var_names,
                func_decls: harvest.func_decls,
                statements,
                source_name: self.options.source_name.clone(),
            }),
        ))
    }

    /// Read one optional slot at `index`.
    ///
    /// An empty-slot token yields `None` and advances by one. Anything else
    /// is built and the index advances by two, past the delimiter that
    /// follows it.
    pub fn next_slot(
        &mut self,
        node: &ParseNode,
        index: usize,
    ) -> BuildResult<(Option<Node>, usize)> {
        let slot = child(node, index)?;
        if slot
            .text()
            .is_some_and(|text| EMPTY_SLOT_TOKENS.contains(&text))
        {
            return Ok((None, index + 1));
        }
        Ok((Some(self.build_node(slot)?), index + 2))
    }

    // ========================================================================
    // Functions
    // ========================================================================

    /// Slots: name, parameter list, body; each may be absent.
    pub(crate) fn build_function(
        &mut self,
        node: &ParseNode,
        declaration: bool,
    ) -> BuildResult<Node> {
        let pos = position_of(node);
        let (identifier, index) = self.next_slot(node, 0)?;
        let (parameters, index) = self.next_slot(node, index)?;
        let (body, _) = self.next_slot(node, index)?;

        let name = match identifier {
            Some(identifier) => Some(literal_name(node, &identifier)?),
            None if declaration => {
                return Err(BuildError::malformed(
                    node.symbol(),
                    pos,
                    "function declaration without a name",
                ))
            }
            None => None,
        };
        let params = match parameters {
            Some(Node {
                kind: NodeKind::ArgumentList(items),
                ..
            }) => items
                .iter()
                .map(|param| literal_name(node, param))
                .collect::<BuildResult<Vec<_>>>()?,
            Some(other) => {
                return Err(BuildError::malformed(
                    node.symbol(),
                    other.pos,
                    "expected a parameter list",
                ))
            }
            None => Vec::new(),
        };

        Ok(Node::new(
            pos,
            NodeKind::FunctionStatement(Function {
                name,
                params,
                body: body.map(Box::new),
            }),
        ))
    }

    /// Register a function declaration in the enclosing frame.
    pub(crate) fn build_function_declaration(&mut self, node: &ParseNode) -> BuildResult<()> {
        let function = self.build_function(node, true)?;
        let name = match &function.kind {
            NodeKind::FunctionStatement(Function { name: Some(name), .. }) => name.clone(),
            _ => {
                return Err(BuildError::malformed(
                    node.symbol(),
                    function.pos,
                    "unnamed declaration",
                ))
            }
        };
        let pos = function.pos;
        if !self.scopes.declare_func(&name, function) {
            return Err(BuildError::malformed(
                node.symbol(),
                pos,
                "function declared outside of any body",
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Variables
    // ========================================================================

    pub(crate) fn build_variable_statement(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let list = self.build_child(node, 0)?;
        Ok(Node::new(position_of(node), NodeKind::Variable(Box::new(list))))
    }

    pub(crate) fn build_declaration_list(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let items = self.build_children_from(node, 0)?;
        Ok(Node::new(position_of(node), NodeKind::VariableDeclList(items)))
    }

    /// The name is built before it is declared, so `var x` resolves `x`
    /// against the frames as they were before this declaration. The
    /// initializer is built after.
    pub(crate) fn build_variable_declaration(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(node);
        let identifier = self.build_child(node, 0)?;
        let name = literal_name(node, &identifier)?;
        if !self.scopes.declare_var(&name) {
            return Err(BuildError::malformed(
                node.symbol(),
                pos,
                "variable declared outside of any body",
            ));
        }
        let init = self.build_optional_child(node, 1)?;
        Ok(Node::new(
            pos,
            NodeKind::VariableDeclaration {
                identifier: Box::new(identifier),
                init,
            },
        ))
    }

    // ========================================================================
    // Simple statements
    // ========================================================================

    pub(crate) fn build_expression_statement(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let expression = self.build_child(node, 0)?;
        Ok(Node::new(position_of(node), NodeKind::ExprStatement(Box::new(expression))))
    }

    pub(crate) fn build_empty(&mut self, node: &ParseNode) -> Node {
        Node::new(position_of(node), NodeKind::Empty)
    }

    pub(crate) fn build_block(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let statements = self.build_children_from(node, 1)?;
        Ok(Node::new(position_of(node), NodeKind::Block(statements)))
    }

    pub(crate) fn build_return(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let value = self.build_optional_child(node, 0)?;
        Ok(Node::new(position_of(node), NodeKind::Return(value)))
    }

    pub(crate) fn build_throw(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let value = self.build_child(node, 0)?;
        Ok(Node::new(position_of(node), NodeKind::Throw(Box::new(value))))
    }

    pub(crate) fn build_break(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let label = jump_label(node)?;
        Ok(Node::new(position_of(node), NodeKind::Break(label)))
    }

    pub(crate) fn build_continue(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let label = jump_label(node)?;
        Ok(Node::new(position_of(node), NodeKind::Continue(label)))
    }

    pub(crate) fn build_with(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let object = self.build_child(node, 0)?;
        let body = self.build_child(node, 1)?;
        Ok(Node::new(
            position_of(node),
            NodeKind::With {
                object: Box::new(object),
                body: Box::new(body),
            },
        ))
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    pub(crate) fn build_if(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let condition = self.build_child(node, 0)?;
        let then_branch = self.build_child(node, 1)?;
        let else_branch = self.build_optional_child(node, 2)?;
        Ok(Node::new(
            position_of(node),
            NodeKind::If {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch,
            },
        ))
    }

    pub(crate) fn build_iteration(&mut self, node: &ParseNode) -> BuildResult<Node> {
        self.build_child(node, 0)
    }

    /// `while cond body` or `do body cond`.
    pub(crate) fn build_whiles(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(node);
        let kind = match token_text(node, 0)? {
            "while" => {
                let condition = self.build_child(node, 1)?;
                let body = self.build_child(node, 2)?;
                NodeKind::While {
                    condition: Box::new(condition),
                    body: Box::new(body),
                }
            }
            "do" => {
                let body = self.build_child(node, 1)?;
                let condition = self.build_child(node, 2)?;
                NodeKind::Do {
                    body: Box::new(body),
                    condition: Box::new(condition),
                }
            }
            other => {
                return Err(BuildError::malformed(
                    node.symbol(),
                    pos,
                    format!("unknown loop keyword '{}'", other),
                ))
            }
        };
        Ok(Node::new(pos, kind))
    }

    /// C-style `for`. The header starts after the opening `(`. A missing
    /// condition is `true`.
    pub(crate) fn build_for(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let pos = position_of(node);
        let (init, index) = self.next_slot(node, 1)?;
        let (condition, index) = self.next_slot(node, index)?;
        let (update, index) = self.next_slot(node, index)?;
        let (body, _) = self.next_slot(node, index)?;

        let condition = condition.unwrap_or_else(|| Node::new(pos, NodeKind::Boolean(true)));
        let body = body.unwrap_or_else(|| Node::new(pos, NodeKind::Empty));
        Ok(Node::new(
            pos,
            NodeKind::For {
                init: init.map(Box::new),
                condition: Box::new(condition),
                update: update.map(Box::new),
                body: Box::new(body),
            },
        ))
    }

    /// `for (name in iterable)`: the target must be a plain name.
    pub(crate) fn build_for_in(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let target = self.build_child(node, 1)?;
        let Some(name) = target.literal_name().map(str::to_string) else {
            return Err(BuildError::invalid_for_in_target(target.pos));
        };
        let iterable = self.build_child(node, 2)?;
        let body = self.build_child(node, 3)?;
        Ok(Node::new(
            position_of(node),
            NodeKind::ForIn {
                name,
                iterable: Box::new(iterable),
                body: Box::new(body),
            },
        ))
    }

    pub(crate) fn build_for_var_in(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let target = self.build_child(node, 1)?;
        let iterable = self.build_child(node, 2)?;
        let body = self.build_child(node, 3)?;
        Ok(Node::new(
            position_of(node),
            NodeKind::ForVarIn {
                target: Box::new(target),
                iterable: Box::new(iterable),
                body: Box::new(body),
            },
        ))
    }

    /// `try block` followed by a `catch` clause (and optionally a `finally`
    /// clause) or by a lone `finally` clause.
    pub(crate) fn build_try(&mut self, node: &ParseNode) -> BuildResult<Node> {
        let block = self.build_child(node, 0)?;
        let clause = child(node, 1)?;

        let mut catch_param = None;
        let mut catch_block = None;
        let finally_block;
        if child(clause, 0)?.is_token("catch") {
            catch_param = Some(Box::new(self.build_child(clause, 1)?));
            catch_block = Some(Box::new(self.build_child(clause, 2)?));
            finally_block = match node.child(2) {
                Some(finally) => Some(Box::new(self.build_child(finally, 1)?)),
                None => None,
            };
        } else {
            finally_block = Some(Box::new(self.build_child(clause, 1)?));
        }

        Ok(Node::new(
            position_of(node),
            NodeKind::Try {
                block: Box::new(block),
                catch_param,
                catch_block,
                finally_block,
            },
        ))
    }
}

/// The bound name of an identifier node built from a child of `node`.
fn literal_name(node: &ParseNode, identifier: &Node) -> BuildResult<String> {
    identifier
        .literal_name()
        .map(str::to_string)
        .ok_or_else(|| BuildError::malformed(node.symbol(), identifier.pos, "expected a name"))
}

/// The optional label of `break`/`continue`, taken as written.
fn jump_label(node: &ParseNode) -> BuildResult<Option<String>> {
    match node.child(0) {
        Some(name) => Ok(Some(terminal(name)?.text.clone())),
        None => Ok(None),
    }
}
