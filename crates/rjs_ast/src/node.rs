//! AST node definitions.
//!
//! Every node is a [`Node`]: a [`Position`] plus a [`NodeKind`]. Nodes own
//! their children outright; the tree has no back-references or shared
//! subtrees. The only link that reaches into an enclosing scope is the depth
//! stored in [`NodeKind::VariableIdentifier`], which is a plain count.

use crate::operators::{AssignmentOperator, BinaryOperator, PrePost, UnaryOperator};
use rjs_core::collections::FxIndexMap;
use rjs_core::text::Position;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// A positioned AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub pos: Position,
    pub kind: NodeKind,
}

/// An optional owned child.
pub type OptionalNode = Option<Box<Node>>;

impl Node {
    #[inline]
    pub fn new(pos: Position, kind: NodeKind) -> Self {
        Self { pos, kind }
    }

    /// The bound name of an `Identifier` or `VariableIdentifier`.
    pub fn literal_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier(name) | NodeKind::VariableIdentifier { name, .. } => Some(name),
            _ => None,
        }
    }
}

// ============================================================================
// Composite node payloads
// ============================================================================

/// The body of a program or function: its statements plus the declarations
/// harvested from its scope frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceElements {
    /// Names declared with `var`, in order of first declaration.
    pub var_names: Vec<String>,
    /// Function declarations, keyed by name, in order of declaration.
    pub func_decls: FxIndexMap<String, Node>,
    /// Statements in source order. Function declarations are not included.
    pub statements: Vec<Node>,
    /// Source name used in diagnostics.
    pub source_name: String,
}

/// A function declaration or function expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The function's own name; anonymous function expressions have none.
    pub name: Option<String>,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// The body; `None` for an empty body.
    pub body: OptionalNode,
}

// ============================================================================
// Node kinds
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // -- Literals --
    IntNumber(i64),
    FloatNumber(f64),
    String(String),
    Boolean(bool),
    Null,

    // -- References --
    /// A name resolved at run time.
    Identifier(String),
    /// A name bound to a `var` declared `depth` frames out (0 = current frame).
    VariableIdentifier { depth: u32, name: String },
    This,

    // -- Expressions --
    Binary {
        op: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    Unary {
        op: UnaryOperator,
        operand: Box<Node>,
    },
    /// `object[index]`
    Member { object: Box<Node>, index: Box<Node> },
    /// `object.name`
    MemberDot { object: Box<Node>, name: String },
    Call {
        callee: Box<Node>,
        arguments: Box<Node>,
    },
    New(Box<Node>),
    NewWithArgs {
        callee: Box<Node>,
        arguments: Box<Node>,
    },
    Array(Vec<Node>),
    ObjectInit(Vec<Node>),
    PropertyInit { key: Box<Node>, value: Box<Node> },
    ArgumentList(Vec<Node>),
    VariableDeclList(Vec<Node>),

    // -- Assignments --
    SimpleAssignment {
        target: Box<Node>,
        value: OptionalNode,
        op: AssignmentOperator,
        pre_post: Option<PrePost>,
    },
    MemberAssignment {
        object: Box<Node>,
        index: Box<Node>,
        value: OptionalNode,
        op: AssignmentOperator,
        pre_post: Option<PrePost>,
    },
    MemberDotAssignment {
        object: Box<Node>,
        name: String,
        value: OptionalNode,
        op: AssignmentOperator,
        pre_post: Option<PrePost>,
    },
    /// `++`/`--` applied to a target that is not a reference.
    SimpleIncrement {
        target: Box<Node>,
        op: AssignmentOperator,
    },

    // -- Statements --
    Program(Box<Node>),
    SourceElements(SourceElements),
    Block(Vec<Node>),
    /// Both `if` statements and `?:` expressions.
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: OptionalNode,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Do {
        body: Box<Node>,
        condition: Box<Node>,
    },
    For {
        init: OptionalNode,
        condition: Box<Node>,
        update: OptionalNode,
        body: Box<Node>,
    },
    /// `for (name in iterable)`
    ForIn {
        name: String,
        iterable: Box<Node>,
        body: Box<Node>,
    },
    /// `for (var target in iterable)`
    ForVarIn {
        target: Box<Node>,
        iterable: Box<Node>,
        body: Box<Node>,
    },
    VariableDeclaration {
        identifier: Box<Node>,
        init: OptionalNode,
    },
    /// A `var` statement wrapping a `VariableDeclList`.
    Variable(Box<Node>),
    ExprStatement(Box<Node>),
    Return(OptionalNode),
    Break(Option<String>),
    Continue(Option<String>),
    Throw(Box<Node>),
    Try {
        block: Box<Node>,
        catch_param: OptionalNode,
        catch_block: OptionalNode,
        finally_block: OptionalNode,
    },
    With {
        object: Box<Node>,
        body: Box<Node>,
    },
    Empty,
    FunctionStatement(Function),
}

impl NodeKind {
    /// The name of this node kind. Binary and unary nodes report their
    /// operator's name (`Plus`, `Typeof`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::IntNumber(_) => "IntNumber",
            NodeKind::FloatNumber(_) => "FloatNumber",
            NodeKind::String(_) => "String",
            NodeKind::Boolean(_) => "Boolean",
            NodeKind::Null => "Null",
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::VariableIdentifier { .. } => "VariableIdentifier",
            NodeKind::This => "This",
            NodeKind::Binary { op, .. } => op.name(),
            NodeKind::Unary { op, .. } => op.name(),
            NodeKind::Member { .. } => "Member",
            NodeKind::MemberDot { .. } => "MemberDot",
            NodeKind::Call { .. } => "Call",
            NodeKind::New(_) => "New",
            NodeKind::NewWithArgs { .. } => "NewWithArgs",
            NodeKind::Array(_) => "Array",
            NodeKind::ObjectInit(_) => "ObjectInit",
            NodeKind::PropertyInit { .. } => "PropertyInit",
            NodeKind::ArgumentList(_) => "ArgumentList",
            NodeKind::VariableDeclList(_) => "VariableDeclList",
            NodeKind::SimpleAssignment { .. } => "SimpleAssignment",
            NodeKind::MemberAssignment { .. } => "MemberAssignment",
            NodeKind::MemberDotAssignment { .. } => "MemberDotAssignment",
            NodeKind::SimpleIncrement { .. } => "SimpleIncrement",
            NodeKind::Program(_) => "Program",
            NodeKind::SourceElements(_) => "SourceElements",
            NodeKind::Block(_) => "Block",
            NodeKind::If { .. } => "If",
            NodeKind::While { .. } => "While",
            NodeKind::Do { .. } => "Do",
            NodeKind::For { .. } => "For",
            NodeKind::ForIn { .. } => "ForIn",
            NodeKind::ForVarIn { .. } => "ForVarIn",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::Variable(_) => "Variable",
            NodeKind::ExprStatement(_) => "ExprStatement",
            NodeKind::Return(_) => "Return",
            NodeKind::Break(_) => "Break",
            NodeKind::Continue(_) => "Continue",
            NodeKind::Throw(_) => "Throw",
            NodeKind::Try { .. } => "Try",
            NodeKind::With { .. } => "With",
            NodeKind::Empty => "Empty",
            NodeKind::FunctionStatement(_) => "FunctionStatement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Node {
        Node::new(Position::UNKNOWN, NodeKind::Identifier(name.to_string()))
    }

    #[test]
    fn test_literal_name() {
        assert_eq!(ident("x").literal_name(), Some("x"));
        let var = Node::new(
            Position::UNKNOWN,
            NodeKind::VariableIdentifier { depth: 2, name: "y".to_string() },
        );
        assert_eq!(var.literal_name(), Some("y"));
        assert_eq!(Node::new(Position::UNKNOWN, NodeKind::This).literal_name(), None);
    }

    #[test]
    fn test_kind_names_follow_operators() {
        let sub = NodeKind::Binary {
            op: BinaryOperator::Sub,
            left: Box::new(ident("a")),
            right: Box::new(ident("b")),
        };
        assert_eq!(sub.name(), "Sub");
        let not = NodeKind::Unary { op: UnaryOperator::Not, operand: Box::new(ident("a")) };
        assert_eq!(not.name(), "Not");
        assert_eq!(NodeKind::Empty.name(), "Empty");
    }
}
