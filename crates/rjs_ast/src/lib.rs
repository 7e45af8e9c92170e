//! rjs_ast: Abstract Syntax Tree definitions for the rjs front end.
//!
//! This module defines the AST node types, the operator tables used to fold
//! operator chains, and traversal helpers for downstream consumers.

pub mod node;
pub mod operators;
pub mod visitor;

// Re-export key types
pub use node::*;
pub use operators::{AssignmentOperator, BinaryOperator, PrePost, UnaryOperator};
