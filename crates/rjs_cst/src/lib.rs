//! rjs_cst: The concrete parse tree consumed by the AST builder.
//!
//! Trees are produced by an external grammar engine and handed over whole,
//! either as values built with [`ParseNode::terminal`] and
//! [`ParseNode::nonterminal`] or in their JSON interchange form.

pub mod node;
pub mod symbol;

pub use node::{Nonterminal, ParseNode, Terminal};
pub use rjs_core::text::SourcePos;
pub use symbol::GrammarSymbol;
