//! Parse tree nodes handed over by the grammar engine.
//!
//! The tree is immutable input: the AST builder only reads it. Terminals
//! carry the token text and its source position; nonterminals carry an
//! ordered list of children.

use rjs_core::text::SourcePos;
use serde::{Deserialize, Serialize};

/// Remaining stack below which JSON decoding switches to a fresh segment.
const JSON_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated while decoding deep trees.
const JSON_STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// A leaf of the parse tree: one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    /// Grammar symbol of the token (e.g. `IDENTIFIERNAME`).
    pub symbol: String,
    /// The token text as it appears in the source.
    pub text: String,
    /// Where the token starts.
    pub pos: SourcePos,
}

/// An interior node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nonterminal {
    /// Grammar symbol of the production (e.g. `ifstatement`).
    pub symbol: String,
    #[serde(default)]
    pub children: Vec<ParseNode>,
}

/// A node of the concrete parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseNode {
    Terminal(Terminal),
    Nonterminal(Nonterminal),
}

impl ParseNode {
    /// Create a terminal node.
    pub fn terminal(symbol: impl Into<String>, text: impl Into<String>, pos: SourcePos) -> Self {
        ParseNode::Terminal(Terminal {
            symbol: symbol.into(),
            text: text.into(),
            pos,
        })
    }

    /// Create a nonterminal node.
    pub fn nonterminal(symbol: impl Into<String>, children: Vec<ParseNode>) -> Self {
        ParseNode::Nonterminal(Nonterminal {
            symbol: symbol.into(),
            children,
        })
    }

    /// Deserialize a tree from its JSON interchange form.
    ///
    /// Each tree level is two JSON levels (the node object and its
    /// `children` array), so serde_json's default nesting limit is lifted
    /// and the stack grows on demand instead.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut json_de = serde_json::Deserializer::from_str(json);
        json_de.disable_recursion_limit();
        let mut stacked = serde_stacker::Deserializer::new(&mut json_de);
        stacked.red_zone = JSON_RED_ZONE;
        stacked.stack_size = JSON_STACK_SEGMENT;
        let tree = ParseNode::deserialize(stacked)?;
        json_de.end()?;
        Ok(tree)
    }

    /// Serialize this tree to its JSON interchange form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The grammar symbol name of this node.
    pub fn symbol(&self) -> &str {
        match self {
            ParseNode::Terminal(t) => &t.symbol,
            ParseNode::Nonterminal(n) => &n.symbol,
        }
    }

    /// The children of this node; empty for terminals.
    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Terminal(_) => &[],
            ParseNode::Nonterminal(n) => &n.children,
        }
    }

    /// The child at `index`, if any.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&ParseNode> {
        self.children().get(index)
    }

    /// The token text, for terminals.
    pub fn text(&self) -> Option<&str> {
        match self {
            ParseNode::Terminal(t) => Some(&t.text),
            ParseNode::Nonterminal(_) => None,
        }
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            ParseNode::Terminal(t) => Some(t),
            ParseNode::Nonterminal(_) => None,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ParseNode::Terminal(_))
    }

    /// Whether this node is a terminal whose text is exactly `text`.
    #[inline]
    pub fn is_token(&self, text: &str) -> bool {
        self.text() == Some(text)
    }
}

impl Drop for Nonterminal {
    /// Unlinks descendants through a work list so that dropping a deep tree
    /// does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let ParseNode::Nonterminal(mut inner) = node {
                pending.append(&mut inner.children);
            }
        }
    }
}

impl From<Terminal> for ParseNode {
    fn from(t: Terminal) -> Self {
        ParseNode::Terminal(t)
    }
}

impl From<Nonterminal> for ParseNode {
    fn from(n: Nonterminal) -> Self {
        ParseNode::Nonterminal(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_accessors() {
        let node = ParseNode::terminal("IDENTIFIERNAME", "x", SourcePos::new(0, 1, 0));
        assert_eq!(node.symbol(), "IDENTIFIERNAME");
        assert_eq!(node.text(), Some("x"));
        assert!(node.is_terminal());
        assert!(node.is_token("x"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_nonterminal_accessors() {
        let leaf = ParseNode::terminal("__0_;", ";", SourcePos::default());
        let node = ParseNode::nonterminal("emptystatement", vec![leaf.clone()]);
        assert_eq!(node.symbol(), "emptystatement");
        assert_eq!(node.text(), None);
        assert!(!node.is_token(";"));
        assert_eq!(node.child(0), Some(&leaf));
        assert_eq!(node.child(1), None);
    }

    #[test]
    fn test_drop_deep_tree() {
        let mut tree = ParseNode::nonterminal("block", Vec::new());
        for _ in 0..200_000 {
            tree = ParseNode::nonterminal("block", vec![tree]);
        }
        drop(tree);
    }

    #[test]
    fn test_from_json_rejects_trailing_input() {
        let json = r#"{"kind":"nonterminal","symbol":"block","children":[]} {}"#;
        assert!(ParseNode::from_json(json).is_err());
    }
}
