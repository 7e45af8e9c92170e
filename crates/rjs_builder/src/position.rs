//! Position derivation for parse nodes.

use rjs_core::text::Position;
use rjs_cst::ParseNode;

/// Derive the span of `node` from its leftmost terminal.
///
/// Nonterminals descend through their first child until a terminal is
/// reached. A chain that ends in a nonterminal without children yields
/// [`Position::UNKNOWN`]. Never fails.
pub fn position_of(node: &ParseNode) -> Position {
    let mut current = node;
    loop {
        match current {
            ParseNode::Terminal(terminal) => {
                return Position::from_token(terminal.pos, terminal.text.len());
            }
            ParseNode::Nonterminal(nonterminal) => match nonterminal.children.first() {
                Some(first) => current = first,
                None => return Position::UNKNOWN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rjs_cst::SourcePos;

    #[test]
    fn test_terminal_span() {
        let node = ParseNode::terminal("IDENTIFIERNAME", "count", SourcePos::new(10, 3, 4));
        assert_eq!(position_of(&node), Position::new(3, 4, 9));
    }

    #[test]
    fn test_leftmost_descent() {
        let leaf = ParseNode::terminal("IDENTIFIERNAME", "ab", SourcePos::new(0, 1, 7));
        let other = ParseNode::terminal("IDENTIFIERNAME", "zzz", SourcePos::new(0, 2, 0));
        let inner = ParseNode::nonterminal("additiveexpression", vec![leaf, other]);
        let outer = ParseNode::nonterminal("expressionstatement", vec![inner]);
        assert_eq!(position_of(&outer), Position::new(1, 7, 9));
    }

    #[test]
    fn test_unknown_when_no_terminal() {
        let empty = ParseNode::nonterminal("sourceelements", vec![]);
        assert!(position_of(&empty).is_unknown());
        let nested = ParseNode::nonterminal("program", vec![empty]);
        assert_eq!(position_of(&nested), Position::UNKNOWN);
    }
}
