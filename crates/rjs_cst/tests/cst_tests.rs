//! Parse tree interchange tests.
//!
//! Verifies the JSON form upstream parsers use to hand trees over.

use rjs_cst::{GrammarSymbol, ParseNode, SourcePos};

const EXPRESSION_STATEMENT_JSON: &str = r#"{
    "kind": "nonterminal",
    "symbol": "expressionstatement",
    "children": [
        {
            "kind": "nonterminal",
            "symbol": "additiveexpression",
            "children": [
                { "kind": "terminal", "symbol": "IDENTIFIERNAME", "text": "a", "pos": { "index": 0, "line": 0, "column": 0 } },
                { "kind": "terminal", "symbol": "__3_+", "text": "+", "pos": { "index": 2, "line": 0, "column": 2 } },
                { "kind": "terminal", "symbol": "DECIMALLITERAL", "text": "1", "pos": { "line": 0, "column": 4 } }
            ]
        }
    ]
}"#;

#[test]
fn test_deserialize_tree() {
    let tree = ParseNode::from_json(EXPRESSION_STATEMENT_JSON).unwrap();
    assert_eq!(tree.symbol(), "expressionstatement");
    assert_eq!(GrammarSymbol::from_name(tree.symbol()), Some(GrammarSymbol::ExpressionStatement));

    let additive = tree.child(0).unwrap();
    assert_eq!(additive.children().len(), 3);
    assert!(additive.children()[1].is_token("+"));

    let literal = additive.children()[2].as_terminal().unwrap();
    assert_eq!(literal.text, "1");
    // `index` is optional in the interchange form
    assert_eq!(literal.pos, SourcePos::new(0, 0, 4));
}

#[test]
fn test_json_round_trip_preserves_tree() {
    let tree = ParseNode::nonterminal(
        "block",
        vec![
            ParseNode::terminal("__5_{", "{", SourcePos::new(0, 0, 0)),
            ParseNode::nonterminal("emptystatement", vec![]),
        ],
    );
    let json = tree.to_json().unwrap();
    assert_eq!(ParseNode::from_json(&json).unwrap(), tree);
}

#[test]
fn test_json_round_trip_deeply_nested_tree() {
    let mut tree = ParseNode::nonterminal("emptystatement", vec![]);
    for line in 0..150 {
        tree = ParseNode::nonterminal(
            "block",
            vec![ParseNode::terminal("__5_{", "{", SourcePos::new(0, line, 0)), tree],
        );
    }
    let json = tree.to_json().unwrap();
    let decoded = ParseNode::from_json(&json).unwrap();
    assert_eq!(decoded, tree);

    let mut depth = 1;
    let mut current = &decoded;
    while let Some(inner) = current.child(1) {
        depth += 1;
        current = inner;
    }
    assert_eq!(depth, 151);
    assert_eq!(current.symbol(), "emptystatement");
}

#[test]
fn test_nonterminal_children_default_to_empty() {
    let tree =
        ParseNode::from_json(r#"{ "kind": "nonterminal", "symbol": "emptystatement" }"#).unwrap();
    assert!(tree.children().is_empty());
}

#[test]
fn test_rejects_unknown_kind() {
    assert!(ParseNode::from_json(r#"{ "kind": "leaf", "symbol": "x" }"#).is_err());
}
