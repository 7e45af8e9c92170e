//! The closed set of grammar symbols the AST builder has handlers for.
//!
//! Parse nodes carry their symbol as text; the builder resolves it to a
//! [`GrammarSymbol`] once and then matches exhaustively, so adding a
//! production here forces a handler to be written.

use std::fmt;

macro_rules! grammar_symbols {
    ($($variant:ident => $name:literal,)*) => {
        /// A grammar production or token class known to the builder.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum GrammarSymbol {
            $($variant,)*
        }

        impl GrammarSymbol {
            /// Every known symbol, in declaration order.
            pub const ALL: &'static [GrammarSymbol] = &[$(GrammarSymbol::$variant,)*];

            /// Look up a symbol by the name the grammar gives it.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(GrammarSymbol::$variant),)*
                    _ => None,
                }
            }

            /// The name the grammar gives this symbol.
            pub fn name(self) -> &'static str {
                match self {
                    $(GrammarSymbol::$variant => $name,)*
                }
            }
        }
    };
}

grammar_symbols! {
    // Tokens
    DecimalLiteral => "DECIMALLITERAL",
    HexIntegerLiteral => "HEXINTEGERLITERAL",
    OctalLiteral => "OCTALLITERAL",
    DoubleString => "DOUBLESTRING",
    SingleString => "SINGLESTRING",
    IdentifierName => "IDENTIFIERNAME",

    // Program structure
    Program => "program",
    SourceElements => "sourceelements",
    FunctionDeclaration => "functiondeclaration",
    FunctionExpression => "functionexpression",
    FormalParameterList => "formalparameterlist",

    // Statements
    VariableStatement => "variablestatement",
    VariableDeclarationList => "variabledeclarationlist",
    VariableDeclarationListNoIn => "variabledeclarationlistnoin",
    VariableDeclaration => "variabledeclaration",
    VariableDeclarationNoIn => "variabledeclarationnoin",
    ExpressionStatement => "expressionstatement",
    EmptyStatement => "emptystatement",
    Block => "block",
    IfStatement => "ifstatement",
    IterationStatement => "iterationstatement",
    Whiles => "whiles",
    RegularFor => "regularfor",
    RegularVarFor => "regularvarfor",
    InFor => "infor",
    InVarFor => "invarfor",
    ContinueStatement => "continuestatement",
    BreakStatement => "breakstatement",
    ReturnStatement => "returnstatement",
    WithStatement => "withstatement",
    ThrowStatement => "throwstatement",
    TryStatement => "trystatement",

    // Expressions
    Expression => "expression",
    ExpressionNoIn => "expressionnoin",
    AssignmentExpression => "assignmentexpression",
    AssignmentExpressionNoIn => "assignmentexpressionnoin",
    ConditionalExpression => "conditionalexpression",
    LogicalOrExpression => "logicalorexpression",
    LogicalAndExpression => "logicalandexpression",
    BitwiseOrExpression => "bitwiseorexpression",
    BitwiseXorExpression => "bitwisexorexpression",
    BitwiseAndExpression => "bitwiseandexpression",
    EqualityExpression => "equalityexpression",
    RelationalExpression => "relationalexpression",
    ShiftExpression => "shiftexpression",
    AdditiveExpression => "additiveexpression",
    MultiplicativeExpression => "multiplicativeexpression",
    UnaryExpression => "unaryexpression",
    PostfixExpression => "postfixexpression",
    NewExpression => "newexpression",
    CallExpression => "callexpression",
    MemberExpression => "memberexpression",
    Arguments => "arguments",
    PrimaryExpression => "primaryexpression",
    ArrayLiteral => "arrayliteral",
    ObjectLiteral => "objectliteral",
    PropertyNameAndValue => "propertynameandvalue",
    NullLiteral => "nullliteral",
    BooleanLiteral => "booleanliteral",
}

impl GrammarSymbol {
    /// Whether the symbol names a token class rather than a production.
    pub fn is_token(self) -> bool {
        matches!(
            self,
            GrammarSymbol::DecimalLiteral
                | GrammarSymbol::HexIntegerLiteral
                | GrammarSymbol::OctalLiteral
                | GrammarSymbol::DoubleString
                | GrammarSymbol::SingleString
                | GrammarSymbol::IdentifierName
        )
    }
}

impl fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for &symbol in GrammarSymbol::ALL {
            assert_eq!(GrammarSymbol::from_name(symbol.name()), Some(symbol));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(GrammarSymbol::from_name("switchstatement"), None);
        assert_eq!(GrammarSymbol::from_name("Program"), None);
        assert_eq!(GrammarSymbol::from_name(""), None);
    }

    #[test]
    fn test_token_classes() {
        assert!(GrammarSymbol::IdentifierName.is_token());
        assert!(GrammarSymbol::OctalLiteral.is_token());
        assert!(!GrammarSymbol::Block.is_token());
    }
}
