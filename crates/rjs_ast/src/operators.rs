//! Operator kinds and their token tables.
//!
//! Each operator enum maps to and from the token text the grammar uses for
//! it. The builder folds operator chains through these tables.

use std::fmt;

/// Binary operators produced by folding operator chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Sub,
    Mult,
    Division,
    Mod,
    BitwiseXor,
    BitwiseOr,
    BitwiseAnd,
    And,
    Or,
    Eq,
    Ne,
    StrictEq,
    StrictNe,
    Gt,
    Ge,
    Lt,
    Le,
    Rsh,
    Ursh,
    Lsh,
    Comma,
    In,
}

impl BinaryOperator {
    /// Look up the operator for a token text.
    pub fn from_token(text: &str) -> Option<Self> {
        let op = match text {
            "+" => BinaryOperator::Plus,
            "-" => BinaryOperator::Sub,
            "*" => BinaryOperator::Mult,
            "/" => BinaryOperator::Division,
            "%" => BinaryOperator::Mod,
            "^" => BinaryOperator::BitwiseXor,
            "|" => BinaryOperator::BitwiseOr,
            "&" => BinaryOperator::BitwiseAnd,
            "&&" => BinaryOperator::And,
            "||" => BinaryOperator::Or,
            "==" => BinaryOperator::Eq,
            "!=" => BinaryOperator::Ne,
            "===" => BinaryOperator::StrictEq,
            "!==" => BinaryOperator::StrictNe,
            ">" => BinaryOperator::Gt,
            ">=" => BinaryOperator::Ge,
            "<" => BinaryOperator::Lt,
            "<=" => BinaryOperator::Le,
            ">>" => BinaryOperator::Rsh,
            ">>>" => BinaryOperator::Ursh,
            "<<" => BinaryOperator::Lsh,
            "," => BinaryOperator::Comma,
            "in" => BinaryOperator::In,
            _ => return None,
        };
        Some(op)
    }

    /// The token text of this operator.
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mult => "*",
            BinaryOperator::Division => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::StrictEq => "===",
            BinaryOperator::StrictNe => "!==",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Rsh => ">>",
            BinaryOperator::Ursh => ">>>",
            BinaryOperator::Lsh => "<<",
            BinaryOperator::Comma => ",",
            BinaryOperator::In => "in",
        }
    }

    /// The node name of this operator (`Plus`, `Sub`, ...).
    pub fn name(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "Plus",
            BinaryOperator::Sub => "Sub",
            BinaryOperator::Mult => "Mult",
            BinaryOperator::Division => "Division",
            BinaryOperator::Mod => "Mod",
            BinaryOperator::BitwiseXor => "BitwiseXor",
            BinaryOperator::BitwiseOr => "BitwiseOr",
            BinaryOperator::BitwiseAnd => "BitwiseAnd",
            BinaryOperator::And => "And",
            BinaryOperator::Or => "Or",
            BinaryOperator::Eq => "Eq",
            BinaryOperator::Ne => "Ne",
            BinaryOperator::StrictEq => "StrictEq",
            BinaryOperator::StrictNe => "StrictNe",
            BinaryOperator::Gt => "Gt",
            BinaryOperator::Ge => "Ge",
            BinaryOperator::Lt => "Lt",
            BinaryOperator::Le => "Le",
            BinaryOperator::Rsh => "Rsh",
            BinaryOperator::Ursh => "Ursh",
            BinaryOperator::Lsh => "Lsh",
            BinaryOperator::Comma => "Comma",
            BinaryOperator::In => "In",
        }
    }
}

/// Prefix operators other than `++`/`--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    BitwiseNot,
    Not,
    UPlus,
    UMinus,
    Typeof,
    Void,
    Delete,
}

impl UnaryOperator {
    pub fn from_token(text: &str) -> Option<Self> {
        let op = match text {
            "~" => UnaryOperator::BitwiseNot,
            "!" => UnaryOperator::Not,
            "+" => UnaryOperator::UPlus,
            "-" => UnaryOperator::UMinus,
            "typeof" => UnaryOperator::Typeof,
            "void" => UnaryOperator::Void,
            "delete" => UnaryOperator::Delete,
            _ => return None,
        };
        Some(op)
    }

    pub fn token(self) -> &'static str {
        match self {
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::Not => "!",
            UnaryOperator::UPlus => "+",
            UnaryOperator::UMinus => "-",
            UnaryOperator::Typeof => "typeof",
            UnaryOperator::Void => "void",
            UnaryOperator::Delete => "delete",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryOperator::BitwiseNot => "BitwiseNot",
            UnaryOperator::Not => "Not",
            UnaryOperator::UPlus => "UPlus",
            UnaryOperator::UMinus => "UMinus",
            UnaryOperator::Typeof => "Typeof",
            UnaryOperator::Void => "Void",
            UnaryOperator::Delete => "Delete",
        }
    }
}

/// Operators that write to an assignment target: plain and compound
/// assignment, plus the update operators `++` and `--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    LshAssign,
    RshAssign,
    UrshAssign,
    AndAssign,
    XorAssign,
    OrAssign,
    Increment,
    Decrement,
}

impl AssignmentOperator {
    pub fn from_token(text: &str) -> Option<Self> {
        let op = match text {
            "=" => AssignmentOperator::Assign,
            "+=" => AssignmentOperator::AddAssign,
            "-=" => AssignmentOperator::SubAssign,
            "*=" => AssignmentOperator::MulAssign,
            "/=" => AssignmentOperator::DivAssign,
            "%=" => AssignmentOperator::ModAssign,
            "<<=" => AssignmentOperator::LshAssign,
            ">>=" => AssignmentOperator::RshAssign,
            ">>>=" => AssignmentOperator::UrshAssign,
            "&=" => AssignmentOperator::AndAssign,
            "^=" => AssignmentOperator::XorAssign,
            "|=" => AssignmentOperator::OrAssign,
            "++" => AssignmentOperator::Increment,
            "--" => AssignmentOperator::Decrement,
            _ => return None,
        };
        Some(op)
    }

    pub fn token(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubAssign => "-=",
            AssignmentOperator::MulAssign => "*=",
            AssignmentOperator::DivAssign => "/=",
            AssignmentOperator::ModAssign => "%=",
            AssignmentOperator::LshAssign => "<<=",
            AssignmentOperator::RshAssign => ">>=",
            AssignmentOperator::UrshAssign => ">>>=",
            AssignmentOperator::AndAssign => "&=",
            AssignmentOperator::XorAssign => "^=",
            AssignmentOperator::OrAssign => "|=",
            AssignmentOperator::Increment => "++",
            AssignmentOperator::Decrement => "--",
        }
    }

    /// Whether this is `++` or `--`.
    #[inline]
    pub fn is_update(self) -> bool {
        matches!(self, AssignmentOperator::Increment | AssignmentOperator::Decrement)
    }
}

/// Whether an update operator was written before or after its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrePost {
    Pre,
    Post,
}

impl PrePost {
    pub fn as_str(self) -> &'static str {
        match self {
            PrePost::Pre => "pre",
            PrePost::Post => "post",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_token_table() {
        for text in [
            "+", "-", "*", "/", "%", "^", "|", "&", "&&", "||", "==", "!=", "===", "!==", ">", ">=",
            "<", "<=", ">>", ">>>", "<<", ",", "in",
        ] {
            let op = BinaryOperator::from_token(text).unwrap();
            assert_eq!(op.token(), text);
        }
        assert_eq!(BinaryOperator::from_token("."), None);
        assert_eq!(BinaryOperator::from_token("="), None);
    }

    #[test]
    fn test_unary_token_table() {
        assert_eq!(UnaryOperator::from_token("typeof"), Some(UnaryOperator::Typeof));
        assert_eq!(UnaryOperator::from_token("-"), Some(UnaryOperator::UMinus));
        assert_eq!(UnaryOperator::from_token("++"), None);
    }

    #[test]
    fn test_assignment_operators() {
        assert!(AssignmentOperator::from_token("++").unwrap().is_update());
        assert!(!AssignmentOperator::from_token(">>>=").unwrap().is_update());
        assert_eq!(AssignmentOperator::from_token("=="), None);
    }
}
