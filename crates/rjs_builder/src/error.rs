//! Build failures.
//!
//! A build either produces a complete AST or fails with exactly one
//! [`BuildError`]. [`BuildError::InvalidAssignmentTarget`] and
//! [`BuildError::NestingTooDeep`] describe the program itself; the other
//! variants mean the parse tree does not match the grammar the builder was
//! written against.

use rjs_core::text::Position;
use rjs_diagnostics::{messages, Diagnostic};
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
pub enum BuildError {
    /// An assignment whose left-hand side cannot be written to.
    #[error("{message}")]
    #[diagnostic(code(rjs::invalid_assignment_target))]
    InvalidAssignmentTarget { pos: Position, message: String },

    /// A parse tree nested past the builder's depth limit.
    #[error("'{symbol}' is nested more than {limit} levels deep")]
    #[diagnostic(code(rjs::nesting_too_deep))]
    NestingTooDeep {
        symbol: String,
        pos: Position,
        limit: u32,
    },

    /// A parse node whose symbol has no handler.
    #[error("no handler registered for grammar symbol '{symbol}'")]
    #[diagnostic(
        code(rjs::internal::unknown_symbol),
        help("the parse tree was produced by a grammar this builder does not support")
    )]
    UnknownSymbol { symbol: String, pos: Position },

    /// A parse node whose children do not have the shape its handler expects.
    #[error("malformed '{symbol}' node: {reason}")]
    #[diagnostic(code(rjs::internal::malformed_node))]
    MalformedNode {
        symbol: String,
        pos: Position,
        reason: String,
    },
}

impl BuildError {
    pub(crate) fn invalid_lefthand(pos: Position) -> Self {
        BuildError::InvalidAssignmentTarget {
            pos,
            message: messages::INVALID_LEFTHAND_EXPRESSION.message.to_string(),
        }
    }

    pub(crate) fn invalid_for_in_target(pos: Position) -> Self {
        BuildError::InvalidAssignmentTarget {
            pos,
            message: messages::INVALID_FOR_IN_TARGET.message.to_string(),
        }
    }

    pub(crate) fn malformed(symbol: &str, pos: Position, reason: impl Into<String>) -> Self {
        BuildError::MalformedNode {
            symbol: symbol.to_string(),
            pos,
            reason: reason.into(),
        }
    }

    /// Where the failure was detected.
    pub fn position(&self) -> Position {
        match self {
            BuildError::InvalidAssignmentTarget { pos, .. }
            | BuildError::NestingTooDeep { pos, .. }
            | BuildError::UnknownSymbol { pos, .. }
            | BuildError::MalformedNode { pos, .. } => *pos,
        }
    }

    /// Whether this is a grammar/builder mismatch rather than an error in
    /// the program being built.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            BuildError::InvalidAssignmentTarget { .. } | BuildError::NestingTooDeep { .. }
        )
    }

    /// Convert to a coded diagnostic attributed to `source_name`.
    pub fn to_diagnostic(&self, source_name: &str) -> Diagnostic {
        let pos = self.position();
        match self {
            BuildError::InvalidAssignmentTarget { message, .. } => {
                let template = if message == messages::INVALID_FOR_IN_TARGET.message {
                    &messages::INVALID_FOR_IN_TARGET
                } else {
                    &messages::INVALID_LEFTHAND_EXPRESSION
                };
                Diagnostic::with_location(source_name, pos, template, &[])
            }
            BuildError::NestingTooDeep { symbol, limit, .. } => {
                let limit = limit.to_string();
                Diagnostic::with_location(
                    source_name,
                    pos,
                    &messages::NESTING_TOO_DEEP,
                    &[symbol.as_str(), limit.as_str()],
                )
            }
            BuildError::UnknownSymbol { symbol, .. } => Diagnostic::with_location(
                source_name,
                pos,
                &messages::NO_HANDLER_FOR_SYMBOL,
                &[symbol.as_str()],
            ),
            BuildError::MalformedNode { symbol, reason, .. } => Diagnostic::with_location(
                source_name,
                pos,
                &messages::MALFORMED_NODE,
                &[symbol.as_str(), reason.as_str()],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_diagnostic() {
        let err = BuildError::malformed(
            "whiles",
            Position::new(2, 0, 5),
            "unknown loop keyword 'until'",
        );
        assert!(err.is_internal());
        assert_eq!(
            err.to_string(),
            "malformed 'whiles' node: unknown loop keyword 'until'"
        );

        let diagnostic = err.to_diagnostic("loop.js");
        assert_eq!(diagnostic.code, 9002);
        assert_eq!(
            diagnostic.to_string(),
            "loop.js(2:0): internal error JS9002: malformed 'whiles' node: unknown loop keyword 'until'"
        );
    }

    #[test]
    fn test_unknown_position_has_no_location() {
        let err = BuildError::invalid_lefthand(Position::UNKNOWN);
        let diagnostic = err.to_diagnostic("a.js");
        assert_eq!(diagnostic.position, None);
        assert_eq!(
            diagnostic.to_string(),
            "a.js: error JS1001: invalid lefthand expression"
        );
    }

    #[test]
    fn test_nesting_diagnostic() {
        let err = BuildError::NestingTooDeep {
            symbol: "block".to_string(),
            pos: Position::new(7, 2, 3),
            limit: 1000,
        };
        assert!(!err.is_internal());
        assert_eq!(err.position(), Position::new(7, 2, 3));

        let diagnostic = err.to_diagnostic("deep.js");
        assert_eq!(diagnostic.code, 1003);
        assert!(diagnostic.is_error());
        assert_eq!(
            diagnostic.to_string(),
            "deep.js(7:2): error JS1003: 'block' is nested more than 1000 levels deep"
        );
    }
}
