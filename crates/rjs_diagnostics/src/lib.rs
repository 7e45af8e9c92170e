//! rjs_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Every user-facing or internal failure of the front end maps to one entry
//! of the coded message table in [`messages`]. Diagnostics carry the source
//! name and position they were raised at.

use rjs_core::text::Position;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Error,
    /// A defect in the pairing of grammar and builder rather than in the
    /// program being built.
    Internal,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Internal => write!(f, "internal error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001, 9001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The source name the diagnostic was raised in, if any.
    pub source_name: Option<String>,
    /// Where in the source the diagnostic was raised, if known.
    pub position: Option<Position>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            source_name: None,
            position: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic attached to a source name and position.
    ///
    /// An empty source name or the unknown position sentinel are recorded
    /// as absent.
    pub fn with_location(
        source_name: &str,
        position: Position,
        message: &DiagnosticMessage,
        args: &[&str],
    ) -> Self {
        Self {
            source_name: (!source_name.is_empty()).then(|| source_name.to_string()),
            position: (!position.is_unknown()).then_some(position),
            ..Self::new(message, args)
        }
    }

    /// Whether this is a user-facing error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source_name, self.position) {
            (Some(name), Some(pos)) => write!(f, "{}({}): ", name, pos)?,
            (Some(name), None) => write!(f, "{}: ", name)?,
            (None, Some(pos)) => write!(f, "({}): ", pos)?,
            (None, None) => {}
        }
        write!(f, "{} JS{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Internal, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Internal, message: $msg }
        };
    }

    // ========================================================================
    // Build errors (1000-1099)
    // ========================================================================
    pub const INVALID_LEFTHAND_EXPRESSION: DiagnosticMessage = diag!(1001, Error, "invalid lefthand expression");
    pub const INVALID_FOR_IN_TARGET: DiagnosticMessage = diag!(1002, Error, "invalid lefthand expression in for-in");
    pub const NESTING_TOO_DEEP: DiagnosticMessage = diag!(1003, Error, "'{0}' is nested more than {1} levels deep");

    // ========================================================================
    // Grammar/builder mismatches (9000-9099)
    // ========================================================================
    pub const NO_HANDLER_FOR_SYMBOL: DiagnosticMessage = diag!(9001, Internal, "no handler registered for grammar symbol '{0}'");
    pub const MALFORMED_NODE: DiagnosticMessage = diag!(9002, Internal, "malformed '{0}' node: {1}");
}
