//! rjs_core: Core utilities shared by the rjs front end.
//!
//! Provides source positions and the hashed collections used by the
//! scope tracker and the AST.

pub mod collections;
pub mod text;

// Re-export commonly used types
pub use collections::{FxIndexMap, FxIndexSet};
pub use text::{Position, SourcePos};
