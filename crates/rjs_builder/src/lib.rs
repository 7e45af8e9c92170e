//! rjs_builder: Parse tree to AST conversion with static scope resolution.
//!
//! The builder walks a concrete parse tree once and produces the AST.
//! Along the way it:
//! - Folds flat operator chains into nested, left-associative nodes
//! - Resolves names against enclosing `var` declarations (`VariableIdentifier`)
//! - Harvests `var` names and function declarations into each body
//! - Classifies assignment and update targets
//!
//! Trees nested deeper than [`MAX_NESTING_DEPTH`] are rejected.
//!
//! A build yields a complete AST or exactly one [`BuildError`].

mod assignment;
mod batch;
mod builder;
mod error;
mod expression;
mod literal;
mod options;
mod position;
mod scope;
mod statement;

pub use assignment::classify_assignment;
pub use batch::{build, build_all};
pub use builder::{Builder, MAX_NESTING_DEPTH};
pub use error::{BuildError, BuildResult};
pub use literal::{decimal_literal, radix_literal, string_literal};
pub use options::BuilderOptions;
pub use position::position_of;
pub use scope::{Harvest, ScopeTracker};
