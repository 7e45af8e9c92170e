//! Parallel builds of independent trees.

use crate::builder::Builder;
use crate::error::BuildResult;
use crate::options::BuilderOptions;
use rayon::prelude::*;
use rjs_ast::Node;
use rjs_cst::ParseNode;

/// Build every tree with its own [`Builder`], in parallel.
///
/// Results are returned in the order of `trees`; a failure in one tree does
/// not affect the others.
pub fn build_all(trees: &[ParseNode], options: &BuilderOptions) -> Vec<BuildResult<Node>> {
    tracing::debug!(count = trees.len(), "build batch");
    trees
        .par_iter()
        .map(|tree| Builder::with_options(options.clone()).build(tree))
        .collect()
}

/// Build a single tree.
pub fn build(tree: &ParseNode, options: &BuilderOptions) -> BuildResult<Node> {
    Builder::with_options(options.clone()).build(tree)
}
