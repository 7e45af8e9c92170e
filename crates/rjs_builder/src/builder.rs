//! The builder and its dispatcher.
//!
//! A [`Builder`] walks a parse tree once, top-down, and produces the AST.
//! Every parse node is routed by its grammar symbol to one handler; the
//! handlers live in `expression.rs` and `statement.rs` as further `impl
//! Builder` blocks. The state carried between handlers is the scope stack
//! and the current nesting depth.

use crate::error::{BuildError, BuildResult};
use crate::options::BuilderOptions;
use crate::position::position_of;
use crate::scope::ScopeTracker;
use rjs_ast::Node;
use rjs_cst::{GrammarSymbol, ParseNode, Terminal};

/// Maximum parse-tree nesting depth a build accepts.
pub const MAX_NESTING_DEPTH: u32 = 1000;

/// Remaining stack below which a dispatch switches to a fresh segment.
const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated for deep trees.
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// Converts one parse tree into an AST.
///
/// A builder is used for exactly one tree; [`Builder::build`] consumes it.
/// Independent builds need independent builders.
pub struct Builder {
    pub(crate) scopes: ScopeTracker,
    pub(crate) options: BuilderOptions,
    /// Number of dispatches currently on the stack.
    depth: u32,
}

impl Builder {
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            scopes: ScopeTracker::new(),
            options,
            depth: 0,
        }
    }

    /// Build the AST for a whole tree, normally a `program`.
    pub fn build(mut self, tree: &ParseNode) -> BuildResult<Node> {
        tracing::debug!(
            source = %self.options.source_name,
            symbol = tree.symbol(),
            "build"
        );
        self.build_node(tree)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Route `node` to the handler for its grammar symbol.
    ///
    /// Returns `Ok(None)` only for function declarations, which register
    /// themselves in the enclosing frame instead of producing a node. A node
    /// more than [`MAX_NESTING_DEPTH`] levels down fails the build.
    pub fn dispatch(&mut self, node: &ParseNode) -> BuildResult<Option<Node>> {
        let Some(symbol) = GrammarSymbol::from_name(node.symbol()) else {
            return Err(BuildError::UnknownSymbol {
                symbol: node.symbol().to_string(),
                pos: position_of(node),
            });
        };
        if self.depth >= MAX_NESTING_DEPTH {
            tracing::debug!(symbol = symbol.name(), limit = MAX_NESTING_DEPTH, "nesting too deep");
            return Err(BuildError::NestingTooDeep {
                symbol: node.symbol().to_string(),
                pos: position_of(node),
                limit: MAX_NESTING_DEPTH,
            });
        }
        tracing::trace!(symbol = symbol.name(), depth = self.depth, "dispatch");

        self.depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
            self.dispatch_symbol(symbol, node)
        });
        self.depth -= 1;
        result
    }

    fn dispatch_symbol(
        &mut self,
        symbol: GrammarSymbol,
        node: &ParseNode,
    ) -> BuildResult<Option<Node>> {
        let built = match symbol {
            // Tokens
            GrammarSymbol::DecimalLiteral => self.build_decimal(node)?,
            GrammarSymbol::HexIntegerLiteral => self.build_radix(node, 16)?,
            GrammarSymbol::OctalLiteral => self.build_radix(node, 8)?,
            GrammarSymbol::DoubleString | GrammarSymbol::SingleString => self.build_string(node)?,
            GrammarSymbol::IdentifierName => self.build_identifier(node)?,

            // Program structure
            GrammarSymbol::Program => self.build_program(node)?,
            GrammarSymbol::SourceElements => self.build_source_elements(node)?,
            GrammarSymbol::FunctionDeclaration => {
                self.build_function_declaration(node)?;
                return Ok(None);
            }
            GrammarSymbol::FunctionExpression => self.build_function(node, false)?,
            GrammarSymbol::FormalParameterList => self.build_formal_parameters(node)?,

            // Statements
            GrammarSymbol::VariableStatement => self.build_variable_statement(node)?,
            GrammarSymbol::VariableDeclarationList
            | GrammarSymbol::VariableDeclarationListNoIn => self.build_declaration_list(node)?,
            GrammarSymbol::VariableDeclaration | GrammarSymbol::VariableDeclarationNoIn => {
                self.build_variable_declaration(node)?
            }
            GrammarSymbol::ExpressionStatement => self.build_expression_statement(node)?,
            GrammarSymbol::EmptyStatement => self.build_empty(node),
            GrammarSymbol::Block => self.build_block(node)?,
            GrammarSymbol::IfStatement => self.build_if(node)?,
            GrammarSymbol::IterationStatement => self.build_iteration(node)?,
            GrammarSymbol::Whiles => self.build_whiles(node)?,
            GrammarSymbol::RegularFor | GrammarSymbol::RegularVarFor => self.build_for(node)?,
            GrammarSymbol::InFor => self.build_for_in(node)?,
            GrammarSymbol::InVarFor => self.build_for_var_in(node)?,
            GrammarSymbol::ContinueStatement => self.build_continue(node)?,
            GrammarSymbol::BreakStatement => self.build_break(node)?,
            GrammarSymbol::ReturnStatement => self.build_return(node)?,
            GrammarSymbol::WithStatement => self.build_with(node)?,
            GrammarSymbol::ThrowStatement => self.build_throw(node)?,
            GrammarSymbol::TryStatement => self.build_try(node)?,

            // Expressions
            GrammarSymbol::Expression
            | GrammarSymbol::ExpressionNoIn
            | GrammarSymbol::LogicalOrExpression
            | GrammarSymbol::LogicalAndExpression
            | GrammarSymbol::BitwiseOrExpression
            | GrammarSymbol::BitwiseXorExpression
            | GrammarSymbol::BitwiseAndExpression
            | GrammarSymbol::EqualityExpression
            | GrammarSymbol::RelationalExpression
            | GrammarSymbol::ShiftExpression
            | GrammarSymbol::AdditiveExpression
            | GrammarSymbol::MultiplicativeExpression => self.build_binary_chain(node)?,
            GrammarSymbol::AssignmentExpression | GrammarSymbol::AssignmentExpressionNoIn => {
                self.build_assignment(node)?
            }
            GrammarSymbol::ConditionalExpression => self.build_conditional(node)?,
            GrammarSymbol::UnaryExpression => self.build_unary(node)?,
            GrammarSymbol::PostfixExpression => self.build_postfix(node)?,
            GrammarSymbol::NewExpression => self.build_new(node)?,
            GrammarSymbol::CallExpression => self.build_call_chain(node)?,
            GrammarSymbol::MemberExpression => self.build_member_chain(node)?,
            GrammarSymbol::Arguments => self.build_arguments(node)?,
            GrammarSymbol::PrimaryExpression => self.build_this(node),
            GrammarSymbol::ArrayLiteral => self.build_array(node)?,
            GrammarSymbol::ObjectLiteral => self.build_object(node)?,
            GrammarSymbol::PropertyNameAndValue => self.build_property(node)?,
            GrammarSymbol::NullLiteral | GrammarSymbol::BooleanLiteral => {
                self.build_keyword_literal(node)?
            }
        };
        Ok(Some(built))
    }

    /// Dispatch a node that must produce an AST node.
    pub(crate) fn build_node(&mut self, node: &ParseNode) -> BuildResult<Node> {
        self.dispatch(node)?.ok_or_else(|| {
            BuildError::malformed(node.symbol(), position_of(node), "declaration used as a value")
        })
    }

    /// Build the child at `index`, which must exist.
    pub(crate) fn build_child(&mut self, node: &ParseNode, index: usize) -> BuildResult<Node> {
        let target = child(node, index)?;
        self.build_node(target)
    }

    /// Build the child at `index` if there is one.
    pub(crate) fn build_optional_child(
        &mut self,
        node: &ParseNode,
        index: usize,
    ) -> BuildResult<Option<Box<Node>>> {
        match node.child(index) {
            Some(child) => Ok(Some(Box::new(self.build_node(child)?))),
            None => Ok(None),
        }
    }

    /// Dispatch every child from `start` on, dropping declarations.
    pub(crate) fn build_children_from(
        &mut self,
        node: &ParseNode,
        start: usize,
    ) -> BuildResult<Vec<Node>> {
        let mut nodes = Vec::with_capacity(node.children().len().saturating_sub(start));
        for child in node.children().iter().skip(start) {
            if let Some(built) = self.dispatch(child)? {
                nodes.push(built);
            }
        }
        Ok(nodes)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parse-node access helpers
// ============================================================================

/// The child at `index`, or a malformed-node error.
pub(crate) fn child(node: &ParseNode, index: usize) -> BuildResult<&ParseNode> {
    node.child(index).ok_or_else(|| {
        BuildError::malformed(node.symbol(), position_of(node), format!("missing child {}", index))
    })
}

/// `node` as a terminal, or a malformed-node error.
pub(crate) fn terminal(node: &ParseNode) -> BuildResult<&Terminal> {
    node.as_terminal()
        .ok_or_else(|| BuildError::malformed(node.symbol(), position_of(node), "expected a token"))
}

/// The text of the terminal child at `index`.
pub(crate) fn token_text(node: &ParseNode, index: usize) -> BuildResult<&str> {
    terminal(child(node, index)?).map(|t| t.text.as_str())
}
