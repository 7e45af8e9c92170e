//! rjs_printer: AST to S-expression output.
//!
//! Renders an AST as a single-line S-expression such as
//! `(Sub (Sub (Identifier a) (Identifier b)) (Identifier c))`. Absent
//! optional children print as `_`. The output is meant for diagnostics and
//! golden tests, not for reparsing.

use rjs_ast::node::*;
use rjs_ast::operators::PrePost;

/// Options for the printer.
#[derive(Debug, Clone, Default)]
pub struct PrinterOptions {
    /// Whether to print each node's position after its name
    /// (`(Identifier@1:4..5 x)`).
    pub include_positions: bool,
}

/// The printer converts AST nodes to text.
pub struct Printer {
    output: String,
    options: PrinterOptions,
}

/// Print a node with default options.
pub fn print_node(node: &Node) -> String {
    Printer::new().print(node)
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Print a node and everything below it.
    pub fn print(&mut self, node: &Node) -> String {
        self.output.clear();
        self.print_node(node);
        self.output.clone()
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn atom(&mut self, text: &str) {
        self.output.push(' ');
        self.output.push_str(text);
    }

    fn open(&mut self, node: &Node) {
        self.output.push('(');
        self.output.push_str(node.kind.name());
        if self.options.include_positions {
            self.output.push_str(&format!("@{:?}", node.pos));
        }
    }

    fn close(&mut self) {
        self.output.push(')');
    }

    fn child(&mut self, node: &Node) {
        self.output.push(' ');
        self.print_node(node);
    }

    fn optional(&mut self, node: &OptionalNode) {
        match node {
            Some(n) => self.child(n),
            None => self.atom("_"),
        }
    }

    fn children(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.child(node);
        }
    }

    fn assignment_head(&mut self, op: &str, pre_post: Option<PrePost>) {
        self.atom(op);
        if let Some(pre_post) = pre_post {
            self.atom(pre_post.as_str());
        }
    }

    // ========================================================================
    // Node printing
    // ========================================================================

    fn print_node(&mut self, node: &Node) {
        self.open(node);
        match &node.kind {
            NodeKind::IntNumber(value) => self.atom(&value.to_string()),
            NodeKind::FloatNumber(value) => self.atom(&format!("{:?}", value)),
            NodeKind::String(value) => self.atom(&format!("{:?}", value)),
            NodeKind::Boolean(value) => self.atom(if *value { "true" } else { "false" }),
            NodeKind::Null | NodeKind::This | NodeKind::Empty => {}
            NodeKind::Identifier(name) => self.atom(name),
            NodeKind::VariableIdentifier { depth, name } => {
                self.atom(&depth.to_string());
                self.atom(name);
            }

            NodeKind::Binary { left, right, .. } => {
                self.child(left);
                self.child(right);
            }
            NodeKind::Unary { operand, .. } => self.child(operand),
            NodeKind::Member { object, index } => {
                self.child(object);
                self.child(index);
            }
            NodeKind::MemberDot { object, name } => {
                self.child(object);
                self.atom(name);
            }
            NodeKind::Call { callee, arguments } | NodeKind::NewWithArgs { callee, arguments } => {
                self.child(callee);
                self.child(arguments);
            }
            NodeKind::New(callee) => self.child(callee),
            NodeKind::Array(items)
            | NodeKind::ObjectInit(items)
            | NodeKind::ArgumentList(items)
            | NodeKind::VariableDeclList(items)
            | NodeKind::Block(items) => self.children(items),
            NodeKind::PropertyInit { key, value } => {
                self.child(key);
                self.child(value);
            }

            NodeKind::SimpleAssignment { target, value, op, pre_post } => {
                self.assignment_head(op.token(), *pre_post);
                self.child(target);
                self.optional(value);
            }
            NodeKind::MemberAssignment { object, index, value, op, pre_post } => {
                self.assignment_head(op.token(), *pre_post);
                self.child(object);
                self.child(index);
                self.optional(value);
            }
            NodeKind::MemberDotAssignment { object, name, value, op, pre_post } => {
                self.assignment_head(op.token(), *pre_post);
                self.child(object);
                self.atom(name);
                self.optional(value);
            }
            NodeKind::SimpleIncrement { target, op } => {
                self.atom(op.token());
                self.child(target);
            }

            NodeKind::Program(body) => self.child(body),
            NodeKind::SourceElements(elements) => self.print_source_elements(elements),
            NodeKind::If { condition, then_branch, else_branch } => {
                self.child(condition);
                self.child(then_branch);
                self.optional(else_branch);
            }
            NodeKind::While { condition, body } => {
                self.child(condition);
                self.child(body);
            }
            NodeKind::Do { body, condition } => {
                self.child(body);
                self.child(condition);
            }
            NodeKind::For { init, condition, update, body } => {
                self.optional(init);
                self.child(condition);
                self.optional(update);
                self.child(body);
            }
            NodeKind::ForIn { name, iterable, body } => {
                self.atom(name);
                self.child(iterable);
                self.child(body);
            }
            NodeKind::ForVarIn { target, iterable, body } => {
                self.child(target);
                self.child(iterable);
                self.child(body);
            }
            NodeKind::VariableDeclaration { identifier, init } => {
                self.child(identifier);
                self.optional(init);
            }
            NodeKind::Variable(inner) | NodeKind::ExprStatement(inner) | NodeKind::Throw(inner) => {
                self.child(inner)
            }
            NodeKind::Return(value) => self.optional(value),
            NodeKind::Break(label) | NodeKind::Continue(label) => {
                self.atom(label.as_deref().unwrap_or("_"))
            }
            NodeKind::Try { block, catch_param, catch_block, finally_block } => {
                self.child(block);
                self.optional(catch_param);
                self.optional(catch_block);
                self.optional(finally_block);
            }
            NodeKind::With { object, body } => {
                self.child(object);
                self.child(body);
            }
            NodeKind::FunctionStatement(function) => self.print_function(function),
        }
        self.close();
    }

    fn print_source_elements(&mut self, elements: &SourceElements) {
        self.write(" (vars");
        for name in &elements.var_names {
            self.atom(name);
        }
        self.write(") (funcs");
        for function in elements.func_decls.values() {
            self.child(function);
        }
        self.close();
        self.children(&elements.statements);
    }

    fn print_function(&mut self, function: &Function) {
        self.atom(function.name.as_deref().unwrap_or("_"));
        self.write(" (params");
        for param in &function.params {
            self.atom(param);
        }
        self.close();
        self.optional(&function.body);
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}
