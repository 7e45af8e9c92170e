//! Scope management for the builder.
//!
//! One frame per program or function body. Frames record the `var` names and
//! function declarations made directly in that body; when the body is done
//! the frame is popped and its contents are attached to the body's
//! `SourceElements` node.

use rjs_ast::Node;
use rjs_core::collections::{FxIndexMap, FxIndexSet};

/// A lexical frame: the declarations of one program or function body.
#[derive(Debug, Default)]
struct Frame {
    vars: FxIndexSet<String>,
    funcs: FxIndexMap<String, Node>,
}

/// The contents of a popped frame.
#[derive(Debug, Default)]
pub struct Harvest {
    /// Declared `var` names in order of first declaration.
    pub var_names: Vec<String>,
    /// Function declarations in order of declaration. A later declaration
    /// of the same name replaces the earlier one in place.
    pub func_decls: FxIndexMap<String, Node>,
}

/// Stack of lexical frames, innermost last.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    frames: Vec<Frame>,
}

impl ScopeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Frame::default());
        tracing::debug!(depth = self.frames.len(), "push scope frame");
    }

    /// Pop the innermost frame and return what was declared in it.
    pub fn pop_frame(&mut self) -> Option<Harvest> {
        let frame = self.frames.pop()?;
        tracing::debug!(
            depth = self.frames.len(),
            vars = frame.vars.len(),
            funcs = frame.funcs.len(),
            "pop scope frame"
        );
        Some(Harvest {
            var_names: frame.vars.into_iter().collect(),
            func_decls: frame.funcs,
        })
    }

    /// Record `name` as a `var` of the innermost frame. Returns `false` when
    /// no frame is open.
    pub fn declare_var(&mut self, name: &str) -> bool {
        match self.frames.last_mut() {
            Some(frame) => {
                if !frame.vars.contains(name) {
                    frame.vars.insert(name.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// Record a function declaration in the innermost frame. Returns `false`
    /// when no frame is open.
    pub fn declare_func(&mut self, name: &str, function: Node) -> bool {
        let depth = self.frames.len();
        match self.frames.last_mut() {
            Some(frame) => {
                tracing::debug!(name, depth, "register function declaration");
                frame.funcs.insert(name.to_string(), function);
                true
            }
            None => false,
        }
    }

    /// Number of frames crossed from the innermost frame to the one that
    /// declares `name` as a `var`, or `None` if no open frame does.
    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.frames
            .iter()
            .rev()
            .position(|frame| frame.vars.contains(name))
            .and_then(|depth| u32::try_from(depth).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rjs_ast::NodeKind;
    use rjs_core::text::Position;

    #[test]
    fn test_resolve_depths() {
        let mut scopes = ScopeTracker::new();
        scopes.push_frame();
        assert!(scopes.declare_var("outer"));
        scopes.push_frame();
        scopes.push_frame();
        assert!(scopes.declare_var("inner"));

        assert_eq!(scopes.resolve("inner"), Some(0));
        assert_eq!(scopes.resolve("outer"), Some(2));
        assert_eq!(scopes.resolve("missing"), None);
    }

    #[test]
    fn test_shadowing_prefers_innermost() {
        let mut scopes = ScopeTracker::new();
        scopes.push_frame();
        scopes.declare_var("x");
        scopes.push_frame();
        scopes.declare_var("x");
        assert_eq!(scopes.resolve("x"), Some(0));
        scopes.pop_frame();
        assert_eq!(scopes.resolve("x"), Some(0));
    }

    #[test]
    fn test_harvest_keeps_declaration_order() {
        let mut scopes = ScopeTracker::new();
        scopes.push_frame();
        scopes.declare_var("b");
        scopes.declare_var("a");
        scopes.declare_var("b");
        let function = Node::new(Position::UNKNOWN, NodeKind::Empty);
        scopes.declare_func("f", function.clone());

        let harvest = scopes.pop_frame().unwrap();
        assert_eq!(harvest.var_names, vec!["b", "a"]);
        assert_eq!(harvest.func_decls.get("f"), Some(&function));
        assert_eq!(scopes.depth(), 0);
    }

    #[test]
    fn test_function_redeclaration_replaces_in_place() {
        let mut scopes = ScopeTracker::new();
        scopes.push_frame();
        scopes.push_frame();
        let first = Node::new(Position::new(1, 0, 8), NodeKind::Empty);
        let second = Node::new(Position::new(2, 0, 8), NodeKind::Empty);
        assert!(scopes.declare_func("f", first));
        assert!(scopes.declare_func("g", Node::new(Position::UNKNOWN, NodeKind::Empty)));
        assert!(scopes.declare_func("f", second.clone()));

        let harvest = scopes.pop_frame().unwrap();
        let names: Vec<&str> = harvest.func_decls.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["f", "g"]);
        assert_eq!(harvest.func_decls.get("f"), Some(&second));
        assert_eq!(scopes.depth(), 1);
    }

    #[test]
    fn test_no_frame() {
        let mut scopes = ScopeTracker::new();
        assert!(!scopes.declare_var("x"));
        assert!(!scopes.declare_func("f", Node::new(Position::UNKNOWN, NodeKind::Empty)));
        assert!(scopes.pop_frame().is_none());
        assert_eq!(scopes.resolve("x"), None);
    }
}
