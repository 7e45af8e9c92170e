//! Builder configuration.

/// Options controlling a single build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Source name attached to every `SourceElements` node for diagnostics.
    pub source_name: String,
    /// Resolve identifiers against the enclosing `var` declarations. When
    /// off, every name is built as a dynamic `Identifier`.
    pub static_resolution: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            source_name: String::new(),
            static_resolution: true,
        }
    }
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn with_static_resolution(mut self, enabled: bool) -> Self {
        self.static_resolution = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BuilderOptions::default();
        assert_eq!(options.source_name, "");
        assert!(options.static_resolution);
    }

    #[test]
    fn test_setters() {
        let options = BuilderOptions::new()
            .with_source_name("main.js")
            .with_static_resolution(false);
        assert_eq!(options.source_name, "main.js");
        assert!(!options.static_resolution);
    }
}
