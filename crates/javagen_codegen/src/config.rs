// javagen_codegen/config - Generator configuration

/// Configuration for Java source emission.
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Indentation string (spaces or tabs).
    pub indent: String,
    /// Emit collected imports in alphabetical order instead of insertion
    /// order.
    pub sort_imports: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            sort_imports: true,
        }
    }
}
