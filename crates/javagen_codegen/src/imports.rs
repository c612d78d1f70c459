// javagen_codegen/imports - Import collection for generated compilation units
use javagen_types::{JavaGenericType, JavaType};

/// Collects the import statements a set of type usages requires.
///
/// Descriptors are walked transitively through generic arguments and bounds;
/// the canonical base name of every type that reports
/// [`JavaType::requires_import`] is kept once, in insertion order. Primitives
/// and `java.lang` types never register.
#[derive(Debug, Default, Clone)]
pub struct ImportCollector {
    imports: Vec<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a raw import line, e.g. a static or wildcard import.
    /// Returns false when the line is already present.
    pub fn add_raw(&mut self, import: impl Into<String>) -> bool {
        let import = import.into();
        if self.imports.contains(&import) {
            return false;
        }
        self.imports.push(import);
        true
    }

    /// Registers the import the given type requires, then walks its generic
    /// arguments. Returns true when the type itself added a new line.
    pub fn add_type(&mut self, java_type: &JavaType) -> bool {
        let mut added = false;
        if java_type.requires_import() {
            added = self.add_raw(java_type.canonical_name());
        }
        for generic in java_type.generics() {
            self.add_generic(generic);
        }
        added
    }

    /// Registers the base type and every bound of a generic slot.
    pub fn add_generic(&mut self, generic: &JavaGenericType) {
        if let Some(base) = generic.base() {
            self.add_type(base);
        }
        for bound in generic.bounds() {
            self.add_type(bound);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Finishes collection; sorted alphabetically when requested, otherwise
    /// in insertion order.
    pub fn into_imports(self, sorted: bool) -> Vec<String> {
        let mut imports = self.imports;
        if sorted {
            imports.sort();
        }
        imports
    }
}
