// javagen_types/java_type - Mutable descriptor of one Java type usage
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::factory;
use crate::generic::JavaGenericType;
use crate::primitive::Primitive;

/// Package whose members are always in scope and never need an import.
pub const JAVA_LANG: &str = "java.lang";

/// Represents one Java type usage for code generation: simple name, optional
/// package, array dimension and generic arguments.
///
/// Rendering methods are pure. Mutation happens through the explicit setters;
/// the generics list grows through [`JavaType::add_generic`] or is replaced
/// wholesale with [`JavaType::set_generics`]. `Clone` deep-copies the generics
/// so a clone and its origin never share state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JavaType {
    name: String,
    package: Option<String>,
    array_dimension: usize,
    generics: Vec<JavaGenericType>,
    primitive: bool,
    is_enum: bool,
}

impl JavaType {
    /// Descriptor with the given simple name, no package, not an array.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_dimension(name, None, 0)
    }

    /// Descriptor with simple name and package.
    pub fn qualified(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self::with_dimension(name, Some(package.into()), 0)
    }

    /// Descriptor with simple name, optional package and array dimension.
    ///
    /// A primitive spelling sets the primitive flag, here and on
    /// [`JavaType::set_name`].
    pub fn with_dimension(
        name: impl Into<String>,
        package: Option<String>,
        array_dimension: usize,
    ) -> Self {
        let name = name.into();
        let primitive = Primitive::contains(&name);
        Self {
            name,
            package,
            array_dimension,
            generics: Vec::new(),
            primitive,
            is_enum: false,
        }
    }

    /// Descriptor marked as an enum type.
    pub fn enum_type(name: impl Into<String>, package: impl Into<String>) -> Self {
        let mut java_type = Self::qualified(name, package);
        java_type.is_enum = true;
        java_type
    }

    /// Parses a textual spelling such as `"java.util.List[]"`.
    ///
    /// A trailing bracket suffix becomes the array dimension and the last dot
    /// splits package from simple name. Inputs without dots or brackets come
    /// through as plain simple names; an empty name is carried, not rejected.
    pub fn parse(text: &str) -> Result<Self, TypeError> {
        let (base, array_dimension) = factory::split_array_dimension(text)?;
        let (package, name) = match base.rfind('.') {
            Some(dot) => (Some(base[..dot].to_string()), base[dot + 1..].to_string()),
            None => (None, base),
        };
        Ok(Self::with_dimension(name, package, array_dimension))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the type, re-deriving the primitive flag from the new spelling.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.primitive = Primitive::contains(&self.name);
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn set_package(&mut self, package: Option<String>) {
        self.package = package;
    }

    /// True when a package is present and non-empty.
    pub fn has_package(&self) -> bool {
        self.package.as_deref().is_some_and(|package| !package.is_empty())
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive
    }

    pub fn is_enum(&self) -> bool {
        self.is_enum
    }

    pub fn set_enum(&mut self, is_enum: bool) {
        self.is_enum = is_enum;
    }

    pub fn is_array(&self) -> bool {
        self.array_dimension > 0
    }

    pub fn array_dimension(&self) -> usize {
        self.array_dimension
    }

    pub fn set_array_dimension(&mut self, array_dimension: usize) {
        self.array_dimension = array_dimension;
    }

    /// Toggles array-ness: `true` raises the dimension to at least 1, `false`
    /// resets it to 0.
    pub fn set_array(&mut self, array: bool) {
        if array {
            if self.array_dimension < 1 {
                self.array_dimension = 1;
            }
        } else {
            self.array_dimension = 0;
        }
    }

    pub fn generics(&self) -> &[JavaGenericType] {
        &self.generics
    }

    /// Mutable access to the generic slots themselves. The list structure only
    /// changes through [`JavaType::add_generic`] and
    /// [`JavaType::set_generics`].
    pub fn generics_mut(&mut self) -> &mut [JavaGenericType] {
        &mut self.generics
    }

    /// Replaces the generic argument list wholesale.
    pub fn set_generics(&mut self, generics: Vec<JavaGenericType>) {
        self.generics = generics;
    }

    /// Appends a generic slot. Duplicate slots are permitted; the return value
    /// mirrors the bound-adding API and is always true here.
    pub fn add_generic(&mut self, generic: JavaGenericType) -> bool {
        self.generics.push(generic);
        true
    }

    /// Appends a type as a bound-free generic slot.
    pub fn add_type_as_generic(&mut self, java_type: JavaType) -> bool {
        self.add_generic(JavaGenericType::new(java_type))
    }

    /// Package-qualified name without generics or array suffix; the class
    /// identity string used for imports.
    pub fn canonical_name(&self) -> String {
        match self.package.as_deref() {
            Some(package) if !package.is_empty() => format!("{package}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Unqualified rendering: name, generic arguments, array suffix.
    pub fn simple_type(&self) -> String {
        format!(
            "{}{}{}",
            self.name,
            self.generics_to_string(),
            "[]".repeat(self.array_dimension)
        )
    }

    /// Fully-qualified rendering; generic arguments and bounds are qualified
    /// recursively.
    pub fn canonical_type(&self) -> String {
        format!(
            "{}{}{}",
            self.canonical_name(),
            self.generics_to_canonical_string(),
            "[]".repeat(self.array_dimension)
        )
    }

    /// `<A, B, C>` over the simple form of each slot, empty without generics.
    pub fn generics_to_string(&self) -> String {
        if self.generics.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = self
            .generics
            .iter()
            .map(JavaGenericType::simple_type)
            .collect();
        format!("<{}>", rendered.join(", "))
    }

    /// `<A, B, C>` over the canonical form of each slot, empty without
    /// generics.
    pub fn generics_to_canonical_string(&self) -> String {
        if self.generics.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = self
            .generics
            .iter()
            .map(JavaGenericType::canonical_type)
            .collect();
        format!("<{}>", rendered.join(", "))
    }

    /// False for primitives, absent packages and `java.lang`.
    pub fn requires_import(&self) -> bool {
        self.has_package() && !self.primitive && self.package.as_deref() != Some(JAVA_LANG)
    }
}

impl fmt::Display for JavaType {
    /// Canonical name plus array suffix, without generic arguments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.canonical_name(),
            "[]".repeat(self.array_dimension)
        )
    }
}

impl From<Primitive> for JavaType {
    fn from(primitive: Primitive) -> Self {
        factory::primitive_type(primitive)
    }
}
