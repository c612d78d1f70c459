// javagen_types/factory - Stateless constructors and parsers for well-known types
//! Construction helpers for descriptors the generator reaches for constantly:
//! wildcard, `Object`, `String`, primitives and their wrappers, `List<...>`
//! containers, plus the textual array-suffix parser.
//!
//! Every function returns a fresh value; repeated calls with the same request
//! yield value-equal but independent descriptors. The single exception is
//! [`primitive_unwrap`], which hands non-wrapper inputs back untouched.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::generic::JavaGenericType;
use crate::java_type::{JavaType, JAVA_LANG};
use crate::primitive::Primitive;

const JAVA_UTIL: &str = "java.util";

/// The unbounded wildcard, `?`.
pub fn wildcard_type() -> JavaType {
    JavaType::new("?")
}

pub fn object_type() -> JavaType {
    JavaType::qualified("Object", JAVA_LANG)
}

pub fn string_type() -> JavaType {
    JavaType::qualified("String", JAVA_LANG)
}

pub fn class_type() -> JavaType {
    JavaType::qualified("Class", JAVA_LANG)
}

pub fn boolean_type() -> JavaType {
    primitive_type(Primitive::Boolean)
}

pub fn int_type() -> JavaType {
    primitive_type(Primitive::Int)
}

pub fn void_type() -> JavaType {
    primitive_type(Primitive::Void)
}

pub fn double_type() -> JavaType {
    primitive_type(Primitive::Double)
}

/// Descriptor of the given primitive. Primitives carry the `java.lang`
/// package yet never require an import.
pub fn primitive_type(primitive: Primitive) -> JavaType {
    JavaType::qualified(primitive.spelling(), JAVA_LANG)
}

/// Same as [`primitive_type`], looked up by exact spelling.
pub fn primitive_type_of(spelling: &str) -> Result<JavaType, TypeError> {
    Primitive::from_spelling(spelling).map(primitive_type)
}

/// Boxed descriptor of the given primitive, e.g. `java.lang.Integer`.
pub fn primitive_wrapper(primitive: Primitive) -> JavaType {
    JavaType::qualified(primitive.wrapper_name(), JAVA_LANG)
}

/// Boxed descriptor looked up by wrapper simple name (`"Integer"`) or by
/// primitive spelling (`"boolean"`).
pub fn primitive_wrapper_of(spelling: &str) -> Result<JavaType, TypeError> {
    if let Some(primitive) = wrapper_kind(spelling) {
        return Ok(primitive_wrapper(primitive));
    }
    Primitive::from_spelling(&spelling.to_lowercase()).map(primitive_wrapper)
}

/// True iff the name is one of the nine primitive spellings.
pub fn is_primitive(name: &str) -> bool {
    Primitive::contains(name)
}

/// True iff the name is one of the nine wrapper simple names.
pub fn is_primitive_wrapper(name: &str) -> bool {
    wrapper_kind(name).is_some()
}

/// Maps a wrapper simple name to its primitive spelling (`Integer` becomes
/// `int`); any other name passes through unchanged.
pub fn primitive_unwrap_name(simple_type: &str) -> String {
    match wrapper_kind(simple_type) {
        Some(primitive) => primitive.spelling().to_string(),
        None => simple_type.to_string(),
    }
}

/// Unwraps a boxed descriptor into its primitive counterpart.
///
/// When no unwrapping applies the input comes back as `Cow::Borrowed`:
/// callers keep the original instance, not a copy. The match key is the full
/// simple rendering, so `Integer[]` or `List<Integer>` stay untouched.
pub fn primitive_unwrap(java_type: &JavaType) -> Cow<'_, JavaType> {
    match wrapper_kind(&java_type.simple_type()) {
        Some(primitive) => Cow::Owned(primitive_type(primitive)),
        None => Cow::Borrowed(java_type),
    }
}

fn wrapper_kind(name: &str) -> Option<Primitive> {
    Primitive::ALL
        .iter()
        .copied()
        .find(|primitive| primitive.wrapper_name() == name)
}

/// `java.util.List` with the supplied slot as its only generic argument.
pub fn list_type(generic: JavaGenericType) -> JavaType {
    let mut list = JavaType::qualified("List", JAVA_UTIL);
    list.add_generic(generic);
    list
}

/// `java.util.List` of the supplied element type.
pub fn list_type_of(element: JavaType) -> JavaType {
    list_type(JavaGenericType::new(element))
}

/// `List<String>`.
pub fn list_of_strings() -> JavaType {
    list_type_of(string_type())
}

/// `? extends <bound>`.
pub fn wild_extends_type(bound: JavaType) -> JavaGenericType {
    let mut wildcard = JavaGenericType::new(wildcard_type());
    wildcard.add_bound(bound);
    wildcard
}

/// Appends `element` to `target`'s generic arguments as a bound-free slot.
pub fn add_generic_type(target: &mut JavaType, element: JavaType) {
    target.add_type_as_generic(element);
}

/// Stand-in for a reflective class handle: the pieces of a loaded class a
/// descriptor is built from. Array handles record the innermost component
/// type together with the accumulated dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRef {
    name: String,
    package: Option<String>,
    array_dimension: usize,
    is_enum: bool,
}

impl ClassRef {
    /// Handle for an ordinary class in a package.
    pub fn class(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: Some(package.into()),
            array_dimension: 0,
            is_enum: false,
        }
    }

    /// Handle for a class in the default package.
    pub fn unpackaged(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            array_dimension: 0,
            is_enum: false,
        }
    }

    /// Handle for an enum class.
    pub fn enum_class(name: impl Into<String>, package: impl Into<String>) -> Self {
        let mut class = Self::class(name, package);
        class.is_enum = true;
        class
    }

    /// Handle for a primitive class, which carries no package.
    pub fn primitive(primitive: Primitive) -> Self {
        Self {
            name: primitive.spelling().to_string(),
            package: None,
            array_dimension: 0,
            is_enum: false,
        }
    }

    /// The array class of this handle; stacks for nested arrays.
    pub fn array_of(mut self) -> Self {
        self.array_dimension += 1;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn array_dimension(&self) -> usize {
        self.array_dimension
    }

    pub fn is_enum(&self) -> bool {
        self.is_enum
    }
}

/// Converts a class handle into a descriptor. The element name and package
/// come from the innermost component type; primitive handles produce
/// primitive descriptors.
pub fn convert_class(class: &ClassRef) -> JavaType {
    let mut java_type = JavaType::with_dimension(
        class.name(),
        class.package().map(str::to_string),
        class.array_dimension(),
    );
    java_type.set_enum(class.is_enum());
    java_type
}

/// Literal used to initialize a declaration of the given type: `"false"` for
/// boolean, `""` for void, `"0"` for the other primitives, `"null"` otherwise.
pub fn default_value(java_type: &JavaType) -> &'static str {
    if !java_type.is_primitive() {
        return "null";
    }
    if java_type.name() == Primitive::Void.spelling() {
        return "";
    }
    if java_type.name() == Primitive::Boolean.spelling() {
        return "false";
    }
    "0"
}

/// Splits a trailing `[]` suffix off a type spelling.
///
/// The input is trimmed, the text before the first `[` becomes the base name
/// and every well-formed `[]` pair increments the dimension. Whitespace
/// between pairs is tolerated; any other residue fails with
/// [`TypeError::MalformedArraySuffix`] carrying the exact leftover text.
pub fn split_array_dimension(text: &str) -> Result<(String, usize), TypeError> {
    let text = text.trim();
    let Some(start) = text.find('[') else {
        return Ok((text.to_string(), 0));
    };
    let base = text[..start].trim_end().to_string();
    let mut rest = text[start..].to_string();
    let mut dimension = 0;
    while let Some(pair) = rest.find("[]") {
        rest.replace_range(pair..pair + 2, "");
        dimension += 1;
    }
    if !rest.trim().is_empty() {
        return Err(TypeError::MalformedArraySuffix { found: rest });
    }
    Ok((base, dimension))
}
