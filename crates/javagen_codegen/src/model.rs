// javagen_codegen/model - Declaration model for generated classes
use javagen_types::{factory, JavaGenericType, JavaType};
use serde::{Deserialize, Serialize};

/// Java visibility levels. Package-private renders as no keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// The declaration keyword, empty for package-private.
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::PackagePrivate => "",
            Visibility::Private => "private",
        }
    }
}

/// A field declaration. Defaults to private, matching what generated value
/// classes want most of the time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub java_type: JavaType,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    /// Rendered verbatim after `=` when present.
    pub initializer: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, java_type: JavaType) -> Self {
        Self {
            name: name.into(),
            java_type,
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
            initializer: None,
        }
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub java_type: JavaType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, java_type: JavaType) -> Self {
        Self {
            name: name.into(),
            java_type,
        }
    }
}

/// A constructor declaration; the name always comes from the owning class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub visibility: Visibility,
    pub parameters: Vec<Parameter>,
    /// Body statements, one rendered line each.
    pub body: Vec<String>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub return_type: JavaType,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub type_parameters: Vec<JavaGenericType>,
    pub parameters: Vec<Parameter>,
    /// Body statements, one rendered line each. Must stay empty on abstract
    /// methods.
    pub body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: JavaType) -> Self {
        Self {
            name: name.into(),
            return_type,
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    pub fn push_body_line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }
}

/// A class declaration assembled for emission.
///
/// The superclass defaults to `java.lang.Object` and is elided from the
/// rendered header while it stays that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JavaClass {
    pub name: String,
    pub package: Option<String>,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_final: bool,
    pub type_parameters: Vec<JavaGenericType>,
    pub superclass: JavaType,
    pub interfaces: Vec<JavaType>,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
    pub methods: Vec<Method>,
}

impl JavaClass {
    /// Public class in the default package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            visibility: Visibility::Public,
            is_abstract: false,
            is_final: false,
            type_parameters: Vec::new(),
            superclass: factory::object_type(),
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Public class in the given package.
    pub fn in_package(name: impl Into<String>, package: impl Into<String>) -> Self {
        let mut class = Self::new(name);
        class.package = Some(package.into());
        class
    }

    /// Adds an implemented interface; duplicates (by class identity) are
    /// rejected.
    pub fn add_interface(&mut self, interface: JavaType) -> bool {
        if self
            .interfaces
            .iter()
            .any(|known| known.canonical_name() == interface.canonical_name())
        {
            return false;
        }
        self.interfaces.push(interface);
        true
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn add_constructor(&mut self, constructor: Constructor) {
        self.constructors.push(constructor);
    }

    /// Constructor taking every declared field and assigning each to `this`.
    pub fn full_constructor(&self) -> Constructor {
        let mut constructor = Constructor::new();
        for field in &self.fields {
            constructor
                .parameters
                .push(Parameter::new(field.name.clone(), field.java_type.clone()));
            constructor.body.push(format!("this.{0} = {0};", field.name));
        }
        constructor
    }
}

impl From<&JavaClass> for JavaType {
    /// The descriptor a usage of this class needs: name plus package, no
    /// members.
    fn from(class: &JavaClass) -> Self {
        match class.package.as_deref() {
            Some(package) => JavaType::qualified(class.name.clone(), package),
            None => JavaType::new(class.name.clone()),
        }
    }
}

/// Renders `<T, U extends A&B>` for a declaration's type-parameter list;
/// empty when the list is empty.
pub(crate) fn type_parameter_list(type_parameters: &[JavaGenericType]) -> String {
    if type_parameters.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = type_parameters
        .iter()
        .map(JavaGenericType::simple_type)
        .collect();
    format!("<{}>", rendered.join(", "))
}
