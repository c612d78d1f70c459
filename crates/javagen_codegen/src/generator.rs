// javagen_codegen/generator - Renders class declarations into compilation units
use javagen_types::{factory, JavaType};
use tracing::debug;

use crate::builder::JavaSourceBuilder;
use crate::config::CodegenConfig;
use crate::error::CodeGenError;
use crate::imports::ImportCollector;
use crate::model::{type_parameter_list, Constructor, Field, JavaClass, Method, Parameter};

/// Fully-rendered Java compilation unit produced by the generator.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JavaCompilationUnit {
    pub package_declaration: Option<String>,
    pub imports: Vec<String>,
    pub type_declarations: Vec<String>,
}

impl JavaCompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_source(&self, config: &CodegenConfig) -> String {
        let mut builder = JavaSourceBuilder::new(config.indent.clone());

        if let Some(package) = &self.package_declaration {
            builder.push_line(&format!("package {};", package));
            builder.blank_line();
        }

        if !self.imports.is_empty() {
            for import in &self.imports {
                builder.push_line(&format!("import {};", import));
            }
            builder.blank_line();
        }

        for (index, declaration) in self.type_declarations.iter().enumerate() {
            if index > 0 {
                builder.blank_line();
            }
            builder.push(declaration);
        }

        builder.build()
    }
}

/// Renders [`JavaClass`] declarations to source.
#[derive(Debug, Default)]
pub struct ClassGenerator {
    config: CodegenConfig,
}

impl ClassGenerator {
    pub fn new() -> Self {
        Self::with_config(CodegenConfig::default())
    }

    pub fn with_config(config: CodegenConfig) -> Self {
        Self { config }
    }

    /// Renders one class into a compilation unit together with the imports
    /// its signature and members require.
    pub fn generate_unit(&self, class: &JavaClass) -> Result<JavaCompilationUnit, CodeGenError> {
        if class.name.is_empty() {
            return Err(CodeGenError::NamelessClass);
        }
        debug!(class = %class.name, "generating compilation unit");

        let mut collector = ImportCollector::new();
        collect_class_imports(&mut collector, class);

        let declaration = self.generate_class(class)?;
        Ok(JavaCompilationUnit {
            package_declaration: class.package.clone(),
            imports: collector.into_imports(self.config.sort_imports),
            type_declarations: vec![declaration],
        })
    }

    /// Renders the class declaration alone, without package or imports.
    pub fn generate_class(&self, class: &JavaClass) -> Result<String, CodeGenError> {
        let mut builder = JavaSourceBuilder::new(self.config.indent.clone());

        let mut header = String::new();
        push_keyword(&mut header, class.visibility.keyword());
        if class.is_abstract {
            header.push_str("abstract ");
        }
        if class.is_final {
            header.push_str("final ");
        }
        header.push_str("class ");
        header.push_str(&class.name);
        header.push_str(&type_parameter_list(&class.type_parameters));
        if class.superclass != factory::object_type() {
            header.push_str(" extends ");
            header.push_str(&class.superclass.simple_type());
        }
        if !class.interfaces.is_empty() {
            let interfaces: Vec<String> = class
                .interfaces
                .iter()
                .map(JavaType::simple_type)
                .collect();
            header.push_str(" implements ");
            header.push_str(&interfaces.join(", "));
        }
        header.push_str(" {");
        builder.push_line(&header);

        builder.indent();
        for field in &class.fields {
            self.generate_field(&mut builder, field);
        }
        for constructor in &class.constructors {
            builder.blank_line();
            self.generate_constructor(&mut builder, class, constructor);
        }
        for method in &class.methods {
            builder.blank_line();
            self.generate_method(&mut builder, class, method)?;
        }
        builder.dedent();
        builder.push_line("}");

        Ok(builder.build())
    }

    fn generate_field(&self, builder: &mut JavaSourceBuilder, field: &Field) {
        let mut line = String::new();
        push_keyword(&mut line, field.visibility.keyword());
        if field.is_static {
            line.push_str("static ");
        }
        if field.is_final {
            line.push_str("final ");
        }
        line.push_str(&field.java_type.simple_type());
        line.push(' ');
        line.push_str(&field.name);
        if let Some(initializer) = &field.initializer {
            line.push_str(" = ");
            line.push_str(initializer);
        }
        line.push(';');
        builder.push_line(&line);
    }

    fn generate_constructor(
        &self,
        builder: &mut JavaSourceBuilder,
        class: &JavaClass,
        constructor: &Constructor,
    ) {
        let mut signature = String::new();
        push_keyword(&mut signature, constructor.visibility.keyword());
        signature.push_str(&class.name);
        signature.push('(');
        signature.push_str(&parameter_list(&constructor.parameters));
        signature.push_str(") {");
        builder.push_line(&signature);
        builder.indent();
        for line in &constructor.body {
            builder.push_line(line);
        }
        builder.dedent();
        builder.push_line("}");
    }

    fn generate_method(
        &self,
        builder: &mut JavaSourceBuilder,
        class: &JavaClass,
        method: &Method,
    ) -> Result<(), CodeGenError> {
        if method.is_abstract {
            if !class.is_abstract {
                return Err(CodeGenError::AbstractMethodInConcreteClass {
                    name: method.name.clone(),
                });
            }
            if !method.body.is_empty() {
                return Err(CodeGenError::AbstractMethodWithBody {
                    name: method.name.clone(),
                });
            }
        }

        let mut signature = String::new();
        push_keyword(&mut signature, method.visibility.keyword());
        if method.is_static {
            signature.push_str("static ");
        }
        if method.is_abstract {
            signature.push_str("abstract ");
        }
        let type_parameters = type_parameter_list(&method.type_parameters);
        if !type_parameters.is_empty() {
            signature.push_str(&type_parameters);
            signature.push(' ');
        }
        signature.push_str(&method.return_type.simple_type());
        signature.push(' ');
        signature.push_str(&method.name);
        signature.push('(');
        signature.push_str(&parameter_list(&method.parameters));
        signature.push(')');

        if method.is_abstract {
            signature.push(';');
            builder.push_line(&signature);
            return Ok(());
        }

        signature.push_str(" {");
        builder.push_line(&signature);
        builder.indent();
        for line in &method.body {
            builder.push_line(line);
        }
        builder.dedent();
        builder.push_line("}");
        Ok(())
    }
}

fn collect_class_imports(collector: &mut ImportCollector, class: &JavaClass) {
    collector.add_type(&class.superclass);
    for interface in &class.interfaces {
        collector.add_type(interface);
    }
    for generic in &class.type_parameters {
        collector.add_generic(generic);
    }
    for field in &class.fields {
        collector.add_type(&field.java_type);
    }
    for constructor in &class.constructors {
        for parameter in &constructor.parameters {
            collector.add_type(&parameter.java_type);
        }
    }
    for method in &class.methods {
        collector.add_type(&method.return_type);
        for generic in &method.type_parameters {
            collector.add_generic(generic);
        }
        for parameter in &method.parameters {
            collector.add_type(&parameter.java_type);
        }
    }
}

fn parameter_list(parameters: &[Parameter]) -> String {
    let rendered: Vec<String> = parameters
        .iter()
        .map(|parameter| format!("{} {}", parameter.java_type.simple_type(), parameter.name))
        .collect();
    rendered.join(", ")
}

fn push_keyword(target: &mut String, keyword: &str) {
    if !keyword.is_empty() {
        target.push_str(keyword);
        target.push(' ');
    }
}
