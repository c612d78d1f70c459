use super::*;
use javagen_types::{factory, JavaGenericType, JavaType};

fn point_class() -> JavaClass {
    let mut class = JavaClass::in_package("Point", "com.example.geom");
    class.add_field(Field::new("x", factory::int_type()));
    class.add_field(Field::new("y", factory::int_type()));
    class
}

#[test]
fn builder_tracks_indentation() {
    let mut builder = JavaSourceBuilder::new("  ".to_string());
    builder.push_line("outer {");
    builder.indent();
    builder.push_line("inner;");
    builder.dedent();
    builder.push_line("}");
    assert_eq!(builder.build(), "outer {\n  inner;\n}\n");
}

#[test]
fn builder_dedent_saturates_at_zero() {
    let mut builder = JavaSourceBuilder::new("    ".to_string());
    builder.dedent();
    builder.push_line("line;");
    assert_eq!(builder.build(), "line;\n");
}

#[test]
fn blank_lines_carry_no_indentation() {
    let mut builder = JavaSourceBuilder::new("    ".to_string());
    builder.indent();
    builder.blank_line();
    assert_eq!(builder.build(), "\n");
}

#[test]
fn collector_keeps_canonical_names_of_importable_types() {
    let mut collector = ImportCollector::new();
    assert!(collector.add_type(&JavaType::qualified("List", "java.util")));
    assert!(!collector.add_type(&factory::string_type()));
    assert!(!collector.add_type(&factory::int_type()));
    assert!(!collector.add_type(&JavaType::new("Local")));
    assert_eq!(collector.into_imports(false), vec!["java.util.List"]);
}

#[test]
fn collector_walks_generics_and_bounds() {
    let mut collector = ImportCollector::new();
    let mut slot = JavaGenericType::new(JavaType::qualified("Path", "java.nio.file"));
    slot.add_bound(JavaType::qualified("Serializable", "java.io"));
    let list = factory::list_type(slot);
    collector.add_type(&list);
    assert_eq!(
        collector.into_imports(true),
        vec!["java.io.Serializable", "java.nio.file.Path", "java.util.List"]
    );
}

#[test]
fn collector_dedups_and_preserves_insertion_order() {
    let mut collector = ImportCollector::new();
    collector.add_type(&JavaType::qualified("Set", "java.util"));
    collector.add_type(&JavaType::qualified("Serializable", "java.io"));
    assert!(!collector.add_type(&JavaType::qualified("Set", "java.util")));
    assert!(collector.add_raw("java.util.stream.Stream"));
    assert!(!collector.add_raw("java.util.stream.Stream"));
    assert_eq!(
        collector.into_imports(false),
        vec!["java.util.Set", "java.io.Serializable", "java.util.stream.Stream"]
    );
}

#[test]
fn fields_render_with_modifiers_and_initializers() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Constants");
    let mut field = Field::new("ZERO", factory::int_type());
    field.visibility = Visibility::Public;
    field.is_static = true;
    field.is_final = true;
    field.initializer = Some("0".to_string());
    class.add_field(field);

    let rendered = generator.generate_class(&class).expect("renders");
    assert_eq!(
        rendered,
        "public class Constants {\n    public static final int ZERO = 0;\n}\n"
    );
}

#[test]
fn package_private_renders_without_keyword() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Helper");
    class.visibility = Visibility::PackagePrivate;
    let rendered = generator.generate_class(&class).expect("renders");
    assert_eq!(rendered, "class Helper {\n}\n");
}

#[test]
fn full_constructor_assigns_every_field() {
    let mut class = point_class();
    class.add_constructor(class.full_constructor());
    let generator = ClassGenerator::new();
    let rendered = generator.generate_class(&class).expect("renders");
    let expected = "public class Point {\n    private int x;\n    private int y;\n\n    \
                    public Point(int x, int y) {\n        this.x = x;\n        this.y = y;\n    }\n}\n";
    assert_eq!(rendered, expected);
}

#[test]
fn superclass_is_elided_only_while_object() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Child");
    let rendered = generator.generate_class(&class).expect("renders");
    assert!(rendered.starts_with("public class Child {"));

    class.superclass = JavaType::qualified("Base", "com.example");
    let rendered = generator.generate_class(&class).expect("renders");
    assert!(rendered.starts_with("public class Child extends Base {"));
}

#[test]
fn interfaces_join_with_comma() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Multi");
    assert!(class.add_interface(JavaType::qualified("Serializable", "java.io")));
    assert!(class.add_interface(JavaType::qualified("Closeable", "java.io")));
    assert!(!class.add_interface(JavaType::qualified("Serializable", "java.io")));
    let rendered = generator.generate_class(&class).expect("renders");
    assert!(rendered.starts_with("public class Multi implements Serializable, Closeable {"));
}

#[test]
fn methods_render_signature_generics_and_body() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Finder");
    let mut method = Method::new("firstOf", JavaType::new("T"));
    let mut parameter_slot = JavaGenericType::new(JavaType::new("T"));
    parameter_slot.add_bound(JavaType::qualified("Comparable", "java.lang"));
    method.type_parameters.push(parameter_slot);
    method.is_static = true;
    method.add_parameter(Parameter::new("values", factory::list_type_of(JavaType::new("T"))));
    method.push_body_line("return values.get(0);");
    class.add_method(method);

    let rendered = generator.generate_class(&class).expect("renders");
    assert!(rendered.contains(
        "public static <T extends Comparable> T firstOf(List<T> values) {"
    ));
    assert!(rendered.contains("        return values.get(0);"));
}

#[test]
fn abstract_method_renders_as_signature_only() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Shape");
    class.is_abstract = true;
    let mut method = Method::new("area", factory::double_type());
    method.is_abstract = true;
    class.add_method(method);

    let rendered = generator.generate_class(&class).expect("renders");
    assert!(rendered.starts_with("public abstract class Shape {"));
    assert!(rendered.contains("    public abstract double area();\n"));
}

#[test]
fn abstract_method_in_concrete_class_is_rejected() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Shape");
    let mut method = Method::new("area", factory::double_type());
    method.is_abstract = true;
    class.add_method(method);

    let error = generator.generate_class(&class).expect_err("must fail");
    assert_eq!(
        error,
        CodeGenError::AbstractMethodInConcreteClass {
            name: "area".to_string()
        }
    );
}

#[test]
fn abstract_method_with_body_is_rejected() {
    let generator = ClassGenerator::new();
    let mut class = JavaClass::new("Shape");
    class.is_abstract = true;
    let mut method = Method::new("area", factory::double_type());
    method.is_abstract = true;
    method.push_body_line("return 0;");
    class.add_method(method);

    let error = generator.generate_class(&class).expect_err("must fail");
    assert_eq!(
        error,
        CodeGenError::AbstractMethodWithBody {
            name: "area".to_string()
        }
    );
}

#[test]
fn nameless_class_is_rejected() {
    let generator = ClassGenerator::new();
    let class = JavaClass::new("");
    assert_eq!(
        generator.generate_unit(&class).expect_err("must fail"),
        CodeGenError::NamelessClass
    );
}

#[test]
fn unit_collects_member_imports() {
    let mut class = point_class();
    let mut method = Method::new("labels", factory::list_of_strings());
    method.push_body_line("return java.util.List.of();");
    method.add_parameter(Parameter::new("path", JavaType::qualified("Path", "java.nio.file")));
    class.add_method(method);

    let generator = ClassGenerator::new();
    let unit = generator.generate_unit(&class).expect("generates");
    assert_eq!(unit.package_declaration.as_deref(), Some("com.example.geom"));
    assert_eq!(unit.imports, vec!["java.nio.file.Path", "java.util.List"]);
}

#[test]
fn class_converts_to_its_usage_descriptor() {
    let class = point_class();
    let java_type = JavaType::from(&class);
    assert_eq!(java_type.canonical_name(), "com.example.geom.Point");
    assert_eq!(java_type.simple_type(), "Point");

    let local = JavaClass::new("Scratch");
    assert!(!JavaType::from(&local).has_package());
}
