use javagen_types::{factory, JavaGenericType, JavaType};

fn number_bound() -> JavaType {
    JavaType::qualified("Number", "java.lang")
}

#[test]
fn nested_generics_qualify_transitively() {
    let mut map = JavaType::qualified("Map", "java.util");
    map.add_type_as_generic(factory::string_type());
    map.add_generic(factory::wild_extends_type(factory::list_type_of(number_bound())));

    assert_eq!(
        map.simple_type(),
        "Map<String, ? extends List<Number>>"
    );
    assert_eq!(
        map.canonical_type(),
        "java.util.Map<java.lang.String, ? extends java.util.List<java.lang.Number>>"
    );
}

#[test]
fn declaration_slot_renders_all_forms() {
    let mut slot = JavaGenericType::new(JavaType::new("T"));
    slot.add_bound(number_bound());
    slot.add_bound(JavaType::qualified("Serializable", "java.io"));

    assert_eq!(slot.simple_type(), "T extends Number&Serializable");
    assert_eq!(
        slot.wrapped_simple_type(),
        "<T extends Number&Serializable>"
    );
    assert_eq!(
        slot.canonical_type(),
        "T extends java.lang.Number&java.io.Serializable"
    );
    assert_eq!(
        slot.to_string(),
        "<T extends java.lang.Number&java.io.Serializable>"
    );
}

#[test]
fn parsed_array_types_render_back_to_their_spelling() {
    let parsed = JavaType::parse("com.example.Matrix[][]").expect("parses");
    assert_eq!(parsed.canonical_type(), "com.example.Matrix[][]");
    assert_eq!(parsed.simple_type(), "Matrix[][]");
    assert!(parsed.requires_import());
    assert_eq!(parsed.canonical_name(), "com.example.Matrix");
}

#[test]
fn descriptor_trees_round_trip_through_serde() {
    let mut list = factory::list_type(factory::wild_extends_type(number_bound()));
    list.set_array_dimension(1);

    let encoded = serde_json::to_string(&list).expect("serializes");
    let decoded: JavaType = serde_json::from_str(&encoded).expect("deserializes");
    assert_eq!(decoded, list);
    assert_eq!(decoded.canonical_type(), list.canonical_type());
}
