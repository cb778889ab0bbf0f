//! End-to-end declaration emission through the C# backend.

use trellis_codegen::{ArrayStyle, DeclareOptions};
use trellis_ir::SchemaNode;

fn pet_schema() -> SchemaNode {
    SchemaNode::object([
        ("id", SchemaNode::primitive("integer")),
        ("tags", SchemaNode::array(SchemaNode::primitive("string"))),
    ])
}

#[test]
fn flat_object_emits_one_class() {
    let out = trellis_codegen_csharp::emit(&pet_schema(), &DeclareOptions::new("Root")).unwrap();
    insta::assert_snapshot!(out.trim_end(), @r"
    public class Root
    {
        public int Id { get; set; }
        public List<string> Tags { get; set; }
    }
    ");
    // String arrays do not spawn a named sub-declaration
    assert_eq!(out.matches("public class").count(), 1);
}

#[test]
fn nested_objects_emit_sibling_classes() {
    let schema = SchemaNode::object([
        (
            "owner",
            SchemaNode::object([
                ("name", SchemaNode::primitive("string")),
                ("active", SchemaNode::primitive("boolean")),
            ]),
        ),
        ("id", SchemaNode::primitive("integer").with_format("int64")),
    ]);
    let out = trellis_codegen_csharp::emit(&schema, &DeclareOptions::new("Root")).unwrap();
    insta::assert_snapshot!(out.trim_end(), @r"
    public class Root
    {
        public Owner Owner { get; set; }
        public long Id { get; set; }
    }

    public class Owner
    {
        public string Name { get; set; }
        public bool Active { get; set; }
    }
    ");
}

#[test]
fn array_of_object_singularizes_type_name() {
    let schema = SchemaNode::object([(
        "orders",
        SchemaNode::array(SchemaNode::object([(
            "total",
            SchemaNode::primitive("number").with_format("double"),
        )])),
    )]);
    let out = trellis_codegen_csharp::emit(&schema, &DeclareOptions::new("Root")).unwrap();
    assert!(out.contains("public List<Order> Orders { get; set; }"));
    assert!(out.contains("public class Order"));
}

#[test]
fn nullable_and_native_array_options() {
    let schema = SchemaNode::object([
        ("id", SchemaNode::primitive("integer")),
        ("tags", SchemaNode::array(SchemaNode::primitive("string"))),
    ])
    .with_required(&["id"]);
    let mut options = DeclareOptions::new("Root");
    options.nullable = true;
    options.array_style = ArrayStyle::Native;
    let out = trellis_codegen_csharp::emit(&schema, &options).unwrap();
    assert!(out.contains("public int Id { get; set; }"));
    assert!(out.contains("public string[]? Tags { get; set; }"));
}

#[test]
fn formatting_is_idempotent() {
    use trellis_codegen::Dialect;
    let out = trellis_codegen_csharp::emit(&pet_schema(), &DeclareOptions::new("Root")).unwrap();
    assert_eq!(trellis_codegen_csharp::CSharp.format(&out), out);
}

#[test]
fn non_object_root_is_rejected() {
    let err = trellis_codegen_csharp::emit(
        &SchemaNode::array(SchemaNode::primitive("string")),
        &DeclareOptions::new("Root"),
    )
    .unwrap_err();
    assert!(matches!(err, trellis_codegen::Error::UnsupportedShape { .. }));
}
