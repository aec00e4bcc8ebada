use super::compile;
use crate::codec::{BitWidth, FieldEntry, FieldRecord, FieldType, LabelMode, NisinError, NodeKind, Primitive, Schema, TypeDef};

fn point_schema() -> Schema {
	Schema::new().with_struct(
		"Point",
		vec![
			FieldEntry::new("x", "u32"),
			FieldEntry::new("y", "u32"),
			FieldEntry::new("flag", FieldRecord::new("u8").with_labels([(0, "OFF"), (1, "ON")])),
		],
	)
}

#[test]
fn compiles_struct_with_labels() {
	let node = compile(&point_schema(), "Point").expect("compile");
	assert_eq!(node.type_name(), "Point");
	assert_eq!(node.fields().map(<[_]>::len), Some(3));
	assert_eq!(node.layout(BitWidth::B32).expect("layout").format_string(), "IIB");
	assert_eq!(node.byte_size(BitWidth::B64).expect("size"), 9);

	let flag = node.field("flag").expect("flag field");
	let labels = flag.labels().expect("labels attached");
	assert_eq!(labels.mode(), LabelMode::Plain);
	assert_eq!(labels.label(1).as_deref(), Some("ON"));
}

#[test]
fn alias_chain_accumulates_dims_outer_first() {
	let schema = Schema::new().with_alias("Grid", "Row[3]").with_alias("Row", "u8[4]");
	let node = compile(&schema, "Grid").expect("compile");
	assert_eq!(node.dims(), &[3, 4]);
	assert!(matches!(node.kind(), NodeKind::Primitive(Primitive::U8)));
	assert_eq!(node.type_name(), "u8");
}

#[test]
fn alias_to_struct_takes_struct_name() {
	let schema = point_schema().with_alias("Pt", "Point").with_alias("Pts", "Pt[2]");
	let node = compile(&schema, "Pts").expect("compile");
	assert_eq!(node.type_name(), "Point");
	assert_eq!(node.dims(), &[2]);
	assert_eq!(node.byte_size(BitWidth::B32).expect("size"), 18);
}

#[test]
fn self_alias_of_primitive_name_resolves() {
	let schema = Schema::new().with_alias("u8", "u8");
	let node = compile(&schema, "u8").expect("compile");
	assert!(matches!(node.kind(), NodeKind::Primitive(Primitive::U8)));
}

#[test]
fn alias_cycle_is_reported_with_chain() {
	let schema = Schema::new().with_alias("A", "B").with_alias("B", "A");
	let err = compile(&schema, "A").expect_err("cycle");
	assert!(matches!(err, NisinError::CyclicAlias { ref chain } if chain == "A -> B -> A"));
}

#[test]
fn struct_containing_itself_is_rejected() {
	let schema = Schema::new().with_struct("Node", vec![FieldEntry::new("value", "u8"), FieldEntry::new("child", "Node")]);
	let err = compile(&schema, "Node").expect_err("recursive");
	assert!(matches!(err, NisinError::RecursiveType { ref name } if name == "Node"));
}

#[test]
fn self_pointer_is_fine() {
	let schema = Schema::new().with_struct("Node", vec![FieldEntry::new("value", "u8"), FieldEntry::new("next", "Node *")]);
	let node = compile(&schema, "Node").expect("compile");
	let next = node.field("next").expect("next");
	assert!(matches!(next.kind(), NodeKind::Pointer { depth: 1 }));
	assert_eq!(next.type_name(), "Node");
	assert_eq!(node.byte_size(BitWidth::B32).expect("size"), 5);
}

#[test]
fn pointer_to_unknown_type_is_not_resolved() {
	let schema = Schema::new().with_struct("Handle", vec![FieldEntry::new("raw", "Opaque**")]);
	assert!(compile(&schema, "Handle").is_ok());
}

#[test]
fn unknown_field_type_fails() {
	let schema = Schema::new().with_struct("S", vec![FieldEntry::new("x", "Missing")]);
	let err = compile(&schema, "S").expect_err("unknown");
	assert!(matches!(err, NisinError::UnknownType { ref name } if name == "Missing"));

	let err = compile(&Schema::new(), "Nothing").expect_err("unknown target");
	assert!(matches!(err, NisinError::UnknownType { ref name } if name == "Nothing"));
}

#[test]
fn field_entry_must_have_one_pair() {
	let entry = FieldEntry {
		pairs: vec![("a".to_owned(), FieldType::from("u8")), ("b".to_owned(), FieldType::from("u8"))],
	};
	let schema = Schema::new().with_struct("S", vec![entry]);
	let err = compile(&schema, "S").expect_err("two keys");
	assert!(matches!(err, NisinError::TooManyOrFewKeys { count: 2, ref keys, .. } if keys == "a, b"));

	let schema = Schema::new().with_struct("S", vec![FieldEntry { pairs: Vec::new() }]);
	let err = compile(&schema, "S").expect_err("no keys");
	assert!(matches!(err, NisinError::TooManyOrFewKeys { count: 0, .. }));
}

#[test]
fn duplicate_field_names_are_rejected() {
	let schema = Schema::new().with_struct("S", vec![FieldEntry::new("x", "u8"), FieldEntry::new("x", "u16")]);
	let err = compile(&schema, "S").expect_err("duplicate");
	assert!(matches!(err, NisinError::DuplicateField { ref field, .. } if field == "x"));
}

#[test]
fn labels_and_flags_conflict() {
	let record = FieldRecord::new("u8").with_labels([(0, "A")]).with_flags([(1, "B")]);
	let schema = Schema::new().with_struct("S", vec![FieldEntry::new("x", record)]);
	let err = compile(&schema, "S").expect_err("conflict");
	assert!(matches!(err, NisinError::ConflictingLabelSpec { ref field, .. } if field == "x"));
}

#[test]
fn bad_format_hint_fails_at_compile_time() {
	let schema = Schema::new().with_struct("S", vec![FieldEntry::new("x", FieldRecord::new("u8").with_format("#q"))]);
	assert!(matches!(compile(&schema, "S"), Err(NisinError::InvalidFormatSpec { .. })));
}

#[test]
fn field_dims_wrap_resolved_alias_dims() {
	let schema = Schema::new()
		.with_alias("Name", "char[8]")
		.with_struct("S", vec![FieldEntry::new("names", "Name[2]")]);
	let node = compile(&schema, "S").expect("compile");
	assert_eq!(node.field("names").map(|field| field.dims().to_vec()), Some(vec![2, 8]));
}

#[test]
fn oversized_layout_is_detected_eagerly() {
	let big = format!("u64[{}]", usize::MAX / 4);
	let schema = Schema::new().with_alias("Huge", big.as_str());
	assert!(matches!(compile(&schema, "Huge"), Err(NisinError::LayoutTooLarge { .. })));
}

#[test]
fn huge_array_compiles_but_layout_fails_cleanly() {
	let schema = Schema::new().with_alias("Big", "u8[9223372036854775807]");
	let node = compile(&schema, "Big").expect("size fits in usize");
	assert!(matches!(node.layout(BitWidth::B64), Err(NisinError::LayoutTooLarge { .. })));
	assert!(matches!(node.decode(&[0; 4], &Default::default()), Err(NisinError::TruncatedBuffer { .. })));
}

#[test]
fn malformed_alias_text_fails() {
	let mut schema = Schema::new();
	schema.insert("Bad", TypeDef::Alias("u8[0]".to_owned()));
	assert!(matches!(compile(&schema, "Bad"), Err(NisinError::MalformedTypeSpec { .. })));
}
