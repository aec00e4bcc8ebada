use super::{FieldNode, NodeKind, ParserNode};
use crate::codec::{BitWidth, NisinError, Primitive, WireCode};

fn field(name: &str, node: ParserNode) -> FieldNode {
	FieldNode { name: name.into(), node }
}

fn sample() -> ParserNode {
	ParserNode::structure(
		"Sample",
		vec![
			field("id", ParserNode::primitive("u16", Primitive::U16)),
			field("pad", ParserNode::primitive("padding", Primitive::Padding).with_outer_dims(vec![2])),
			field("next", ParserNode::pointer("Sample", 1)),
			field("len", ParserNode::primitive("size_t", Primitive::USize)),
		],
	)
}

#[test]
fn layout_tracks_bit_width() {
	let node = sample();

	let narrow = node.layout(BitWidth::B32).expect("layout");
	assert_eq!(narrow.format_string(), "HxxII");
	assert_eq!(narrow.size, 12);
	assert_eq!(narrow.value_count(), 3);

	let wide = node.layout(BitWidth::B64).expect("layout");
	assert_eq!(wide.format_string(), "HxxQQ");
	assert_eq!(wide.size, 20);
}

#[test]
fn layout_is_memoized_per_bit_width() {
	let node = sample();
	let first = node.layout(BitWidth::B64).expect("layout") as *const _;
	let second = node.layout(BitWidth::B64).expect("layout") as *const _;
	assert_eq!(first, second);
	assert_eq!(node.byte_size(BitWidth::B64).expect("size"), 20);
}

#[test]
fn dims_repeat_the_element_layout() {
	let node = ParserNode::structure(
		"Pair",
		vec![field("a", ParserNode::primitive("u8", Primitive::U8)), field("b", ParserNode::primitive("s16", Primitive::S16))],
	)
	.with_outer_dims(vec![2, 2]);

	let layout = node.layout(BitWidth::B64).expect("layout");
	assert_eq!(layout.codes.len(), 8);
	assert_eq!(layout.codes[..2], [WireCode::U8, WireCode::I16]);
	assert_eq!(layout.size, 12);
	assert_eq!(node.element_count().expect("count"), 4);
}

#[test]
fn outer_dims_are_prepended() {
	let node = ParserNode::primitive("u8", Primitive::U8).with_outer_dims(vec![4]).with_outer_dims(vec![3]);
	assert_eq!(node.dims(), &[3, 4]);
}

#[test]
fn overflowing_size_is_reported_without_building_codes() {
	let node = ParserNode::primitive("u64", Primitive::U64).with_outer_dims(vec![usize::MAX / 2]);
	let err = node.byte_size(BitWidth::B64).expect_err("size overflows");
	assert!(matches!(err, NisinError::LayoutTooLarge { ref type_name } if type_name == "u64"));
}

#[test]
fn unallocatable_layout_is_an_error() {
	let node = ParserNode::primitive("u8", Primitive::U8).with_outer_dims(vec![i64::MAX as usize]);
	assert_eq!(node.byte_size(BitWidth::B64).expect("size fits"), i64::MAX as usize);

	let err = node.layout(BitWidth::B64).expect_err("code list cannot be allocated");
	assert!(matches!(err, NisinError::LayoutTooLarge { ref type_name } if type_name == "u8"));
}

#[test]
fn accessors_expose_shape() {
	let node = sample();
	assert_eq!(node.type_name(), "Sample");
	assert_eq!(node.fields().map(<[FieldNode]>::len), Some(4));
	assert!(node.field("pad").is_some_and(ParserNode::is_padding));
	assert!(matches!(node.field("next").map(ParserNode::kind), Some(NodeKind::Pointer { depth: 1 })));
	assert!(node.field("missing").is_none());
}
