use super::{Primitive, REGISTRY};
use crate::codec::{BitWidth, WireCode};

#[test]
fn platform_aliases_resolve_to_same_kind() {
	assert_eq!(Primitive::lookup("DWORD"), Some(Primitive::U32));
	assert_eq!(Primitive::lookup("__u32"), Some(Primitive::U32));
	assert_eq!(Primitive::lookup("unsigned int"), Some(Primitive::U32));
	assert_eq!(Primitive::lookup("long"), Some(Primitive::S32));
	assert_eq!(Primitive::lookup("_Bool"), Some(Primitive::Bool));
}

#[test]
fn unknown_and_pointer_names_are_not_primitives() {
	assert_eq!(Primitive::lookup("Point"), None);
	assert_eq!(Primitive::lookup("void*"), None);
	assert_eq!(Primitive::lookup("U32"), None);
}

#[test]
fn size_rule_follows_bit_width_for_size_types() {
	for primitive in [Primitive::SSize, Primitive::USize, Primitive::Pointer] {
		assert_eq!(primitive.size(BitWidth::B32), 4, "{} at 32-bit", primitive.name());
		assert_eq!(primitive.size(BitWidth::B64), 8, "{} at 64-bit", primitive.name());
	}
	assert_eq!(Primitive::SSize.wire_code(BitWidth::B32), WireCode::I32);
	assert_eq!(Primitive::USize.wire_code(BitWidth::B64), WireCode::U64);
}

#[test]
fn fixed_primitives_ignore_bit_width() {
	for (name, primitive) in REGISTRY {
		if matches!(primitive, Primitive::SSize | Primitive::USize) {
			continue;
		}
		assert_eq!(primitive.size(BitWidth::B32), primitive.size(BitWidth::B64), "{name}");
	}
	assert_eq!(Primitive::Char.size(BitWidth::B64), 1);
	assert_eq!(Primitive::S16.size(BitWidth::B64), 2);
	assert_eq!(Primitive::F64.size(BitWidth::B32), 8);
	assert_eq!(Primitive::Padding.size(BitWidth::B32), 1);
}

#[test]
fn short_names_round_trip_through_registry() {
	for (_, primitive) in REGISTRY {
		assert_eq!(Primitive::lookup(primitive.short_name()), Some(*primitive));
	}
}
