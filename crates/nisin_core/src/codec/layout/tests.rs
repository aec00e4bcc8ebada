use crate::codec::{BitWidth, Endianness, Layout, NisinError, WireCode};

#[test]
fn endianness_parses_known_names() {
	assert_eq!("little".parse::<Endianness>().expect("little parses"), Endianness::Little);
	assert_eq!("big".parse::<Endianness>().expect("big parses"), Endianness::Big);
	assert_eq!(Endianness::Big.as_str(), "big");
}

#[test]
fn endianness_rejects_other_names() {
	let err = "middle".parse::<Endianness>().expect_err("middle endian is not supported");
	assert!(matches!(err, NisinError::UnsupportedEndianness { ref value } if value == "middle"));
}

#[test]
fn bit_width_controls_pointer_size() {
	assert_eq!(BitWidth::from_bits(32).expect("32 parses").pointer_size(), 4);
	assert_eq!(BitWidth::from_bits(64).expect("64 parses").pointer_size(), 8);
	assert!(matches!(BitWidth::from_bits(16), Err(NisinError::UnsupportedBitWidth { bits: 16 })));
}

#[test]
fn format_string_uses_struct_letters() {
	let layout = Layout {
		codes: vec![WireCode::U32, WireCode::Pad, WireCode::Ptr64, WireCode::Char],
		size: 14,
	};
	assert_eq!(layout.format_string(), "IxQc");
	assert_eq!(layout.value_count(), 3);
}
