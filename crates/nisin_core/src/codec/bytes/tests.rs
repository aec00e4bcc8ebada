use super::Cursor;
use crate::codec::{Endianness, NisinError};

#[test]
fn reads_follow_requested_byte_order() {
	let bytes = [0x12, 0x34, 0x12, 0x34];
	let mut cursor = Cursor::at(&bytes, 0);
	assert_eq!(cursor.read_u16(Endianness::Little).expect("read"), 0x3412);
	assert_eq!(cursor.read_u16(Endianness::Big).expect("read"), 0x1234);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn floats_decode_from_bits() {
	let bytes = 1.5_f32.to_be_bytes();
	let mut cursor = Cursor::at(&bytes, 0);
	assert_eq!(cursor.read_f32(Endianness::Big).expect("read"), 1.5);
}

#[test]
fn short_read_reports_absolute_offset() {
	let bytes = [0_u8; 6];
	let mut cursor = Cursor::at(&bytes, 4);
	let err = cursor.read_u32(Endianness::Little).expect_err("only two bytes remain");
	assert!(matches!(err, NisinError::TruncatedBuffer { offset: 4, need: 4, have: 2 }));
}
