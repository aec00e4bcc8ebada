use std::str::FromStr;

use crate::codec::{NisinError, Result};

/// Byte order used when unpacking scalars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endianness {
	/// Least significant byte first.
	#[default]
	Little,
	/// Most significant byte first.
	Big,
}

impl Endianness {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}
}

impl FromStr for Endianness {
	type Err = NisinError;

	fn from_str(value: &str) -> Result<Self> {
		match value {
			"little" => Ok(Self::Little),
			"big" => Ok(Self::Big),
			_ => Err(NisinError::UnsupportedEndianness { value: value.to_owned() }),
		}
	}
}

/// Target width of pointers and `size_t`-like integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BitWidth {
	/// 4-byte pointers.
	B32,
	/// 8-byte pointers.
	#[default]
	B64,
}

impl BitWidth {
	/// Parse a numeric bit width (`32` or `64`).
	pub fn from_bits(bits: u32) -> Result<Self> {
		match bits {
			32 => Ok(Self::B32),
			64 => Ok(Self::B64),
			_ => Err(NisinError::UnsupportedBitWidth { bits }),
		}
	}

	/// Numeric bit width.
	pub fn bits(self) -> u32 {
		match self {
			Self::B32 => 32,
			Self::B64 => 64,
		}
	}

	/// Pointer width in bytes.
	pub fn pointer_size(self) -> usize {
		match self {
			Self::B32 => 4,
			Self::B64 => 8,
		}
	}

	pub(crate) fn slot(self) -> usize {
		match self {
			Self::B32 => 0,
			Self::B64 => 1,
		}
	}
}

/// One fixed-width slot of a packed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireCode {
	/// Single byte character.
	Char,
	/// Signed 8-bit integer.
	I8,
	/// Unsigned 8-bit integer.
	U8,
	/// One-byte boolean.
	Bool,
	/// Signed 16-bit integer.
	I16,
	/// Unsigned 16-bit integer.
	U16,
	/// Signed 32-bit integer.
	I32,
	/// Unsigned 32-bit integer.
	U32,
	/// Signed 64-bit integer.
	I64,
	/// Unsigned 64-bit integer.
	U64,
	/// IEEE 754 single precision float.
	F32,
	/// IEEE 754 double precision float.
	F64,
	/// 4-byte pointer.
	Ptr32,
	/// 8-byte pointer.
	Ptr64,
	/// One byte of padding, never decoded.
	Pad,
}

impl WireCode {
	/// Width in bytes.
	pub fn size(self) -> usize {
		match self {
			Self::Char | Self::I8 | Self::U8 | Self::Bool | Self::Pad => 1,
			Self::I16 | Self::U16 => 2,
			Self::I32 | Self::U32 | Self::F32 | Self::Ptr32 => 4,
			Self::I64 | Self::U64 | Self::F64 | Self::Ptr64 => 8,
		}
	}

	/// Whether the slot is skipped during unpacking.
	pub fn is_padding(self) -> bool {
		matches!(self, Self::Pad)
	}

	/// One-letter code used by `struct`-style format strings.
	pub fn as_char(self) -> char {
		match self {
			Self::Char => 'c',
			Self::I8 => 'b',
			Self::U8 => 'B',
			Self::Bool => '?',
			Self::I16 => 'h',
			Self::U16 => 'H',
			Self::I32 => 'i',
			Self::U32 | Self::Ptr32 => 'I',
			Self::I64 => 'q',
			Self::U64 | Self::Ptr64 => 'Q',
			Self::F32 => 'f',
			Self::F64 => 'd',
			Self::Pad => 'x',
		}
	}
}

/// Flat packed layout of a compiled type at one bit width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
	/// Wire slots in unpack order.
	pub codes: Vec<WireCode>,
	/// Total byte size, padding included.
	pub size: usize,
}

impl Layout {
	/// Render codes as a compact format string such as `IIB`.
	pub fn format_string(&self) -> String {
		self.codes.iter().map(|code| code.as_char()).collect()
	}

	/// Number of scalars produced by unpacking (padding excluded).
	pub fn value_count(&self) -> usize {
		self.codes.iter().filter(|code| !code.is_padding()).count()
	}
}

#[cfg(test)]
mod tests;
