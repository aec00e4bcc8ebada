use crate::codec::{BitWidth, WireCode};

/// Built-in scalar kinds a schema can name directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
	/// `char`, decoded as one byte character.
	Char,
	/// `signed char`.
	S8,
	/// `unsigned char`.
	U8,
	/// `bool` / `_Bool`.
	Bool,
	/// `short`.
	S16,
	/// `unsigned short`.
	U16,
	/// `int`.
	S32,
	/// `unsigned int`.
	U32,
	/// `long long`.
	S64,
	/// `unsigned long long`.
	U64,
	/// `float`.
	F32,
	/// `double`.
	F64,
	/// `ssize_t`, width follows the target bit width.
	SSize,
	/// `size_t`, width follows the target bit width.
	USize,
	/// Opaque address, width follows the target bit width.
	Pointer,
	/// Layout filler, never part of decoded output.
	Padding,
}

/// Names accepted in schemas, including platform aliases.
const REGISTRY: &[(&str, Primitive)] = &[
	("char", Primitive::Char),
	("signed char", Primitive::S8),
	("unsigned char", Primitive::U8),
	("_Bool", Primitive::Bool),
	("short", Primitive::S16),
	("unsigned short", Primitive::U16),
	("int", Primitive::S32),
	("unsigned int", Primitive::U32),
	("long", Primitive::S32),
	("unsigned long", Primitive::U32),
	("long long", Primitive::S64),
	("unsigned long long", Primitive::U64),
	("ssize_t", Primitive::SSize),
	("size_t", Primitive::USize),
	("float", Primitive::F32),
	("double", Primitive::F64),
	// windows
	("BYTE", Primitive::U8),
	("WORD", Primitive::U16),
	("DWORD", Primitive::U32),
	("QWORD", Primitive::U64),
	("LONG", Primitive::S32),
	("LONGLONG", Primitive::S64),
	("ULONGLONG", Primitive::U64),
	// linux
	("__s8", Primitive::S8),
	("__s16", Primitive::S16),
	("__s32", Primitive::S32),
	("__s64", Primitive::S64),
	("__u8", Primitive::U8),
	("__u16", Primitive::U16),
	("__u32", Primitive::U32),
	("__u64", Primitive::U64),
	// short names
	("bool", Primitive::Bool),
	("s8", Primitive::S8),
	("s16", Primitive::S16),
	("s32", Primitive::S32),
	("s64", Primitive::S64),
	("u8", Primitive::U8),
	("u16", Primitive::U16),
	("u32", Primitive::U32),
	("u64", Primitive::U64),
	("f32", Primitive::F32),
	("f64", Primitive::F64),
	("padding", Primitive::Padding),
];

impl Primitive {
	/// Look up a schema type name in the registry.
	pub fn lookup(name: &str) -> Option<Self> {
		REGISTRY.iter().find(|(item, _)| *item == name).map(|(_, primitive)| *primitive)
	}

	/// Canonical C spelling.
	pub fn name(self) -> &'static str {
		match self {
			Self::Char => "char",
			Self::S8 => "signed char",
			Self::U8 => "unsigned char",
			Self::Bool => "bool",
			Self::S16 => "short",
			Self::U16 => "unsigned short",
			Self::S32 => "int",
			Self::U32 => "unsigned int",
			Self::S64 => "long long",
			Self::U64 => "unsigned long long",
			Self::F32 => "float",
			Self::F64 => "double",
			Self::SSize => "ssize_t",
			Self::USize => "size_t",
			Self::Pointer => "void*",
			Self::Padding => "padding",
		}
	}

	/// Compact spelling used in declarations.
	pub fn short_name(self) -> &'static str {
		match self {
			Self::Char => "char",
			Self::S8 => "s8",
			Self::U8 => "u8",
			Self::Bool => "bool",
			Self::S16 => "s16",
			Self::U16 => "u16",
			Self::S32 => "s32",
			Self::U32 => "u32",
			Self::S64 => "s64",
			Self::U64 => "u64",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::SSize => "ssize_t",
			Self::USize => "size_t",
			Self::Pointer => "void*",
			Self::Padding => "padding",
		}
	}

	/// Wire slot for this primitive at the given bit width.
	pub fn wire_code(self, bit_width: BitWidth) -> WireCode {
		match (self, bit_width) {
			(Self::Char, _) => WireCode::Char,
			(Self::S8, _) => WireCode::I8,
			(Self::U8, _) => WireCode::U8,
			(Self::Bool, _) => WireCode::Bool,
			(Self::S16, _) => WireCode::I16,
			(Self::U16, _) => WireCode::U16,
			(Self::S32, _) => WireCode::I32,
			(Self::U32, _) => WireCode::U32,
			(Self::S64, _) => WireCode::I64,
			(Self::U64, _) => WireCode::U64,
			(Self::F32, _) => WireCode::F32,
			(Self::F64, _) => WireCode::F64,
			(Self::SSize, BitWidth::B32) => WireCode::I32,
			(Self::SSize, BitWidth::B64) => WireCode::I64,
			(Self::USize, BitWidth::B32) => WireCode::U32,
			(Self::USize, BitWidth::B64) => WireCode::U64,
			(Self::Pointer, BitWidth::B32) => WireCode::Ptr32,
			(Self::Pointer, BitWidth::B64) => WireCode::Ptr64,
			(Self::Padding, _) => WireCode::Pad,
		}
	}

	/// Byte width at the given bit width.
	pub fn size(self, bit_width: BitWidth) -> usize {
		self.wire_code(bit_width).size()
	}

	/// Whether this is the padding filler.
	pub fn is_padding(self) -> bool {
		matches!(self, Self::Padding)
	}
}

#[cfg(test)]
mod tests;
