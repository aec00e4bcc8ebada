use std::sync::Arc;

use crate::codec::{DisplayFormat, LabelTable};

/// Runtime value emitted by schema-driven decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Decoded value of a bare padding node.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Single byte character.
	Char(u8),
	/// Text decoded from a `char` array.
	String(Box<str>),
	/// Opaque pointer value.
	Ptr(u64),
	/// Array elements in index order.
	Array(Vec<StructData>),
	/// Struct-shaped decoded value.
	Struct(StructValue),
}

impl Value {
	/// Integer view of integral scalars (ints, bools, chars, pointers).
	pub fn as_i128(&self) -> Option<i128> {
		match self {
			Self::Bool(v) => Some(i128::from(*v)),
			Self::I64(v) => Some(i128::from(*v)),
			Self::U64(v) | Self::Ptr(v) => Some(i128::from(*v)),
			Self::Char(v) => Some(i128::from(*v)),
			_ => None,
		}
	}

	/// Stable lowercase kind label.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F32(_) => "f32",
			Self::F64(_) => "f64",
			Self::Char(_) => "char",
			Self::String(_) => "string",
			Self::Ptr(_) => "ptr",
			Self::Array(_) => "array",
			Self::Struct(_) => "struct",
		}
	}
}

/// Decoded struct value with field names preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Struct type name from the schema.
	pub type_name: Box<str>,
	/// Decoded field values in declaration order, padding omitted.
	pub fields: Vec<FieldValue>,
}

/// Named decoded field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Decoded field payload.
	pub value: StructData,
}

/// One node of the decoded value tree with its display annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct StructData {
	/// Decoded payload.
	pub value: Value,
	/// Display format hint inherited from the field.
	pub format: Option<DisplayFormat>,
	/// Label table inherited from the field.
	pub labels: Option<Arc<LabelTable>>,
}

impl StructData {
	/// Unannotated node.
	pub fn new(value: Value) -> Self {
		Self {
			value,
			format: None,
			labels: None,
		}
	}

	/// Field of a struct node by name.
	pub fn get(&self, name: &str) -> Option<&StructData> {
		match &self.value {
			Value::Struct(item) => item.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value),
			_ => None,
		}
	}

	/// Element of an array node by index.
	pub fn at(&self, index: usize) -> Option<&StructData> {
		match &self.value {
			Value::Array(items) => items.get(index),
			_ => None,
		}
	}

	/// Text of a string node.
	pub fn as_str(&self) -> Option<&str> {
		match &self.value {
			Value::String(text) => Some(text),
			_ => None,
		}
	}

	/// Symbolic label for this scalar, if its label table has a match.
	pub fn label(&self) -> Option<String> {
		let labels = self.labels.as_ref()?;
		labels.label(self.value.as_i128()?)
	}
}
