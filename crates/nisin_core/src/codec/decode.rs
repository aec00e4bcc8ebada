use tracing::debug;

use crate::codec::{BitWidth, Cursor, Endianness, FieldValue, Layout, NisinError, NodeKind, ParserNode, Result, StructData, StructValue, Value, WireCode};

/// Runtime inputs for one decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Pointer and `size_t` width.
	pub bit_width: BitWidth,
	/// Byte order of every scalar.
	pub endianness: Endianness,
	/// Absolute byte offset of the value in the buffer.
	pub offset: usize,
}

impl DecodeOptions {
	/// Builder-style bit width override.
	pub fn with_bit_width(mut self, bit_width: BitWidth) -> Self {
		self.bit_width = bit_width;
		self
	}

	/// Builder-style endianness override.
	pub fn with_endianness(mut self, endianness: Endianness) -> Self {
		self.endianness = endianness;
		self
	}

	/// Builder-style offset override.
	pub fn with_offset(mut self, offset: usize) -> Self {
		self.offset = offset;
		self
	}
}

impl ParserNode {
	/// Decode one value of this type from `buf`.
	///
	/// The whole layout is unpacked first; the flat scalar list is then
	/// reassembled into the node tree in declaration order.
	pub fn decode(&self, buf: &[u8], options: &DecodeOptions) -> Result<StructData> {
		let need = self.byte_size(options.bit_width)?;
		let have = buf.len().saturating_sub(options.offset);
		if need > have {
			return Err(NisinError::TruncatedBuffer {
				offset: options.offset,
				need,
				have,
			});
		}

		let layout = self.layout(options.bit_width)?;
		let values = unpack(layout, buf, options)?;
		debug!(type_name = self.type_name(), size = need, values = values.len(), "unpacked layout");

		let mut scalars = Scalars::new(self.type_name(), values);
		let data = assemble(self, self.dims(), &mut scalars)?;
		scalars.finish()?;
		Ok(data)
	}
}

fn unpack(layout: &Layout, buf: &[u8], options: &DecodeOptions) -> Result<Vec<Value>> {
	let endianness = options.endianness;
	let mut cursor = Cursor::at(buf, options.offset);
	let mut out = Vec::with_capacity(layout.value_count());

	for code in &layout.codes {
		let value = match code {
			WireCode::Pad => {
				cursor.skip(code.size())?;
				continue;
			}
			WireCode::Char => Value::Char(cursor.read_u8()?),
			WireCode::I8 => Value::I64(i64::from(cursor.read_u8()? as i8)),
			WireCode::U8 => Value::U64(u64::from(cursor.read_u8()?)),
			WireCode::Bool => Value::Bool(cursor.read_u8()? != 0),
			WireCode::I16 => Value::I64(i64::from(cursor.read_u16(endianness)? as i16)),
			WireCode::U16 => Value::U64(u64::from(cursor.read_u16(endianness)?)),
			WireCode::I32 => Value::I64(i64::from(cursor.read_u32(endianness)? as i32)),
			WireCode::U32 => Value::U64(u64::from(cursor.read_u32(endianness)?)),
			WireCode::I64 => Value::I64(cursor.read_u64(endianness)? as i64),
			WireCode::U64 => Value::U64(cursor.read_u64(endianness)?),
			WireCode::F32 => Value::F32(cursor.read_f32(endianness)?),
			WireCode::F64 => Value::F64(cursor.read_f64(endianness)?),
			WireCode::Ptr32 => Value::Ptr(u64::from(cursor.read_u32(endianness)?)),
			WireCode::Ptr64 => Value::Ptr(cursor.read_u64(endianness)?),
		};
		out.push(value);
	}
	Ok(out)
}

/// Forward-only reader over unpacked scalars.
struct Scalars<'a> {
	type_name: &'a str,
	total: usize,
	consumed: usize,
	values: std::vec::IntoIter<Value>,
}

impl<'a> Scalars<'a> {
	fn new(type_name: &'a str, values: Vec<Value>) -> Self {
		Self {
			type_name,
			total: values.len(),
			consumed: 0,
			values: values.into_iter(),
		}
	}

	fn take(&mut self) -> Result<Value> {
		let value = self.values.next().ok_or_else(|| self.mismatch(self.consumed + 1))?;
		self.consumed += 1;
		Ok(value)
	}

	fn finish(self) -> Result<()> {
		if self.consumed == self.total {
			return Ok(());
		}
		Err(self.mismatch(self.consumed))
	}

	fn mismatch(&self, expected: usize) -> NisinError {
		NisinError::LayoutMismatch {
			type_name: self.type_name.to_owned(),
			expected,
			got: self.total,
		}
	}
}

fn assemble(node: &ParserNode, dims: &[usize], scalars: &mut Scalars<'_>) -> Result<StructData> {
	if let [count, rest @ ..] = dims {
		let value = if rest.is_empty() && node.is_char() {
			let mut bytes = Vec::with_capacity(*count);
			for _ in 0..*count {
				match scalars.take()? {
					Value::Char(byte) => bytes.push(byte),
					_ => return Err(scalars.mismatch(scalars.consumed)),
				}
			}
			Value::String(text_from_bytes(&bytes).into())
		} else {
			let mut items = Vec::with_capacity(*count);
			for _ in 0..*count {
				items.push(assemble(node, rest, scalars)?);
			}
			Value::Array(items)
		};
		return Ok(node.annotate(value));
	}

	let value = match node.kind() {
		NodeKind::Primitive(primitive) if primitive.is_padding() => Value::Null,
		NodeKind::Pointer { .. } | NodeKind::Primitive(_) => scalars.take()?,
		NodeKind::Struct(fields) => {
			let mut out = Vec::with_capacity(fields.len());
			for field in fields.iter().filter(|field| !field.node.is_padding()) {
				out.push(FieldValue {
					name: field.name.clone(),
					value: assemble(&field.node, field.node.dims(), scalars)?,
				});
			}
			Value::Struct(StructValue {
				type_name: node.type_name().into(),
				fields: out,
			})
		}
	};
	Ok(node.annotate(value))
}

/// Char array text: bytes up to the first NUL, decoded lossily.
fn text_from_bytes(bytes: &[u8]) -> String {
	let end = bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len());
	String::from_utf8_lossy(&bytes[..end]).into_owned()
}
