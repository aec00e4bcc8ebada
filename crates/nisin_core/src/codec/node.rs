use std::sync::{Arc, OnceLock};

use crate::codec::{BitWidth, DisplayFormat, LabelTable, Layout, NisinError, Primitive, Result, StructData, Value};

/// What a compiled node decodes as, before array dims are applied.
#[derive(Debug, Clone)]
pub enum NodeKind {
	/// Opaque address; the pointee is never resolved.
	Pointer {
		/// Number of `*` levels.
		depth: u32,
	},
	/// Single registry scalar.
	Primitive(Primitive),
	/// Ordered child fields.
	Struct(Vec<FieldNode>),
}

/// Named child of a struct node.
#[derive(Debug, Clone)]
pub struct FieldNode {
	/// Field identifier.
	pub name: Box<str>,
	/// Compiled field type.
	pub node: ParserNode,
}

/// Compiled, reusable codec for one type spec occurrence.
#[derive(Debug, Clone)]
pub struct ParserNode {
	type_name: Box<str>,
	kind: NodeKind,
	dims: Vec<usize>,
	pub(crate) format: Option<DisplayFormat>,
	pub(crate) labels: Option<Arc<LabelTable>>,
	layouts: [OnceLock<Layout>; 2],
}

impl ParserNode {
	fn new(type_name: &str, kind: NodeKind) -> Self {
		Self {
			type_name: type_name.into(),
			kind,
			dims: Vec::new(),
			format: None,
			labels: None,
			layouts: [OnceLock::new(), OnceLock::new()],
		}
	}

	pub(crate) fn pointer(pointee: &str, depth: u32) -> Self {
		Self::new(pointee, NodeKind::Pointer { depth })
	}

	pub(crate) fn primitive(type_name: &str, primitive: Primitive) -> Self {
		Self::new(type_name, NodeKind::Primitive(primitive))
	}

	pub(crate) fn structure(type_name: &str, fields: Vec<FieldNode>) -> Self {
		Self::new(type_name, NodeKind::Struct(fields))
	}

	/// Wrap the node in additional outer array dimensions.
	pub(crate) fn with_outer_dims(mut self, outer: Vec<usize>) -> Self {
		if !outer.is_empty() {
			let inner = std::mem::replace(&mut self.dims, outer);
			self.dims.extend(inner);
		}
		self
	}

	/// Display name: the pointee for pointers, the schema spelling otherwise.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Node shape.
	pub fn kind(&self) -> &NodeKind {
		&self.kind
	}

	/// Array dimensions, outermost first; empty for scalars.
	pub fn dims(&self) -> &[usize] {
		&self.dims
	}

	/// Display format hint.
	pub fn format(&self) -> Option<&DisplayFormat> {
		self.format.as_ref()
	}

	/// Attached label table.
	pub fn labels(&self) -> Option<&LabelTable> {
		self.labels.as_deref()
	}

	/// Child fields of a struct node.
	pub fn fields(&self) -> Option<&[FieldNode]> {
		match &self.kind {
			NodeKind::Struct(fields) => Some(fields),
			_ => None,
		}
	}

	/// Child field by name.
	pub fn field(&self, name: &str) -> Option<&ParserNode> {
		self.fields()?.iter().find(|field| field.name.as_ref() == name).map(|field| &field.node)
	}

	/// Whether the node is the padding filler (possibly an array of it).
	pub fn is_padding(&self) -> bool {
		matches!(self.kind, NodeKind::Primitive(Primitive::Padding))
	}

	pub(crate) fn is_char(&self) -> bool {
		matches!(self.kind, NodeKind::Primitive(Primitive::Char))
	}

	/// Number of elements described by the dims (1 for scalars).
	pub fn element_count(&self) -> Result<usize> {
		self.dims
			.iter()
			.try_fold(1_usize, |acc, dim| acc.checked_mul(*dim))
			.ok_or_else(|| self.too_large())
	}

	/// Total byte size at `bit_width`, computed without building the code list.
	pub fn byte_size(&self, bit_width: BitWidth) -> Result<usize> {
		if let Some(layout) = self.layouts[bit_width.slot()].get() {
			return Ok(layout.size);
		}

		let element = match &self.kind {
			NodeKind::Pointer { .. } => bit_width.pointer_size(),
			NodeKind::Primitive(primitive) => primitive.size(bit_width),
			NodeKind::Struct(fields) => fields.iter().try_fold(0_usize, |acc, field| {
				let size = field.node.byte_size(bit_width)?;
				acc.checked_add(size).ok_or_else(|| self.too_large())
			})?,
		};
		element.checked_mul(self.element_count()?).ok_or_else(|| self.too_large())
	}

	/// Flat packed layout at `bit_width`; memoized per bit width.
	pub fn layout(&self, bit_width: BitWidth) -> Result<&Layout> {
		let cell = &self.layouts[bit_width.slot()];
		if let Some(layout) = cell.get() {
			return Ok(layout);
		}

		let size = self.byte_size(bit_width)?;
		let mut codes = Vec::new();
		match &self.kind {
			NodeKind::Pointer { .. } => codes.push(Primitive::Pointer.wire_code(bit_width)),
			NodeKind::Primitive(primitive) => codes.push(primitive.wire_code(bit_width)),
			NodeKind::Struct(fields) => {
				for field in fields {
					let field_codes = &field.node.layout(bit_width)?.codes;
					codes.try_reserve(field_codes.len()).map_err(|_| self.too_large())?;
					codes.extend_from_slice(field_codes);
				}
			}
		}

		let count = self.element_count()?;
		if count > 1 {
			let element = codes.len();
			let extra = element.checked_mul(count - 1).ok_or_else(|| self.too_large())?;
			codes.try_reserve_exact(extra).map_err(|_| self.too_large())?;
			for _ in 1..count {
				codes.extend_from_within(..element);
			}
		}

		Ok(cell.get_or_init(|| Layout { codes, size }))
	}

	pub(crate) fn annotate(&self, value: Value) -> StructData {
		StructData {
			value,
			format: self.format,
			labels: self.labels.clone(),
		}
	}

	fn too_large(&self) -> NisinError {
		NisinError::LayoutTooLarge {
			type_name: self.type_name.to_string(),
		}
	}
}

#[cfg(test)]
mod tests;
