use std::sync::Arc;

use tracing::{debug, trace};

use crate::codec::{
	BitWidth, DisplayFormat, FieldEntry, FieldNode, FieldRecord, FieldType, LabelTable, NisinError, ParserNode, Primitive, Result, Schema, TypeDef,
	TypeSpec, parse_type_spec,
};

/// Compile `target` from `schema` into a reusable parser node tree.
///
/// Aliases are followed until a primitive, pointer, or struct is reached;
/// array dims collected along the way wrap the result outermost first.
pub fn compile(schema: &Schema, target: &str) -> Result<ParserNode> {
	let mut compiler = Compiler {
		schema,
		in_progress: Vec::new(),
	};
	let node = compiler.compile_named(target)?;

	// Widest layout first; the 32-bit one can only be smaller.
	let size = node.byte_size(BitWidth::B64)?;
	debug!(type_name = target, size, "compiled type");
	Ok(node)
}

struct Compiler<'a> {
	schema: &'a Schema,
	in_progress: Vec<String>,
}

impl Compiler<'_> {
	fn compile_named(&mut self, name: &str) -> Result<ParserNode> {
		let schema = self.schema;
		let mut visited: Vec<String> = Vec::new();
		let mut dims = Vec::new();
		let mut current = name.to_owned();

		loop {
			if visited.contains(&current) {
				visited.push(current);
				return Err(NisinError::CyclicAlias { chain: visited.join(" -> ") });
			}
			let def = schema.get(&current).ok_or_else(|| NisinError::UnknownType { name: current.clone() })?;

			match def {
				TypeDef::Struct(entries) => {
					let node = self.compile_struct(&current, entries)?;
					return Ok(node.with_outer_dims(dims));
				}
				TypeDef::Alias(text) => {
					let spec = parse_type_spec(text)?;
					trace!(alias = %current, resolves_to = %text, "following alias");
					dims.extend_from_slice(&spec.dims);
					if let Some(node) = scalar_node(&spec) {
						return Ok(node.with_outer_dims(dims));
					}
					visited.push(std::mem::replace(&mut current, spec.base));
				}
			}
		}
	}

	fn compile_struct(&mut self, name: &str, entries: &[FieldEntry]) -> Result<ParserNode> {
		if self.in_progress.iter().any(|item| item == name) {
			return Err(NisinError::RecursiveType { name: name.to_owned() });
		}

		self.in_progress.push(name.to_owned());
		let fields = self.compile_fields(name, entries);
		self.in_progress.pop();

		let fields = fields?;
		debug!(struct_name = name, fields = fields.len(), "compiled struct");
		Ok(ParserNode::structure(name, fields))
	}

	fn compile_fields(&mut self, struct_name: &str, entries: &[FieldEntry]) -> Result<Vec<FieldNode>> {
		let mut fields: Vec<FieldNode> = Vec::with_capacity(entries.len());
		for entry in entries {
			let [(field_name, field_type)] = entry.pairs.as_slice() else {
				return Err(NisinError::TooManyOrFewKeys {
					struct_name: struct_name.to_owned(),
					count: entry.pairs.len(),
					keys: entry.pairs.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>().join(", "),
				});
			};
			if fields.iter().any(|field| field.name.as_ref() == field_name) {
				return Err(NisinError::DuplicateField {
					struct_name: struct_name.to_owned(),
					field: field_name.clone(),
				});
			}

			let spec = parse_type_spec(field_type.spec())?;
			let node = match scalar_node(&spec) {
				Some(node) => node,
				None => self.compile_named(&spec.base)?,
			};
			let mut node = node.with_outer_dims(spec.dims);

			if let FieldType::Record(record) = field_type {
				apply_record(&mut node, struct_name, field_name, record)?;
			}
			fields.push(FieldNode {
				name: field_name.as_str().into(),
				node,
			});
		}
		Ok(fields)
	}
}

/// Pointer or primitive node for `spec`, ignoring its dims.
fn scalar_node(spec: &TypeSpec) -> Option<ParserNode> {
	if spec.is_pointer() {
		return Some(ParserNode::pointer(&spec.base, spec.ptr_depth));
	}
	Primitive::lookup(&spec.base).map(|primitive| ParserNode::primitive(&spec.base, primitive))
}

fn apply_record(node: &mut ParserNode, struct_name: &str, field_name: &str, record: &FieldRecord) -> Result<()> {
	if let Some(spec) = &record.format {
		node.format = Some(DisplayFormat::parse(spec)?);
	}

	let table = match (&record.labels, &record.flags) {
		(Some(_), Some(_)) => {
			return Err(NisinError::ConflictingLabelSpec {
				struct_name: struct_name.to_owned(),
				field: field_name.to_owned(),
			});
		}
		(Some(labels), None) => Some(LabelTable::plain(labels.iter().map(|(value, name)| (*value, name.as_str())))),
		(None, Some(flags)) => Some(LabelTable::flags(flags.iter().map(|(value, name)| (*value, name.as_str())))),
		(None, None) => None,
	};
	if let Some(table) = table {
		node.labels = Some(Arc::new(table));
	}
	Ok(())
}

#[cfg(test)]
mod tests;
