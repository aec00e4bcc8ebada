use std::fmt::Write as _;

use serde_json::{Map, Value as JsonValue};

use crate::codec::{DisplayFormat, NodeKind, ParserNode, StructData, Value};

/// Text rendering options for declarations and decoded values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
	/// Spaces per nesting level.
	pub indent_step: usize,
	/// Use `u32`-style primitive names instead of C spellings in declarations.
	pub use_short_names: bool,
}

impl Default for ShowOptions {
	fn default() -> Self {
		Self {
			indent_step: 2,
			use_short_names: true,
		}
	}
}

impl ParserNode {
	/// C-like declaration of the compiled type.
	pub fn show(&self) -> String {
		self.show_with(&ShowOptions::default())
	}

	/// C-like declaration with explicit rendering options.
	pub fn show_with(&self, options: &ShowOptions) -> String {
		let mut out = String::new();
		self.write_decl(&mut out, None, 0, options);
		out
	}

	fn write_decl(&self, out: &mut String, name: Option<&str>, depth: usize, options: &ShowOptions) {
		let pad = " ".repeat(depth * options.indent_step);
		let type_name = match self.kind() {
			NodeKind::Primitive(primitive) if options.use_short_names => primitive.short_name(),
			NodeKind::Primitive(primitive) => primitive.name(),
			NodeKind::Pointer { .. } | NodeKind::Struct(_) => self.type_name(),
		};

		let mut line = format!("{pad}{type_name} ");
		if let NodeKind::Pointer { depth } = self.kind() {
			line.extend(std::iter::repeat_n('*', *depth as usize));
		}
		if let Some(name) = name {
			line.push_str(name);
		}
		for dim in self.dims() {
			let _ = write!(line, "[{dim}]");
		}
		out.push_str(line.trim_end());

		if let NodeKind::Struct(fields) = self.kind() {
			out.push_str(" {");
			for field in fields {
				out.push('\n');
				field.node.write_decl(out, Some(&*field.name), depth + 1, options);
			}
			out.push('\n');
			out.push_str(&pad);
			out.push('}');
		}
	}
}

impl StructData {
	/// Indented `name: value,` rendering of the decoded tree.
	pub fn show(&self) -> String {
		self.show_with(&ShowOptions::default())
	}

	/// Indented rendering with explicit options.
	pub fn show_with(&self, options: &ShowOptions) -> String {
		let mut out = String::new();
		self.write_data(&mut out, None, 0, options.indent_step);
		out
	}

	fn write_data(&self, out: &mut String, name: Option<&str>, depth: usize, step: usize) {
		let pad = " ".repeat(depth * step);
		out.push_str(&pad);
		if let Some(name) = name {
			out.push_str(name);
			out.push_str(": ");
		}

		match &self.value {
			Value::Struct(item) => {
				out.push('{');
				for field in &item.fields {
					out.push('\n');
					field.value.write_data(out, Some(&*field.name), depth + 1, step);
				}
				out.push('\n');
				out.push_str(&pad);
				out.push('}');
			}
			Value::Array(items) => {
				out.push('[');
				for item in items {
					out.push('\n');
					item.write_data(out, None, depth + 1, step);
				}
				out.push('\n');
				out.push_str(&pad);
				out.push(']');
			}
			_ => {
				out.push_str(&self.scalar_text());
				out.push(',');
			}
		}
	}

	/// Display text of a scalar node: label, else the formatted value.
	pub fn scalar_text(&self) -> String {
		if let Some(label) = self.label() {
			return label;
		}

		let format = self.format.as_ref();
		match &self.value {
			Value::Null => "null".to_owned(),
			Value::Bool(v) => match format {
				Some(format) if format.is_numeric() => format.format_int(i128::from(*v)),
				Some(format) => format.format_text(&v.to_string()),
				None => v.to_string(),
			},
			Value::I64(v) => format.unwrap_or(&DisplayFormat::HEX).format_int(i128::from(*v)),
			Value::U64(v) | Value::Ptr(v) => format.unwrap_or(&DisplayFormat::HEX).format_int(i128::from(*v)),
			Value::F32(v) => match format {
				Some(format) => format.format_float(f64::from(*v)),
				None => format!("{v:?}"),
			},
			Value::F64(v) => match format {
				Some(format) => format.format_float(*v),
				None => format!("{v:?}"),
			},
			Value::Char(v) => match format {
				Some(format) if format.is_numeric() => format.format_int(i128::from(*v)),
				Some(format) => format.format_text(&char::from(*v).to_string()),
				None => format!("{:?}", char::from(*v)),
			},
			Value::String(text) => match format {
				Some(format) => format.format_text(text),
				None => text.to_string(),
			},
			Value::Array(_) | Value::Struct(_) => String::new(),
		}
	}

	/// JSON view of the decoded tree; labels replace labelled scalars.
	pub fn to_json_value(&self) -> JsonValue {
		if let Some(label) = self.label() {
			return JsonValue::String(label);
		}

		match &self.value {
			Value::Null => JsonValue::Null,
			Value::Bool(v) => JsonValue::Bool(*v),
			Value::I64(v) => JsonValue::from(*v),
			Value::U64(v) | Value::Ptr(v) => JsonValue::from(*v),
			// Shortest f32 text, so 0.1 stays 0.1 after widening.
			Value::F32(v) => v.to_string().parse::<f64>().map_or(JsonValue::Null, JsonValue::from),
			Value::F64(v) => JsonValue::from(*v),
			Value::Char(v) => JsonValue::String(char::from(*v).to_string()),
			Value::String(text) => JsonValue::String(text.to_string()),
			Value::Array(items) => JsonValue::Array(items.iter().map(Self::to_json_value).collect()),
			Value::Struct(item) => {
				let mut map = Map::new();
				for field in &item.fields {
					map.insert(field.name.to_string(), field.value.to_json_value());
				}
				JsonValue::Object(map)
			}
		}
	}

	/// Compact JSON text of the decoded tree.
	pub fn to_json(&self) -> String {
		self.to_json_value().to_string()
	}
}
