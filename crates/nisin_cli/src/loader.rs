use std::path::{Path, PathBuf};

use nisin::codec::{FieldEntry, FieldRecord, FieldType, Schema, TypeDef};
use serde_yaml::Value as YamlValue;
use tracing::debug;

use crate::error::CliError;

/// Load and merge schema files in order; later definitions replace earlier ones.
pub fn load_schema_files(paths: &[PathBuf]) -> Result<Schema, CliError> {
	let mut schema = Schema::new();
	for path in paths {
		let text = std::fs::read_to_string(path).map_err(|source| CliError::Io { path: path.clone(), source })?;
		let loaded = parse_schema(path, &text)?;
		debug!(path = %path.display(), types = loaded.len(), "loaded schema file");
		schema.merge(loaded);
	}
	Ok(schema)
}

/// Parse one YAML schema document; `path` is only used in error messages.
pub fn parse_schema(path: &Path, text: &str) -> Result<Schema, CliError> {
	let doc: YamlValue = serde_yaml::from_str(text).map_err(|source| CliError::Yaml {
		path: path.to_path_buf(),
		source,
	})?;

	let shape_err = |type_name: &str, reason: String| CliError::Schema {
		path: path.to_path_buf(),
		type_name: type_name.to_owned(),
		reason,
	};

	let mut schema = Schema::new();
	let root = match doc {
		YamlValue::Null => return Ok(schema),
		YamlValue::Mapping(root) => root,
		other => return Err(shape_err("(top level)", format!("expected a mapping of type names, got {}", kind(&other)))),
	};

	for (key, def) in &root {
		let Some(name) = key.as_str() else {
			return Err(shape_err("(top level)", format!("type name must be a string, got {}", kind(key))));
		};
		let def = parse_type_def(def).map_err(|reason| shape_err(name, reason))?;
		schema.insert(name, def);
	}
	Ok(schema)
}

fn parse_type_def(def: &YamlValue) -> Result<TypeDef, String> {
	match def {
		YamlValue::String(target) => Ok(TypeDef::Alias(target.clone())),
		YamlValue::Sequence(items) => items.iter().map(parse_field_entry).collect::<Result<Vec<_>, _>>().map(TypeDef::Struct),
		other => Err(format!("definition must be an alias string or a field list, got {}", kind(other))),
	}
}

fn parse_field_entry(item: &YamlValue) -> Result<FieldEntry, String> {
	let YamlValue::Mapping(map) = item else {
		return Err(format!("field entry must be a `name: type` mapping, got {}", kind(item)));
	};

	let mut pairs = Vec::with_capacity(map.len());
	for (key, spec) in map {
		let Some(field) = key.as_str() else {
			return Err(format!("field name must be a string, got {}", kind(key)));
		};
		let ty = parse_field_type(spec).map_err(|reason| format!("field {field}: {reason}"))?;
		pairs.push((field.to_owned(), ty));
	}
	Ok(FieldEntry { pairs })
}

fn parse_field_type(spec: &YamlValue) -> Result<FieldType, String> {
	let map = match spec {
		YamlValue::String(text) => return Ok(FieldType::Spec(text.clone())),
		YamlValue::Mapping(map) => map,
		other => return Err(format!("type must be a string or a record, got {}", kind(other))),
	};

	let mut record = FieldRecord::default();
	let mut has_type = false;
	for (key, value) in map {
		match key.as_str() {
			Some("type") => {
				let Some(ty) = value.as_str() else {
					return Err(format!("record `type` must be a string, got {}", kind(value)));
				};
				record.ty = ty.to_owned();
				has_type = true;
			}
			Some("format") => {
				record.format = Some(match value {
					YamlValue::String(text) => text.clone(),
					YamlValue::Number(number) => number.to_string(),
					other => return Err(format!("record `format` must be a string, got {}", kind(other))),
				});
			}
			Some("labels") => record.labels = Some(parse_labels(value)?),
			Some("flags") => record.flags = Some(parse_labels(value)?),
			Some(other) => return Err(format!("unknown record key `{other}`")),
			None => return Err(format!("record keys must be strings, got {}", kind(key))),
		}
	}

	if !has_type {
		return Err("record is missing `type`".to_owned());
	}
	Ok(FieldType::Record(record))
}

fn parse_labels(value: &YamlValue) -> Result<Vec<(i128, String)>, String> {
	let YamlValue::Mapping(map) = value else {
		return Err(format!("labels must be a mapping of value to name, got {}", kind(value)));
	};

	map.iter()
		.map(|(key, name)| {
			let value = label_key(key).ok_or_else(|| match key.as_str() {
				Some(text) => format!("label key {text:?} is not an integer"),
				None => format!("label key must be an integer, got {}", kind(key)),
			})?;
			let name = name.as_str().ok_or_else(|| format!("label for {value} must be a string, got {}", kind(name)))?;
			Ok((value, name.to_owned()))
		})
		.collect()
}

fn label_key(key: &YamlValue) -> Option<i128> {
	match key {
		YamlValue::Number(number) => number.as_i64().map(i128::from).or_else(|| number.as_u64().map(i128::from)),
		YamlValue::String(text) => parse_int(text),
		_ => None,
	}
}

/// Parse a decimal or `0x`/`0o`/`0b`-prefixed integer with optional sign.
pub(crate) fn parse_int(text: &str) -> Option<i128> {
	let text = text.trim();
	let (negative, body) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text.strip_prefix('+').unwrap_or(text)),
	};

	let lower = body.get(..2).map(str::to_ascii_lowercase);
	let (radix, digits) = match lower.as_deref() {
		Some("0x") => (16, &body[2..]),
		Some("0o") => (8, &body[2..]),
		Some("0b") => (2, &body[2..]),
		_ => (10, body),
	};
	if digits.is_empty() || digits.starts_with(['+', '-']) {
		return None;
	}

	let magnitude = i128::from_str_radix(digits, radix).ok()?;
	Some(if negative { -magnitude } else { magnitude })
}

fn kind(value: &YamlValue) -> &'static str {
	match value {
		YamlValue::Null => "null",
		YamlValue::Bool(_) => "a boolean",
		YamlValue::Number(_) => "a number",
		YamlValue::String(_) => "a string",
		YamlValue::Sequence(_) => "a list",
		YamlValue::Mapping(_) => "a mapping",
		YamlValue::Tagged(_) => "a tagged value",
	}
}
