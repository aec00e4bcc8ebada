use std::collections::HashMap;

/// Type spec of one field: a bare type spec string or a record with display options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
	/// Bare type spec such as `u32[4]`.
	Spec(String),
	/// Record form with optional format and labels.
	Record(FieldRecord),
}

impl From<&str> for FieldType {
	fn from(value: &str) -> Self {
		Self::Spec(value.to_owned())
	}
}

impl From<String> for FieldType {
	fn from(value: String) -> Self {
		Self::Spec(value)
	}
}

impl From<FieldRecord> for FieldType {
	fn from(value: FieldRecord) -> Self {
		Self::Record(value)
	}
}

impl FieldType {
	/// Type spec text regardless of form.
	pub fn spec(&self) -> &str {
		match self {
			Self::Spec(spec) => spec,
			Self::Record(record) => &record.ty,
		}
	}
}

/// Record-form field type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRecord {
	/// Type spec text.
	pub ty: String,
	/// Display format hint.
	pub format: Option<String>,
	/// Enum-style labels.
	pub labels: Option<Vec<(i128, String)>>,
	/// Bitmask-style labels.
	pub flags: Option<Vec<(i128, String)>>,
}

impl FieldRecord {
	/// Record with only a type spec.
	pub fn new(ty: impl Into<String>) -> Self {
		Self {
			ty: ty.into(),
			..Self::default()
		}
	}

	/// Attach a display format hint.
	pub fn with_format(mut self, format: impl Into<String>) -> Self {
		self.format = Some(format.into());
		self
	}

	/// Attach enum-style labels.
	pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = (i128, S)>) -> Self {
		self.labels = Some(labels.into_iter().map(|(value, name)| (value, name.into())).collect());
		self
	}

	/// Attach bitmask-style labels.
	pub fn with_flags<S: Into<String>>(mut self, flags: impl IntoIterator<Item = (i128, S)>) -> Self {
		self.flags = Some(flags.into_iter().map(|(value, name)| (value, name.into())).collect());
		self
	}
}

/// One `{name: type}` entry of a struct definition.
///
/// Well-formed entries hold exactly one pair; the compiler rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
	/// Entry pairs in source order.
	pub pairs: Vec<(String, FieldType)>,
}

impl FieldEntry {
	/// Single-pair entry.
	pub fn new(name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
		Self {
			pairs: vec![(name.into(), ty.into())],
		}
	}
}

/// Definition of one named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
	/// Alias for another type spec (primitive, struct, array, or pointer).
	Alias(String),
	/// Ordered field list.
	Struct(Vec<FieldEntry>),
}

/// Ordered mapping from type name to definition.
#[derive(Debug, Clone, Default)]
pub struct Schema {
	entries: Vec<(String, TypeDef)>,
	index: HashMap<String, usize>,
}

impl Schema {
	/// Empty schema.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or replace a definition; replacements keep their original position.
	pub fn insert(&mut self, name: impl Into<String>, def: TypeDef) -> Option<TypeDef> {
		let name = name.into();
		if let Some(&idx) = self.index.get(&name) {
			return Some(std::mem::replace(&mut self.entries[idx].1, def));
		}
		self.index.insert(name.clone(), self.entries.len());
		self.entries.push((name, def));
		None
	}

	/// Builder-style alias insert.
	pub fn with_alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
		self.insert(name, TypeDef::Alias(target.into()));
		self
	}

	/// Builder-style struct insert.
	pub fn with_struct(mut self, name: impl Into<String>, fields: Vec<FieldEntry>) -> Self {
		self.insert(name, TypeDef::Struct(fields));
		self
	}

	/// Merge `other` into `self`; definitions from `other` win.
	pub fn merge(&mut self, other: Schema) {
		for (name, def) in other.entries {
			self.insert(name, def);
		}
	}

	/// Look up a definition by name.
	pub fn get(&self, name: &str) -> Option<&TypeDef> {
		self.index.get(name).map(|&idx| &self.entries[idx].1)
	}

	/// Whether `name` is defined.
	pub fn contains(&self, name: &str) -> bool {
		self.index.contains_key(name)
	}

	/// Definitions in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDef)> {
		self.entries.iter().map(|(name, def)| (name.as_str(), def))
	}

	/// Number of definitions.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the schema has no definitions.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
