use std::collections::BTreeMap;

/// How a label table matches scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
	/// Exact value match (enum-style).
	Plain,
	/// Exact match, else composition of single-bit names (bitmask-style).
	Flags,
}

/// Numeric value to symbolic name mapping attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
	mode: LabelMode,
	entries: BTreeMap<i128, Box<str>>,
}

impl LabelTable {
	/// Build a table from `(value, name)` pairs; later duplicates win.
	pub fn new<I, S>(mode: LabelMode, entries: I) -> Self
	where
		I: IntoIterator<Item = (i128, S)>,
		S: Into<Box<str>>,
	{
		Self {
			mode,
			entries: entries.into_iter().map(|(value, name)| (value, name.into())).collect(),
		}
	}

	/// Plain (enum-style) table.
	pub fn plain<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = (i128, S)>,
		S: Into<Box<str>>,
	{
		Self::new(LabelMode::Plain, entries)
	}

	/// Flag (bitmask-style) table.
	pub fn flags<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = (i128, S)>,
		S: Into<Box<str>>,
	{
		Self::new(LabelMode::Flags, entries)
	}

	/// Matching mode.
	pub fn mode(&self) -> LabelMode {
		self.mode
	}

	/// Number of named values.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the table has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in ascending value order.
	pub fn iter(&self) -> impl Iterator<Item = (i128, &str)> {
		self.entries.iter().map(|(value, name)| (*value, name.as_ref()))
	}

	/// Symbolic text for `value`, or `None` when the table has no match.
	pub fn label(&self, value: i128) -> Option<String> {
		if let Some(name) = self.entries.get(&value) {
			return Some(name.to_string());
		}
		match self.mode {
			LabelMode::Plain => None,
			LabelMode::Flags => self.compose_flags(value),
		}
	}

	fn compose_flags(&self, value: i128) -> Option<String> {
		if value <= 0 {
			return None;
		}

		let mut covered = 0_i128;
		let mut names = Vec::new();
		for (bit, name) in self.entries.range(1..) {
			if bit.count_ones() == 1 && value & bit != 0 {
				covered |= bit;
				names.push(name.as_ref());
			}
		}

		if covered != value {
			return None;
		}
		Some(names.join("|"))
	}
}
