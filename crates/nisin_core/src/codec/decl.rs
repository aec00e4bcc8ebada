use crate::codec::{NisinError, Result};

/// Parsed type spec declarator such as `Node *` or `u8[4][2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
	/// Base type name with internal whitespace collapsed (`unsigned int`).
	pub base: String,
	/// Pointer nesting depth (`*`, `**`, ...).
	pub ptr_depth: u32,
	/// Array dimensions, outermost first.
	pub dims: Vec<usize>,
}

impl TypeSpec {
	/// Whether the spec declares a pointer.
	pub fn is_pointer(&self) -> bool {
		self.ptr_depth > 0
	}
}

/// Parse type spec text into base name, pointer depth, and array dims.
pub fn parse_type_spec(raw: &str) -> Result<TypeSpec> {
	let trimmed = raw.trim();
	let malformed = |reason: &'static str| NisinError::MalformedTypeSpec {
		spec: raw.to_owned(),
		reason,
	};

	let head_end = trimmed.find('[').unwrap_or(trimmed.len());
	let dims = parse_dims(&trimmed[head_end..]).map_err(malformed)?;

	let head = trimmed[..head_end].trim_end();
	let base_end = head.trim_end_matches(|c: char| c == '*' || c.is_whitespace()).len();
	let ptr_depth = head[base_end..].chars().filter(|c| *c == '*').count();
	let ptr_depth = u32::try_from(ptr_depth).map_err(|_| malformed("too many pointer levels"))?;

	let base = &head[..base_end];
	if base.is_empty() {
		return Err(malformed("missing base type name"));
	}
	if base.contains('*') {
		return Err(malformed("pointer stars must follow the base name"));
	}
	if base.contains(']') {
		return Err(malformed("unbalanced bracket"));
	}

	Ok(TypeSpec {
		base: base.split_whitespace().collect::<Vec<_>>().join(" "),
		ptr_depth,
		dims,
	})
}

fn parse_dims(mut tail: &str) -> std::result::Result<Vec<usize>, &'static str> {
	let mut dims = Vec::new();
	loop {
		tail = tail.trim_start();
		if tail.is_empty() {
			return Ok(dims);
		}
		let Some(rest) = tail.strip_prefix('[') else {
			return Err("unexpected text after array dimensions");
		};
		let Some(end) = rest.find(']') else {
			return Err("unterminated array dimension");
		};
		let dim = rest[..end].trim().parse::<usize>().map_err(|_| "array dimension is not a positive integer")?;
		if dim == 0 {
			return Err("array dimension is not a positive integer");
		}
		dims.push(dim);
		tail = &rest[end + 1..];
	}
}
