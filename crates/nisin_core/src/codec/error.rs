use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NisinError>;

/// Errors produced while compiling schemas and decoding buffers.
#[derive(Debug, Error)]
pub enum NisinError {
	/// Selected or referenced type is not defined in the schema.
	#[error("unknown type: {name}")]
	UnknownType {
		/// Requested type name.
		name: String,
	},
	/// Alias chain revisited a name before reaching a concrete type.
	#[error("cyclic alias: {chain}")]
	CyclicAlias {
		/// Visited names joined with ` -> `, ending with the repeated name.
		chain: String,
	},
	/// Struct contains itself by value.
	#[error("recursive type {name} would have infinite size")]
	RecursiveType {
		/// Struct type name found again while it was still being compiled.
		name: String,
	},
	/// Field specification did not have exactly one `name: type` entry.
	#[error("struct {struct_name}: fields must have one entry, got {count} ({keys})")]
	TooManyOrFewKeys {
		/// Struct being compiled.
		struct_name: String,
		/// Number of entries found.
		count: usize,
		/// Entry names joined with `, `.
		keys: String,
	},
	/// Field name declared twice in one struct.
	#[error("struct {struct_name}: duplicate field {field}")]
	DuplicateField {
		/// Struct being compiled.
		struct_name: String,
		/// Repeated field name.
		field: String,
	},
	/// Field record specified both `labels` and `flags`.
	#[error("struct {struct_name}: field {field} has both labels and flags")]
	ConflictingLabelSpec {
		/// Struct being compiled.
		struct_name: String,
		/// Offending field name.
		field: String,
	},
	/// Type spec text could not be parsed.
	#[error("malformed type spec {spec:?}: {reason}")]
	MalformedTypeSpec {
		/// Original type spec text.
		spec: String,
		/// What was wrong with it.
		reason: &'static str,
	},
	/// Display format hint could not be parsed.
	#[error("invalid format spec {spec:?}: {reason}")]
	InvalidFormatSpec {
		/// Original format spec text.
		spec: String,
		/// What was wrong with it.
		reason: &'static str,
	},
	/// Byte order name was neither `little` nor `big`.
	#[error("unsupported endianness {value:?} (expected little or big)")]
	UnsupportedEndianness {
		/// User-provided byte order name.
		value: String,
	},
	/// Target bit width was neither 32 nor 64.
	#[error("unsupported bit width {bits} (expected 32 or 64)")]
	UnsupportedBitWidth {
		/// User-provided bit width.
		bits: u32,
	},
	/// Buffer ended before the layout was fully read.
	#[error("truncated buffer at offset {offset}: need {need} bytes, have {have}")]
	TruncatedBuffer {
		/// Byte offset where the read was attempted.
		offset: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes available from `offset`.
		have: usize,
	},
	/// Layout size or element count overflowed.
	#[error("layout of {type_name} is too large")]
	LayoutTooLarge {
		/// Type whose layout overflowed.
		type_name: String,
	},
	/// Unpacked scalars did not line up with the node tree.
	#[error("decode layout mismatch in {type_name}: expected {expected} values, got {got}")]
	LayoutMismatch {
		/// Root type being decoded.
		type_name: String,
		/// Scalars the tree walk consumed.
		expected: usize,
		/// Scalars produced by unpacking.
		got: usize,
	},
}
