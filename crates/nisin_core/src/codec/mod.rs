mod bytes;
mod compile;
mod decl;
mod decode;
mod error;
mod format;
mod labels;
mod layout;
mod node;
mod primitive;
mod render;
mod schema;
mod value;

pub(crate) use bytes::Cursor;

/// Schema compiler entry point.
pub use compile::compile;
/// Type spec declarator parser.
pub use decl::{TypeSpec, parse_type_spec};
/// Runtime decode options.
pub use decode::DecodeOptions;
/// Error and result aliases.
pub use error::{NisinError, Result};
/// Display format hints.
pub use format::DisplayFormat;
/// Value-to-name label tables.
pub use labels::{LabelMode, LabelTable};
/// Byte order, bit width, and packed layout types.
pub use layout::{BitWidth, Endianness, Layout, WireCode};
/// Compiled parser node tree.
pub use node::{FieldNode, NodeKind, ParserNode};
/// Built-in scalar registry.
pub use primitive::Primitive;
/// Text rendering options.
pub use render::ShowOptions;
/// Schema data model.
pub use schema::{FieldEntry, FieldRecord, FieldType, Schema, TypeDef};
/// Decoded value tree types.
pub use value::{FieldValue, StructData, StructValue, Value};
