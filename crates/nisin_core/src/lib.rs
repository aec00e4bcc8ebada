//! Schema-driven decoding of packed C-style binary structs.
//!
//! A [`codec::Schema`] maps type names to aliases or ordered field lists. [`codec::compile`]
//! turns one target into a reusable [`codec::ParserNode`], which decodes byte buffers
//! into [`codec::StructData`] trees for text or JSON rendering.

/// Schema model, compiler, decoder, and renderers.
pub mod codec;
