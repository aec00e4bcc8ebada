use std::path::Path;

use nisin::codec::{DecodeOptions, Schema, ShowOptions, compile};
use tracing::debug;

use crate::cmd::util::{emit_json, read_input};
use crate::error::CliError;

/// Decode one `type_name` value from `input` and print it.
pub fn run(schema: &Schema, type_name: &str, input: &Path, options: &DecodeOptions, show: ShowOptions, json: bool) -> Result<(), CliError> {
	let node = compile(schema, type_name)?;
	let buf = read_input(input)?;
	debug!(input = %input.display(), len = buf.len(), offset = options.offset, "read input");

	let data = node.decode(&buf, options)?;
	if json {
		return emit_json(&data.to_json_value());
	}

	println!("size: {}", buf.len());
	println!("{}", data.show_with(&show));
	Ok(())
}
