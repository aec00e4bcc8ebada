use nisin::codec::{BitWidth, Schema, ShowOptions, compile};
use serde::Serialize;

use crate::cmd::util::emit_json;
use crate::error::CliError;

#[derive(Serialize)]
struct LayoutView<'a> {
	type_name: &'a str,
	bit_width: u32,
	size: usize,
	format: String,
	declaration: String,
}

/// Print the compiled declaration of `type_name`, optionally with its layout.
pub fn run(schema: &Schema, type_name: &str, bit_width: BitWidth, show: ShowOptions, verbose: bool, json: bool) -> Result<(), CliError> {
	let node = compile(schema, type_name)?;
	let layout = node.layout(bit_width)?;

	if json {
		return emit_json(&LayoutView {
			type_name,
			bit_width: bit_width.bits(),
			size: layout.size,
			format: layout.format_string(),
			declaration: node.show_with(&show),
		});
	}

	println!("{}", node.show_with(&show));
	if verbose {
		println!("bit_width: {}", bit_width.bits());
		println!("size: {}", layout.size);
		println!("format: {}", layout.format_string());
	}
	Ok(())
}
