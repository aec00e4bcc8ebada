use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::CliError;
use crate::loader::parse_int;

/// Parse a non-negative decimal or `0x`-prefixed offset.
pub(crate) fn parse_offset(value: &str) -> Result<usize, String> {
	parse_int(value)
		.and_then(|parsed| usize::try_from(parsed).ok())
		.ok_or_else(|| format!("invalid offset {value:?}"))
}

/// Read a whole input file, or stdin for `-`.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
	let io_err = |source| CliError::Io {
		path: path.to_path_buf(),
		source,
	};

	if path == Path::new("-") {
		let mut buf = Vec::new();
		std::io::stdin().lock().read_to_end(&mut buf).map_err(io_err)?;
		return Ok(buf);
	}
	std::fs::read(path).map_err(io_err)
}

/// Print a pretty JSON document to stdout.
pub(crate) fn emit_json<T: Serialize + ?Sized>(payload: &T) -> Result<(), CliError> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
