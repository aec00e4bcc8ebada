use std::path::PathBuf;

use nisin::codec::NisinError;
use thiserror::Error;

/// Errors surfaced by the `nisin` command line.
#[derive(Debug, Error)]
pub enum CliError {
	/// Schema compilation or decoding failed.
	#[error(transparent)]
	Codec(#[from] NisinError),
	/// Input file could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		/// File being read; `-` for stdin.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Schema file is not valid YAML.
	#[error("failed to parse {}: {source}", path.display())]
	Yaml {
		/// Schema file path.
		path: PathBuf,
		/// Underlying parser failure.
		source: serde_yaml::Error,
	},
	/// Schema file is valid YAML but not a valid schema.
	#[error("{}: type {type_name}: {reason}", path.display())]
	Schema {
		/// Schema file path.
		path: PathBuf,
		/// Top-level type whose definition is malformed.
		type_name: String,
		/// What was wrong with it.
		reason: String,
	},
	/// JSON output could not be produced.
	#[error("failed to render json: {0}")]
	Json(#[from] serde_json::Error),
}
