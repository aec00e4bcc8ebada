#![allow(missing_docs)]

use std::path::PathBuf;

use clap::Parser;
use nisin::codec::{BitWidth, DecodeOptions, Endianness, ShowOptions};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::CliError;

mod cmd;
mod error;
mod loader;

#[derive(Parser)]
#[command(name = "nisin", about = "Decode packed C structs described by YAML schemas")]
struct Cli {
	/// YAML schema files, merged in order.
	#[arg(short = 'y', long = "yaml", alias = "yaml-files", required = true, num_args = 1..)]
	yaml: Vec<PathBuf>,
	/// Type to show or decode; lists the schema when omitted.
	#[arg(short = 's', long = "struct", alias = "select")]
	struct_name: Option<String>,
	/// Also print layout size and format.
	#[arg(short, long)]
	verbose: bool,
	/// Binary input to decode; `-` reads stdin.
	#[arg(short = 'b', long = "binary")]
	binary: Option<PathBuf>,
	/// Pointer and size_t width in bits (32 or 64).
	#[arg(long = "bit", default_value_t = 64)]
	bit: u32,
	/// Byte order (little or big).
	#[arg(short = 'e', long = "endian", default_value = "little")]
	endian: String,
	/// Byte offset into the input; decimal or 0x-prefixed.
	#[arg(short = 'o', long = "offset", default_value = "0", value_parser = cmd::util::parse_offset)]
	offset: usize,
	/// Emit JSON instead of text.
	#[arg(long)]
	json: bool,
	/// Use C spellings for primitive names in declarations.
	#[arg(long)]
	long_names: bool,
	/// Spaces per nesting level in text output.
	#[arg(long, default_value_t = 2)]
	indent: usize,
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(filter)
		.init();
}

fn run() -> Result<(), CliError> {
	let cli = Cli::parse();
	let schema = loader::load_schema_files(&cli.yaml)?;

	let Some(type_name) = cli.struct_name.as_deref() else {
		return cmd::list::run(&schema, cli.json);
	};

	let bit_width = BitWidth::from_bits(cli.bit)?;
	let show = ShowOptions {
		indent_step: cli.indent,
		use_short_names: !cli.long_names,
	};

	match &cli.binary {
		None => cmd::layout::run(&schema, type_name, bit_width, show, cli.verbose, cli.json),
		Some(input) => {
			let options = DecodeOptions {
				bit_width,
				endianness: cli.endian.parse::<Endianness>()?,
				offset: cli.offset,
			};
			cmd::decode::run(&schema, type_name, input, &options, show, cli.json)
		}
	}
}
