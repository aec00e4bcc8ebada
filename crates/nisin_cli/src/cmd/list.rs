use nisin::codec::{FieldEntry, Schema, TypeDef};
use serde::Serialize;

use crate::cmd::util::emit_json;
use crate::error::CliError;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EntryView<'a> {
	Alias { name: &'a str, target: &'a str },
	Struct { name: &'a str, fields: Vec<FieldView<'a>> },
}

#[derive(Serialize)]
struct FieldView<'a> {
	name: &'a str,
	#[serde(rename = "type")]
	ty: &'a str,
}

/// Print every schema type, one per line.
pub fn run(schema: &Schema, json: bool) -> Result<(), CliError> {
	if json {
		let entries: Vec<EntryView<'_>> = schema
			.iter()
			.map(|(name, def)| match def {
				TypeDef::Alias(target) => EntryView::Alias { name, target },
				TypeDef::Struct(entries) => EntryView::Struct {
					name,
					fields: entries.iter().flat_map(field_views).collect(),
				},
			})
			.collect();
		return emit_json(&entries);
	}

	for (name, def) in schema.iter() {
		println!("{}", render_entry(name, def));
	}
	Ok(())
}

/// One-line summary of a schema definition.
pub(crate) fn render_entry(name: &str, def: &TypeDef) -> String {
	match def {
		TypeDef::Alias(target) => format!("{name} = {target}"),
		TypeDef::Struct(entries) => {
			let fields: Vec<String> = entries
				.iter()
				.flat_map(field_views)
				.map(|field| format!("{}: {}", field.name, field.ty))
				.collect();
			if fields.is_empty() {
				format!("{name} {{}}")
			} else {
				format!("{name} {{ {} }}", fields.join(", "))
			}
		}
	}
}

fn field_views(entry: &FieldEntry) -> impl Iterator<Item = FieldView<'_>> {
	entry.pairs.iter().map(|(name, ty)| FieldView { name, ty: ty.spec() })
}
