use std::path::PathBuf;

use prost_reflect::{Cardinality, Kind};
use protobridge::marshal::{Result, Schema};

use crate::cmd::util::emit_json;

#[derive(serde::Serialize)]
struct MessageJson {
	message: String,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	number: u32,
	cardinality: &'static str,
	kind: String,
}

/// List message types, or print one type's field layout.
pub fn run(set: PathBuf, message: Option<String>, json: bool) -> Result<()> {
	let schema = Schema::load(&set)?;

	let Some(name) = message else {
		for desc in schema.messages() {
			println!("{}", desc.full_name());
		}
		return Ok(());
	};

	let desc = schema.require_message(&name)?;
	let fields: Vec<FieldJson> = desc
		.fields()
		.map(|field| FieldJson {
			name: field.name().to_owned(),
			number: field.number(),
			cardinality: cardinality_label(field.cardinality()),
			kind: kind_label(&field.kind()),
		})
		.collect();

	if json {
		emit_json(&MessageJson {
			message: desc.full_name().to_owned(),
			fields,
		});
		return Ok(());
	}

	println!("message: {}", desc.full_name());
	println!("field_count: {}", fields.len());
	for field in &fields {
		println!("  {} {} {} = {}", field.cardinality, field.kind, field.name, field.number);
	}
	Ok(())
}

fn cardinality_label(cardinality: Cardinality) -> &'static str {
	match cardinality {
		Cardinality::Required => "required",
		Cardinality::Optional => "optional",
		Cardinality::Repeated => "repeated",
	}
}

fn kind_label(kind: &Kind) -> String {
	match kind {
		Kind::Double => "double".to_owned(),
		Kind::Float => "float".to_owned(),
		Kind::Int32 => "int32".to_owned(),
		Kind::Int64 => "int64".to_owned(),
		Kind::Uint32 => "uint32".to_owned(),
		Kind::Uint64 => "uint64".to_owned(),
		Kind::Sint32 => "sint32".to_owned(),
		Kind::Sint64 => "sint64".to_owned(),
		Kind::Fixed32 => "fixed32".to_owned(),
		Kind::Fixed64 => "fixed64".to_owned(),
		Kind::Sfixed32 => "sfixed32".to_owned(),
		Kind::Sfixed64 => "sfixed64".to_owned(),
		Kind::Bool => "bool".to_owned(),
		Kind::String => "string".to_owned(),
		Kind::Bytes => "bytes".to_owned(),
		Kind::Message(desc) => desc.full_name().to_owned(),
		Kind::Enum(desc) => desc.full_name().to_owned(),
	}
}
