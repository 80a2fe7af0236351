use std::fmt::Display;
use std::str::FromStr;

use prost::bytes::Bytes;
use prost_reflect::{Cardinality, DynamicMessage, EnumDescriptor, FieldDescriptor, MessageDescriptor, Value};

use crate::marshal::kind::{FieldKind, LeafKind, classify};
use crate::marshal::{HostValue, MarshalError, Node, NodeField, Result, Schema, build_tree};

/// Materialize a typed message from a value tree.
///
/// Resolves `type_name` in the pool, then fills every field in descriptor
/// order from the first matching map entry. Any hard failure in any field,
/// at any nesting depth, aborts the whole call; partially-built state
/// never escapes.
pub fn materialize(schema: &Schema, type_name: &str, tree: &Node) -> Result<DynamicMessage> {
	let desc = schema.require_message(type_name)?;
	let Node::Map(entries) = tree else {
		return Err(MarshalError::MalformedHostValue {
			reason: format!("input for {type_name} must be a map of fields"),
		});
	};
	fill_message(&desc, entries)
}

/// Materialize straight from a host table: build the tree, then fill.
pub fn materialize_host(schema: &Schema, type_name: &str, host: &HostValue) -> Result<DynamicMessage> {
	let tree = build_tree(host)?;
	materialize(schema, type_name, &tree)
}

fn fill_message(desc: &MessageDescriptor, entries: &[NodeField]) -> Result<DynamicMessage> {
	let mut message = DynamicMessage::new(desc.clone());
	for field in desc.fields() {
		let candidate = entries.iter().find(|entry| entry.name == field.name()).map(|entry| &entry.node);
		fill_field(desc, &mut message, &field, candidate)?;
	}
	Ok(message)
}

fn fill_field(desc: &MessageDescriptor, message: &mut DynamicMessage, field: &FieldDescriptor, candidate: Option<&Node>) -> Result<()> {
	let kind = classify(field.kind());
	if field.is_list() {
		return fill_repeated(desc, message, field, &kind, candidate);
	}

	match &kind {
		FieldKind::Message(nested) => fill_submessage(desc, message, field, nested, candidate),
		FieldKind::Leaf(leaf) => {
			let value = leaf_value(field, leaf, candidate)?;
			message.set_field(field, value);
			Ok(())
		}
	}
}

fn fill_submessage(
	desc: &MessageDescriptor,
	message: &mut DynamicMessage,
	field: &FieldDescriptor,
	nested: &MessageDescriptor,
	candidate: Option<&Node>,
) -> Result<()> {
	if let Some(Node::Map(entries)) = candidate {
		if !entries.is_empty() {
			// Built locally; attached to the parent only once the whole
			// nested fill succeeded.
			let sub = fill_message(nested, entries)?;
			message.set_field(field, Value::Message(sub));
			return Ok(());
		}
	}

	// Nested messages never carry schema defaults, so absence is either a
	// hard failure (required) or a silent skip.
	if field.cardinality() == Cardinality::Required {
		return Err(MarshalError::MissingRequiredMessage {
			type_name: desc.full_name().to_owned(),
			field: field.name().to_owned(),
		});
	}
	Ok(())
}

fn fill_repeated(
	desc: &MessageDescriptor,
	message: &mut DynamicMessage,
	field: &FieldDescriptor,
	kind: &FieldKind,
	candidate: Option<&Node>,
) -> Result<()> {
	let Some(node) = candidate else {
		return Ok(());
	};
	let Node::List(items) = node else {
		return Err(MarshalError::MalformedHostValue {
			reason: format!("repeated field `{}` of {} expects a list", field.name(), desc.full_name()),
		});
	};

	let mut values = Vec::with_capacity(items.len());
	match kind {
		FieldKind::Message(nested) => {
			for item in items {
				// Items that are not non-empty maps are skipped rather than
				// failing the fill.
				if let Node::Map(entries) = item {
					if !entries.is_empty() {
						values.push(Value::Message(fill_message(nested, entries)?));
					}
				}
			}
		}
		FieldKind::Leaf(leaf) => {
			for item in items {
				values.push(leaf_value(field, leaf, Some(item))?);
			}
		}
	}

	if !values.is_empty() {
		message.set_field(field, Value::List(values));
	}
	Ok(())
}

fn leaf_value(field: &FieldDescriptor, kind: &LeafKind, candidate: Option<&Node>) -> Result<Value> {
	match kind {
		LeafKind::Int32 => Ok(Value::I32(numeric_value(field, candidate))),
		LeafKind::Int64 => Ok(Value::I64(numeric_value(field, candidate))),
		LeafKind::Uint32 => Ok(Value::U32(numeric_value(field, candidate))),
		LeafKind::Uint64 => Ok(Value::U64(numeric_value(field, candidate))),
		LeafKind::Float32 => Ok(Value::F32(numeric_value(field, candidate))),
		LeafKind::Float64 => Ok(Value::F64(numeric_value(field, candidate))),
		LeafKind::Bool => bool_value(field, candidate),
		LeafKind::Str => Ok(Value::String(text_value(field, candidate))),
		LeafKind::Bytes => Ok(Value::Bytes(Bytes::from(text_value(field, candidate).into_bytes()))),
		LeafKind::Enum(desc) => enum_value(field, desc, candidate),
	}
}

fn numeric_value<T: FromStr + Default + Display>(field: &FieldDescriptor, candidate: Option<&Node>) -> T {
	if let Some(text) = candidate.and_then(Node::as_scalar) {
		if !text.is_empty() {
			return lenient_parse(field.name(), text);
		}
	}

	let declared = declared_default(field);
	let value: T = match declared {
		Some(text) => lenient_parse(field.name(), text),
		None => T::default(),
	};
	log_default(field, declared.is_some(), &value);
	value
}

fn bool_value(field: &FieldDescriptor, candidate: Option<&Node>) -> Result<Value> {
	if let Some(text) = candidate.and_then(Node::as_scalar) {
		if !text.is_empty() {
			return match text {
				"true" => Ok(Value::Bool(true)),
				"false" => Ok(Value::Bool(false)),
				_ => Err(MarshalError::InvalidBooleanLiteral {
					field: field.name().to_owned(),
					text: text.to_owned(),
				}),
			};
		}
	}

	let declared = declared_default(field);
	let value = declared == Some("true");
	log_default(field, declared.is_some(), &value);
	Ok(Value::Bool(value))
}

fn text_value(field: &FieldDescriptor, candidate: Option<&Node>) -> String {
	// A present scalar is taken verbatim, even when empty.
	if let Some(text) = candidate.and_then(Node::as_scalar) {
		return text.to_owned();
	}

	let declared = declared_default(field);
	let value = declared.unwrap_or("").to_owned();
	log_default(field, declared.is_some(), &format_args!("{value:?}"));
	value
}

fn enum_value(field: &FieldDescriptor, desc: &EnumDescriptor, candidate: Option<&Node>) -> Result<Value> {
	if let Some(text) = candidate.and_then(Node::as_scalar) {
		if !text.is_empty() {
			let number: i32 = lenient_parse(field.name(), text);
			let value = desc.get_value(number).ok_or_else(|| MarshalError::UnknownEnumValue {
				field: field.name().to_owned(),
				enum_name: desc.full_name().to_owned(),
				number,
			})?;
			return Ok(Value::EnumNumber(value.number()));
		}
	}

	// Schema default for an enum field is a value's declared name. Unlike
	// the other leaf kinds there is no zero to fall back to: an absent
	// candidate with no declared default is a hard failure regardless of
	// cardinality.
	let value = declared_default(field).and_then(|name| desc.get_value_by_name(name));
	let Some(value) = value else {
		return Err(MarshalError::MissingRequiredDefault {
			field: field.name().to_owned(),
		});
	};
	log_default(field, true, &value.number());
	Ok(Value::EnumNumber(value.number()))
}

fn declared_default(field: &FieldDescriptor) -> Option<&str> {
	field.field_descriptor_proto().default_value.as_deref()
}

fn log_default(field: &FieldDescriptor, declared: bool, value: &dyn Display) {
	let origin = if declared { "declared default" } else { "zero" };
	if field.cardinality() == Cardinality::Required {
		log::warn!("field `{}` is required, substituting {origin} value {value}", field.name());
	} else {
		log::debug!("field `{}` has no value, substituting {origin} value {value}", field.name());
	}
}

/// `sscanf`-style numeric parsing: a full parse wins, then the longest
/// parseable prefix, then zero. Degrading to zero is deliberately not an
/// error, but it is surfaced as a warning diagnostic.
fn lenient_parse<T: FromStr + Default>(field_name: &str, text: &str) -> T {
	let trimmed = text.trim();
	if let Ok(value) = trimmed.parse::<T>() {
		return value;
	}

	for end in (1..trimmed.len()).rev() {
		if !trimmed.is_char_boundary(end) {
			continue;
		}
		if let Ok(value) = trimmed[..end].parse::<T>() {
			log::debug!("field `{field_name}`: numeric text {text:?} parsed as leading prefix");
			return value;
		}
	}

	log::warn!("field `{field_name}`: unparseable numeric text {text:?}, substituting zero");
	T::default()
}
