use prost_reflect::{DynamicMessage, FieldDescriptor, ReflectMessage, Value};

use crate::marshal::kind::{FieldKind, LeafKind, classify};
use crate::marshal::{HostKey, HostValue, Node, NodeField, wide_int_text};

/// Extract a message back into a value tree.
///
/// Pure read over reflection, in descriptor order. Scalars become their
/// textual form (enums emit the numeric tag, 64-bit integers always emit
/// decimal text in the tree), repeated fields become lists and are omitted
/// entirely when empty, sub-messages recurse. Extraction is total: reading
/// an existing message cannot fail.
pub fn extract(message: &DynamicMessage) -> Node {
	let desc = message.descriptor();
	let mut fields = Vec::new();
	for field in desc.fields() {
		if let Some(node) = extract_field(message, &field) {
			fields.push(NodeField {
				name: field.name().to_owned(),
				node,
			});
		}
	}
	Node::Map(fields)
}

/// Extract a message into its host delivery form.
///
/// Numbers cross as host numbers, booleans as host booleans, repeated
/// fields as 1-based indexed tables, sub-messages as named tables. This is
/// the point where wide-integer text mode is observable: int64/uint64
/// fields emit decimal text strings when the mode is enabled and native
/// `f64` numbers (lossy above 2^53) when it is not.
pub fn extract_host(message: &DynamicMessage) -> HostValue {
	let desc = message.descriptor();
	let mut entries = Vec::new();
	for field in desc.fields() {
		if let Some(value) = host_field(message, &field) {
			entries.push((HostKey::Name(field.name().to_owned()), value));
		}
	}
	HostValue::Table(entries)
}

fn extract_field(message: &DynamicMessage, field: &FieldDescriptor) -> Option<Node> {
	let kind = classify(field.kind());
	let value = message.get_field(field);

	if field.is_list() {
		let items = value.as_list()?;
		if items.is_empty() {
			return None;
		}
		return Some(Node::List(items.iter().map(|item| item_node(&kind, item)).collect()));
	}

	Some(item_node(&kind, value.as_ref()))
}

fn item_node(kind: &FieldKind, value: &Value) -> Node {
	match kind {
		FieldKind::Message(_) => match value.as_message() {
			Some(sub) => extract(sub),
			None => Node::Map(Vec::new()),
		},
		FieldKind::Leaf(leaf) => Node::Scalar(leaf_text(leaf, value)),
	}
}

fn leaf_text(kind: &LeafKind, value: &Value) -> String {
	match kind {
		LeafKind::Int32 => value.as_i32().unwrap_or_default().to_string(),
		LeafKind::Int64 => value.as_i64().unwrap_or_default().to_string(),
		LeafKind::Uint32 => value.as_u32().unwrap_or_default().to_string(),
		LeafKind::Uint64 => value.as_u64().unwrap_or_default().to_string(),
		LeafKind::Float32 => value.as_f32().unwrap_or_default().to_string(),
		LeafKind::Float64 => value.as_f64().unwrap_or_default().to_string(),
		LeafKind::Bool => if value.as_bool().unwrap_or_default() { "true" } else { "false" }.to_owned(),
		LeafKind::Str => value.as_str().unwrap_or_default().to_owned(),
		LeafKind::Bytes => match value.as_bytes() {
			Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
			None => String::new(),
		},
		LeafKind::Enum(_) => value.as_enum_number().unwrap_or_default().to_string(),
	}
}

fn host_field(message: &DynamicMessage, field: &FieldDescriptor) -> Option<HostValue> {
	let kind = classify(field.kind());
	let value = message.get_field(field);

	if field.is_list() {
		let items = value.as_list()?;
		if items.is_empty() {
			return None;
		}
		let entries = items
			.iter()
			.enumerate()
			.map(|(index, item)| (HostKey::Index(index as i64 + 1), host_item(&kind, item)))
			.collect();
		return Some(HostValue::Table(entries));
	}

	Some(host_item(&kind, value.as_ref()))
}

fn host_item(kind: &FieldKind, value: &Value) -> HostValue {
	match kind {
		FieldKind::Message(_) => match value.as_message() {
			Some(sub) => extract_host(sub),
			None => HostValue::Table(Vec::new()),
		},
		FieldKind::Leaf(leaf) => host_leaf(leaf, value),
	}
}

fn host_leaf(kind: &LeafKind, value: &Value) -> HostValue {
	match kind {
		LeafKind::Int32 => HostValue::Num(f64::from(value.as_i32().unwrap_or_default())),
		LeafKind::Int64 => wide_i64(value.as_i64().unwrap_or_default()),
		LeafKind::Uint32 => HostValue::Num(f64::from(value.as_u32().unwrap_or_default())),
		LeafKind::Uint64 => wide_u64(value.as_u64().unwrap_or_default()),
		LeafKind::Float32 => HostValue::Num(f64::from(value.as_f32().unwrap_or_default())),
		LeafKind::Float64 => HostValue::Num(value.as_f64().unwrap_or_default()),
		LeafKind::Bool => HostValue::Bool(value.as_bool().unwrap_or_default()),
		LeafKind::Str => HostValue::Str(value.as_str().unwrap_or_default().to_owned()),
		LeafKind::Bytes => match value.as_bytes() {
			Some(bytes) => HostValue::Str(String::from_utf8_lossy(bytes).into_owned()),
			None => HostValue::Str(String::new()),
		},
		LeafKind::Enum(_) => HostValue::Num(f64::from(value.as_enum_number().unwrap_or_default())),
	}
}

fn wide_i64(value: i64) -> HostValue {
	if wide_int_text() {
		HostValue::Str(value.to_string())
	} else {
		HostValue::Num(value as f64)
	}
}

fn wide_u64(value: u64) -> HostValue {
	if wide_int_text() {
		HostValue::Str(value.to_string())
	} else {
		HostValue::Num(value as f64)
	}
}
