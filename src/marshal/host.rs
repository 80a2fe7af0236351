use crate::marshal::{MarshalError, Node, NodeField, Result};

/// One value at the host scripting boundary.
///
/// This is the crate's representation of what a host table walk yields;
/// the concrete runtime's stack and reference-counting conventions stay
/// outside the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
	/// Host boolean.
	Bool(bool),
	/// Host integer.
	Int(i64),
	/// Host floating-point number.
	Num(f64),
	/// Host string.
	Str(String),
	/// Host table, entries in insertion order.
	Table(Vec<(HostKey, HostValue)>),
}

/// One table key at the host boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum HostKey {
	/// Named entry (message field style).
	Name(String),
	/// Positional entry (repeated list style, conventionally 1-based).
	Index(i64),
}

/// Convert a host table into a value tree.
///
/// Only succeeds on a table. A table whose keys are all names builds a
/// [`Node::Map`]; a table whose keys are all indices builds a
/// [`Node::List`] in entry order; mixing the two in one table fails. Any
/// empty key name or failing entry aborts the whole build.
pub fn build_tree(value: &HostValue) -> Result<Node> {
	match value {
		HostValue::Table(entries) => build_table(entries),
		_ => Err(MarshalError::MalformedHostValue {
			reason: "top-level host value must be a table".to_owned(),
		}),
	}
}

fn build_table(entries: &[(HostKey, HostValue)]) -> Result<Node> {
	let named = entries.iter().filter(|(key, _)| matches!(key, HostKey::Name(_))).count();
	if named > 0 && named < entries.len() {
		return Err(MarshalError::MalformedHostValue {
			reason: "table mixes named and indexed keys".to_owned(),
		});
	}

	if named == 0 && !entries.is_empty() {
		let mut items = Vec::with_capacity(entries.len());
		for (_, value) in entries {
			items.push(build_entry(value)?);
		}
		return Ok(Node::List(items));
	}

	let mut fields = Vec::with_capacity(entries.len());
	for (key, value) in entries {
		let HostKey::Name(name) = key else {
			continue;
		};
		if name.is_empty() {
			return Err(MarshalError::MalformedHostValue {
				reason: "table key is not a non-empty name".to_owned(),
			});
		}
		fields.push(NodeField {
			name: name.clone(),
			node: build_entry(value)?,
		});
	}
	Ok(Node::Map(fields))
}

fn build_entry(value: &HostValue) -> Result<Node> {
	match value {
		HostValue::Table(entries) => build_table(entries),
		HostValue::Bool(v) => Ok(Node::Scalar(if *v { "true".to_owned() } else { "false".to_owned() })),
		HostValue::Int(v) => Ok(Node::Scalar(v.to_string())),
		HostValue::Num(v) => Ok(Node::Scalar(v.to_string())),
		HostValue::Str(v) => Ok(Node::Scalar(v.clone())),
	}
}
