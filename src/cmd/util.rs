use protobridge::marshal::{HostKey, HostValue, MarshalError, Result};
use serde_json::{Map, Value as JsonValue};

/// Convert parsed JSON into the host-boundary representation: objects
/// become named tables, arrays become 1-based indexed tables.
pub(crate) fn json_to_host(value: &JsonValue) -> Result<HostValue> {
	match value {
		JsonValue::Null => Err(MarshalError::MalformedHostValue {
			reason: "json null has no host representation".to_owned(),
		}),
		JsonValue::Bool(v) => Ok(HostValue::Bool(*v)),
		JsonValue::Number(n) => {
			if let Some(v) = n.as_i64() {
				Ok(HostValue::Int(v))
			} else if let Some(v) = n.as_f64() {
				Ok(HostValue::Num(v))
			} else {
				// u64 above i64::MAX; decimal text survives where f64 would not.
				Ok(HostValue::Str(n.to_string()))
			}
		}
		JsonValue::String(v) => Ok(HostValue::Str(v.clone())),
		JsonValue::Array(items) => {
			let mut entries = Vec::with_capacity(items.len());
			for (index, item) in items.iter().enumerate() {
				entries.push((HostKey::Index(index as i64 + 1), json_to_host(item)?));
			}
			Ok(HostValue::Table(entries))
		}
		JsonValue::Object(fields) => {
			let mut entries = Vec::with_capacity(fields.len());
			for (name, item) in fields {
				entries.push((HostKey::Name(name.clone()), json_to_host(item)?));
			}
			Ok(HostValue::Table(entries))
		}
	}
}

/// Render a host value as JSON: indexed tables become arrays, named
/// tables become objects.
pub(crate) fn host_to_json(value: &HostValue) -> JsonValue {
	match value {
		HostValue::Bool(v) => JsonValue::Bool(*v),
		HostValue::Int(v) => serde_json::json!(v),
		HostValue::Num(v) => serde_json::Number::from_f64(*v).map(JsonValue::Number).unwrap_or_else(|| JsonValue::String(v.to_string())),
		HostValue::Str(v) => JsonValue::String(v.clone()),
		HostValue::Table(entries) => {
			if entries.iter().all(|(key, _)| matches!(key, HostKey::Index(_))) && !entries.is_empty() {
				return JsonValue::Array(entries.iter().map(|(_, item)| host_to_json(item)).collect());
			}
			let mut fields = Map::new();
			for (key, item) in entries {
				let name = match key {
					HostKey::Name(name) => name.clone(),
					HostKey::Index(index) => index.to_string(),
				};
				fields.insert(name, host_to_json(item));
			}
			JsonValue::Object(fields)
		}
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json(payload: &impl serde::Serialize) {
	println!("{}", serde_json::to_string_pretty(payload).expect("json payload serializes"));
}

/// Render bytes as a lowercase hex string.
pub(crate) fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
	use super::{hex, host_to_json, json_to_host};
	use protobridge::marshal::{HostKey, HostValue};

	#[test]
	fn arrays_become_indexed_tables_and_back() {
		let json: serde_json::Value = serde_json::from_str(r#"[10, 20, 30]"#).expect("valid json");
		let host = json_to_host(&json).expect("converts");
		let HostValue::Table(entries) = &host else {
			panic!("expected table");
		};
		assert_eq!(entries[0].0, HostKey::Index(1));
		assert_eq!(entries[2].0, HostKey::Index(3));
		assert_eq!(host_to_json(&host), json);
	}

	#[test]
	fn null_is_rejected() {
		assert!(json_to_host(&serde_json::Value::Null).is_err());
	}

	#[test]
	fn hex_renders_lowercase_pairs() {
		assert_eq!(hex(&[0x00, 0xab, 0x0f]), "00ab0f");
	}
}
