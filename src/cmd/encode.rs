use std::fs;
use std::path::PathBuf;

use prost::Message;
use protobridge::marshal::{MarshalError, Result, Schema, materialize_host};

use crate::cmd::util::{hex, json_to_host};

/// Materialize a JSON value into a typed message and emit its wire bytes.
pub fn run(set: PathBuf, message: String, input: PathBuf, out: Option<PathBuf>) -> Result<()> {
	let schema = Schema::load(&set)?;
	let text = fs::read_to_string(&input)?;
	let json: serde_json::Value = serde_json::from_str(&text).map_err(|err| MarshalError::MalformedHostValue {
		reason: format!("input is not valid json: {err}"),
	})?;

	let host = json_to_host(&json)?;
	let typed = materialize_host(&schema, &message, &host)?;
	let bytes = typed.encode_to_vec();

	match out {
		Some(path) => {
			fs::write(&path, &bytes)?;
			println!("message: {message}");
			println!("bytes: {}", bytes.len());
			println!("out: {}", path.display());
		}
		None => println!("{}", hex(&bytes)),
	}
	Ok(())
}
