use std::fs;
use std::path::PathBuf;

use protobridge::marshal::{Result, Schema, extract_host, set_wide_int_text};

use crate::cmd::util::{emit_json, host_to_json};

/// Decode wire bytes as the named type and print the host-form JSON.
pub fn run(set: PathBuf, message: String, input: PathBuf, native_int64: bool) -> Result<()> {
	if native_int64 {
		set_wide_int_text(false);
	}

	let schema = Schema::load(&set)?;
	let bytes = fs::read(&input)?;
	let typed = schema.decode(&message, &bytes)?;
	let host = extract_host(&typed);

	emit_json(&host_to_json(&host));
	Ok(())
}
