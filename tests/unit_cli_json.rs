#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

#[test]
fn schema_json_output_lists_field_layout() {
	let dir = work_dir("schema-json");
	let set = write_fixture_set(&dir);

	let json = run_json(vec![
		"schema".to_owned(),
		set.display().to_string(),
		"--message".to_owned(),
		"test.Everything".to_owned(),
		"--json".to_owned(),
	]);

	assert_eq!(json["message"], "test.Everything");
	let fields = json["fields"].as_array().expect("fields array");
	assert_eq!(fields.len(), 15);
	let color = fields.iter().find(|field| field["name"] == "color").expect("color field");
	assert_eq!(color["kind"], "test.Color");
	assert_eq!(color["cardinality"], "optional");

	let _ = fs::remove_dir_all(&dir);
}

#[test]
fn encode_then_decode_round_trips_host_json() {
	let dir = work_dir("roundtrip");
	let set = write_fixture_set(&dir);
	let input = dir.join("input.json");
	let wire = dir.join("wire.bin");
	fs::write(&input, r#"{"count": 7, "flag": true, "name": "joe", "nums": [1, 2, 3]}"#).expect("input written");

	let output = run(vec![
		"encode".to_owned(),
		set.display().to_string(),
		"--message".to_owned(),
		"test.Everything".to_owned(),
		input.display().to_string(),
		"--out".to_owned(),
		wire.display().to_string(),
	]);
	assert!(output.contains("message: test.Everything"));
	assert!(!fs::read(&wire).expect("wire file written").is_empty());

	let json = run_json(vec![
		"decode".to_owned(),
		set.display().to_string(),
		"--message".to_owned(),
		"test.Everything".to_owned(),
		wire.display().to_string(),
	]);

	assert_eq!(json["count"].as_f64(), Some(7.0));
	assert_eq!(json["flag"].as_bool(), Some(true));
	assert_eq!(json["name"].as_str(), Some("joe"));
	let nums: Vec<_> = json["nums"].as_array().expect("nums array").iter().filter_map(Value::as_f64).collect();
	assert_eq!(nums, [1.0, 2.0, 3.0]);
	// Absent input fields were filled at encode time, so declared defaults
	// survive the wire, and 64-bit integers arrive as decimal text by
	// default.
	assert_eq!(json["answer"].as_f64(), Some(42.0));
	assert_eq!(json["color"].as_f64(), Some(1.0));
	assert_eq!(json["big"].as_str(), Some("0"));
	assert_eq!(json["inner"]["id"].as_f64(), Some(0.0));

	let _ = fs::remove_dir_all(&dir);
}

#[test]
fn decode_native_int64_emits_numbers() {
	let dir = work_dir("native-int64");
	let set = write_fixture_set(&dir);
	let input = dir.join("input.json");
	let wire = dir.join("wire.bin");
	fs::write(&input, r#"{"big": 123}"#).expect("input written");

	run(vec![
		"encode".to_owned(),
		set.display().to_string(),
		"--message".to_owned(),
		"test.Everything".to_owned(),
		input.display().to_string(),
		"--out".to_owned(),
		wire.display().to_string(),
	]);

	let json = run_json(vec![
		"decode".to_owned(),
		set.display().to_string(),
		"--message".to_owned(),
		"test.Everything".to_owned(),
		wire.display().to_string(),
		"--native-int64".to_owned(),
	]);
	assert_eq!(json["big"].as_f64(), Some(123.0));

	let json = run_json(vec![
		"decode".to_owned(),
		set.display().to_string(),
		"--message".to_owned(),
		"test.Everything".to_owned(),
		wire.display().to_string(),
	]);
	assert_eq!(json["big"].as_str(), Some("123"));

	let _ = fs::remove_dir_all(&dir);
}

fn run(args: Vec<String>) -> String {
	let output = Command::new(env!("CARGO_BIN_EXE_protobridge")).args(&args).output().expect("command executes");

	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

fn run_json(args: Vec<String>) -> Value {
	serde_json::from_str(&run(args)).expect("stdout should be valid json")
}

fn work_dir(label: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("protobridge-cli-{}-{label}", std::process::id()));
	fs::create_dir_all(&dir).expect("work dir created");
	dir
}

fn write_fixture_set(dir: &Path) -> PathBuf {
	let path = dir.join("fixture.pb");
	fs::write(&path, common::fixture_set_bytes()).expect("fixture set written");
	path
}
