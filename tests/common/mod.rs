#![allow(dead_code)]

use prost::Message;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet};
use protobridge::marshal::Schema;

/// Encoded `FileDescriptorSet` for the test schema, built in-memory so the
/// tests carry no protoc dependency.
///
/// ```text
/// package test;                         // proto2
/// enum Color { RED = 1; BLUE = 4; }     // deliberately no value 2
/// message Inner {
///     optional int32  id     = 1;
///     optional string label  = 2;
///     optional bool   active = 3;
/// }
/// message Everything {
///     optional int32  count = 1;
///     optional int64  big   = 2;
///     optional uint32 index = 3;
///     optional uint64 wide  = 4;
///     optional float  ratio = 5;
///     optional double exact = 6;
///     optional bool   flag  = 7;
///     optional string name  = 8  [default = "anon"];
///     optional bytes  blob  = 9;
///     optional Color  color = 10 [default = RED];
///     optional Inner  inner = 11;
///     repeated int32  nums  = 12;
///     repeated string tags  = 13;
///     repeated Inner  items = 14;
///     optional int32  answer = 15 [default = 42];
/// }
/// message Strict {
///     required Inner  inner = 1;
///     required Color  color = 2;        // no declared default
///     required int32  total = 3 [default = 7];
///     required string tag   = 4;
/// }
/// ```
pub fn fixture_set_bytes() -> Vec<u8> {
	let color = EnumDescriptorProto {
		name: Some("Color".to_owned()),
		value: vec![enum_value("RED", 1), enum_value("BLUE", 4)],
		..Default::default()
	};

	let inner = DescriptorProto {
		name: Some("Inner".to_owned()),
		field: vec![
			field("id", 1, Label::Optional, Type::Int32, None, None),
			field("label", 2, Label::Optional, Type::String, None, None),
			field("active", 3, Label::Optional, Type::Bool, None, None),
		],
		..Default::default()
	};

	let everything = DescriptorProto {
		name: Some("Everything".to_owned()),
		field: vec![
			field("count", 1, Label::Optional, Type::Int32, None, None),
			field("big", 2, Label::Optional, Type::Int64, None, None),
			field("index", 3, Label::Optional, Type::Uint32, None, None),
			field("wide", 4, Label::Optional, Type::Uint64, None, None),
			field("ratio", 5, Label::Optional, Type::Float, None, None),
			field("exact", 6, Label::Optional, Type::Double, None, None),
			field("flag", 7, Label::Optional, Type::Bool, None, None),
			field("name", 8, Label::Optional, Type::String, None, Some("anon")),
			field("blob", 9, Label::Optional, Type::Bytes, None, None),
			field("color", 10, Label::Optional, Type::Enum, Some(".test.Color"), Some("RED")),
			field("inner", 11, Label::Optional, Type::Message, Some(".test.Inner"), None),
			field("nums", 12, Label::Repeated, Type::Int32, None, None),
			field("tags", 13, Label::Repeated, Type::String, None, None),
			field("items", 14, Label::Repeated, Type::Message, Some(".test.Inner"), None),
			field("answer", 15, Label::Optional, Type::Int32, None, Some("42")),
		],
		..Default::default()
	};

	let strict = DescriptorProto {
		name: Some("Strict".to_owned()),
		field: vec![
			field("inner", 1, Label::Required, Type::Message, Some(".test.Inner"), None),
			field("color", 2, Label::Required, Type::Enum, Some(".test.Color"), None),
			field("total", 3, Label::Required, Type::Int32, None, Some("7")),
			field("tag", 4, Label::Required, Type::String, None, None),
		],
		..Default::default()
	};

	let file = FileDescriptorProto {
		name: Some("fixture.proto".to_owned()),
		package: Some("test".to_owned()),
		syntax: Some("proto2".to_owned()),
		message_type: vec![inner, everything, strict],
		enum_type: vec![color],
		..Default::default()
	};

	FileDescriptorSet { file: vec![file] }.encode_to_vec()
}

/// Pool loaded from [`fixture_set_bytes`].
pub fn fixture_schema() -> Schema {
	Schema::from_bytes(&fixture_set_bytes()).expect("fixture schema loads")
}

fn field(name: &str, number: i32, label: Label, kind: Type, type_name: Option<&str>, default: Option<&str>) -> FieldDescriptorProto {
	FieldDescriptorProto {
		name: Some(name.to_owned()),
		number: Some(number),
		label: Some(label as i32),
		r#type: Some(kind as i32),
		type_name: type_name.map(str::to_owned),
		default_value: default.map(str::to_owned),
		..Default::default()
	}
}

fn enum_value(name: &str, number: i32) -> EnumValueDescriptorProto {
	EnumValueDescriptorProto {
		name: Some(name.to_owned()),
		number: Some(number),
		..Default::default()
	}
}
