use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MarshalError>;

/// Errors produced while loading schemas, building value trees, and
/// marshalling messages.
#[derive(Debug, Error)]
pub enum MarshalError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Encoded descriptor set did not parse into a pool.
	#[error("schema: {0}")]
	Schema(#[from] prost_reflect::DescriptorError),
	/// Requested message type is not present in the pool.
	#[error("unknown message type: {type_name}")]
	UnknownType {
		/// Qualified type name that failed to resolve.
		type_name: String,
	},
	/// Boolean field text was neither `true` nor `false`.
	#[error("invalid boolean literal {text:?} for field {field}")]
	InvalidBooleanLiteral {
		/// Field that was being filled.
		field: String,
		/// Offending candidate text.
		text: String,
	},
	/// Enum tag did not resolve to a declared enum value.
	#[error("unknown value {number} for enum {enum_name} (field {field})")]
	UnknownEnumValue {
		/// Field that was being filled.
		field: String,
		/// Qualified enum type name.
		enum_name: String,
		/// Numeric tag that failed to resolve.
		number: i32,
	},
	/// Required message-typed field had no usable candidate entry.
	#[error("required message field {field} of {type_name} has no value")]
	MissingRequiredMessage {
		/// Enclosing message type name.
		type_name: String,
		/// Missing field name.
		field: String,
	},
	/// Enum field had no candidate and no schema-declared default.
	#[error("enum field {field} has no default value to fall back to")]
	MissingRequiredDefault {
		/// Field that was being filled.
		field: String,
	},
	/// Host value or value tree had a shape the marshaller cannot use.
	#[error("malformed host value: {reason}")]
	MalformedHostValue {
		/// What was wrong with the input shape.
		reason: String,
	},
	/// Wire bytes failed to decode as the requested message type.
	#[error("decode failure for {type_name}: {source}")]
	DecodeFailure {
		/// Message type the bytes were decoded as.
		type_name: String,
		/// Underlying prost decode error.
		source: prost::DecodeError,
	},
}
