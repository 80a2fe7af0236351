use prost_reflect::{EnumDescriptor, Kind, MessageDescriptor};

/// Closed set of field kinds the marshaller dispatches over.
///
/// The wire-level integer flavors (`sint32`, `fixed64`, ...) collapse onto
/// the value representation they share, so fill and extract dispatch are
/// each a single exhaustive `match` and a new kind cannot silently fall
/// through.
#[derive(Debug, Clone)]
pub(crate) enum FieldKind {
	/// Any non-message kind.
	Leaf(LeafKind),
	/// Nested message kind, never carrying a schema default.
	Message(MessageDescriptor),
}

/// Field kinds that materialize from and extract to scalar text.
#[derive(Debug, Clone)]
pub(crate) enum LeafKind {
	Int32,
	Int64,
	Uint32,
	Uint64,
	Float32,
	Float64,
	Bool,
	Str,
	Bytes,
	Enum(EnumDescriptor),
}

pub(crate) fn classify(kind: Kind) -> FieldKind {
	match kind {
		Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => FieldKind::Leaf(LeafKind::Int32),
		Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => FieldKind::Leaf(LeafKind::Int64),
		Kind::Uint32 | Kind::Fixed32 => FieldKind::Leaf(LeafKind::Uint32),
		Kind::Uint64 | Kind::Fixed64 => FieldKind::Leaf(LeafKind::Uint64),
		Kind::Float => FieldKind::Leaf(LeafKind::Float32),
		Kind::Double => FieldKind::Leaf(LeafKind::Float64),
		Kind::Bool => FieldKind::Leaf(LeafKind::Bool),
		Kind::String => FieldKind::Leaf(LeafKind::Str),
		Kind::Bytes => FieldKind::Leaf(LeafKind::Bytes),
		Kind::Enum(desc) => FieldKind::Leaf(LeafKind::Enum(desc)),
		Kind::Message(desc) => FieldKind::Message(desc),
	}
}
