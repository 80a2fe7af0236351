use std::fs;
use std::path::Path;

use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor};

use crate::marshal::{MarshalError, Result};

/// A loaded descriptor pool.
///
/// Built once from an encoded `FileDescriptorSet` (the output of
/// `protoc --descriptor_set_out`), then shared read-only. Lookups and
/// decodes never mutate the pool, so one `Schema` may serve concurrent
/// marshalling calls.
pub struct Schema {
	pool: DescriptorPool,
}

impl Schema {
	/// Load an encoded descriptor set from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(&raw)
	}

	/// Build a pool from in-memory descriptor set bytes.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		let pool = DescriptorPool::decode(bytes)?;
		Ok(Self { pool })
	}

	/// Look up a message type by qualified name.
	pub fn message_by_name(&self, name: &str) -> Option<MessageDescriptor> {
		self.pool.get_message_by_name(name)
	}

	/// Look up a message type, failing with `UnknownType` when absent.
	pub fn require_message(&self, name: &str) -> Result<MessageDescriptor> {
		self.message_by_name(name).ok_or_else(|| MarshalError::UnknownType {
			type_name: name.to_owned(),
		})
	}

	/// Decode wire bytes as the named message type.
	///
	/// The byte layout is the message library's concern; a malformed
	/// buffer surfaces as [`MarshalError::DecodeFailure`] unchanged.
	pub fn decode(&self, type_name: &str, bytes: &[u8]) -> Result<DynamicMessage> {
		let desc = self.require_message(type_name)?;
		DynamicMessage::decode(desc, bytes).map_err(|source| MarshalError::DecodeFailure {
			type_name: type_name.to_owned(),
			source,
		})
	}

	/// All message types in the pool, in registration order.
	pub fn messages(&self) -> impl Iterator<Item = MessageDescriptor> + '_ {
		self.pool.all_messages()
	}
}
