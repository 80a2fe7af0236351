/// One node of the generic value tree exchanged with the host boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// Textual leaf value. Booleans cross as the literals `true`/`false`,
	/// numbers as their decimal text form.
	Scalar(String),
	/// Named fields of a (sub)message, in insertion order.
	Map(Vec<NodeField>),
	/// Repeated-field items, in emission order.
	List(Vec<Node>),
}

/// One named entry of a [`Node::Map`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeField {
	/// Entry name. Names are not required to be unique.
	pub name: String,
	/// Entry payload.
	pub node: Node,
}

impl Node {
	/// Build a map node from `(name, node)` pairs.
	pub fn map(entries: impl IntoIterator<Item = (impl Into<String>, Node)>) -> Self {
		Node::Map(
			entries
				.into_iter()
				.map(|(name, node)| NodeField { name: name.into(), node })
				.collect(),
		)
	}

	/// Build a scalar node from any text-like value.
	pub fn scalar(text: impl Into<String>) -> Self {
		Node::Scalar(text.into())
	}

	/// First map entry with the given name, or `None`. Lookup takes the
	/// first match in entry order; later duplicates are ignored.
	pub fn entry(&self, name: &str) -> Option<&Node> {
		match self {
			Node::Map(entries) => entries.iter().find(|field| field.name == name).map(|field| &field.node),
			_ => None,
		}
	}

	/// Scalar text of this node, or `None` for composites.
	pub fn as_scalar(&self) -> Option<&str> {
		match self {
			Node::Scalar(text) => Some(text.as_str()),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Node;

	#[test]
	fn entry_lookup_takes_first_duplicate() {
		let node = Node::map([("x", Node::scalar("1")), ("x", Node::scalar("2"))]);
		assert_eq!(node.entry("x").and_then(Node::as_scalar), Some("1"));
	}

	#[test]
	fn entry_lookup_on_non_map_is_none() {
		assert!(Node::scalar("7").entry("x").is_none());
		assert!(Node::List(Vec::new()).entry("x").is_none());
	}
}
