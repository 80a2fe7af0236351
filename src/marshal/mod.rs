mod error;
mod extract;
mod host;
mod kind;
mod materialize;
mod node;
mod schema;
mod wide_int;

/// Error and result aliases.
pub use error::{MarshalError, Result};
/// Message-to-tree and message-to-host extraction entry points.
pub use extract::{extract, extract_host};
/// Host boundary representation and tree building.
pub use host::{HostKey, HostValue, build_tree};
/// Tree-to-message materialization entry points.
pub use materialize::{materialize, materialize_host};
/// Value tree types.
pub use node::{Node, NodeField};
/// Descriptor pool wrapper and raw-buffer decode.
pub use schema::Schema;
/// Process-wide 64-bit integer text mode.
pub use wide_int::{set_wide_int_text, wide_int_text};
