//! Public library API for marshalling between dynamic value trees and
//! runtime-schema protobuf messages.

/// Value tree model, tree building, message materialization and extraction.
pub mod marshal;
