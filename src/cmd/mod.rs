/// Wire-bytes decode command.
pub mod decode;
/// JSON-to-wire encode command.
pub mod encode;
/// Schema inspection command.
pub mod schema;
/// Shared JSON/host bridging helpers.
pub mod util;
