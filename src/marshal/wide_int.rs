use std::sync::atomic::{AtomicBool, Ordering};

// Defaults to text: 64-bit integers cross the host boundary as decimal
// strings so values above 2^53 survive a host whose numbers are f64.
static WIDE_INT_TEXT: AtomicBool = AtomicBool::new(true);

/// Select whether int64/uint64 fields are delivered to the host as decimal
/// text (`true`) or as native host numbers (`false`, lossy above 2^53).
///
/// Process-wide; read by extraction at the point it emits 64-bit integer
/// kinds. Materialization parses decimal text in either mode.
pub fn set_wide_int_text(enabled: bool) {
	WIDE_INT_TEXT.store(enabled, Ordering::Relaxed);
}

/// Current wide-integer text mode.
pub fn wide_int_text() -> bool {
	WIDE_INT_TEXT.load(Ordering::Relaxed)
}
