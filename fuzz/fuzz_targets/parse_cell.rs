#![no_main]

use libfuzzer_sys::fuzz_target;

// Any cell content must either parse or fail typed; whatever parses must
// render without panicking.
fuzz_target!(|data: &str| {
    if let Ok(doc) = careport_core::parse_cell(data) {
        let _ = careport_core::serialize(&doc);
    }
});
