#![no_main]
use libfuzzer_sys::fuzz_target;
use urlref::canonical_path;

fuzz_target!(|data: &str| {
    // Canonicalizing twice changes nothing.
    let once = canonical_path(data);
    assert_eq!(canonical_path(&once), once);
});
