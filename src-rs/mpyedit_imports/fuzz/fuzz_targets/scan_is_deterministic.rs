#![no_main]

use libfuzzer_sys::fuzz_target;
use mpyedit_imports::detect_imports;

fuzz_target!(|source: &str| {
    let first = detect_imports(source);
    let second = detect_imports(source);
    assert_eq!(first, second);
});
