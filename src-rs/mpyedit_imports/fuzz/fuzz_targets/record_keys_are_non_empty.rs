#![no_main]

use libfuzzer_sys::fuzz_target;
use mpyedit_imports::{ImportNode, detect_imports};

fn assert_keys_non_empty(name: &str, node: &ImportNode) {
    assert!(!name.is_empty(), "record contains an empty name");
    assert_eq!(name, name.trim(), "record contains an untrimmed name");
    for (child_name, child) in node.children() {
        assert_keys_non_empty(child_name, child);
    }
}

fuzz_target!(|source: &str| {
    let record = detect_imports(source);
    for (name, node) in record.modules() {
        assert_keys_non_empty(name, node);
    }
});
