//! Import record printing for the mpyedit CLI

use anstream::println;
use mpyedit_imports::{ImportNode, ImportRecord};

use crate::stylesheet;

/// Prints the import record in a hierarchical tree format for debugging
pub fn print(record: &ImportRecord, print_debug: bool) {
    if print_debug {
        println!("Imports: {record:?}");
    } else {
        print_record(record);
    }
}

/// Prints the record root with its top-level modules
fn print_record(record: &ImportRecord) {
    println!("ImportRecord");

    let module_count = record.len();
    for (i, (name, node)) in record.modules().enumerate() {
        let is_last = i == module_count - 1;
        let prefix = if is_last { "└──" } else { "├──" };
        print_node(name, node, 1, prefix);
    }
}

/// Prints one record node and the names nested under it
fn print_node(name: &str, node: &ImportNode, indent: usize, prefix: &str) {
    let marker = if node.is_imported() {
        format!(" {}", stylesheet::IMPORTED_MARKER.style("(imported)"))
    } else {
        String::new()
    };
    println!("{}{prefix} {name}{marker}", "  ".repeat(indent));

    let child_count = node.children().count();
    for (i, (child_name, child)) in node.children().enumerate() {
        let is_last = i == child_count - 1;
        let child_prefix = if is_last { "└──" } else { "├──" };
        print_node(child_name, child, indent + 1, child_prefix);
    }
}
