#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Python import statement detection for the MicroPython editor

mod record;
mod scan;

pub use record::{ImportNode, ImportRecord};

/// Scans Python source text for import statements.
///
/// Recognition is line-oriented: `import a.b.c, d` and `from a.b import
/// c, d` statements are picked up when they sit alone on one unindented
/// line, and every other line is skipped silently. Each call builds a
/// fresh record, and the same source always yields the same record.
#[must_use]
pub fn detect_imports(source: &str) -> ImportRecord {
    scan::scan(source)
}
