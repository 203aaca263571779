//! Line scanner for Python import statements.
//!
//! The scanner recognizes exactly two statement forms, and only when the
//! whole statement sits on one unindented line:
//!
//! ```text
//! import <name-list>
//! from <module-path> import <name-list>
//! ```
//!
//! `<module-path>` is any run of non-whitespace and `<name-list>` is the
//! raw remainder of the line, so recognition is deliberately permissive.
//! Lines that do not match contribute nothing, including indented imports
//! and the continuation lines of a parenthesized import list. Skipping is
//! silent: a missed import only weakens a best-effort compatibility
//! warning, while rejecting a line the runtime would accept produces a
//! false error.

use nom::{
    IResult, Parser as _,
    bytes::complete::{tag, take_till1},
    character::complete::space1,
    combinator::{opt, rest},
    sequence::{preceded, terminated},
};

use crate::record::{ImportNode, ImportRecord};

/// Scans source text and builds the record of everything it imports.
///
/// Lines end at `\r\n`, `\r` or `\n`; the empty fragment a CRLF pair
/// yields matches neither statement form.
pub(crate) fn scan(source: &str) -> ImportRecord {
    let mut record = ImportRecord::default();

    for line in source.split(['\n', '\r']) {
        match import_line(line) {
            Some(ImportLine {
                from_path: None,
                names,
            }) => {
                for item in names.split(',') {
                    record_plain_import(record.root_mut(), item);
                }
            }
            Some(ImportLine {
                from_path: Some(path),
                names,
            }) => record_from_import(record.root_mut(), path, names),
            None => {}
        }
    }

    record
}

/// The raw pieces of one recognized import line.
struct ImportLine<'a> {
    /// The module path between `from` and `import`, if the line used the
    /// `from` form.
    from_path: Option<&'a str>,
    /// The unsplit name list after `import`.
    names: &'a str,
}

/// Recognizes one line as an import statement.
///
/// A line whose name list is empty (`import` followed only by whitespace)
/// is ignored entirely, even if it carried a `from` path.
fn import_line(line: &str) -> Option<ImportLine<'_>> {
    match parse_import_line(line) {
        Ok((_, statement)) if !statement.names.is_empty() => Some(statement),
        Ok(_) | Err(_) => None,
    }
}

fn parse_import_line(input: &str) -> IResult<&str, ImportLine<'_>> {
    let module_path = take_till1(char::is_whitespace);

    let (input, from_path) = opt(preceded(
        terminated(tag("from"), space1),
        terminated(module_path, space1),
    ))
    .parse(input)?;
    let (input, _) = terminated(tag("import"), space1).parse(input)?;
    let (input, names) = rest(input)?;

    Ok((input, ImportLine { from_path, names }))
}

/// Records one comma-separated item of a plain `import` statement.
///
/// Every level of a dotted path is marked as imported: `import a.b.c`
/// binds the name `a`, and attribute access through `a.b` to `a.b.c` is
/// valid, so each level is a usable name.
fn record_plain_import(root: &mut ImportNode, item: &str) {
    let segments: Vec<&str> = item.split('.').collect();
    let last = segments.len() - 1;

    let mut node = root;
    for (index, segment) in segments.iter().enumerate() {
        // a rename alias can only trail the final segment
        let name = if index == last {
            strip_alias(segment)
        } else {
            segment
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        node = node.child_entry(name);
        node.mark_imported();
    }
}

/// Records a `from <path> import <names>` statement.
///
/// The path segments are created without marking; each listed name becomes
/// a marked child of the deepest path node. An empty path (`from . import
/// x`) attaches the names at the top level.
fn record_from_import(root: &mut ImportNode, path: &str, names: &str) {
    let mut node = root;
    for segment in path.split('.') {
        let name = strip_alias(segment).trim();
        if name.is_empty() {
            continue;
        }
        node = node.child_entry(name);
    }

    for entry in names.split(',') {
        let name = strip_alias(entry).trim();
        if name.is_empty() {
            continue;
        }
        node.child_entry(name).mark_imported();
    }
}

/// Cuts a trailing `as <alias>` rename off an import name.
///
/// Only a standalone `as` word starts an alias, so a name that merely
/// contains the letters (`basic`) is left alone. The record keys on the
/// original name, never the alias.
fn strip_alias(name: &str) -> &str {
    for (index, _) in name.match_indices("as") {
        let starts_word = index == 0 || name[..index].ends_with([' ', '\t']);
        let after = &name[index + 2..];
        let ends_word = after.is_empty() || after.starts_with([' ', '\t']);
        if starts_word && ends_word {
            return &name[..index];
        }
    }
    name
}
