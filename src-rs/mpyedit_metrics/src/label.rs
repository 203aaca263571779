//! Bucket tables and label text for the tracked measurements.
//!
//! Every measurement is reported as a coarse label rather than a raw
//! number. The tables are inclusive ranges labelled `<lo>-<hi>`; a value
//! matching no range labels as the empty string.

use std::fmt::Display;

/// Viewport width buckets, in CSS pixels.
const VIEWPORT_RANGES: &[(u32, u32)] = &[
    (0, 480),
    (481, 890),
    (891, 1024),
    (1025, 1280),
    (1281, 10_000),
];

/// Script length buckets, in lines.
const LINE_RANGES: &[(usize, usize)] = &[
    (0, 20),
    (21, 50),
    (51, 100),
    (101, 200),
    (201, 500),
    (501, 1000),
    (1001, 1_000_000),
];

/// File count buckets for filesystems holding more than ten files.
const FILE_RANGES: &[(usize, usize)] = &[(11, 15), (16, 20), (21, 25), (26, 1000)];

/// Filesystem usage buckets, in KiB.
const FS_KIB_RANGES: &[(u64, u64)] = &[
    (0, 5),
    (6, 10),
    (11, 15),
    (16, 20),
    (21, 25),
    (26, 30),
    (30, 1000),
];

/// Labels a value with the first range containing it, or with the empty
/// string when no range does.
fn range_label<T: Copy + PartialOrd + Display>(ranges: &[(T, T)], value: T) -> String {
    ranges
        .iter()
        .find(|&&(lo, hi)| value >= lo && value <= hi)
        .map_or_else(String::new, |&(lo, hi)| format!("{lo}-{hi}"))
}

/// Returns the bucket label for a viewport width in CSS pixels.
#[must_use]
pub fn viewport_label(width: u32) -> String {
    range_label(VIEWPORT_RANGES, width)
}

/// Returns the bucket label for a script's line count.
#[must_use]
pub fn lines_label(lines: usize) -> String {
    range_label(LINE_RANGES, lines)
}

/// Returns the label for a stored-file count: the plain count up to ten
/// files, a bucket label beyond that.
#[must_use]
pub fn files_label(files: usize) -> String {
    if files > 10 {
        range_label(FILE_RANGES, files)
    } else {
        files.to_string()
    }
}

/// Returns the bucket label for filesystem usage in bytes.
///
/// The buckets are whole KiB ranges compared against the fractional KiB
/// usage, so usage falling between two ranges (say 5.5 KiB) labels as the
/// empty string.
#[must_use]
pub fn fs_used_label(bytes: u64) -> String {
    // bytes / 1024 lies in [lo, hi] exactly when bytes lies in
    // [lo * 1024, hi * 1024], so the fraction never needs computing.
    FS_KIB_RANGES
        .iter()
        .find(|&&(lo, hi)| bytes >= lo * 1024 && bytes <= hi * 1024)
        .map_or_else(String::new, |&(lo, hi)| format!("{lo}-{hi}"))
}

/// Returns the bucket label for a flash duration in milliseconds.
///
/// The labels are in seconds, with finer buckets below ten seconds where
/// most flashes land.
#[must_use]
pub const fn flash_time_label(duration_ms: u64) -> &'static str {
    if duration_ms < 2000 {
        "0-2"
    } else if duration_ms <= 4000 {
        "2-4"
    } else if duration_ms <= 6000 {
        "4-6"
    } else if duration_ms <= 10_000 {
        "6-10"
    } else if duration_ms <= 20_000 {
        "10-20"
    } else if duration_ms <= 30_000 {
        "20-30"
    } else if duration_ms <= 60_000 {
        "30-60"
    } else if duration_ms <= 120_000 {
        "60-120"
    } else {
        "120+"
    }
}

/// Returns the label for a file name's extension: the lower-cased text
/// after the last `.`, or `none` for names without one.
#[must_use]
pub fn file_extension_label(file_name: &str) -> String {
    let lowered = file_name.to_lowercase();
    match lowered.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => extension.to_owned(),
        Some(_) | None => String::from("none"),
    }
}

/// Counts the lines of a script the way the editor does: every line
/// terminator (`\r\n`, `\r` or `\n`) starts a new line, and the fragment
/// after the last terminator counts even when empty.
#[must_use]
pub fn line_count(code: &str) -> usize {
    let mut lines = 1;
    let mut bytes = code.bytes().peekable();
    while let Some(byte) = bytes.next() {
        match byte {
            b'\r' => {
                if bytes.peek() == Some(&b'\n') {
                    bytes.next();
                }
                lines += 1;
            }
            b'\n' => lines += 1,
            _ => {}
        }
    }
    lines
}
