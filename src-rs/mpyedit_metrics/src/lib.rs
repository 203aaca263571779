#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Analytics event labelling for the MicroPython editor

mod event;
mod label;
mod session;

pub use event::{Event, EventSink, RecordingSink, WriteSink};
pub use label::{
    file_extension_label, files_label, flash_time_label, fs_used_label, line_count, lines_label,
    viewport_label,
};
pub use session::{CodeEditor, DeviceFs, LoadSource, MetricsSession, WebUsbEvent, normalize_action};
