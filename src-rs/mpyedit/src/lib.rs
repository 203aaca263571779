#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Facade over the MicroPython editor support crates

pub use mpyedit_api::{
    ApiCatalog, ApiNode, base_api, base_catalog, compatible_api, extra_catalog, full_api,
    full_catalog, is_api_used_compatible,
};
pub use mpyedit_board::{BASE_BOARD_IDS, Capability, FULL_BOARD_IDS, UnrecognizedBoard};
pub use mpyedit_imports::{ImportNode, ImportRecord, detect_imports};
pub use mpyedit_metrics::{
    CodeEditor, DeviceFs, Event, EventSink, LoadSource, MetricsSession, RecordingSink, WebUsbEvent,
    WriteSink, file_extension_label, files_label, flash_time_label, fs_used_label, line_count,
    lines_label, normalize_action, viewport_label,
};
