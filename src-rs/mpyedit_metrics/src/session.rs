//! Session-level tracking of editor interactions.

use crate::event::{Event, EventSink};
use crate::label;

/// The code editor as the metrics layer sees it.
pub trait CodeEditor {
    /// Returns the current script text.
    fn code(&self) -> String;
}

/// The device filesystem as the metrics layer sees it.
pub trait DeviceFs {
    /// Returns the names of the stored files.
    fn ls(&self) -> Vec<String>;

    /// Returns the storage used, in bytes.
    fn storage_used(&self) -> u64;
}

/// Where a file arrived from when loading it into the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Dragged and dropped onto the editor pane.
    EditorDrop,
    /// Dragged and dropped onto the drop area of the Load/Save modal.
    LoadAreaDrop,
    /// Picked in the file chooser of the Load/Save modal.
    FileUpload,
}

impl LoadSource {
    const fn label_prefix(self) -> &'static str {
        match self {
            Self::EditorDrop => "drop-editor",
            Self::LoadAreaDrop => "drop-load",
            Self::FileUpload => "file-upload",
        }
    }
}

/// A notification from the WebUSB flashing machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebUsbEvent {
    /// A completed flash, with how long it took.
    FlashTime {
        /// Flash duration in milliseconds.
        duration_ms: u64,
    },
    /// An informational message.
    Info {
        /// The message text.
        message: String,
    },
    /// A flashing error.
    Error {
        /// The error message text.
        message: String,
    },
    /// An event type the tracker does not know.
    Unknown {
        /// The unrecognized event type.
        event_type: String,
        /// The message that came with it.
        message: String,
    },
}

/// Normalizes a clicked element id into its analytics action name.
///
/// The `command-` id prefix is dropped, the per-file save and remove
/// buttons (whose ids embed the file name) collapse into `file-save` and
/// `file-remove`, and the flashing-overlay buttons map to their
/// `webusb/error-modal/` names.
#[must_use]
pub fn normalize_action(element_id: &str) -> String {
    let action = element_id.replacen("command-", "", 1);
    if action.contains("_save") {
        String::from("file-save")
    } else if action.contains("_remove") {
        String::from("file-remove")
    } else if action.contains("flashing-overlay-download") {
        String::from("webusb/error-modal/download-hex")
    } else if action.contains("flashing-overlay-troubleshoot") {
        String::from("webusb/error-modal/troubleshoot")
    } else {
        action
    }
}

/// One editor session's analytics tracking.
///
/// The session captures the editor's script when it starts, so that later
/// line-count reports can say `default` for code the user never touched.
/// Every report goes to the session's sink; nothing is sent on its own.
#[derive(Debug)]
pub struct MetricsSession<S> {
    sink: S,
    default_script: String,
}

impl<S: EventSink> MetricsSession<S> {
    /// Starts a session, capturing the editor's current script as the
    /// default one.
    #[must_use]
    pub fn new(editor: &impl CodeEditor, sink: S) -> Self {
        Self {
            sink,
            default_script: editor.code(),
        }
    }

    /// Consumes the session, returning its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Reports the viewport width bucket. Sent once per page load.
    pub fn measure_viewport(&mut self, width: u32) {
        self.sink
            .send_event(Event::new("viewport", label::viewport_label(width), 1));
    }

    /// Reports a click on an action element.
    ///
    /// A `flash` or `download` click describes the program being flashed:
    /// it first reports the stored-file count, the storage used and the
    /// script's line count, then the click itself.
    pub fn action_click(&mut self, element_id: &str, editor: &impl CodeEditor, fs: &impl DeviceFs) {
        let action = normalize_action(element_id);
        if action == "flash" || action == "download" {
            self.track_files(fs);
            self.track_fs_used(fs);
            self.track_lines(editor);
        }
        self.sink.send_event(Event::new("click", action, 1));
    }

    /// Reports a file being loaded into the editor.
    ///
    /// Only `py` and `hex` files load; any other extension reports an
    /// error label, as does picking more (or fewer) than one file in the
    /// upload chooser. A drop that carries several files describes its
    /// first one. Dropping nothing reports nothing.
    pub fn load(&mut self, source: LoadSource, file_names: &[&str]) {
        let label = match (source, file_names) {
            (LoadSource::EditorDrop | LoadSource::LoadAreaDrop, []) => return,
            (LoadSource::FileUpload, [name])
            | (LoadSource::EditorDrop | LoadSource::LoadAreaDrop, [name, ..]) => {
                let prefix = source.label_prefix();
                let extension = label::file_extension_label(name);
                if extension == "py" || extension == "hex" {
                    format!("{prefix}-{extension}")
                } else {
                    format!("error-{prefix}-type-{extension}")
                }
            }
            (LoadSource::FileUpload, _) => String::from("error-file-upload-multiple"),
        };
        self.sink.send_event(Event::new("load", label, 1));
    }

    /// Reports a WebUSB notification.
    pub fn webusb(&mut self, event: WebUsbEvent) {
        let (action, label) = match event {
            WebUsbEvent::FlashTime { duration_ms } => (
                "WebUSB-time",
                label::flash_time_label(duration_ms).to_owned(),
            ),
            WebUsbEvent::Info { message } => ("WebUSB-info", message),
            WebUsbEvent::Error { message } => ("WebUSB-error", message),
            WebUsbEvent::Unknown {
                event_type,
                message,
            } => (
                "WebUSB-error",
                format!("unknown-event/{event_type}/{message}"),
            ),
        };
        self.sink.send_event(Event::new(action, label, 1));
    }

    fn track_files(&mut self, fs: &impl DeviceFs) {
        let files = fs.ls().len();
        self.sink
            .send_event(Event::new("files", label::files_label(files), 1));
    }

    fn track_fs_used(&mut self, fs: &impl DeviceFs) {
        let label = label::fs_used_label(fs.storage_used());
        self.sink.send_event(Event::new("fs-used", label, 1));
    }

    fn track_lines(&mut self, editor: &impl CodeEditor) {
        let code = editor.code();
        let label = if code == self.default_script {
            String::from("default")
        } else {
            label::lines_label(label::line_count(&code))
        };
        self.sink.send_event(Event::new("lines", label, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecordingSink;

    struct FakeEditor {
        code: String,
    }

    impl FakeEditor {
        fn new(code: &str) -> Self {
            Self {
                code: String::from(code),
            }
        }
    }

    impl CodeEditor for FakeEditor {
        fn code(&self) -> String {
            self.code.clone()
        }
    }

    struct FakeFs {
        files: Vec<String>,
        used: u64,
    }

    impl FakeFs {
        fn with_files(names: &[&str]) -> Self {
            Self {
                files: names.iter().map(|name| String::from(*name)).collect(),
                used: 0,
            }
        }
    }

    impl DeviceFs for FakeFs {
        fn ls(&self) -> Vec<String> {
            self.files.clone()
        }

        fn storage_used(&self) -> u64 {
            self.used
        }
    }

    const DEFAULT_SCRIPT: &str = "from microbit import *\ndisplay.scroll('Hello')";

    fn session() -> MetricsSession<RecordingSink> {
        MetricsSession::new(&FakeEditor::new(DEFAULT_SCRIPT), RecordingSink::new())
    }

    mod normalize_action_tests {
        use super::*;

        #[test]
        fn the_command_prefix_is_dropped() {
            assert_eq!(normalize_action("command-download"), "download");
            assert_eq!(normalize_action("command-zoom-in"), "zoom-in");
        }

        #[test]
        fn plain_ids_pass_through() {
            assert_eq!(normalize_action("script-box"), "script-box");
            assert_eq!(normalize_action("fs-file-upload-button"), "fs-file-upload-button");
        }

        #[test]
        fn per_file_buttons_collapse_to_one_action() {
            assert_eq!(normalize_action("myfile_save"), "file-save");
            assert_eq!(normalize_action("samplefile_py_remove"), "file-remove");
        }

        #[test]
        fn flashing_overlay_buttons_map_to_modal_actions() {
            assert_eq!(
                normalize_action("flashing-overlay-download"),
                "webusb/error-modal/download-hex"
            );
            assert_eq!(
                normalize_action("flashing-overlay-troubleshoot"),
                "webusb/error-modal/troubleshoot"
            );
        }
    }

    mod viewport_tests {
        use super::*;

        #[test]
        fn the_viewport_event_carries_the_width_bucket() {
            let mut session = session();
            session.measure_viewport(800);
            assert_eq!(
                session.into_sink().events(),
                [Event::new("viewport", "481-890", 1)]
            );
        }
    }

    mod click_tests {
        use super::*;

        #[test]
        fn an_ordinary_click_reports_only_itself() {
            let mut session = session();
            session.action_click(
                "command-connect",
                &FakeEditor::new(DEFAULT_SCRIPT),
                &FakeFs::with_files(&["main.py"]),
            );
            assert_eq!(
                session.into_sink().events(),
                [Event::new("click", "connect", 1)]
            );
        }

        #[test]
        fn a_download_click_describes_the_program_first() {
            let mut session = session();
            let editor = FakeEditor::new("import radio\nradio.on()\n");
            let mut fs = FakeFs::with_files(&["main.py", "extra.py"]);
            fs.used = 11 * 1024;
            session.action_click("command-download", &editor, &fs);
            assert_eq!(
                session.into_sink().events(),
                [
                    Event::new("files", "2", 1),
                    Event::new("fs-used", "11-15", 1),
                    Event::new("lines", "0-20", 1),
                    Event::new("click", "download", 1),
                ]
            );
        }

        #[test]
        fn a_flash_click_describes_the_program_first() {
            let mut session = session();
            let editor = FakeEditor::new(DEFAULT_SCRIPT);
            let files: Vec<String> = (0..12).map(|n| format!("file{n}.py")).collect();
            let fs = FakeFs {
                files,
                used: 2048,
            };
            session.action_click("command-flash", &editor, &fs);
            assert_eq!(
                session.into_sink().events(),
                [
                    Event::new("files", "11-15", 1),
                    Event::new("fs-used", "0-5", 1),
                    Event::new("lines", "default", 1),
                    Event::new("click", "flash", 1),
                ]
            );
        }

        #[test]
        fn an_untouched_script_reports_default_lines() {
            let mut session = session();
            session.action_click(
                "command-download",
                &FakeEditor::new(DEFAULT_SCRIPT),
                &FakeFs::with_files(&["main.py"]),
            );
            let events = session.into_sink();
            assert!(
                events
                    .events()
                    .contains(&Event::new("lines", "default", 1))
            );
        }

        #[test]
        fn an_edited_script_reports_its_line_bucket() {
            let mut session = session();
            let edited = format!("#first line{}#last line", "\n".repeat(21));
            session.action_click(
                "command-download",
                &FakeEditor::new(&edited),
                &FakeFs::with_files(&["main.py"]),
            );
            let events = session.into_sink();
            assert!(events.events().contains(&Event::new("lines", "21-50", 1)));
        }
    }

    mod load_tests {
        use super::*;

        #[test]
        fn loadable_files_label_with_source_and_extension() {
            let mut session = session();
            session.load(LoadSource::FileUpload, &["samplefile.py"]);
            session.load(LoadSource::FileUpload, &["samplefile.hex"]);
            session.load(LoadSource::EditorDrop, &["main.PY"]);
            session.load(LoadSource::LoadAreaDrop, &["microbit.hex"]);
            assert_eq!(
                session.into_sink().events(),
                [
                    Event::new("load", "file-upload-py", 1),
                    Event::new("load", "file-upload-hex", 1),
                    Event::new("load", "drop-editor-py", 1),
                    Event::new("load", "drop-load-hex", 1),
                ]
            );
        }

        #[test]
        fn other_extensions_label_as_type_errors() {
            let mut session = session();
            session.load(LoadSource::FileUpload, &["invalid.txt"]);
            session.load(LoadSource::EditorDrop, &["notes"]);
            assert_eq!(
                session.into_sink().events(),
                [
                    Event::new("load", "error-file-upload-type-txt", 1),
                    Event::new("load", "error-drop-editor-type-none", 1),
                ]
            );
        }

        #[test]
        fn uploads_of_more_than_one_file_are_one_error() {
            let mut session = session();
            session.load(LoadSource::FileUpload, &["a.py", "b.py"]);
            session.load(LoadSource::FileUpload, &[]);
            assert_eq!(
                session.into_sink().events(),
                [
                    Event::new("load", "error-file-upload-multiple", 1),
                    Event::new("load", "error-file-upload-multiple", 1),
                ]
            );
        }

        #[test]
        fn a_drop_describes_its_first_file_only() {
            let mut session = session();
            session.load(LoadSource::EditorDrop, &["first.py", "second.txt"]);
            assert_eq!(
                session.into_sink().events(),
                [Event::new("load", "drop-editor-py", 1)]
            );
        }

        #[test]
        fn an_empty_drop_reports_nothing() {
            let mut session = session();
            session.load(LoadSource::EditorDrop, &[]);
            session.load(LoadSource::LoadAreaDrop, &[]);
            assert!(session.into_sink().events().is_empty());
        }
    }

    mod webusb_tests {
        use super::*;

        #[test]
        fn flash_times_label_with_their_bucket() {
            let mut session = session();
            session.webusb(WebUsbEvent::FlashTime { duration_ms: 3500 });
            assert_eq!(
                session.into_sink().events(),
                [Event::new("WebUSB-time", "2-4", 1)]
            );
        }

        #[test]
        fn info_and_error_messages_pass_through() {
            let mut session = session();
            session.webusb(WebUsbEvent::Info {
                message: String::from("flash-type-full"),
            });
            session.webusb(WebUsbEvent::Error {
                message: String::from("timeout-error"),
            });
            assert_eq!(
                session.into_sink().events(),
                [
                    Event::new("WebUSB-info", "flash-type-full", 1),
                    Event::new("WebUSB-error", "timeout-error", 1),
                ]
            );
        }

        #[test]
        fn unknown_events_are_errors_naming_the_type() {
            let mut session = session();
            session.webusb(WebUsbEvent::Unknown {
                event_type: String::from("progress"),
                message: String::from("50"),
            });
            assert_eq!(
                session.into_sink().events(),
                [Event::new("WebUSB-error", "unknown-event/progress/50", 1)]
            );
        }
    }
}
