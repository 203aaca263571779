//! Analytics events and the sinks that receive them.

use std::io::Write;

/// One analytics event: the action/label/value triple the editor reports
/// for every tracked interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// What happened, e.g. `click` or `load`.
    pub action: String,
    /// The qualifier for the action, e.g. a button name or a range bucket.
    pub label: String,
    /// The count attached to the event, in practice always `1`.
    pub value: u32,
}

impl Event {
    /// Creates an event from its action/label/value triple.
    #[must_use]
    pub fn new(action: impl Into<String>, label: impl Into<String>, value: u32) -> Self {
        Self {
            action: action.into(),
            label: label.into(),
            value,
        }
    }
}

/// A fire-and-forget receiver for analytics events.
///
/// Delivery is never confirmed: a sink that can fail swallows its failures
/// rather than reporting them back to the editor.
pub trait EventSink {
    /// Accepts one event.
    fn send_event(&mut self, event: Event);
}

/// Sink that keeps every event it receives, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<Event>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the received events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl EventSink for RecordingSink {
    fn send_event(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Sink that writes each event as a `metric:` line.
///
/// This is the local-development form of the transport: instead of shipping
/// events to a collector it prints them where a developer can read them.
#[derive(Debug)]
pub struct WriteSink<W> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Creates a sink writing to the given writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for WriteSink<W> {
    fn send_event(&mut self, event: Event) {
        // A failed write is dropped like a failed send.
        let _ = writeln!(
            self.writer,
            "metric: {} {} {}",
            event.action, event.label, event.value
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod recording_sink_tests {
        use super::*;

        #[test]
        fn keeps_events_in_emission_order() {
            let mut sink = RecordingSink::new();
            sink.send_event(Event::new("click", "download", 1));
            sink.send_event(Event::new("viewport", "481-890", 1));
            assert_eq!(
                sink.events(),
                [
                    Event::new("click", "download", 1),
                    Event::new("viewport", "481-890", 1),
                ]
            );
        }

        #[test]
        fn starts_empty() {
            assert!(RecordingSink::new().events().is_empty());
        }
    }

    mod write_sink_tests {
        use super::*;

        #[test]
        fn writes_the_metric_line_form() {
            let mut sink = WriteSink::new(Vec::new());
            sink.send_event(Event::new("click", "download", 1));
            sink.send_event(Event::new("lines", "default", 1));
            let written = String::from_utf8(sink.into_inner()).expect("metric lines are UTF-8");
            assert_eq!(written, "metric: click download 1\nmetric: lines default 1\n");
        }
    }
}
