//! Diagnostic trace sinks.
//!
//! Navigation reports its steps to a [`TraceSink`] passed in by the caller.
//! The default sink discards everything, keeping navigation free of global
//! logging state; the CLI wires stderr in under `--verbose`, and tests can
//! collect messages in a `Vec<String>`.

use std::io::Write;

/// Receives one human-readable message per traced event.
pub trait TraceSink {
    fn note(&mut self, message: &str);
}

/// Drops every message. The default sink.
pub struct Discard;

impl TraceSink for Discard {
    fn note(&mut self, _message: &str) {}
}

/// Writes each message as a line to the wrapped writer.
///
/// Writes are best effort: a failing writer never aborts the navigation
/// being traced.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn note(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }
}

/// Collects messages for later inspection; used by tests.
impl TraceSink for Vec<String> {
    fn note(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[cfg(test)]
mod trace_tests {
    use super::*;

    #[test]
    fn test_discard_accepts_messages() {
        Discard.note("nothing to see");
    }

    #[test]
    fn test_writer_sink_appends_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.note("first");
        sink.note("second");
        assert_eq!(sink.out, b"first\nsecond\n");
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut messages: Vec<String> = Vec::new();
        messages.note("step one");
        assert_eq!(messages, vec!["step one"]);
    }
}
