use std::fmt::{Display, Write};

// ── RecordWriter ──────────────────────────────────────────────────────────

/// Builds the textual record stream.
///
/// Fields within a record are separated by single spaces and records are
/// terminated by a newline, so concatenated scenes stay token-exact with
/// no leading or trailing separators.
#[derive(Debug, Default)]
pub struct RecordWriter {
    buf: String,
    mid_record: bool,
}

impl RecordWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field to the current record.
    pub fn field(&mut self, value: impl Display) -> &mut Self {
        if self.mid_record {
            self.buf.push(' ');
        }
        write!(self.buf, "{value}").expect("writing to a String cannot fail");
        self.mid_record = true;
        self
    }

    /// Terminates the current record.
    pub fn end_record(&mut self) -> &mut Self {
        self.buf.push('\n');
        self.mid_record = false;
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
