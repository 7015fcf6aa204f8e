// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-call log record.
//!
//! A [`LogRecord`] is built for each call that passes the severity gate, rendered once
//! while the sink holds its output lock, and then discarded.

use crate::Severity;
use crate::color::ColorGuard;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::panic::Location;

/**
A single log message and the call site that produced it.

The label and color of the line are derived from [LogRecord::severity].
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct LogRecord {
    severity: Severity,
    message: String,
    file: &'static str,
    line: u32,
}

impl LogRecord {
    pub(crate) fn new(severity: Severity, message: impl Into<String>, file: &'static str, line: u32) -> Self {
        Self {
            severity,
            message: message.into(),
            file,
            line,
        }
    }

    /// Builds a record whose site is the caller's location.
    #[track_caller]
    pub(crate) fn here(severity: Severity, message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::new(severity, message, location.file(), location.line())
    }

    pub(crate) fn severity(&self) -> Severity {
        self.severity
    }

    pub(crate) fn label(&self) -> &'static str {
        self.severity.label()
    }

    pub(crate) fn color_code(&self) -> &'static str {
        self.severity.color_code()
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    /**
    Writes the full colored line: open escape, `[LABEL] message`, the optional
    ` at file:line` suffix, newline, reset escape.

    The reset is written even when an earlier write fails.
    */
    pub(crate) fn write_colored<W: Write>(&self, writer: &mut W, include_site_info: bool) -> std::io::Result<()> {
        let mut color = ColorGuard::new(writer, self.color_code());
        let out = color.writer();
        write!(out, "[{}] {}", self.label(), self.message)?;
        if include_site_info {
            write!(out, " at {}:{}", self.file, self.line)?;
        }
        out.write_all(b"\n")
    }
}

/// The uncolored line without the site suffix or newline.
impl Display for LogRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.label(), self.message)
    }
}

/*
Boilerplate notes for LogRecord:

- Debug, Clone, PartialEq/Eq, Hash: derived, all fields support them.
- Default: not implemented, a record without a site is meaningless.
- Ord: no meaningful ordering between records.
- Display: the bracketed label and message, matching the visible text of the line.
*/

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record: &LogRecord, site: bool) -> String {
        let mut out = Vec::new();
        record.write_colored(&mut out, site).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_without_site() {
        let record = LogRecord::new(Severity::Warn, "low disk", "main", 7);
        assert_eq!(render(&record, false), "\x1b[33m[WARN] low disk\n\x1b[0m");
    }

    #[test]
    fn renders_with_site() {
        let record = LogRecord::new(Severity::Error, "boom", "main", 42);
        assert_eq!(render(&record, true), "\x1b[31m[ERROR] boom at main:42\n\x1b[0m");
    }

    #[test]
    fn empty_message_is_verbatim() {
        let record = LogRecord::new(Severity::Fatal, "", "f.rs", 0);
        assert_eq!(render(&record, true), "\x1b[41;97m[FATAL]  at f.rs:0\n\x1b[0m");
    }

    #[test]
    fn here_captures_caller() {
        let (record, line) = (LogRecord::here(Severity::Info, "x"), line!());
        assert_eq!(record.file, file!());
        assert_eq!(record.line, line);
        assert_eq!(record.to_string(), "[INFO] x");
    }
}
