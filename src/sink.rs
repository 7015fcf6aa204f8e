// SPDX-License-Identifier: MIT OR Apache-2.0

//! The gated, locked write path.
//!
//! A [`LogSink`] owns a writer behind a mutex plus the two configuration values that
//! decide what reaches it: the minimum [`Severity`] and whether call-site info is
//! appended. The process-wide sink in [`crate::global`] wraps stdout; tests wrap a
//! `Vec<u8>`.
//!
//! # Thread safety
//!
//! The configuration lives in atomics so setters and readers never race in the
//! undefined-behavior sense. The severity gate is checked before the lock is taken, so
//! a message that is filtered out never contends for the writer. The site-info flag is
//! read once per record while the lock is held.
//!
//! Each record is rendered into a buffer and handed to the writer with one `write_all`
//! under a single lock acquisition, so lines never interleave with each other, nor with
//! other users of stdout.

use crate::Severity;
use crate::log_record::LogRecord;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

pub(crate) struct LogSink<W> {
    minimum_level: AtomicU8,
    include_site_info: AtomicBool,
    output: Mutex<W>,
}

impl<W: Write> LogSink<W> {
    /// A sink with the default configuration: threshold INFO, no site info.
    pub(crate) const fn new(output: W) -> Self {
        Self {
            minimum_level: AtomicU8::new(Severity::Info.as_u8()),
            include_site_info: AtomicBool::new(false),
            output: Mutex::new(output),
        }
    }

    pub(crate) fn set_level(&self, level: Severity) {
        self.minimum_level.store(level.as_u8(), Ordering::Relaxed);
    }

    pub(crate) fn level(&self) -> Severity {
        Severity::from_u8_lossy(self.minimum_level.load(Ordering::Relaxed))
    }

    pub(crate) fn set_include_site_info(&self, enabled: bool) {
        self.include_site_info.store(enabled, Ordering::Relaxed);
    }

    pub(crate) fn include_site_info(&self) -> bool {
        self.include_site_info.load(Ordering::Relaxed)
    }

    #[inline]
    pub(crate) fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    /**
    Writes the record if its severity passes the gate.

    Write failures are dropped and a poisoned lock is recovered; logging never fails
    the caller.
    */
    pub(crate) fn log(&self, record: &LogRecord) {
        if !self.is_enabled(record.severity()) {
            return;
        }
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let include_site_info = self.include_site_info();
        //one write per record: Stdout::write_all holds the stream lock for the whole line,
        //so an unrelated println! elsewhere can't land inside it
        let mut line = Vec::with_capacity(record.message().len() + 32);
        let _ = record.write_colored(&mut line, include_site_info);
        let _ = output.write_all(&line);
        let _ = output.flush();
    }

    #[track_caller]
    pub(crate) fn log_here(&self, severity: Severity, message: &str) {
        //check first so a suppressed call doesn't allocate
        if self.is_enabled(severity) {
            self.log(&LogRecord::here(severity, message));
        }
    }

    #[track_caller]
    pub(crate) fn trace(&self, message: &str) {
        self.log_here(Severity::Trace, message);
    }

    #[track_caller]
    pub(crate) fn debug(&self, message: &str) {
        self.log_here(Severity::Debug, message);
    }

    #[track_caller]
    pub(crate) fn info(&self, message: &str) {
        self.log_here(Severity::Info, message);
    }

    #[track_caller]
    pub(crate) fn warn(&self, message: &str) {
        self.log_here(Severity::Warn, message);
    }

    #[track_caller]
    pub(crate) fn error(&self, message: &str) {
        self.log_here(Severity::Error, message);
    }

    #[track_caller]
    pub(crate) fn fatal(&self, message: &str) {
        self.log_here(Severity::Fatal, message);
    }
}

impl<W> LogSink<W> {
    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> std::fmt::Debug for LogSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSink")
            .field(
                "minimum_level",
                &Severity::from_u8_lossy(self.minimum_level.load(Ordering::Relaxed)),
            )
            .field(
                "include_site_info",
                &self.include_site_info.load(Ordering::Relaxed),
            )
            .finish_non_exhaustive()
    }
}
