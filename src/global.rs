// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide console logger.
//!
//! All functions here operate on one sink that writes to standard output. Configuration
//! is process-wide and takes effect for every subsequent call from any thread.
//!
//! # Examples
//!
//! ```
//! use tintlog::Severity;
//!
//! tintlog::set_level(Severity::Warn);
//! tintlog::log_info("hello"); // suppressed
//! tintlog::log_warn("low disk"); // "[WARN] low disk", in yellow
//!
//! tintlog::set_include_site_info(true);
//! tintlog::log_error("boom"); // "[ERROR] boom at src/main.rs:9"
//! ```
//!
//! # Call sites
//!
//! The `log_*` functions are `#[track_caller]`: the file and line reported are those of
//! the code calling them, not of this crate. Wrapping them in your own function reports
//! the wrapper's location unless the wrapper is `#[track_caller]` too.

use crate::Severity;
use crate::log_record::LogRecord;
use crate::sink::LogSink;
use std::io::Stdout;
use std::sync::OnceLock;

static STDOUT_SINK: OnceLock<LogSink<Stdout>> = OnceLock::new();

fn sink() -> &'static LogSink<Stdout> {
    STDOUT_SINK.get_or_init(|| LogSink::new(std::io::stdout()))
}

/// Sets the minimum severity that will be printed.
///
/// Messages below `level` are dropped without taking the output lock.
pub fn set_level(level: Severity) {
    sink().set_level(level);
}

/// The current minimum severity. Defaults to [`Severity::Info`].
pub fn level() -> Severity {
    sink().level()
}

/// Sets whether ` at file:line` is appended to every printed line.
pub fn set_include_site_info(enabled: bool) {
    sink().set_include_site_info(enabled);
}

/// Whether call-site info is appended. Defaults to `false`.
pub fn include_site_info() -> bool {
    sink().include_site_info()
}

/// Whether a message of `severity` would currently be printed.
///
/// ```
/// use tintlog::Severity;
/// tintlog::set_level(Severity::Error);
/// assert!(!tintlog::is_enabled(Severity::Warn));
/// assert!(tintlog::is_enabled(Severity::Fatal));
/// ```
pub fn is_enabled(severity: Severity) -> bool {
    sink().is_enabled(severity)
}

/**
Logs `message` at `severity` with an explicit call site.

This is the path the macros take; prefer the `log_*` functions or the macros, which
fill in the site for you.

```
tintlog::log(tintlog::Severity::Error, "boom", "main", 42);
```

The per-call record is internal; callers pass its parts instead:

```compile_fail
let record = tintlog::LogRecord::new(tintlog::Severity::Error, "boom", "main", 42);
```
*/
pub fn log(severity: Severity, message: &str, file: &'static str, line: u32) {
    let sink = sink();
    if sink.is_enabled(severity) {
        sink.log(&LogRecord::new(severity, message, file, line));
    }
}

/// Logs at [`Severity::Trace`], in gray.
#[track_caller]
pub fn log_trace(message: &str) {
    sink().trace(message);
}

/// Logs at [`Severity::Debug`], in cyan.
#[track_caller]
pub fn log_debug(message: &str) {
    sink().debug(message);
}

/// Logs at [`Severity::Info`], in white.
#[track_caller]
pub fn log_info(message: &str) {
    sink().info(message);
}

/// Logs at [`Severity::Warn`], in yellow.
#[track_caller]
pub fn log_warn(message: &str) {
    sink().warn(message);
}

/// Logs at [`Severity::Error`], in red.
#[track_caller]
pub fn log_error(message: &str) {
    sink().error(message);
}

/**
Logs at [`Severity::Fatal`], bright white on red.

This only prints.  Exiting the process afterwards is up to the caller.
*/
#[track_caller]
pub fn log_fatal(message: &str) {
    sink().fatal(message);
}
