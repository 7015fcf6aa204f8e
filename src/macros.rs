// SPDX-License-Identifier: MIT OR Apache-2.0

//! Support code for the logging macros.
//!
//! The procedural macros in `tintlog_proc` expand each call into three steps:
//!
//! 1. check [`log_enabled!`](crate::log_enabled) for the macro's severity;
//! 2. build the message with a [`MessageFormatter`], one `write_literal` or `write_val`
//!    call per piece of the format string;
//! 3. hand the formatter to [`dispatch`] with `file!()` and `line!()` of the call.
//!
//! Values are only evaluated in step 2, so arguments of a suppressed message cost nothing.
//!
//! ```
//! tintlog::set_level(tintlog::Severity::Trace);
//! let volume = "/dev/sda1";
//! tintlog::warn!("low disk on {volume}", volume = volume);
//! ```

use crate::Severity;
use std::fmt::{Display, Write};

/// Returns whether a message at the given [`Severity`](crate::Severity) would be printed.
///
/// ```
/// use tintlog::{Severity, log_enabled};
/// tintlog::set_level(Severity::Warn);
/// assert!(!log_enabled!(Severity::Debug));
/// assert!(log_enabled!(Severity::Error));
/// ```
#[macro_export]
macro_rules! log_enabled {
    ($severity:expr) => {
        $crate::is_enabled($severity)
    };
}

/// Builds the message text for a macro call.
///
/// ```
/// # use tintlog::hidden::MessageFormatter;
/// let mut formatter = MessageFormatter::new();
/// formatter.write_literal("count: ");
/// formatter.write_val(&42);
/// assert_eq!(formatter.as_str(), "count: 42");
/// ```
#[derive(Debug, Default)]
pub struct MessageFormatter {
    message: String,
}

impl MessageFormatter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a static piece of the format string.
    #[inline]
    pub fn write_literal(&mut self, s: &str) {
        self.message.push_str(s);
    }

    /// Appends the `Display` form of a placeholder value.
    #[inline]
    pub fn write_val<Val: Display + ?Sized>(&mut self, val: &Val) {
        //writing to a String can't fail
        let _ = write!(self.message, "{val}");
    }

    pub fn as_str(&self) -> &str {
        &self.message
    }
}

/// Logs the finished message at `severity` for the call site `file:line`.
pub fn dispatch(severity: Severity, formatter: MessageFormatter, file: &'static str, line: u32) {
    crate::log(severity, &formatter.message, file, line);
}
