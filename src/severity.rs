// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels.
//!
//! [`Severity`] is totally ordered from [`Severity::Trace`] to [`Severity::Fatal`]. The
//! order is what the sink compares against its threshold: a message is printed when its
//! severity is greater than or equal to the current minimum.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The severity of a log message.
///
/// ```
/// use tintlog::Severity;
/// assert!(Severity::Warn > Severity::Info);
/// assert_eq!(Severity::default(), Severity::Info);
/// assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    /// Very detailed tracing, off by default
    Trace = 0,
    /// Debugging output, off by default
    Debug = 1,
    /// Normal operation; the default threshold
    #[default]
    Info = 2,
    /// Something looks wrong
    Warn = 3,
    /// An operation failed
    Error = 4,
    /// The program cannot continue.  Logging it does not exit the process.
    Fatal = 5,
}

impl Severity {
    /// Every severity, in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// The label printed between brackets.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /**
    The SGR parameters used to color a line of this severity.

    This is the part between `ESC[` and `m`.
    */
    pub const fn color_code(self) -> &'static str {
        match self {
            Severity::Trace => "90",
            Severity::Debug => "36",
            Severity::Info => "37",
            Severity::Warn => "33",
            Severity::Error => "31",
            Severity::Fatal => "41;97",
        }
    }

    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Self::as_u8`] for values this crate stored itself.
    pub(crate) const fn from_u8_lossy(raw: u8) -> Severity {
        match raw {
            0 => Severity::Trace,
            1 => Severity::Debug,
            2 => Severity::Info,
            3 => Severity::Warn,
            4 => Severity::Error,
            _ => Severity::Fatal,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string or integer does not name a [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ParseSeverityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown severity '{}', expected one of trace, debug, info, warn, error, fatal",
            self.input
        )
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("warning") {
            return Ok(Severity::Warn);
        }
        Severity::ALL
            .into_iter()
            .find(|severity| severity.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSeverityError {
                input: s.to_string(),
            })
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: u8) -> Result<Self, ParseSeverityError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ParseSeverityError {
                input: value.to_string(),
            })
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

/*
Boilerplate notes.

Copy/Clone, Eq/Ord and Hash are derived: a severity is a small ordinal.
Default is Info, which is also the default threshold.
Display prints the label so `{}` matches what appears in the output line.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_total_and_ascending() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn labels_and_colors() {
        let table: Vec<_> = Severity::ALL
            .iter()
            .map(|s| (s.label(), s.color_code()))
            .collect();
        assert_eq!(
            table,
            [
                ("TRACE", "90"),
                ("DEBUG", "36"),
                ("INFO", "37"),
                ("WARN", "33"),
                ("ERROR", "31"),
                ("FATAL", "41;97"),
            ]
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("TRACE".parse::<Severity>(), Ok(Severity::Trace));
        assert_eq!(" Error ".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warn));
        let err = "loud".parse::<Severity>().unwrap_err();
        assert_eq!(err.input(), "loud");
        assert!(err.to_string().contains("'loud'"));
    }

    #[test]
    fn u8_conversion() {
        for severity in Severity::ALL {
            assert_eq!(Severity::try_from(u8::from(severity)), Ok(severity));
            assert_eq!(Severity::from_u8_lossy(severity.as_u8()), severity);
        }
        assert!(Severity::try_from(6).is_err());
    }

    #[test]
    fn display_is_label() {
        assert_eq!(Severity::Fatal.to_string(), "FATAL");
    }
}
