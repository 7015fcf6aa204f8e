// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
ANSI color handling.

A [ColorGuard] writes the opening escape sequence when it is created and the reset
sequence when it is dropped, so the terminal is always restored even if writing the
colored text fails part way through.
*/

use std::io::Write;

pub(crate) const ESCAPE: &str = "\x1b[";
pub(crate) const RESET: &str = "\x1b[0m";

/**
Scoped color for a writer.

Holds the writer mutably for its lifetime; write the colored text through [ColorGuard::writer].
*/
pub(crate) struct ColorGuard<'w, W: Write> {
    writer: &'w mut W,
}

impl<'w, W: Write> ColorGuard<'w, W> {
    pub(crate) fn new(writer: &'w mut W, color_code: &str) -> Self {
        //best effort, like everything else on this path
        let _ = write!(writer, "{ESCAPE}{color_code}m");
        Self { writer }
    }

    pub(crate) fn writer(&mut self) -> &mut W {
        &mut *self.writer
    }
}

impl<W: Write> Drop for ColorGuard<'_, W> {
    fn drop(&mut self) {
        let _ = self.writer.write_all(RESET.as_bytes());
        let _ = self.writer.flush();
    }
}
