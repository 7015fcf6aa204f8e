//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# tintlog

tintlog is a small, thread-safe console logger.  It prints leveled, colored lines to
standard output, optionally followed by the file and line of the call.

# Levels

| Severity | Label   | Color                          |
|----------|---------|--------------------------------|
| trace    | `TRACE` | gray                           |
| debug    | `DEBUG` | cyan                           |
| info     | `INFO`  | white                          |
| warn     | `WARN`  | yellow                         |
| error    | `ERROR` | red                            |
| fatal    | `FATAL` | bright white on red background |

A message is printed when its severity is at least the current threshold, set with
[set_level].  The default threshold is [Severity::Info].

# Output

Each message is one line:

```text
ESC[<color>m[<LABEL>] <message>[ at <file>:<line>]\nESC[0m
```

The ` at <file>:<line>` suffix appears only after `set_include_site_info(true)`.

# The API

Plain functions take a message and capture the caller's location:

```rust
tintlog::set_level(tintlog::Severity::Debug);
tintlog::log_debug("connecting");
tintlog::log_warn("retrying");
```

The macros accept a format string with `{key}` placeholders and `key=value` pairs.
Values are only evaluated if the message is printed:

```rust
# fn expensive() -> u32 { 7 }
let attempt = 3;
tintlog::info!("attempt {n} of {max}", n=attempt, max=expensive());
tintlog::error!("literal braces: {{ and }}");
```

# Multithreading

Any thread may log at any time.  Each line is written under a single lock, so lines from
different threads never interleave, though their relative order is not specified.
Configuration changes are visible to every subsequent call.
*/

mod color;
mod global;
mod log_record;
mod macros;
mod severity;
mod sink;

pub use global::{
    include_site_info, is_enabled, level, log, log_debug, log_error, log_fatal, log_info,
    log_trace, log_warn, set_include_site_info, set_level,
};
pub use severity::{ParseSeverityError, Severity};

pub use tintlog_proc::{debug, error, fatal, info, trace, warn};

#[doc(hidden)]
pub mod hidden {
    pub use crate::macros::{MessageFormatter, dispatch};
}
extern crate self as tintlog;
