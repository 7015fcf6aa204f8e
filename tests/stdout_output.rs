// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact stdout text of the public API.
//!
//! The sink writes straight to the process stdout, which the test harness does not
//! capture, so `stdout_carries_exact_lines` re-runs this binary with only
//! `emits_lines` selected and compares what the child printed.  The child writes the
//! text it expects to stderr, computed from the `file!()` and `line!()` of each call.

use std::process::Command;
use tintlog::Severity;

const CHILD_ENV: &str = "TINTLOG_STDOUT_CHILD";

#[test]
fn emits_lines() {
    if std::env::var_os(CHILD_ENV).is_none() {
        return;
    }
    let file = file!();
    tintlog::set_level(Severity::Warn);
    tintlog::set_include_site_info(true);

    tintlog::log_info("hidden");
    tintlog::info!("hidden {x}", x = 1);
    let warn_line = line!() + 1;
    tintlog::warn!("a {{b}} \"q\" \u{2713} {x} end", x = 5);
    let error_line = line!() + 1;
    tintlog::log_error("boom");

    tintlog::set_include_site_info(false);
    tintlog::log_warn("low disk");
    tintlog::fatal!("{n} left", n = 0);

    eprint!(
        "\x1b[33m[WARN] a {{b}} \"q\" \u{2713} 5 end at {file}:{warn_line}\n\x1b[0m\
         \x1b[31m[ERROR] boom at {file}:{error_line}\n\x1b[0m\
         \x1b[33m[WARN] low disk\n\x1b[0m\
         \x1b[41;97m[FATAL] 0 left\n\x1b[0m"
    );
}

#[test]
fn stdout_carries_exact_lines() {
    if std::env::var_os(CHILD_ENV).is_some() {
        return;
    }
    let exe = std::env::current_exe().unwrap();
    let child = Command::new(exe)
        .args(["--exact", "emits_lines", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();
    let stdout = String::from_utf8(child.stdout).unwrap();
    let expected = String::from_utf8(child.stderr).unwrap();
    assert!(child.status.success(), "child failed:\n{stdout}\n{expected}");

    //the harness prints its own lines around ours; keep first escape through last reset
    let start = stdout.find("\x1b[").expect("no colored output");
    let end = stdout.rfind("\x1b[0m").expect("no reset") + "\x1b[0m".len();
    assert_eq!(&stdout[start..end], expected);
    assert!(expected.contains(" at tests/stdout_output.rs:"), "{expected:?}");
}
