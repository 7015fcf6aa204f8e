// SPDX-License-Identifier: MIT OR Apache-2.0
use std::sync::atomic::{AtomicUsize, Ordering};
use tintlog::{Severity, log_enabled};

static EVALUATED: AtomicUsize = AtomicUsize::new(0);

fn counted(value: &str) -> &str {
    EVALUATED.fetch_add(1, Ordering::SeqCst);
    value
}

#[test]
fn arguments_evaluated_only_when_enabled() {
    tintlog::set_level(Severity::Warn);
    assert!(!log_enabled!(Severity::Info));

    tintlog::trace!("{v}", v = counted("trace"));
    tintlog::debug!("{v}", v = counted("debug"));
    tintlog::info!("{v}", v = counted("info"));
    assert_eq!(EVALUATED.load(Ordering::SeqCst), 0);

    tintlog::warn!("{v}", v = counted("warn"));
    tintlog::error!("{v}", v = counted("error"));
    tintlog::fatal!("{v} and {w}", v = counted("fatal"), w = counted("again"));
    assert_eq!(EVALUATED.load(Ordering::SeqCst), 4);
}

#[test]
fn macro_forms_compile() {
    let name = String::from("disk0");
    let sizes = vec![1, 2, 3];
    tintlog::warn!("no placeholders");
    tintlog::warn!("trailing comma {n}", n = 1,);
    tintlog::warn!("{name} has {count} parts", name = name, count = sizes.len());
    tintlog::warn!("call with commas {sum}", sum = sizes.iter().fold(0, |a, b| a + b));
    tintlog::warn!("escapes \"quoted\" {{braces}} \u{2713} {x}", x = 'x');
    tintlog::warn!("cast {v}", v = sizes.len() as u8);
    //the name was only borrowed by the macro
    assert_eq!(name, "disk0");
}
