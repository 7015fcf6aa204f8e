// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging through the global stdout sink from many threads while the configuration
//! changes underneath.  Line integrity is checked against an in-memory sink in the unit
//! tests; this checks the public API holds up under contention.

use tintlog::Severity;

#[test]
fn concurrent_global_logging() {
    std::thread::scope(|scope| {
        for t in 0..4 {
            scope.spawn(move || {
                for i in 0..50 {
                    tintlog::log_warn(&format!("worker {t} step {i}"));
                    tintlog::error!("worker {t} macro step {i}", t = t, i = i);
                }
            });
        }
        scope.spawn(|| {
            for round in 0..100 {
                tintlog::set_level(Severity::ALL[round % Severity::ALL.len()]);
                tintlog::set_include_site_info(round % 3 == 0);
            }
        });
    });
    tintlog::set_level(Severity::Error);
    assert_eq!(tintlog::level(), Severity::Error);
}
