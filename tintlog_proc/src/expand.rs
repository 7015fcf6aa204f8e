// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::parser::{compile_error, lformat_impl};
use proc_macro::TokenStream;
use std::collections::VecDeque;

const FORMATTER: &str = "__tintlog_formatter";

/// Expands a logging macro call at `severity`, the name of a `tintlog::Severity` variant.
pub fn log_impl(input: TokenStream, severity: &str) -> TokenStream {
    let mut input: VecDeque<_> = input.into_iter().collect();
    let lformat_expand = match lformat_impl(&mut input, FORMATTER) {
        Ok(output) => output,
        Err(message) => return compile_error(&message),
    };
    let src = format!(
        r#"
        {{
            if tintlog::log_enabled!(tintlog::Severity::{severity}) {{
                #[allow(unused_mut)]
                let mut {FORMATTER} = tintlog::hidden::MessageFormatter::new();

                {lformat_expand}
                tintlog::hidden::dispatch(tintlog::Severity::{severity}, {FORMATTER}, file!(), line!());
            }}
        }}
    "#
    );

    src.parse().unwrap()
}
