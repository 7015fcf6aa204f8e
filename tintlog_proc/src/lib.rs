//SPDX-License-Identifier: MIT OR Apache-2.0

//! # tintlog procedural macros
//!
//! The logging macros re-exported by `tintlog`.  Each one takes a string literal with
//! `{key}` placeholders followed by `key=value` pairs, and expands to roughly:
//!
//! ```ignore
//! // tintlog::warn!("low disk on {vol}", vol=name);
//! {
//!     if tintlog::log_enabled!(tintlog::Severity::Warn) {
//!         let mut f = tintlog::hidden::MessageFormatter::new();
//!         f.write_literal("low disk on ");
//!         f.write_val(&(name));
//!         tintlog::hidden::dispatch(tintlog::Severity::Warn, f, file!(), line!());
//!     }
//! }
//! ```
//!
//! The values are evaluated only inside the `if`, so a suppressed message costs one
//! atomic load.  `file!()` and `line!()` resolve at the call site.

use proc_macro::TokenStream;

mod expand;
mod parser;

/// Logs at `TRACE`.
///
/// ```
/// tintlog::trace!("entering {name}", name="parse");
/// ```
#[proc_macro]
pub fn trace(input: TokenStream) -> TokenStream {
    expand::log_impl(input, "Trace")
}

/// Logs at `DEBUG`.
///
/// ```
/// let bytes = [1u8, 2, 3];
/// tintlog::debug!("read {n} bytes", n=bytes.len());
/// ```
#[proc_macro]
pub fn debug(input: TokenStream) -> TokenStream {
    expand::log_impl(input, "Debug")
}

/// Logs at `INFO`.
///
/// ```
/// tintlog::info!("server started");
/// ```
///
/// Every placeholder needs a value:
///
/// ```compile_fail
/// tintlog::info!("Hello {missing}!", provided=123);
/// ```
#[proc_macro]
pub fn info(input: TokenStream) -> TokenStream {
    expand::log_impl(input, "Info")
}

/// Logs at `WARN`.
///
/// ```
/// let free = 3;
/// tintlog::warn!("only {free}% free", free=free);
/// ```
///
/// The message must be a string literal:
///
/// ```compile_fail
/// let message = "not a literal";
/// tintlog::warn!(message);
/// ```
#[proc_macro]
pub fn warn(input: TokenStream) -> TokenStream {
    expand::log_impl(input, "Warn")
}

/// Logs at `ERROR`.
///
/// ```
/// # let err = std::io::Error::other("disk full");
/// tintlog::error!("write failed: {err}", err=err);
/// ```
///
/// ```compile_fail
/// tintlog::error!("unclosed {brace", brace=1);
/// ```
#[proc_macro]
pub fn error(input: TokenStream) -> TokenStream {
    expand::log_impl(input, "Error")
}

/// Logs at `FATAL`.  This does not exit the process.
///
/// ```
/// tintlog::fatal!("cannot continue: {{state}} is {state}", state="corrupt");
/// ```
///
/// ```compile_fail
/// tintlog::fatal!("unused {a}", a=1, b=2);
/// ```
#[proc_macro]
pub fn fatal(input: TokenStream) -> TokenStream {
    expand::log_impl(input, "Fatal")
}
