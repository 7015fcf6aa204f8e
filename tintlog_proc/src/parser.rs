//SPDX-License-Identifier: MIT OR Apache-2.0

//! Format string parsing.
//!
//! Turns `"text {key} more", key=value` into a sequence of `write_literal` / `write_val`
//! calls on a formatter variable.

use proc_macro::{TokenStream, TokenTree};
use std::collections::{HashMap, HashSet, VecDeque};

/// Turns a message into a `compile_error!` invocation.
pub fn compile_error(message: &str) -> TokenStream {
    format!("compile_error!({message:?});")
        .parse()
        .expect("compile_error! invocation must tokenize")
}

/// Consumes tokens up to and including the `=` of a `key=value` pair.
///
/// Returns `Ok(None)` when the input is exhausted before any token is read.
fn parse_key(input: &mut VecDeque<TokenTree>) -> Result<Option<String>, String> {
    let key = match input.pop_front() {
        None => return Ok(None),
        Some(TokenTree::Ident(i)) => i.to_string(),
        Some(other) => return Err(format!("Expected a key, found '{other}'")),
    };
    match input.pop_front() {
        Some(TokenTree::Punct(p)) if p.as_char() == '=' => Ok(Some(key)),
        _ => Err(format!("Expected '=' after key '{key}'")),
    }
}

/// Consumes tokens up to a top-level `,` or the end of input.
///
/// Commas inside `()`, `[]` or `{}` belong to a single group token and don't end the value.
fn parse_value(input: &mut VecDeque<TokenTree>) -> TokenStream {
    let mut value = Vec::new();
    while let Some(token) = input.pop_front() {
        if matches!(&token, TokenTree::Punct(p) if p.as_char() == ',') {
            break;
        }
        value.push(token);
    }
    value.into_iter().collect()
}

/// Parses the `, key=value, ...` tail following the format string.
fn build_kvs(input: &mut VecDeque<TokenTree>) -> Result<HashMap<String, String>, String> {
    let mut kvs = HashMap::new();
    if input.is_empty() {
        return Ok(kvs);
    }
    match input.pop_front() {
        Some(TokenTree::Punct(p)) if p.as_char() == ',' => {}
        _ => return Err("Expected ','".to_string()),
    }
    while let Some(key) = parse_key(input)? {
        let value = parse_value(input);
        if value.is_empty() {
            return Err(format!("Key {key} has no value"));
        }
        if kvs.insert(key.clone(), value.to_string()).is_some() {
            return Err(format!("Key {key} given twice"));
        }
    }
    Ok(kvs)
}

/// Strips the quotes from a plain (non-raw) string literal token.
fn string_literal(token: Option<TokenTree>) -> Result<String, String> {
    const EXPECTED: &str = "expected a string literal as the first argument";
    match token {
        Some(TokenTree::Literal(l)) => {
            let out = l.to_string();
            if out.len() < 2 || !out.starts_with('"') || !out.ends_with('"') {
                return Err(EXPECTED.to_string());
            }
            Ok(out[1..out.len() - 1].to_string())
        }
        _ => Err(EXPECTED.to_string()),
    }
}

fn push_literal(source: &mut String, formatter: &str, literal: &mut String) {
    if literal.is_empty() {
        return;
    }
    source.push_str(formatter);
    source.push_str(".write_literal(\"");
    source.push_str(literal);
    source.push_str("\");\n");
    literal.clear();
}

/**
Generates formatter calls for a format string and its key/value pairs.

`formatter` is the name of the variable the calls are made on.  The literal text is kept in
its source form, so escape sequences such as `\n` or `\u{1F600}` pass through unchanged.
`{{` and `}}` produce single braces.

Returns the generated statements, or a message suitable for `compile_error!`.
*/
pub fn lformat_impl(input: &mut VecDeque<TokenTree>, formatter: &str) -> Result<TokenStream, String> {
    let format_string = string_literal(input.pop_front())?;
    let kvs = build_kvs(input)?;
    let mut used = HashSet::new();

    let mut source = String::new();
    let mut literal = String::new();
    let mut chars = format_string.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                //copy the escape as-is; \u{...} must not be read as a placeholder
                literal.push(c);
                let Some(escaped) = chars.next() else { break };
                literal.push(escaped);
                if escaped == 'u' && chars.peek() == Some(&'{') {
                    for d in chars.by_ref() {
                        literal.push(d);
                        if d == '}' {
                            break;
                        }
                    }
                }
            }
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err("Unmatched '}' in format string; use '}}' for a literal brace".to_string()),
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(k) => key.push(k),
                        None => return Err("Expected '}'".to_string()),
                    }
                }
                let key = key.trim().to_string();
                let value = kvs
                    .get(&key)
                    .ok_or_else(|| format!("Key {key} not found"))?;
                used.insert(key);
                push_literal(&mut source, formatter, &mut literal);
                source.push_str(formatter);
                source.push_str(".write_val(&(");
                source.push_str(value);
                source.push_str("));\n");
            }
            other => literal.push(other),
        }
    }
    push_literal(&mut source, formatter, &mut literal);

    let mut unused: Vec<_> = kvs.keys().filter(|k| !used.contains(*k)).collect();
    if !unused.is_empty() {
        unused.sort();
        return Err(format!("Key {} is never used in the format string", unused[0]));
    }

    source
        .parse()
        .map_err(|e| format!("could not tokenize message: {e}"))
}
