//! Quoting of encoded strings for display and copy-paste.
use std::fmt::Write;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Python `repr(str)` literal.
    #[default]
    Python,
    /// Rust string literal as produced by `{:?}`.
    Rust,
}

pub fn quote(text: &str, style: QuoteStyle) -> String {
    match style {
        QuoteStyle::Python => python_repr(text),
        QuoteStyle::Rust => format!("{text:?}"),
    }
}

fn python_repr(text: &str) -> String {
    let delim = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delim);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || ('\u{7f}'..='\u{a0}').contains(&c) => {
                // writing into a String cannot fail
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
