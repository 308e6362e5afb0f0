//! Post-pass over generated source.
//!
//! Two literal pushes separated only by newlines are merged into one:
//!
//! ```text
//! __vbuffer.push('<');
//! __vbuffer.push('p');
//! ```
//!
//! becomes `__vbuffer.push('<p');`. Runs of newlines are then collapsed to a
//! single newline.
//!
//! A push counts as literal only when its argument is one single-quoted
//! string: it opens with `push('`, holds no unescaped quote, and closes with
//! `');`. Literal text is always escaped, so an expression that merely starts
//! or ends with a quoted string is never joined to its neighbours.

use memchr::memmem;

const LITERAL_OPEN: &str = "__vbuffer.push('";
const LITERAL_CLOSE: &str = "');";

/// Merge adjacent literal pushes and collapse newline runs.
///
/// The result is a fixed point: condensing it again changes nothing.
pub fn condense(source: &str) -> String {
    collapse_newlines(&merge_literal_pushes(source))
}

fn merge_literal_pushes(source: &str) -> String {
    let finder = memmem::Finder::new(LITERAL_OPEN);
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(pos) = finder.find(rest.as_bytes()) {
        let open_end = pos + LITERAL_OPEN.len();
        out.push_str(&rest[..open_end]);
        let body = &rest[open_end..];
        let Some(len) = literal_len(body) else {
            rest = body;
            continue;
        };

        out.push_str(&body[..len]);
        rest = &body[len + LITERAL_CLOSE.len()..];
        while let Some((next, len)) = following_literal(rest) {
            out.push_str(&next[..len]);
            rest = &next[len + LITERAL_CLOSE.len()..];
        }
        out.push_str(LITERAL_CLOSE);
    }
    out.push_str(rest);
    out
}

/// A literal push separated from the previous one by newlines only. Returns
/// the text after its opening quote and the length of its content.
fn following_literal(rest: &str) -> Option<(&str, usize)> {
    let after_newlines = rest.trim_start_matches('\n');
    if after_newlines.len() == rest.len() {
        return None;
    }
    let body = after_newlines.strip_prefix(LITERAL_OPEN)?;
    literal_len(body).map(|len| (body, len))
}

/// Length of a string literal's content when `body` (the text after
/// `push('`) is exactly one literal followed by `');`.
fn literal_len(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\'' => return body[i..].starts_with(LITERAL_CLOSE).then_some(i),
            b'\n' | b'\r' => return None,
            _ => i += 1,
        }
    }
    None
}

fn collapse_newlines(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut last_was_newline = false;
    for ch in source.chars() {
        if ch == '\n' {
            if last_was_newline {
                continue;
            }
            last_was_newline = true;
        } else {
            last_was_newline = false;
        }
        out.push(ch);
    }
    out
}
