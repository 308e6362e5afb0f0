//! String escaping for text spliced into generated source.
//!
//! Literal content is always emitted inside single-quoted JavaScript strings
//! (see [`crate::buffer`]). The debug copy of the template source is emitted
//! inside a double-quoted string.

/// Line breaks in the debug source copy are replaced by this marker; the
/// runtime error reporter turns it back into newlines.
pub const DEBUG_LINE_BREAK: &str = "!LB!";

/// Escape text so it can sit inside a single-quoted string literal.
///
/// Backslashes, single quotes and line terminators are escaped. Double quotes
/// are left alone since they cannot end the literal.
pub fn escape_markup_content(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape the original template source for the debug error report.
///
/// The result never contains a raw line break or an unescaped quote, so it can
/// be placed between double quotes in the generated `catch` block.
pub fn escape_for_debug(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 16);
    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(DEBUG_LINE_BREAK);
            }
            '\n' | '\u{2028}' | '\u{2029}' => out.push_str(DEBUG_LINE_BREAK),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out
}

/// Words that cannot name a `var`: ECMAScript reserved words, strict-mode
/// reservations and the literal keywords.
pub const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Whether `name` can be used verbatim as a JavaScript variable name.
///
/// ASCII letters, digits, `_` and `$`, not starting with a digit, and not one
/// of [`RESERVED_WORDS`].
pub fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b'$' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
        && !RESERVED_WORDS.contains(&name)
}
