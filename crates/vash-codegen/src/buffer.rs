//! Buffer-append statements.
//!
//! Every piece of rendered output becomes one `__vbuffer.push(...)` statement
//! on its own line. The condenser relies on this exact shape to merge adjacent
//! literal pushes.

/// Name of the local output buffer in generated code.
pub const BUFFER_VAR: &str = "__vbuffer";

pub(crate) const BUFFER_HEAD: &str = "\n__vbuffer.push(";
pub(crate) const BUFFER_TAIL: &str = ");\n";

/// Append statement for literal text. `content` must already be escaped for a
/// single-quoted string.
pub fn push_literal(content: &str) -> String {
    let mut out = String::with_capacity(BUFFER_HEAD.len() + content.len() + 2 + BUFFER_TAIL.len());
    out.push_str(BUFFER_HEAD);
    out.push('\'');
    out.push_str(content);
    out.push('\'');
    out.push_str(BUFFER_TAIL);
    out
}

/// Append statement for a computed value.
pub fn push_expression(expr: &str) -> String {
    let mut out = String::with_capacity(BUFFER_HEAD.len() + expr.len() + BUFFER_TAIL.len());
    out.push_str(BUFFER_HEAD);
    out.push_str(expr);
    out.push_str(BUFFER_TAIL);
    out
}
