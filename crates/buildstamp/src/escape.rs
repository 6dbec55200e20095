//! Escaping of arbitrary strings into source-text expressions.

/// Renders `raw` as a Rust expression that evaluates back to exactly
/// `raw` as a `String`. Total over arbitrary Unicode input.
///
/// The usual shape is a quoted literal. Escaped double quotes have
/// historically been miscompiled by some consumers of the generated text,
/// so any string whose quoted form contains the sequence `\"` is instead
/// rebuilt character by character from the original string.
pub(crate) fn string_expr(raw: &str) -> String {
    let quoted = quoted_literal(raw);
    if quoted.contains("\\\"") {
        char_array_expr(raw)
    } else {
        format!("{quoted}.to_string()")
    }
}

/// `raw` as a double-quoted literal: backslash, line feed, carriage
/// return, and double quote become their two-character escapes.
fn quoted_literal(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + 2);
    escaped.push('"');
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

/// The quote-collision fallback: one char literal per original character,
/// reassembled into a `String` at the point of use. Characters that char
/// literal syntax cannot hold verbatim are escaped; everything else is
/// emitted as itself.
fn char_array_expr(raw: &str) -> String {
    let mut expr = String::from("String::from_iter([");
    for (index, c) in raw.chars().enumerate() {
        if index > 0 {
            expr.push_str(", ");
        }
        match c {
            '\\' => expr.push_str("'\\\\'"),
            '\'' => expr.push_str("'\\''"),
            '\n' => expr.push_str("'\\n'"),
            '\r' => expr.push_str("'\\r'"),
            _ => {
                expr.push('\'');
                expr.push(c);
                expr.push('\'');
            }
        }
    }
    expr.push_str("])");
    expr
}
