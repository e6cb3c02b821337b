//! # response-format
//!
//! Turns the strings returned by the lookup API into display lines for a chat message.
//!
//! Each response is usually a JSON document wrapped in markdown code fences. [`format_response`]
//! strips the fences, parses the JSON and renders it with [`format_value`]:
//!
//! ```text
//! {"full_name": "A", "phones": ["1", "2"]}
//!
//! • Full Name: A
//! • Phones
//!   #1
//!     1
//!   #2
//!     2
//! ```
//!
//! Text that is not JSON is shown as-is. [`render_lines`] joins lines and applies the
//! [`MAX_MESSAGE_CHARS`] ceiling.

use serde_json::Value;
use std::borrow::Cow;

/// Ceiling for one chat message body, in characters (Unicode scalar values).
///
/// Telegram's own limit is 4096 UTF-16 code units, so text made mostly of astral-plane
/// characters (emoji) can still be rejected at this length; callers handle the failed send.
pub const MAX_MESSAGE_CHARS: usize = 4000;

const INDENT: &str = "  ";
const BULLET: &str = "•";

/// Formats one raw API response string into display lines.
///
/// Removes every ```` ```json ```` and ```` ``` ```` marker, trims, and parses the rest as JSON.
/// Unparseable text is returned as a single line, truncated to [`MAX_MESSAGE_CHARS`].
pub fn format_response(raw: &str) -> Vec<String> {
    let text = strip_code_fences(raw);
    match serde_json::from_str::<Value>(&quote_wide_integers(&text)) {
        Ok(value) => format_value(&value, 0),
        Err(_) => vec![truncate_chars(&text, MAX_MESSAGE_CHARS).to_string()],
    }
}

/// Renders a JSON value at the given depth (two spaces of indentation per level).
///
/// Objects keep source key order. Nested objects and arrays get a `• Key` header and are rendered
/// one level deeper; scalar members render as `• Key: value`. Array elements get a `#n` header
/// (1-based) with the element one level deeper. A scalar on its own renders as one line.
pub fn format_value(value: &Value, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    push_value(&mut lines, value, depth);
    lines
}

fn push_value(lines: &mut Vec<String>, value: &Value, depth: usize) {
    let pad = INDENT.repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, member) in map {
                let key = title_case_key(key);
                if is_container(member) {
                    lines.push(format!("{pad}{BULLET} {key}"));
                    push_value(lines, member, depth + 1);
                } else {
                    lines.push(format!("{pad}{BULLET} {key}: {}", scalar_text(member)));
                }
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                lines.push(format!("{pad}#{}", i + 1));
                push_value(lines, item, depth + 1);
            }
        }
        scalar => lines.push(format!("{pad}{}", scalar_text(scalar))),
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Display text for a scalar: strings unquoted, everything else as JSON prints it.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turns an API key such as `father_name` into `Father Name`.
///
/// Underscores become spaces; then every run of cased letters is capitalised: its first letter
/// upper-case, the rest lower-case. Anything without case (space, digit, punctuation, CJK) starts a
/// new run, so `ip_v4` becomes `Ip V4`, `2fa_code` becomes `2Fa Code` and `中a` becomes `中A`.
pub fn title_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Returns at most `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Joins lines with `\n` and truncates the result to [`MAX_MESSAGE_CHARS`].
pub fn render_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    truncate_chars(&joined, MAX_MESSAGE_CHARS).to_string()
}

fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Wraps integer literals that fit neither `i64` nor `u64` in quotes, so they parse as strings and
/// display digit for digit instead of being rounded through `f64`. Text inside strings is untouched.
fn quote_wide_integers(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut copied = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' => {
                in_string = true;
                i += 1;
            }
            b'-' | b'0'..=b'9' => {
                let start = i;
                i += 1;
                while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-') {
                    i += 1;
                }
                let token = &text[start..i];
                if is_wide_integer(token) {
                    out.push_str(&text[copied..start]);
                    out.push('"');
                    out.push_str(token);
                    out.push('"');
                    copied = i;
                }
            }
            _ => i += 1,
        }
    }

    if copied == 0 {
        Cow::Borrowed(text)
    } else {
        out.push_str(&text[copied..]);
        Cow::Owned(out)
    }
}

fn is_wide_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !(digits.len() > 1 && digits.starts_with('0'))
        && token.parse::<i64>().is_err()
        && token.parse::<u64>().is_err()
}
