use std::{fmt::Write as _, io::Cursor, time::SystemTime};

use chrono::{DateTime, Utc};
use log::debug;
use plist::Value as PlistValue;
use serde_json::Value as JsonValue;

const INDENT: &str = "    ";

/// Pretty-print a JSON document. Only objects and arrays count as
/// documents; scalars and malformed input yield `None`.
pub(crate) fn pretty_json(bytes: &[u8]) -> Option<String> {
    let value: JsonValue = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(e) => {
            debug!("[pretty_json] parse failed: {e}");
            return None;
        }
    };

    if !(value.is_object() || value.is_array()) {
        debug!("[pretty_json] top level is not an object or array");
        return None;
    }

    // serde_json never escapes '/', so no `\/` cleanup is needed.
    serde_json::to_string_pretty(&value).ok()
}

/// Parse an XML or binary property list and describe it in the
/// OpenStep-like form Apple tools print.
pub(crate) fn describe_plist(bytes: &[u8]) -> Option<String> {
    match PlistValue::from_reader(Cursor::new(bytes)) {
        Ok(value) => {
            let mut out = String::new();
            write_plist(&mut out, &value, 0);
            Some(out)
        }
        Err(e) => {
            debug!("[describe_plist] parse failed: {e}");
            None
        }
    }
}

fn write_plist(out: &mut String, value: &PlistValue, depth: usize) {
    match value {
        PlistValue::Dictionary(dict) => {
            let mut entries: Vec<_> = dict.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push_str("{\n");
            for (key, item) in entries {
                push_indent(out, depth + 1);
                push_plist_string(out, key);
                out.push_str(" = ");
                write_plist(out, item, depth + 1);
                out.push_str(";\n");
            }
            push_indent(out, depth);
            out.push('}');
        }
        PlistValue::Array(items) => {
            out.push_str("(\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_plist(out, item, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push(')');
        }
        PlistValue::String(s) => push_plist_string(out, s),
        PlistValue::Boolean(b) => out.push(if *b { '1' } else { '0' }),
        PlistValue::Integer(n) => {
            if let Some(signed) = n.as_signed() {
                let _ = write!(out, "{signed}");
            } else if let Some(unsigned) = n.as_unsigned() {
                let _ = write!(out, "{unsigned}");
            }
        }
        PlistValue::Real(r) => {
            let _ = write!(out, "{r}");
        }
        PlistValue::Data(bytes) => {
            let _ = write!(out, "{{length = {}, bytes = 0x", bytes.len());
            for b in bytes {
                let _ = write!(out, "{b:02x}");
            }
            out.push('}');
        }
        PlistValue::Date(date) => {
            let at: DateTime<Utc> = SystemTime::from(date.clone()).into();
            let _ = write!(out, "{}", at.format("%Y-%m-%d %H:%M:%S +0000"));
        }
        PlistValue::Uid(uid) => {
            let _ = write!(out, "<CFKeyedArchiverUID>{{value = {}}}", uid.get());
        }
        _ => out.push_str("<unsupported>"),
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Bare words print as-is; anything else is quoted with `"` and `\` escaped.
fn push_plist_string(out: &mut String, s: &str) {
    let bare = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | '/' | ':'));

    if bare {
        out.push_str(s);
        return;
    }

    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

#[cfg(test)]
#[path = "structured_tests.rs"]
mod tests;
