//! TOML rendering of the output scope.
//!
//! Top-level scalars and arrays become `key = value` lines; a table becomes a
//! `[key]` header followed by its entries. Strings use TOML literal
//! (single-quoted) syntax verbatim. Lines are joined with `\n` and there is
//! no trailing newline.
//!
//! Entries are written in assignment order, so a scalar assigned after a
//! table lands under that table's header when the text is read back as TOML.

use crate::script::value::Value;
use crate::var::OutputScope;

/// Render the whole output scope.
pub fn to_toml(scope: &OutputScope) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (key, value) in scope.iter() {
        match value {
            Value::Dict(entries) => {
                lines.push(format!("[{key}]"));
                for (sub_key, sub_value) in entries {
                    lines.push(format!("{sub_key} = {}", format_value(sub_value)));
                }
            }
            _ => lines.push(format!("{key} = {}", format_value(value))),
        }
    }
    lines.join("\n")
}

/// Format a single value in TOML syntax.
pub fn format_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Str(s) => {
            out.push('\'');
            out.push_str(s);
            out.push('\'');
        }
        Value::Int(_) | Value::Float(_) => out.push_str(&value.to_string()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        // Only reachable through constants: `[A; B]` or `{ t = TBL }`.
        Value::Dict(entries) => {
            if entries.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{ ");
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(k);
                out.push_str(" = ");
                write_value(out, v);
            }
            out.push_str(" }");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
