//! Built-in postfix functions.
//!
//! Every built-in is unary: the calculator pops one operand, calls
//! [`call_builtin`], and pushes the result.

use super::value::Value;

/// Names the postfix calculator treats as function calls.
pub const BUILTINS: &[&str] = &["sqrt", "ord"];

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Dispatch a built-in function call.
///
/// Returns `None` if `name` is not a built-in.
pub fn call_builtin(name: &str, arg: &Value) -> Option<Result<Value, String>> {
    Some(match name {
        "sqrt" => sqrt(arg),
        "ord" => ord(arg),
        _ => return None,
    })
}

/// Square root; always a float.
fn sqrt(arg: &Value) -> Result<Value, String> {
    let x = arg
        .as_float()
        .ok_or_else(|| format!("sqrt: expected a number, got {}", arg.type_name()))?;
    if x < 0.0 {
        return Err(format!("sqrt: negative argument {arg}"));
    }
    Ok(Value::Float(x.sqrt()))
}

/// Code point of the first character of the argument's text.
fn ord(arg: &Value) -> Result<Value, String> {
    if matches!(arg, Value::Array(_) | Value::Dict(_)) {
        return Err(format!("ord: expected a scalar, got {}", arg.type_name()));
    }
    let text = arg.to_string();
    let ch = text
        .chars()
        .next()
        .ok_or_else(|| "ord: empty string".to_owned())?;
    Ok(Value::Int(i64::from(u32::from(ch))))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
