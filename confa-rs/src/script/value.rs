//! Runtime value type for the confa configuration language.
//!
//! Every line evaluates to one of these. Composite values only ever hold
//! fully evaluated elements.

use std::fmt;

use indexmap::IndexMap;

/// An evaluated confa value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    /// Insertion-ordered table; the order is the output order.
    Dict(IndexMap<String, Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Str(s) => write!(f, "{s}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Dict(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {k} = {v}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

/// A finite float always carries a fraction or an exponent (`20.0`, `1e16`),
/// so it never reads back as an integer. Non-finite values use TOML's
/// `inf`, `-inf` and `nan`.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        f.write_str("nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "inf" } else { "-inf" })
    } else {
        write!(f, "{x:?}")
    }
}

/// Operands of a binary arithmetic operation after promotion.
enum Operands {
    Int(i64, i64),
    Float(f64, f64),
}

impl Value {
    /// Name of the type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Dict(_) => "table",
        }
    }

    /// Numeric value as `f64`, or `None` for non-numeric variants.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    // ── Arithmetic helpers ────────────────────────────────────────────────────

    /// Promote a pair of operands: two integers stay integral, anything
    /// involving a float becomes float, anything else is rejected.
    fn promote(&self, rhs: &Value) -> Result<Operands, String> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Operands::Int(*a, *b)),
            (a, b) => match (a.as_float(), b.as_float()) {
                (Some(x), Some(y)) => Ok(Operands::Float(x, y)),
                _ => Err(format!(
                    "cannot do arithmetic on {} and {}",
                    a.type_name(),
                    b.type_name()
                )),
            },
        }
    }

    pub fn arith_add(&self, rhs: &Value) -> Result<Value, String> {
        match self.promote(rhs)? {
            Operands::Int(a, b) => a.checked_add(b).map(Value::Int).ok_or_else(overflow),
            Operands::Float(a, b) => finite(a + b),
        }
    }

    pub fn arith_sub(&self, rhs: &Value) -> Result<Value, String> {
        match self.promote(rhs)? {
            Operands::Int(a, b) => a.checked_sub(b).map(Value::Int).ok_or_else(overflow),
            Operands::Float(a, b) => finite(a - b),
        }
    }

    pub fn arith_mul(&self, rhs: &Value) -> Result<Value, String> {
        match self.promote(rhs)? {
            Operands::Int(a, b) => a.checked_mul(b).map(Value::Int).ok_or_else(overflow),
            Operands::Float(a, b) => finite(a * b),
        }
    }

    /// True division: the result is always a float.
    pub fn arith_div(&self, rhs: &Value) -> Result<Value, String> {
        let (a, b) = match self.promote(rhs)? {
            Operands::Int(a, b) => (a as f64, b as f64),
            Operands::Float(a, b) => (a, b),
        };
        if b == 0.0 {
            return Err("division by zero".into());
        }
        finite(a / b)
    }
}

fn overflow() -> String {
    "integer overflow".into()
}

fn finite(x: f64) -> Result<Value, String> {
    if x.is_finite() {
        Ok(Value::Float(x))
    } else {
        Err("float overflow".into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
