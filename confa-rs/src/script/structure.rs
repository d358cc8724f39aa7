//! Array and table literals.
//!
//! `[a; b; c]` builds an array and `{ k = v; ... }` builds a table. Elements
//! are scalar tokens handed to [`eval_token`]; brackets are stripped only
//! once, so nested literal syntax is not supported.
//!
//! Splitting on `;` does not know about quotes: `['a;b']` yields the two
//! (invalid) elements `'a` and `b'`. That is a property of the format.

use indexmap::IndexMap;

use super::expr::{eval_token, EvalContext};
use super::value::Value;
use crate::error::Result;

/// Which literal form a value-position string uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Dict,
    Scalar,
}

impl Shape {
    /// Classify by the enclosing characters.
    pub fn of(text: &str) -> Self {
        if text.starts_with('[') && text.ends_with(']') {
            Shape::Array
        } else if text.starts_with('{') && text.ends_with('}') {
            Shape::Dict
        } else {
            Shape::Scalar
        }
    }
}

/// Evaluate anything that can appear on the right of `=` or `:=`.
pub fn eval_value(text: &str, ctx: &dyn EvalContext) -> Result<Value> {
    match Shape::of(text) {
        Shape::Array => parse_array(text, ctx),
        Shape::Dict => parse_dict(text, ctx),
        Shape::Scalar => eval_token(text, ctx),
    }
}

/// Strip one character from each end of a bracketed literal.
fn inner(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Build an array from `[e1; e2; ...]`. Empty elements are dropped, so `[]`
/// and a trailing `;` are fine.
pub fn parse_array(text: &str, ctx: &dyn EvalContext) -> Result<Value> {
    inner(text)
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| eval_token(item, ctx))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Build a table from `{ k1 = v1; k2 = v2 }`.
///
/// Each entry is split on its first `=`. Entries without one are skipped.
/// A repeated key keeps its first position and takes the last value.
pub fn parse_dict(text: &str, ctx: &dyn EvalContext) -> Result<Value> {
    let mut entries = IndexMap::new();
    for item in inner(text).split(';') {
        let Some((key, value)) = item.split_once('=') else {
            continue;
        };
        entries.insert(key.trim().to_owned(), eval_token(value.trim(), ctx)?);
    }
    Ok(Value::Dict(entries))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
