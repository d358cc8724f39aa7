//! Scalar expression evaluator.
//!
//! A value-position token is resolved by trying each recognizer in turn; the
//! first one that claims the token decides its meaning:
//!
//!   numeric literal  →  `'string'`  →  constant name  →  `|postfix|`
//!
//! Anything left over is an unknown token. Arrays and tables are split into
//! scalar tokens by [`structure`](super::structure) before reaching this
//! module.

use std::sync::OnceLock;

use regex::Regex;

use super::postfix;
use super::value::Value;
use crate::error::{Error, Result};
use crate::var::VarStore;

// ── EvalContext ───────────────────────────────────────────────────────────────

/// Constant lookup used by the evaluator and the postfix calculator.
///
/// [`VarStore`] implements it for the real symbol table; tests plug in
/// their own.
pub trait EvalContext {
    /// Look up a constant declared with `:=`.
    fn get_const(&self, name: &str) -> Option<&Value>;
}

impl EvalContext for VarStore {
    fn get_const(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

// ── Literal recognizers ───────────────────────────────────────────────────────

fn number_pattern() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("numeric literal pattern"))
}

/// Parse an unsigned decimal literal: integer without `.`, float with one.
///
/// Returns `None` when `token` does not look like a number at all.
pub fn parse_number(token: &str) -> Option<Result<Value>> {
    if !number_pattern().is_match(token) {
        return None;
    }
    let value = if token.contains('.') {
        match token.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Value::Float(x)),
            Ok(_) => Err(Error::invalid(token, "float literal out of range")),
            Err(e) => Err(Error::invalid(token, e.to_string())),
        }
    } else {
        token
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| Error::invalid(token, "integer literal out of range"))
    };
    Some(value)
}

/// Strip the apostrophes from a `'quoted'` literal. No escapes are processed.
pub fn parse_string(token: &str) -> Option<&str> {
    if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

fn recognize_number(token: &str, _: &dyn EvalContext) -> Option<Result<Value>> {
    parse_number(token)
}

fn recognize_string(token: &str, _: &dyn EvalContext) -> Option<Result<Value>> {
    parse_string(token).map(|s| Ok(Value::Str(s.to_owned())))
}

fn recognize_constant(token: &str, ctx: &dyn EvalContext) -> Option<Result<Value>> {
    ctx.get_const(token).cloned().map(Ok)
}

fn recognize_postfix(token: &str, ctx: &dyn EvalContext) -> Option<Result<Value>> {
    let inner = token.strip_prefix('|')?.strip_suffix('|')?;
    Some(postfix::eval_postfix(inner.trim(), ctx))
}

type Recognizer = fn(&str, &dyn EvalContext) -> Option<Result<Value>>;

/// Tried in order; the first `Some` wins.
const RECOGNIZERS: [Recognizer; 4] = [
    recognize_number,
    recognize_string,
    recognize_constant,
    recognize_postfix,
];

// ── Evaluator ─────────────────────────────────────────────────────────────────

/// Evaluate one trimmed scalar token.
pub fn eval_token(token: &str, ctx: &dyn EvalContext) -> Result<Value> {
    RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(token, ctx))
        .unwrap_or_else(|| Err(Error::unknown_token(token)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
