//! Postfix (reverse-Polish) calculator for `|...|` expressions.
//!
//! Tokens are whitespace-separated and evaluated left to right against an
//! operand stack. For each token, in priority order:
//!
//! | Token | Effect |
//! |-------|--------|
//! | number literal | push `Int` or `Float` |
//! | `'text'` | push `Str` |
//! | constant name | push its value |
//! | `+ - * /` | pop `b`, pop `a`, push `a op b` (`/` is always float) |
//! | `sqrt`, `ord` | pop one, push the function result |
//!
//! Exactly one value must be left when the tokens run out.

use tracing::trace;

use super::builtins::{call_builtin, is_builtin};
use super::expr::{parse_number, parse_string, EvalContext};
use super::value::Value;
use crate::error::{Error, Result};

/// Evaluate the body of a `|...|` expression (delimiters already removed).
pub fn eval_postfix(expr: &str, ctx: &dyn EvalContext) -> Result<Value> {
    let mut stack: Vec<Value> = Vec::new();

    for token in expr.split_whitespace() {
        if let Some(num) = parse_number(token) {
            stack.push(num?);
        } else if let Some(s) = parse_string(token) {
            stack.push(Value::Str(s.to_owned()));
        } else if let Some(v) = ctx.get_const(token) {
            stack.push(v.clone());
        } else if let Some(op) = BinOp::from_token(token) {
            let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                return Err(Error::invalid(expr, format!("stack underflow at '{token}'")));
            };
            let result = op.apply(&a, &b).map_err(|reason| Error::invalid(expr, reason))?;
            stack.push(result);
        } else if is_builtin(token) {
            let arg = stack
                .pop()
                .ok_or_else(|| Error::invalid(expr, format!("stack underflow at '{token}'")))?;
            let result = call_builtin(token, &arg)
                .unwrap_or_else(|| Err(format!("no built-in named {token}")))
                .map_err(|reason| Error::invalid(expr, reason))?;
            stack.push(result);
        } else {
            return Err(Error::unknown_token(token));
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => {
            trace!(expr, %result, "postfix evaluated");
            Ok(result)
        }
        (None, _) => Err(Error::invalid(expr, "no value left on the stack")),
        (Some(_), false) => Err(Error::invalid(
            expr,
            format!("{} values left on the stack", stack.len() + 1),
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            _ => return None,
        })
    }

    fn apply(self, a: &Value, b: &Value) -> std::result::Result<Value, String> {
        match self {
            BinOp::Add => a.arith_add(b),
            BinOp::Sub => a.arith_sub(b),
            BinOp::Mul => a.arith_mul(b),
            BinOp::Div => a.arith_div(b),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
