//! Value-level evaluation for the confa language.
//!
//! - Scalar tokens: numbers, `'strings'`, constant names, `|postfix|`
//! - A postfix calculator with `+ - * /` and the built-ins `sqrt` and `ord`
//! - Array (`[a; b]`) and table (`{ k = v }`) literals
//!
//! # Quick start
//!
//! ```rust
//! use confa::script::{eval_value, Value};
//! use confa::var::SymbolTable;
//!
//! let mut consts = SymbolTable::new();
//! consts.insert_or_replace("CONST", Value::Int(10));
//! assert_eq!(eval_value("|CONST 2 *|", &consts).unwrap(), Value::Int(20));
//! ```

pub mod builtins;
pub mod expr;
pub mod postfix;
pub mod structure;
pub mod value;

// Re-exports for convenience.
pub use expr::{eval_token, EvalContext};
pub use structure::eval_value;
pub use value::Value;
