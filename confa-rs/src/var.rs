//! Name → value stores.
//!
//! The same ordered store backs both the constant table (`:=`) and the output
//! scope (`=`). They are separate instances, so a name can live in both.
//! Rebinding a name replaces its value and keeps its original position.

use indexmap::IndexMap;

use crate::script::value::Value;

/// Insertion-ordered key/value store.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VarStore {
    vars: IndexMap<String, Value>,
}

/// Constants declared with `:=`.
pub type SymbolTable = VarStore;

/// Top-level entries assigned with `=`; becomes the TOML document.
pub type OutputScope = VarStore;

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, overwriting any previous binding. Returns the old value.
    pub fn insert_or_replace(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Returns `true` if the name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
