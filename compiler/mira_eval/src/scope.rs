//! Caller-owned variable scope.
//!
//! A flat string-keyed store. The evaluator reads symbol references from it
//! and writes assignment results into it; it never retains a reference past
//! an `eval` call, and nothing here is synchronized — concurrent use of one
//! scope is the caller's problem to serialize.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Mutable mapping from variable name to value.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
        }
    }

    /// Look up a variable.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind a variable, unconditionally overwriting any prior value.
    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Whether a variable is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}
