//! Runtime registry of named operations and constants.
//!
//! The compiler resolves operator and function-call names against a
//! `Runtime`; the runtime owns the arithmetic, the node framework does not.
//! A name that cannot be resolved is a compile error, not an eval error.

mod builtins;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::EvalResult;
use crate::value::Value;

/// A builtin operation: takes evaluated arguments, produces a value.
///
/// Plain function pointers — resolution copies the pointer into the compiled
/// evaluator, so an evaluator never borrows the runtime it was compiled
/// against.
pub type BuiltinFn = fn(&[Value]) -> EvalResult;

/// Name-indexed resolver for operations and constants.
pub struct Runtime {
    functions: FxHashMap<String, BuiltinFn>,
    constants: FxHashMap<String, Value>,
}

impl Runtime {
    /// An empty runtime: nothing resolves.
    pub fn new() -> Self {
        Runtime {
            functions: FxHashMap::default(),
            constants: FxHashMap::default(),
        }
    }

    /// The default runtime: arithmetic and comparison operations plus the
    /// usual named constants.
    pub fn with_builtins() -> Self {
        let mut runtime = Runtime::new();

        runtime.register("add", builtins::add);
        runtime.register("subtract", builtins::subtract);
        runtime.register("multiply", builtins::multiply);
        runtime.register("divide", builtins::divide);
        runtime.register("mod", builtins::modulo);
        runtime.register("pow", builtins::pow);
        runtime.register("negate", builtins::negate);
        runtime.register("equal", builtins::equal);
        runtime.register("unequal", builtins::unequal);
        runtime.register("smaller", builtins::smaller);
        runtime.register("larger", builtins::larger);

        runtime.register_constant("pi", Value::Number(std::f64::consts::PI));
        runtime.register_constant("e", Value::Number(std::f64::consts::E));
        runtime.register_constant("tau", Value::Number(std::f64::consts::TAU));

        debug!(
            functions = runtime.functions.len(),
            constants = runtime.constants.len(),
            "registered default builtins"
        );
        runtime
    }

    /// Register (or replace) an operation under `name`.
    pub fn register(&mut self, name: impl Into<String>, f: BuiltinFn) {
        self.functions.insert(name.into(), f);
    }

    /// Register (or replace) a named constant.
    pub fn register_constant(&mut self, name: impl Into<String>, value: Value) {
        self.constants.insert(name.into(), value);
    }

    /// Resolve an operation name.
    pub fn lookup(&self, name: &str) -> Option<BuiltinFn> {
        self.functions.get(name).copied()
    }

    /// Resolve a constant name. Scope bindings shadow constants at eval time;
    /// the compiler captures the constant as the fallback.
    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::with_builtins()
    }
}
