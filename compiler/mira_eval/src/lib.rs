//! Mira Eval - Compilation and Evaluation
//!
//! Turns a validated `mira_ast` tree into an executable [`Evaluator`]:
//!
//! 1. [`compile`] resolves every operation and function name against a
//!    [`Runtime`] — eagerly, so an unresolvable name is a [`CompileError`]
//!    before anything runs.
//! 2. The returned [`Evaluator`] runs against a caller-owned mutable
//!    [`Scope`], any number of times, with no state carried between calls.
//!
//! The arithmetic itself lives behind named operations in the [`Runtime`];
//! this crate dispatches to them but does not define the language's numeric
//! tower beyond the default builtin set.
//!
//! # Side Effects
//!
//! Evaluating an assignment writes to the scope. That is the one documented
//! side effect of evaluation; the scope is caller-owned and never synchronized
//! here.

mod compile;
mod error;
mod runtime;
mod scope;
mod value;

pub use compile::{compile, Evaluator};
pub use error::{
    binary_type_mismatch, division_by_zero, type_mismatch, undefined_symbol, unknown_function,
    wrong_arg_count, zero_range_step, CompileError, EvalError, EvalResult,
};
pub use runtime::{BuiltinFn, Runtime};
pub use scope::Scope;
pub use value::{RangeValue, Value};
