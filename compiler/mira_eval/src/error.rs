//! Compile-time and eval-time errors.
//!
//! Factory functions are the preferred construction path; they keep message
//! wording in one place.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Error discovered while compiling a tree against a runtime.
///
/// Compilation resolves names but executes nothing, so the only failure mode
/// is an unresolvable binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileError {
    /// Operation or function name missing from the runtime registry.
    UnknownFunction { name: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnknownFunction { name } => {
                write!(f, "undefined function: {name}")
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Runtime failure during `eval`.
///
/// These depend on scope contents or argument values, so they are only
/// detectable at call time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// Symbol bound neither in the scope nor as a runtime constant.
    UndefinedSymbol { name: String },
    /// A value had the wrong type for the operation consuming it.
    TypeMismatch { expected: String, got: String },
    /// Two operand types with no common operation.
    BinaryTypeMismatch {
        operation: String,
        left: String,
        right: String,
    },
    /// Division (or modulo) by zero.
    DivisionByZero,
    /// A range whose step evaluated to zero.
    ZeroRangeStep,
    /// Builtin invoked with the wrong number of arguments.
    WrongArgCount {
        name: String,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedSymbol { name } => write!(f, "undefined symbol: {name}"),
            EvalError::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            EvalError::BinaryTypeMismatch {
                operation,
                left,
                right,
            } => {
                write!(f, "cannot apply {operation} to {left} and {right}")
            }
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::ZeroRangeStep => write!(f, "range step must not be zero"),
            EvalError::WrongArgCount {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 { "argument" } else { "arguments" };
                write!(f, "{name} expects {expected} {arg_word}, got {got}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Unresolvable operation or function name at compile time.
pub fn unknown_function(name: impl Into<String>) -> CompileError {
    CompileError::UnknownFunction { name: name.into() }
}

/// Symbol not found in scope or runtime constants.
pub fn undefined_symbol(name: impl Into<String>) -> EvalError {
    EvalError::UndefinedSymbol { name: name.into() }
}

/// Wrong value type for an operation.
pub fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> EvalError {
    EvalError::TypeMismatch {
        expected: expected.into(),
        got: got.into(),
    }
}

/// Operand type pair with no defined operation.
pub fn binary_type_mismatch(operation: impl Into<String>, left: &Value, right: &Value) -> EvalError {
    EvalError::BinaryTypeMismatch {
        operation: operation.into(),
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    }
}

/// Division or modulo by zero.
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

/// Range step evaluated to zero.
pub fn zero_range_step() -> EvalError {
    EvalError::ZeroRangeStep
}

/// Builtin called with the wrong arity.
pub fn wrong_arg_count(name: impl Into<String>, expected: usize, got: usize) -> EvalError {
    EvalError::WrongArgCount {
        name: name.into(),
        expected,
        got,
    }
}
