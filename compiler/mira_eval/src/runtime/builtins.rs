//! Default builtin operations.
//!
//! Direct enum-based dispatch over [`Value`] pairs. The value set is fixed,
//! so pattern matching is preferred over trait objects; unsupported operand
//! pairs fall through to a `binary_type_mismatch` error.

use crate::error::{
    binary_type_mismatch, division_by_zero, type_mismatch, wrong_arg_count, EvalResult,
};
use crate::value::Value;

/// Two-operand numeric operation, with per-type special cases handled by the
/// caller before falling back here.
fn numeric_binary(name: &'static str, args: &[Value], f: fn(f64, f64) -> f64) -> EvalResult {
    match args {
        [Value::Number(a), Value::Number(b)] => Ok(Value::Number(f(*a, *b))),
        [left, right] => Err(binary_type_mismatch(name, left, right)),
        _ => Err(wrong_arg_count(name, 2, args.len())),
    }
}

/// Two-operand numeric comparison.
fn numeric_compare(name: &'static str, args: &[Value], f: fn(f64, f64) -> bool) -> EvalResult {
    match args {
        [Value::Number(a), Value::Number(b)] => Ok(Value::Bool(f(*a, *b))),
        [left, right] => Err(binary_type_mismatch(name, left, right)),
        _ => Err(wrong_arg_count(name, 2, args.len())),
    }
}

pub fn add(args: &[Value]) -> EvalResult {
    match args {
        [Value::Str(a), Value::Str(b)] => Ok(Value::Str(format!("{a}{b}"))),
        [Value::List(a), Value::List(b)] => {
            let mut out = a.clone();
            out.extend(b.iter().cloned());
            Ok(Value::List(out))
        }
        _ => numeric_binary("add", args, |a, b| a + b),
    }
}

pub fn subtract(args: &[Value]) -> EvalResult {
    numeric_binary("subtract", args, |a, b| a - b)
}

pub fn multiply(args: &[Value]) -> EvalResult {
    numeric_binary("multiply", args, |a, b| a * b)
}

pub fn divide(args: &[Value]) -> EvalResult {
    match args {
        [Value::Number(_), Value::Number(b)] if *b == 0.0 => Err(division_by_zero()),
        _ => numeric_binary("divide", args, |a, b| a / b),
    }
}

pub fn modulo(args: &[Value]) -> EvalResult {
    match args {
        [Value::Number(_), Value::Number(b)] if *b == 0.0 => Err(division_by_zero()),
        _ => numeric_binary("mod", args, f64::rem_euclid),
    }
}

pub fn pow(args: &[Value]) -> EvalResult {
    numeric_binary("pow", args, f64::powf)
}

pub fn negate(args: &[Value]) -> EvalResult {
    match args {
        [Value::Number(a)] => Ok(Value::Number(-a)),
        [other] => Err(type_mismatch("number", other.type_name())),
        _ => Err(wrong_arg_count("negate", 1, args.len())),
    }
}

pub fn equal(args: &[Value]) -> EvalResult {
    match args {
        [left, right] => Ok(Value::Bool(left == right)),
        _ => Err(wrong_arg_count("equal", 2, args.len())),
    }
}

pub fn unequal(args: &[Value]) -> EvalResult {
    match args {
        [left, right] => Ok(Value::Bool(left != right)),
        _ => Err(wrong_arg_count("unequal", 2, args.len())),
    }
}

pub fn smaller(args: &[Value]) -> EvalResult {
    numeric_compare("smaller", args, |a, b| a < b)
}

pub fn larger(args: &[Value]) -> EvalResult {
    numeric_compare("larger", args, |a, b| a > b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use pretty_assertions::assert_eq;

    #[test]
    fn arithmetic_on_numbers() {
        assert_eq!(
            add(&[Value::Number(2.0), Value::Number(3.0)]),
            Ok(Value::Number(5.0))
        );
        assert_eq!(
            subtract(&[Value::Number(2.0), Value::Number(3.0)]),
            Ok(Value::Number(-1.0))
        );
        assert_eq!(
            multiply(&[Value::Number(2.0), Value::Number(3.0)]),
            Ok(Value::Number(6.0))
        );
        assert_eq!(
            pow(&[Value::Number(2.0), Value::Number(10.0)]),
            Ok(Value::Number(1024.0))
        );
        assert_eq!(negate(&[Value::Number(3.0)]), Ok(Value::Number(-3.0)));
    }

    #[test]
    fn add_concatenates_strings_and_lists() {
        assert_eq!(
            add(&[Value::string("foo"), Value::string("bar")]),
            Ok(Value::string("foobar"))
        );
        assert_eq!(
            add(&[
                Value::List(vec![Value::Number(1.0)]),
                Value::List(vec![Value::Number(2.0)])
            ]),
            Ok(Value::List(vec![Value::Number(1.0), Value::Number(2.0)]))
        );
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            divide(&[Value::Number(1.0), Value::Number(0.0)]),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            modulo(&[Value::Number(1.0), Value::Number(0.0)]),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn modulo_follows_euclidean_remainder() {
        assert_eq!(
            modulo(&[Value::Number(-7.0), Value::Number(3.0)]),
            Ok(Value::Number(2.0))
        );
    }

    #[test]
    fn comparisons() {
        assert_eq!(
            smaller(&[Value::Number(1.0), Value::Number(2.0)]),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            larger(&[Value::Number(1.0), Value::Number(2.0)]),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            equal(&[Value::string("a"), Value::string("a")]),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            unequal(&[Value::Bool(true), Value::Bool(false)]),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn mismatched_operand_types_are_rejected() {
        assert_eq!(
            add(&[Value::Number(1.0), Value::Bool(true)]),
            Err(EvalError::BinaryTypeMismatch {
                operation: "add".to_string(),
                left: "number".to_string(),
                right: "bool".to_string(),
            })
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(
            negate(&[]),
            Err(EvalError::WrongArgCount {
                name: "negate".to_string(),
                expected: 1,
                got: 0,
            })
        );
        assert_eq!(
            add(&[Value::Number(1.0)]),
            Err(EvalError::WrongArgCount {
                name: "add".to_string(),
                expected: 2,
                got: 1,
            })
        );
    }
}
