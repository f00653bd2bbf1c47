//! Runtime values produced by evaluation.

use mira_ast::Literal;

/// Runtime value in the Mira evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Lazy numeric range.
    Range(RangeValue),
}

impl Value {
    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    /// The value a constant node evaluates to.
    pub fn from_literal(literal: &Literal) -> Value {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Str(s) => Value::Str(s.clone()),
        }
    }

    /// Type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Range(_) => "range",
        }
    }
}

/// Numeric range with an explicit step. The end bound is inclusive when the
/// step lands on it exactly: `1:2:9` covers 1, 3, 5, 7, 9.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeValue {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl RangeValue {
    /// Create a range. The step must be non-zero and finite; the compiler's
    /// range evaluator enforces that before constructing one.
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        RangeValue { start, end, step }
    }

    /// Number of elements the range covers.
    pub fn len(&self) -> usize {
        let span = (self.end - self.start) / self.step;
        if span < 0.0 {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "span is checked non-negative; fractional elements round down"
        )]
        let count = span.floor() as usize;
        count + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize the range into a vector of numbers.
    pub fn to_vec(self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            #[expect(clippy::cast_precision_loss, reason = "range lengths are small")]
            out.push(self.start + self.step * i as f64);
        }
        out
    }
}
