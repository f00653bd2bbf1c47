//! Tree compilation.
//!
//! `compile` walks a validated node tree once, resolving every operation and
//! function name against the runtime, and produces a tree of closures — the
//! [`Evaluator`]. Resolution failures surface here, eagerly; nothing is
//! executed until `Evaluator::eval` is called.
//!
//! Each closure captures only owned data (values, names, `fn` pointers,
//! child closures), so an evaluator outlives the runtime it was compiled
//! against and can run any number of times. No evaluator-local state persists
//! between calls; all mutation goes through the caller's [`Scope`].

#[cfg(test)]
mod tests;

use tracing::trace;

use mira_ast::Node;

use crate::error::{
    type_mismatch, undefined_symbol, unknown_function, zero_range_step, CompileError, EvalError,
    EvalResult,
};
use crate::runtime::Runtime;
use crate::scope::Scope;
use crate::value::{RangeValue, Value};

type Thunk = Box<dyn Fn(&mut Scope) -> EvalResult>;

/// Executable form of a compiled tree.
pub struct Evaluator {
    thunk: Thunk,
}

impl Evaluator {
    /// Evaluate against a caller-owned scope.
    ///
    /// Assignments in the tree write into `scope`; that is the only side
    /// effect. Calls are independent — evaluating twice against two scopes
    /// produces two independent results.
    pub fn eval(&self, scope: &mut Scope) -> EvalResult {
        (self.thunk)(scope)
    }
}

/// Compile a tree against a runtime.
///
/// Every operator and function-call name in the tree must resolve;
/// an unresolvable name anywhere in the subtree fails the whole compile
/// with a [`CompileError`] naming it.
pub fn compile(node: &Node, runtime: &Runtime) -> Result<Evaluator, CompileError> {
    let thunk = compile_node(node, runtime)?;
    Ok(Evaluator { thunk })
}

fn compile_node(node: &Node, runtime: &Runtime) -> Result<Thunk, CompileError> {
    match node {
        Node::Constant(constant) => {
            let value = Value::from_literal(&constant.value);
            Ok(Box::new(move |_scope| Ok(value.clone())))
        }

        Node::Symbol(symbol) => {
            let name = symbol.name.clone();
            // Scope bindings shadow runtime constants; the constant (if any)
            // is captured now so eval never touches the runtime.
            let constant = runtime.constant(&name).cloned();
            Ok(Box::new(move |scope| {
                if let Some(value) = scope.get(&name) {
                    return Ok(value.clone());
                }
                if let Some(value) = &constant {
                    return Ok(value.clone());
                }
                Err(undefined_symbol(name.as_str()))
            }))
        }

        Node::Operator(op) => {
            let f = runtime
                .lookup(&op.fn_name)
                .ok_or_else(|| unknown_function(op.fn_name.as_str()))?;
            trace!(name = %op.fn_name, "resolved operator");
            let args = compile_all(&op.args, runtime)?;
            Ok(Box::new(move |scope| {
                let values = eval_all(&args, scope)?;
                f(&values)
            }))
        }

        Node::FunctionCall(call) => {
            let f = runtime
                .lookup(&call.name)
                .ok_or_else(|| unknown_function(call.name.as_str()))?;
            trace!(name = %call.name, "resolved function call");
            let args = compile_all(&call.args, runtime)?;
            Ok(Box::new(move |scope| {
                let values = eval_all(&args, scope)?;
                f(&values)
            }))
        }

        Node::Array(array) => {
            let items = compile_all(&array.items, runtime)?;
            Ok(Box::new(move |scope| {
                Ok(Value::List(eval_all(&items, scope)?))
            }))
        }

        Node::Range(range) => {
            let start = compile_node(&range.start, runtime)?;
            let end = compile_node(&range.end, runtime)?;
            let step = match &range.step {
                Some(step) => Some(compile_node(step, runtime)?),
                None => None,
            };
            Ok(Box::new(move |scope| {
                let start = expect_number(&start(scope)?)?;
                let end = expect_number(&end(scope)?)?;
                let step = match &step {
                    Some(thunk) => expect_number(&thunk(scope)?)?,
                    None => 1.0,
                };
                if step == 0.0 {
                    return Err(zero_range_step());
                }
                Ok(Value::Range(RangeValue::new(start, end, step)))
            }))
        }

        Node::Assignment(assignment) => {
            let name = assignment.name.clone();
            let inner = compile_node(&assignment.expr, runtime)?;
            Ok(Box::new(move |scope| {
                let value = inner(scope)?;
                scope.set(name.clone(), value.clone());
                Ok(value)
            }))
        }

        Node::Block(block) => {
            let stmts: Vec<(Thunk, bool)> = block
                .stmts
                .iter()
                .map(|stmt| Ok((compile_node(&stmt.node, runtime)?, stmt.visible)))
                .collect::<Result<_, CompileError>>()?;
            Ok(Box::new(move |scope| {
                let mut results = Vec::new();
                for (thunk, visible) in &stmts {
                    let value = thunk(scope)?;
                    if *visible {
                        results.push(value);
                    }
                }
                Ok(Value::List(results))
            }))
        }
    }
}

fn compile_all(nodes: &[Node], runtime: &Runtime) -> Result<Vec<Thunk>, CompileError> {
    nodes
        .iter()
        .map(|node| compile_node(node, runtime))
        .collect()
}

fn eval_all(thunks: &[Thunk], scope: &mut Scope) -> Result<Vec<Value>, EvalError> {
    let mut values = Vec::with_capacity(thunks.len());
    for thunk in thunks {
        values.push(thunk(scope)?);
    }
    Ok(values)
}

fn expect_number(value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(type_mismatch("number", other.type_name())),
    }
}
