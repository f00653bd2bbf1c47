use pretty_assertions::assert_eq;

use mira_ast::{
    ArrayNode, AssignmentNode, BlockNode, BlockStmt, FunctionCallNode, Node, OperatorNode,
    RangeNode,
};

use crate::error::{CompileError, EvalError};
use crate::runtime::Runtime;
use crate::scope::Scope;
use crate::value::{RangeValue, Value};

use super::compile;

fn assignment(name: &str, expr: Node) -> Node {
    match AssignmentNode::new(name, expr) {
        Ok(node) => Node::Assignment(node),
        Err(err) => panic!("valid assignment rejected: {err}"),
    }
}

fn compiled(node: &Node, runtime: &Runtime) -> super::Evaluator {
    match compile(node, runtime) {
        Ok(evaluator) => evaluator,
        Err(err) => panic!("compile failed: {err}"),
    }
}

#[test]
fn assignment_returns_value_and_writes_scope() {
    let runtime = Runtime::with_builtins();
    let node = assignment("b", Node::number(3.0));

    let evaluator = compiled(&node, &runtime);
    let mut scope = Scope::new();

    assert_eq!(evaluator.eval(&mut scope), Ok(Value::Number(3.0)));
    assert_eq!(scope.get("b"), Some(&Value::Number(3.0)));
}

#[test]
fn assignment_overwrites_existing_binding() {
    let runtime = Runtime::with_builtins();
    let node = assignment("b", Node::number(3.0));

    let evaluator = compiled(&node, &runtime);
    let mut scope = Scope::new();
    scope.set("b", Value::string("old"));

    assert_eq!(evaluator.eval(&mut scope), Ok(Value::Number(3.0)));
    assert_eq!(scope.get("b"), Some(&Value::Number(3.0)));
    assert_eq!(scope.len(), 1);
}

#[test]
fn operator_dispatches_through_runtime() {
    let runtime = Runtime::with_builtins();
    let node: Node = OperatorNode::new(
        "+",
        "add",
        vec![Node::number(2.0), Node::number(3.0)],
    )
    .into();

    let evaluator = compiled(&node, &runtime);
    assert_eq!(evaluator.eval(&mut Scope::new()), Ok(Value::Number(5.0)));
}

#[test]
fn nested_assignment_evaluates_inner_expression() {
    // a = x + 2
    let runtime = Runtime::with_builtins();
    let node = assignment(
        "a",
        OperatorNode::new("+", "add", vec![Node::symbol("x"), Node::number(2.0)]).into(),
    );

    let evaluator = compiled(&node, &runtime);
    let mut scope = Scope::new();
    scope.set("x", Value::Number(40.0));

    assert_eq!(evaluator.eval(&mut scope), Ok(Value::Number(42.0)));
    assert_eq!(scope.get("a"), Some(&Value::Number(42.0)));
}

#[test]
fn unknown_operation_fails_at_compile_time() {
    let runtime = Runtime::with_builtins();
    let node: Node = OperatorNode::new("?", "frobnicate", vec![Node::number(1.0)]).into();

    assert_eq!(
        compile(&node, &runtime).err(),
        Some(CompileError::UnknownFunction {
            name: "frobnicate".to_string()
        })
    );
}

#[test]
fn unknown_operation_nested_in_assignment_still_fails_eagerly() {
    let runtime = Runtime::with_builtins();
    let node = assignment(
        "a",
        OperatorNode::new("?", "frobnicate", vec![Node::number(1.0)]).into(),
    );

    assert_eq!(
        compile(&node, &runtime).err(),
        Some(CompileError::UnknownFunction {
            name: "frobnicate".to_string()
        })
    );
}

#[test]
fn function_call_resolves_like_an_operator() {
    let runtime = Runtime::with_builtins();
    let node: Node =
        FunctionCallNode::new("pow", vec![Node::number(2.0), Node::number(8.0)]).into();

    let evaluator = compiled(&node, &runtime);
    assert_eq!(evaluator.eval(&mut Scope::new()), Ok(Value::Number(256.0)));

    let missing: Node = FunctionCallNode::new("nope", vec![]).into();
    assert!(compile(&missing, &runtime).is_err());
}

#[test]
fn undefined_symbol_is_an_eval_error_not_a_compile_error() {
    let runtime = Runtime::with_builtins();
    let node = Node::symbol("x");

    // Compiles fine; scope contents are unknown until call time.
    let evaluator = compiled(&node, &runtime);
    assert_eq!(
        evaluator.eval(&mut Scope::new()),
        Err(EvalError::UndefinedSymbol {
            name: "x".to_string()
        })
    );

    let mut scope = Scope::new();
    scope.set("x", Value::Number(7.0));
    assert_eq!(evaluator.eval(&mut scope), Ok(Value::Number(7.0)));
}

#[test]
fn scope_bindings_shadow_runtime_constants() {
    let runtime = Runtime::with_builtins();
    let node = Node::symbol("pi");
    let evaluator = compiled(&node, &runtime);

    assert_eq!(
        evaluator.eval(&mut Scope::new()),
        Ok(Value::Number(std::f64::consts::PI))
    );

    let mut scope = Scope::new();
    scope.set("pi", Value::Number(3.0));
    assert_eq!(evaluator.eval(&mut scope), Ok(Value::Number(3.0)));
}

#[test]
fn evaluator_is_stateless_across_calls() {
    let runtime = Runtime::with_builtins();
    let node = assignment("b", Node::number(3.0));
    let evaluator = compiled(&node, &runtime);

    let mut first = Scope::new();
    let mut second = Scope::new();
    assert_eq!(evaluator.eval(&mut first), Ok(Value::Number(3.0)));
    assert_eq!(evaluator.eval(&mut second), Ok(Value::Number(3.0)));

    assert_eq!(first.get("b"), Some(&Value::Number(3.0)));
    assert_eq!(second.get("b"), Some(&Value::Number(3.0)));
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn array_evaluates_to_a_list() {
    let runtime = Runtime::with_builtins();
    let node: Node = ArrayNode::new(vec![
        Node::number(1.0),
        Node::symbol("x"),
        Node::number(2.0),
    ])
    .into();

    let evaluator = compiled(&node, &runtime);
    let mut scope = Scope::new();
    scope.set("x", Value::string("mid"));

    assert_eq!(
        evaluator.eval(&mut scope),
        Ok(Value::List(vec![
            Value::Number(1.0),
            Value::string("mid"),
            Value::Number(2.0),
        ]))
    );
}

#[test]
fn range_evaluates_bounds_and_defaults_step_to_one() {
    let runtime = Runtime::with_builtins();
    let node: Node = RangeNode::new(Node::number(1.0), Node::number(4.0)).into();

    let evaluator = compiled(&node, &runtime);
    assert_eq!(
        evaluator.eval(&mut Scope::new()),
        Ok(Value::Range(RangeValue::new(1.0, 4.0, 1.0)))
    );
}

#[test]
fn range_with_explicit_step() {
    let runtime = Runtime::with_builtins();
    let node: Node =
        RangeNode::with_step(Node::number(1.0), Node::number(2.0), Node::number(9.0)).into();

    let evaluator = compiled(&node, &runtime);
    assert_eq!(
        evaluator.eval(&mut Scope::new()),
        Ok(Value::Range(RangeValue::new(1.0, 9.0, 2.0)))
    );
}

#[test]
fn range_rejects_non_numeric_bounds_and_zero_step() {
    let runtime = Runtime::with_builtins();

    let bad_bound: Node =
        RangeNode::new(Node::Constant(mira_ast::ConstantNode::bool(true)), Node::number(4.0))
            .into();
    let evaluator = compiled(&bad_bound, &runtime);
    assert_eq!(
        evaluator.eval(&mut Scope::new()),
        Err(EvalError::TypeMismatch {
            expected: "number".to_string(),
            got: "bool".to_string(),
        })
    );

    let zero_step: Node =
        RangeNode::with_step(Node::number(1.0), Node::number(0.0), Node::number(9.0)).into();
    let evaluator = compiled(&zero_step, &runtime);
    assert_eq!(
        evaluator.eval(&mut Scope::new()),
        Err(EvalError::ZeroRangeStep)
    );
}

#[test]
fn block_runs_all_statements_and_collects_visible_results() {
    // a = 2; a
    let runtime = Runtime::with_builtins();
    let node: Node = BlockNode::new(vec![
        BlockStmt {
            node: assignment("a", Node::number(2.0)),
            visible: false,
        },
        BlockStmt {
            node: Node::symbol("a"),
            visible: true,
        },
    ])
    .into();

    let evaluator = compiled(&node, &runtime);
    let mut scope = Scope::new();

    assert_eq!(
        evaluator.eval(&mut scope),
        Ok(Value::List(vec![Value::Number(2.0)]))
    );
    assert_eq!(scope.get("a"), Some(&Value::Number(2.0)));
}

#[test]
fn eval_failure_aborts_the_whole_tree() {
    // [1, 1/0] fails as a whole; no partial list survives.
    let runtime = Runtime::with_builtins();
    let node: Node = ArrayNode::new(vec![
        Node::number(1.0),
        OperatorNode::new("/", "divide", vec![Node::number(1.0), Node::number(0.0)]).into(),
    ])
    .into();

    let evaluator = compiled(&node, &runtime);
    assert_eq!(
        evaluator.eval(&mut Scope::new()),
        Err(EvalError::DivisionByZero)
    );
}
