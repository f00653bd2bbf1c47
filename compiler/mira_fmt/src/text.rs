//! Plain expression-syntax renderer.

use mira_ast::{Literal, Node, OperatorNode};

use crate::number::format_number;

/// Render a tree as expression syntax.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Constant(constant) => write_literal(out, &constant.value),
        Node::Symbol(symbol) => out.push_str(&symbol.name),
        Node::Operator(op) => write_operator(out, op),
        Node::FunctionCall(call) => {
            out.push_str(&call.name);
            out.push('(');
            write_separated(out, &call.args, ", ");
            out.push(')');
        }
        Node::Array(array) => {
            out.push('[');
            write_separated(out, &array.items, ", ");
            out.push(']');
        }
        Node::Range(range) => {
            write_node(out, &range.start);
            if let Some(step) = &range.step {
                out.push(':');
                write_node(out, step);
            }
            out.push(':');
            write_node(out, &range.end);
        }
        Node::Assignment(assignment) => {
            out.push_str(&assignment.name);
            out.push_str(" = ");
            write_node(out, &assignment.expr);
        }
        Node::Block(block) => {
            for (i, stmt) in block.stmts.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_node(out, &stmt.node);
                if !stmt.visible {
                    out.push(';');
                }
            }
        }
    }
}

fn write_literal(out: &mut String, literal: &Literal) {
    match literal {
        Literal::Number(n) => out.push_str(&format_number(*n)),
        Literal::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Literal::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
    }
}

fn write_operator(out: &mut String, op: &OperatorNode) {
    match op.args.as_slice() {
        // Unary prefix: -x
        [operand] => {
            out.push_str(&op.op);
            write_operand(out, operand);
        }
        // Binary infix: a + b
        [left, right] => {
            write_operand(out, left);
            out.push(' ');
            out.push_str(&op.op);
            out.push(' ');
            write_operand(out, right);
        }
        // Any other arity falls back to call syntax on the operation name.
        args => {
            out.push_str(&op.fn_name);
            out.push('(');
            write_separated(out, args, ", ");
            out.push(')');
        }
    }
}

/// Nested operator operands get parentheses; everything else renders bare.
fn write_operand(out: &mut String, node: &Node) {
    if matches!(node, Node::Operator(_)) {
        out.push('(');
        write_node(out, node);
        out.push(')');
    } else {
        write_node(out, node);
    }
}

fn write_separated(out: &mut String, nodes: &[Node], separator: &str) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_node(out, node);
    }
}
