//! TeX renderer.
//!
//! Operands are wrapped in their own group braces so composed output never
//! changes meaning under TeX's own precedence: `{b}={x}+{2}`.

use mira_ast::{Literal, Node, OperatorNode};

use crate::number::format_number;

/// Render a tree as TeX.
pub fn render_tex(node: &Node) -> String {
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
            out.push_str("\\mathrm{");
            out.push_str(&call.name);
            out.push_str("}\\left(");
            write_separated(out, &call.args, ", ");
            out.push_str("\\right)");
        }
        Node::Array(array) => {
            out.push_str("\\begin{bmatrix}");
            write_separated(out, &array.items, "&");
            out.push_str("\\end{bmatrix}");
        }
        Node::Range(range) => {
            write_group(out, &range.start);
            if let Some(step) = &range.step {
                out.push(':');
                write_group(out, step);
            }
            out.push(':');
            write_group(out, &range.end);
        }
        Node::Assignment(assignment) => {
            out.push('{');
            out.push_str(&assignment.name);
            out.push_str("}={");
            write_node(out, &assignment.expr);
            out.push('}');
        }
        Node::Block(block) => {
            for (i, stmt) in block.stmts.iter().enumerate() {
                if i > 0 {
                    out.push_str("\\\\");
                }
                write_node(out, &stmt.node);
            }
        }
    }
}

fn write_literal(out: &mut String, literal: &Literal) {
    match literal {
        Literal::Number(n) => out.push_str(&format_number(*n)),
        Literal::Bool(b) => out.push_str(if *b { "\\text{true}" } else { "\\text{false}" }),
        Literal::Str(s) => {
            out.push_str("\\text{");
            out.push_str(s);
            out.push('}');
        }
    }
}

fn write_operator(out: &mut String, op: &OperatorNode) {
    match op.args.as_slice() {
        // Unary prefix: -{x}
        [operand] => {
            out.push_str(&op.op);
            write_group(out, operand);
        }
        // Binary operations with dedicated TeX forms, then the generic
        // brace-wrapped infix fallback.
        [left, right] => match op.fn_name.as_str() {
            "divide" => {
                out.push_str("\\frac{");
                write_node(out, left);
                out.push_str("}{");
                write_node(out, right);
                out.push('}');
            }
            "pow" => {
                write_group(out, left);
                out.push('^');
                write_group(out, right);
            }
            "multiply" => {
                write_group(out, left);
                out.push_str("\\cdot");
                write_group(out, right);
            }
            _ => {
                write_group(out, left);
                out.push_str(&op.op);
                write_group(out, right);
            }
        },
        args => {
            out.push_str("\\mathrm{");
            out.push_str(&op.fn_name);
            out.push_str("}\\left(");
            write_separated(out, args, ", ");
            out.push_str("\\right)");
        }
    }
}

/// Render a node wrapped in its own group braces.
fn write_group(out: &mut String, node: &Node) {
    out.push('{');
    write_node(out, node);
    out.push('}');
}

fn write_separated(out: &mut String, nodes: &[Node], separator: &str) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_node(out, node);
    }
}
