//! Generic tree traversal.
//!
//! A single child-enumeration function per variant drives both `traverse`
//! and `filter`, so child order is defined in exactly one place. All walks
//! are depth-first pre-order: the node itself first, then each child in the
//! variant's fixed order.

use super::Node;

/// How a parent refers to one of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildKey {
    /// Named single-child slot, e.g. `expr` on an assignment.
    Field(&'static str),
    /// Position within a sequence of children, e.g. an array element.
    Item(usize),
}

impl Node {
    /// Invoke `f` once per direct child, in the variant's fixed child order.
    pub fn for_each_child<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(ChildKey, &'a Node),
    {
        match self {
            Node::Constant(_) | Node::Symbol(_) => {}
            Node::Operator(op) => {
                for (i, arg) in op.args.iter().enumerate() {
                    f(ChildKey::Item(i), arg);
                }
            }
            Node::FunctionCall(call) => {
                for (i, arg) in call.args.iter().enumerate() {
                    f(ChildKey::Item(i), arg);
                }
            }
            Node::Array(array) => {
                for (i, item) in array.items.iter().enumerate() {
                    f(ChildKey::Item(i), item);
                }
            }
            Node::Range(range) => {
                f(ChildKey::Field("start"), range.start.as_ref());
                if let Some(step) = &range.step {
                    f(ChildKey::Field("step"), step.as_ref());
                }
                f(ChildKey::Field("end"), range.end.as_ref());
            }
            Node::Assignment(assignment) => {
                f(ChildKey::Field("expr"), assignment.expr.as_ref());
            }
            Node::Block(block) => {
                for (i, stmt) in block.stmts.iter().enumerate() {
                    f(ChildKey::Item(i), &stmt.node);
                }
            }
        }
    }

    /// Pre-order depth-first walk over the whole tree.
    ///
    /// The visitor receives each node exactly once together with its parent
    /// context: `None` for the root, otherwise the key under which the parent
    /// holds the child and the parent itself. The visitor cannot short-circuit
    /// the walk; it always completes in O(node count).
    pub fn traverse<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a Node, Option<(ChildKey, &'a Node)>),
    {
        visitor(self, None);
        self.walk_children(visitor);
    }

    fn walk_children<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a Node, Option<(ChildKey, &'a Node)>),
    {
        self.for_each_child(&mut |key, child| {
            visitor(child, Some((key, self)));
            child.walk_children(&mut *visitor);
        });
    }

    /// All nodes matching `predicate`, in pre-order traversal order.
    ///
    /// Read-only; the result is fully materialized.
    pub fn filter<F>(&self, mut predicate: F) -> Vec<&Node>
    where
        F: FnMut(&Node) -> bool,
    {
        let mut matches = Vec::new();
        self.traverse(&mut |node, _context| {
            if predicate(node) {
                matches.push(node);
            }
        });
        matches
    }
}
