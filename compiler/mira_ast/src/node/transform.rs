//! Functional tree rewriting.
//!
//! `transform` rewrites bottom-up: every child is fully transformed before
//! its parent is offered to the mapper. A parent is rebuilt only when a child
//! actually changed; untouched subtrees are moved through without
//! reallocation, so their `Box` and `Vec` storage keeps its identity. The
//! changed-flag threading below is what makes that observable.

use super::{ConstantNode, Literal, Node};

/// Value parked in a child slot while its node is transformed by value.
fn placeholder() -> Node {
    Node::Constant(ConstantNode::new(Literal::Bool(false)))
}

impl Node {
    /// Rewrite the tree and return the (possibly new) root.
    ///
    /// The mapper sees each node after its children have been transformed.
    /// Returning `Some(replacement)` substitutes the node; the replacement's
    /// own subtree is not re-entered. Returning `None` keeps the node.
    ///
    /// A mapper that always returns `None` moves the tree through untouched:
    /// no child slot is reallocated anywhere.
    pub fn transform<F>(self, mapper: &mut F) -> Node
    where
        F: FnMut(&Node) -> Option<Node>,
    {
        self.transform_inner(mapper).0
    }

    /// Transform this subtree; the flag reports whether anything changed.
    fn transform_inner<F>(self, mapper: &mut F) -> (Node, bool)
    where
        F: FnMut(&Node) -> Option<Node>,
    {
        let (node, child_changed) = self.transform_children(mapper);
        match mapper(&node) {
            Some(replacement) => (replacement, true),
            None => (node, child_changed),
        }
    }

    /// Transform every child in place, keeping each slot's allocation.
    fn transform_children<F>(self, mapper: &mut F) -> (Node, bool)
    where
        F: FnMut(&Node) -> Option<Node>,
    {
        match self {
            Node::Constant(_) | Node::Symbol(_) => (self, false),
            Node::Operator(mut op) => {
                let changed = transform_slice(&mut op.args, mapper);
                (Node::Operator(op), changed)
            }
            Node::FunctionCall(mut call) => {
                let changed = transform_slice(&mut call.args, mapper);
                (Node::FunctionCall(call), changed)
            }
            Node::Array(mut array) => {
                let changed = transform_slice(&mut array.items, mapper);
                (Node::Array(array), changed)
            }
            Node::Range(mut range) => {
                let mut changed = transform_slot(&mut range.start, mapper);
                if let Some(step) = &mut range.step {
                    changed |= transform_slot(step, mapper);
                }
                changed |= transform_slot(&mut range.end, mapper);
                (Node::Range(range), changed)
            }
            Node::Assignment(mut assignment) => {
                let changed = transform_slot(&mut assignment.expr, mapper);
                (Node::Assignment(assignment), changed)
            }
            Node::Block(mut block) => {
                let mut changed = false;
                for stmt in &mut block.stmts {
                    changed |= transform_slot(&mut stmt.node, mapper);
                }
                (Node::Block(block), changed)
            }
        }
    }
}

/// Transform a child slot in place. Boxed slots coerce here, so a box's
/// heap allocation is reused whether or not its contents change.
fn transform_slot<F>(slot: &mut Node, mapper: &mut F) -> bool
where
    F: FnMut(&Node) -> Option<Node>,
{
    let node = std::mem::replace(slot, placeholder());
    let (node, changed) = node.transform_inner(mapper);
    *slot = node;
    changed
}

/// Transform a sequence of children in place, keeping the vector's buffer.
fn transform_slice<F>(nodes: &mut [Node], mapper: &mut F) -> bool
where
    F: FnMut(&Node) -> Option<Node>,
{
    let mut changed = false;
    for node in nodes {
        changed |= transform_slot(node, mapper);
    }
    changed
}
