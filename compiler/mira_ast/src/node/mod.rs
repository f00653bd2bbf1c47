//! Expression tree nodes.
//!
//! `Node` is the closed set of node kinds; each variant struct owns its
//! children. Construction is the only place validation happens — a tree that
//! exists is well-formed, and the generic operations (`traverse`, `filter`,
//! `transform`, `Clone`) never fail on it.

mod transform;
mod walk;


pub use walk::ChildKey;

use crate::error::NodeError;
use crate::keyword;

/// Literal value carried by a [`ConstantNode`].
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Numeric literal: `3`, `2.5`.
    Number(f64),
    /// Boolean literal: `true`, `false`.
    Bool(bool),
    /// String literal: `"hello"`.
    Str(String),
}

/// Expression tree node.
///
/// Every generic operation over trees is an exhaustive match on this enum,
/// so a new node kind cannot be added without extending each of them.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Literal value.
    Constant(ConstantNode),
    /// Identifier resolved against the scope (then runtime constants) at
    /// evaluation time.
    Symbol(SymbolNode),
    /// Operator application dispatched through a named runtime operation.
    Operator(OperatorNode),
    /// Call of a named runtime function: `max(a, b)`.
    FunctionCall(FunctionCallNode),
    /// Ordered element sequence: `[1, 2, 3]`.
    Array(ArrayNode),
    /// Numeric range: `1:10` or `1:2:10`.
    Range(RangeNode),
    /// Variable assignment: `a = expr`.
    Assignment(AssignmentNode),
    /// Statement sequence; hidden statements evaluate but produce no result.
    Block(BlockNode),
}

impl Node {
    /// Variant tag name, for diagnostics and debugging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Constant(_) => "ConstantNode",
            Node::Symbol(_) => "SymbolNode",
            Node::Operator(_) => "OperatorNode",
            Node::FunctionCall(_) => "FunctionCallNode",
            Node::Array(_) => "ArrayNode",
            Node::Range(_) => "RangeNode",
            Node::Assignment(_) => "AssignmentNode",
            Node::Block(_) => "BlockNode",
        }
    }

    /// Shorthand for a numeric constant node.
    pub fn number(value: f64) -> Node {
        Node::Constant(ConstantNode::number(value))
    }

    /// Shorthand for a symbol node.
    pub fn symbol(name: impl Into<String>) -> Node {
        Node::Symbol(SymbolNode::new(name))
    }
}

/// Literal value node.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantNode {
    /// The literal this node evaluates to.
    pub value: Literal,
}

impl ConstantNode {
    pub fn new(value: Literal) -> Self {
        ConstantNode { value }
    }

    pub fn number(value: f64) -> Self {
        ConstantNode::new(Literal::Number(value))
    }

    pub fn bool(value: bool) -> Self {
        ConstantNode::new(Literal::Bool(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        ConstantNode::new(Literal::Str(value.into()))
    }
}

/// Identifier node. The name is resolved at evaluation time, so an undefined
/// variable is an eval error, not a construction or compile error.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolNode {
    /// The identifier.
    pub name: String,
}

impl SymbolNode {
    pub fn new(name: impl Into<String>) -> Self {
        SymbolNode { name: name.into() }
    }
}

/// Operator application node.
///
/// Carries both the surface symbol (`"+"`, for rendering) and the runtime
/// operation name (`"add"`, for compile-time resolution). The argument order
/// is the evaluation order.
#[derive(Clone, Debug, PartialEq)]
pub struct OperatorNode {
    /// Surface operator symbol, e.g. `"+"`.
    pub op: String,
    /// Runtime operation name the compiler resolves, e.g. `"add"`.
    pub fn_name: String,
    /// Ordered argument subtrees.
    pub args: Vec<Node>,
}

impl OperatorNode {
    pub fn new(op: impl Into<String>, fn_name: impl Into<String>, args: Vec<Node>) -> Self {
        OperatorNode {
            op: op.into(),
            fn_name: fn_name.into(),
            args,
        }
    }
}

/// Named function call node: `max(a, b)`. The callee name is resolved against
/// the runtime registry at compile time, like an operator's operation name.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCallNode {
    /// Callee name.
    pub name: String,
    /// Ordered argument subtrees.
    pub args: Vec<Node>,
}

impl FunctionCallNode {
    pub fn new(name: impl Into<String>, args: Vec<Node>) -> Self {
        FunctionCallNode {
            name: name.into(),
            args,
        }
    }
}

/// Ordered element sequence node.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayNode {
    /// Element subtrees, in order.
    pub items: Vec<Node>,
}

impl ArrayNode {
    pub fn new(items: Vec<Node>) -> Self {
        ArrayNode { items }
    }
}

/// Numeric range node: `start:end` with an optional step, `start:step:end`.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeNode {
    pub start: Box<Node>,
    pub end: Box<Node>,
    /// Step subtree; a missing step means a step of one at evaluation time.
    pub step: Option<Box<Node>>,
}

impl RangeNode {
    pub fn new(start: Node, end: Node) -> Self {
        RangeNode {
            start: Box::new(start),
            end: Box::new(end),
            step: None,
        }
    }

    pub fn with_step(start: Node, step: Node, end: Node) -> Self {
        RangeNode {
            start: Box::new(start),
            end: Box::new(end),
            step: Some(Box::new(step)),
        }
    }
}

/// Variable assignment node: `name = expr`.
///
/// Evaluating it stores the value of `expr` under `name` in the caller's
/// scope and yields that value.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentNode {
    /// Target variable. Validated once, at construction.
    pub name: String,
    /// Right-hand side subtree; exclusively owned.
    pub expr: Box<Node>,
}

impl AssignmentNode {
    /// Create an assignment. Fails if `name` is empty or reserved; a tree
    /// that constructed successfully never fails these checks later.
    pub fn new(name: impl Into<String>, expr: Node) -> Result<Self, NodeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NodeError::IllegalName { name });
        }
        if keyword::is_reserved(&name) {
            return Err(NodeError::ReservedKeyword { name });
        }
        Ok(AssignmentNode {
            name,
            expr: Box::new(expr),
        })
    }
}

/// One statement of a [`BlockNode`].
#[derive(Clone, Debug, PartialEq)]
pub struct BlockStmt {
    pub node: Node,
    /// Hidden statements (`expr;`) evaluate for their effect only.
    pub visible: bool,
}

/// Statement sequence node. Evaluation runs every statement in order and
/// collects the visible results.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockNode {
    pub stmts: Vec<BlockStmt>,
}

impl BlockNode {
    pub fn new(stmts: Vec<BlockStmt>) -> Self {
        BlockNode { stmts }
    }
}

impl From<ConstantNode> for Node {
    fn from(n: ConstantNode) -> Node {
        Node::Constant(n)
    }
}

impl From<SymbolNode> for Node {
    fn from(n: SymbolNode) -> Node {
        Node::Symbol(n)
    }
}

impl From<OperatorNode> for Node {
    fn from(n: OperatorNode) -> Node {
        Node::Operator(n)
    }
}

impl From<FunctionCallNode> for Node {
    fn from(n: FunctionCallNode) -> Node {
        Node::FunctionCall(n)
    }
}

impl From<ArrayNode> for Node {
    fn from(n: ArrayNode) -> Node {
        Node::Array(n)
    }
}

impl From<RangeNode> for Node {
    fn from(n: RangeNode) -> Node {
        Node::Range(n)
    }
}

impl From<AssignmentNode> for Node {
    fn from(n: AssignmentNode) -> Node {
        Node::Assignment(n)
    }
}

impl From<BlockNode> for Node {
    fn from(n: BlockNode) -> Node {
        Node::Block(n)
    }
}
