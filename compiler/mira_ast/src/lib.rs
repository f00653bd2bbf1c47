//! Mira AST - Expression Tree Types
//!
//! This crate contains the node framework for the Mira expression language:
//! - `Node` and its concrete variants (constants, symbols, operators, arrays,
//!   ranges, assignments, blocks, function calls)
//! - Generic pre-order traversal and filtering
//! - Functional bottom-up rewriting (`transform`)
//! - Construction-time validation (reserved keywords, symbol names)
//!
//! # Design Philosophy
//!
//! - **Closed variant set**: `Node` is an enum, so every generic operation is
//!   an exhaustive match. Adding a node kind is a compile error until every
//!   operation handles it.
//! - **Owned children**: children live in `Box<Node>` / `Vec<Node>` slots.
//!   Trees are immutable once built; `transform` rebuilds a parent only when
//!   a child actually changed and otherwise moves the existing allocation
//!   through untouched.
//! - **Validate at construction**: structural requirements are carried by the
//!   constructor signatures; the remaining semantic checks (reserved keyword
//!   membership) fail construction with [`NodeError`], never a later walk.
//!
//! Parsing source text into trees and evaluating trees live elsewhere
//! (`mira_eval` compiles a tree against a runtime; `mira_fmt` renders one).

mod error;
pub mod keyword;
mod node;

pub use error::NodeError;
pub use node::{
    ArrayNode, AssignmentNode, BlockNode, BlockStmt, ChildKey, ConstantNode, FunctionCallNode,
    Literal, Node, OperatorNode, RangeNode, SymbolNode,
};
