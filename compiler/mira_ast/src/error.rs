//! Construction errors for the node layer.
//!
//! Structural requirements (child arity, child types) are carried by the
//! constructor signatures themselves, so only the checks the type system
//! cannot express surface here.

use std::fmt;

/// Error raised by a node constructor when a semantic check fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeError {
    /// Identifier is empty or otherwise not a usable symbol name.
    IllegalName {
        /// The rejected identifier.
        name: String,
    },
    /// Identifier is reserved by the grammar.
    ReservedKeyword {
        /// The rejected identifier.
        name: String,
    },
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::IllegalName { name } => {
                write!(f, "illegal symbol name: {name:?}")
            }
            NodeError::ReservedKeyword { name } => {
                write!(f, "illegal symbol name: {name:?} is a reserved keyword")
            }
        }
    }
}

impl std::error::Error for NodeError {}
