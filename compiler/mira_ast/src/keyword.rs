//! Reserved keywords of the Mira grammar.
//!
//! The set is owned by the language definition; the node layer only consults
//! it as a membership test when a constructor accepts an identifier.

/// Identifiers reserved by the grammar. Kept sorted for readability.
const RESERVED: &[&str] = &["end"];

/// Whether `name` is a reserved keyword and therefore not assignable.
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// All reserved keywords, in definition order.
pub fn all() -> impl Iterator<Item = &'static str> {
    RESERVED.iter().copied()
}
