//! Mira Fmt - Expression Tree Renderers
//!
//! Two independent serializations of a `mira_ast` tree:
//!
//! - [`render`] — plain expression syntax, e.g. `b = x + 2`
//! - [`render_tex`] — typeset TeX notation, e.g. `{b}={x}+{2}`
//!
//! Both are pure functions of the tree: no side effects, deterministic, and
//! each node renders by its own local rule recursing into its children, so
//! whole-tree output composes from per-variant rules.

mod number;
mod tex;
mod text;


pub use tex::render_tex;
pub use text::render;
