//! General multiway tree over integer values.
//!
//! A [`Tree`] is either empty or a root value with an ordered list of child
//! subtrees. It grows by randomized [`Tree::insert`] or targeted
//! [`Tree::insert_child`], shrinks by [`Tree::delete`] with child promotion,
//! and renders as an indented listing that [`str::parse`] accepts back.

pub mod errors;
pub mod rng;
pub mod tree;
pub mod util;

mod parse;
mod render;

pub use errors::{TreeError, TreeResult};
pub use rng::{InsertRng, ScriptedRng, UniformSource};
pub use tree::Tree;
