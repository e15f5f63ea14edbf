//! Outline tree model.
//!
//! [`OutlineTree`] stores the entries of one document; [`NodePath`] names an
//! entry by its position. The tree is rebuilt from scratch whenever the
//! active document changes.

mod model;
mod path;

pub use model::{FlatNode, OutlineTree};
pub use path::NodePath;
