//! Document outline navigator
//!
//! A collapsible table of contents for paginated documents. The outline is
//! fetched asynchronously from an [`OutlineSource`] whenever the active
//! document changes, presented as indented rows, and resolves clicked entries
//! into navigation targets for the caller.

pub mod config;
pub mod controller;
pub mod error;
pub mod expansion;
pub mod node;
pub mod source;
pub mod tree;

pub use config::OutlineConfig;
pub use controller::{Activation, LoadState, OutlineController, OutlineRow, OutlineView, TitleStyle};
pub use error::{DestinationResolutionError, OutlineFetchError};
pub use expansion::ExpansionState;
pub use node::{Emphasis, OutlineNode, Rgb};
pub use source::{InMemorySource, JsonFileSource, OutlineSource};
pub use tree::{FlatNode, NodePath, OutlineTree};

pub mod prelude {
    pub use crate::config::OutlineConfig;
    pub use crate::controller::{Activation, LoadState, OutlineController, OutlineView};
    pub use crate::error::{DestinationResolutionError, OutlineFetchError};
    pub use crate::node::OutlineNode;
    pub use crate::source::{InMemorySource, JsonFileSource, OutlineSource};
    pub use crate::tree::NodePath;
}
