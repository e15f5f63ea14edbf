//! Outline controller: owns the tree and expansion state of the active
//! document, turns them into rows and handles activations.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use outline::prelude::*;
//!
//! let controller = OutlineController::new()
//!     .with_navigate(|location| println!("go to {:?}", location));
//!
//! let source = InMemorySource::new(vec![
//!     OutlineNode::new("Ch1").with_child(OutlineNode::new("1.1").with_destination(2)),
//!     OutlineNode::new("Ch2").with_destination(9),
//! ])
//! .with_destination(2, "page 2")
//! .with_destination(9, "page 9");
//!
//! if let Some(fetch) = controller.set_document(Some(Arc::new(source))) {
//!     fetch.await?;
//! }
//! controller.activate_row(0); // expands "Ch1"
//! println!("{}", controller.view().to_text());
//! ```

mod events;
mod render;
mod state;

pub use events::Activation;
pub use render::{OutlineRow, OutlineView, TitleStyle};
pub use state::{LoadState, NavigateFn, OutlineController};
