//! Outline data sources
//!
//! An [`OutlineSource`] is the document-side collaborator of the outline:
//! it produces the outline tree and resolves destination references. A new
//! document means a new source; the controller only ever borrows it.

mod json;
mod memory;

pub use json::*;
pub use memory::*;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::{DestinationResolutionError, OutlineFetchError};
use crate::node::OutlineNode;

/// Trait for document outline providers.
///
/// Both operations are asynchronous and may fail; failures never reach the
/// user beyond a log line.
///
/// # Example
///
/// ```ignore
/// struct PdfOutline { doc: PdfDocument }
///
/// #[async_trait]
/// impl OutlineSource for PdfOutline {
///     type Destination = PdfDest;
///     type Location = PageRef;
///
///     async fn fetch_outline(&self) -> Result<Option<Vec<OutlineNode<PdfDest>>>, OutlineFetchError> {
///         self.doc.outline().await.map_err(OutlineFetchError::malformed)
///     }
///
///     async fn resolve_destination(&self, dest: &PdfDest) -> Result<PageRef, DestinationResolutionError> {
///         self.doc.destination(dest).await.map_err(DestinationResolutionError::invalid)
///     }
/// }
/// ```
#[async_trait]
pub trait OutlineSource: Send + Sync + 'static {
    /// Opaque per-entry destination reference.
    type Destination: Clone + Debug + Send + Sync + 'static;

    /// Resolved navigation target handed to the caller.
    type Location: Debug + Send + 'static;

    /// Retrieves the document outline.
    ///
    /// `Ok(None)` means the document has no outline.
    async fn fetch_outline(
        &self,
    ) -> Result<Option<Vec<OutlineNode<Self::Destination>>>, OutlineFetchError>;

    /// Resolves a destination reference into a navigation target.
    async fn resolve_destination(
        &self,
        destination: &Self::Destination,
    ) -> Result<Self::Location, DestinationResolutionError>;
}
