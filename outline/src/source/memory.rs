//! In-memory outline source

use std::fmt::Debug;

use async_trait::async_trait;

use super::OutlineSource;
use crate::error::{DestinationResolutionError, OutlineFetchError};
use crate::node::OutlineNode;

/// An outline source backed by values held in memory.
///
/// Useful for documents whose outline was extracted elsewhere, and for
/// tests.
///
/// # Example
///
/// ```
/// use outline::{InMemorySource, OutlineNode};
///
/// let source = InMemorySource::new(vec![OutlineNode::new("Intro").with_destination(1u32)])
///     .with_destination(1u32, "page 1");
/// ```
#[derive(Debug, Clone)]
pub struct InMemorySource<D, L> {
    outline: Option<Vec<OutlineNode<D>>>,
    destinations: Vec<(D, L)>,
}

impl<D, L> InMemorySource<D, L> {
    /// Creates a source with the given outline.
    pub fn new(outline: Vec<OutlineNode<D>>) -> Self {
        Self {
            outline: Some(outline),
            destinations: Vec::new(),
        }
    }

    /// Creates a source for a document that has no outline.
    pub fn without_outline() -> Self {
        Self {
            outline: None,
            destinations: Vec::new(),
        }
    }

    /// Registers the location a destination resolves to.
    pub fn with_destination(mut self, destination: D, location: L) -> Self {
        self.destinations.push((destination, location));
        self
    }
}

#[async_trait]
impl<D, L> OutlineSource for InMemorySource<D, L>
where
    D: Clone + Debug + PartialEq + Send + Sync + 'static,
    L: Clone + Debug + Send + Sync + 'static,
{
    type Destination = D;
    type Location = L;

    async fn fetch_outline(&self) -> Result<Option<Vec<OutlineNode<D>>>, OutlineFetchError> {
        Ok(self.outline.clone())
    }

    async fn resolve_destination(&self, destination: &D) -> Result<L, DestinationResolutionError> {
        self.destinations
            .iter()
            .find(|(d, _)| d == destination)
            .map(|(_, location)| location.clone())
            .ok_or_else(|| DestinationResolutionError::unresolvable(format!("{:?}", destination)))
    }
}
