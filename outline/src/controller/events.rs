//! Activation handling for the outline controller.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::task::JoinHandle;

use crate::source::OutlineSource;
use crate::tree::NodePath;

use super::state::OutlineController;

/// What an activation did.
#[derive(Debug, Default)]
pub struct Activation {
    /// New expansion state, if the entry had children and was toggled.
    pub toggled: Option<bool>,
    /// Handle of the destination resolution, if one was started.
    pub resolution: Option<JoinHandle<()>>,
}

impl Activation {
    /// Returns `true` if the activation had no effect.
    pub fn is_noop(&self) -> bool {
        self.toggled.is_none() && self.resolution.is_none()
    }

    /// Wait for the destination resolution, if any, to finish.
    pub async fn finished(self) {
        if let Some(handle) = self.resolution
            && let Err(err) = handle.await
        {
            log::error!("Destination resolution task failed: {}", err);
        }
    }
}

impl<S: OutlineSource> OutlineController<S> {
    /// Handle a click on an entry.
    ///
    /// An entry with children is toggled; an entry with a destination has it
    /// resolved in the background and the result handed to the navigation
    /// callback. Both can happen on the same click.
    pub fn activate(&self, path: &NodePath) -> Activation {
        let (toggled, request) = {
            let Ok(mut guard) = self.inner.write() else {
                return Activation::default();
            };
            let Some(node) = guard.tree.get(path) else {
                log::debug!("Ignoring activation of unknown entry {}", path);
                return Activation::default();
            };
            let has_children = node.has_children();
            let destination = node.destination.clone();

            let toggled = if has_children {
                let expanded = guard.expanded.toggle(path);
                Self::rebuild_visible(&mut guard);
                self.dirty.store(true, Ordering::SeqCst);
                Some(expanded)
            } else {
                None
            };

            let request = match (destination, guard.source.clone()) {
                (Some(destination), Some(source)) => Some((source, destination, guard.generation)),
                _ => None,
            };
            (toggled, request)
        };

        let resolution = request.and_then(|(source, destination, generation)| {
            self.spawn_resolution(source, destination, generation)
        });

        Activation {
            toggled,
            resolution,
        }
    }

    /// Handle a click on the visible row at `index`.
    pub fn activate_row(&self, index: usize) -> Activation {
        match self.visible_node(index) {
            Some(node) => self.activate(&node.path),
            None => Activation::default(),
        }
    }

    fn spawn_resolution(
        &self,
        source: Arc<S>,
        destination: S::Destination,
        generation: u64,
    ) -> Option<JoinHandle<()>> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                log::error!("Cannot resolve destination without an async runtime: {}", err);
                return None;
            }
        };

        let controller = self.clone();
        Some(runtime.spawn(async move {
            match source.resolve_destination(&destination).await {
                Ok(location) => controller.deliver(generation, location),
                Err(err) => {
                    log::error!("Error resolving destination {:?}: {}", destination, err);
                }
            }
        }))
    }

    /// Hand a resolved location to the navigation callback.
    fn deliver(&self, generation: u64, location: S::Location) {
        if self.generation() != generation {
            log::debug!("Dropping destination resolved for a previous document: {:?}", location);
            return;
        }
        log::info!("Navigate to: {:?}", location);
        if let Some(on_navigate) = &self.on_navigate {
            on_navigate(location);
        }
    }
}
