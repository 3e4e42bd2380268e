//! Ordered delegate link list.
//!
//! The chain is an explicit data structure: a vector of links with strictly
//! increasing release boundaries. Making the order explicit keeps the
//! override precedence testable instead of hiding it in an inheritance
//! hierarchy.

use crate::delegates::{
    BaseDelegate, DelegateV26, DelegateV29, DelegateV30, DelegateV31, DelegateV33,
};
use crate::model::ReleaseDelegate;
use permit_core::error::ChainError;
use permit_core::level::ApiLevel;
use std::sync::Arc;

/// An ordered chain of release-scoped delegate links.
///
/// Links are created once and shared read-only; the chain holds them as
/// `Arc<dyn ReleaseDelegate>` so callers can clone the chain cheaply.
#[derive(Clone, Debug)]
pub struct DelegateChain {
    /// Links in ascending boundary order.
    links: Vec<Arc<dyn ReleaseDelegate>>,
}

impl DelegateChain {
    /// Build a chain from explicit links.
    ///
    /// # Arguments
    ///
    /// * `links` - The links, ordered oldest boundary first.
    ///
    /// # Returns
    ///
    /// * `Ok(DelegateChain)` if boundaries are strictly increasing and at or
    ///   above the minimum supported level.
    /// * `Err(ChainError)` otherwise.
    pub fn from_links(links: Vec<Arc<dyn ReleaseDelegate>>) -> Result<Self, ChainError> {
        if links.is_empty() {
            return Err(ChainError::Empty);
        }

        let mut previous: Option<ApiLevel> = None;
        for link in &links {
            let boundary = link.boundary();
            if boundary < ApiLevel::BASE {
                return Err(ChainError::BoundaryBelowMinimum(boundary));
            }
            if let Some(previous) = previous {
                if boundary <= previous {
                    return Err(ChainError::NonMonotonicBoundary {
                        previous,
                        found: boundary,
                    });
                }
            }
            previous = Some(boundary);
        }

        Ok(Self { links })
    }

    /// Build the standard chain covering every supported release boundary.
    pub fn standard() -> Self {
        // Boundaries ascend by construction, so no validation round trip.
        Self {
            links: vec![
                Arc::new(BaseDelegate),
                Arc::new(DelegateV26),
                Arc::new(DelegateV29),
                Arc::new(DelegateV30),
                Arc::new(DelegateV31),
                Arc::new(DelegateV33),
            ],
        }
    }

    /// Links active at the given runtime release, newest boundary first.
    ///
    /// A link whose boundary exceeds the runtime is never yielded, so
    /// override logic gated above the runtime release cannot run.
    pub(crate) fn active_links(
        &self,
        runtime: ApiLevel,
    ) -> impl Iterator<Item = &Arc<dyn ReleaseDelegate>> {
        self.links
            .iter()
            .rev()
            .filter(move |link| link.boundary() <= runtime)
    }

    /// Number of links in the chain.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no links. Always `false` for validated chains.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Boundaries in chain order, oldest first.
    pub fn boundaries(&self) -> Vec<ApiLevel> {
        self.links.iter().map(|link| link.boundary()).collect()
    }
}
