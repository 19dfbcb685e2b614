//! Catalog provider port.

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::domain::Entity;
use crate::errors::CatalogError;

/// Read-only access to the creature catalog.
///
/// Implementations must be cheap to share behind an `Arc` and safe to call
/// concurrently. Lookups are side-effect-free reads: a caller that abandons
/// an in-flight lookup owes no cleanup.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Resolve a single id to its entity.
    async fn fetch_entity(&self, id: u32) -> Result<Entity, CatalogError>;

    /// Resolve several ids, all-or-nothing.
    ///
    /// The default implementation runs the single-id lookups concurrently
    /// and fails as a whole if any of them fails. Entities come back in the
    /// same order as `ids`.
    async fn fetch_entities(&self, ids: &[u32]) -> Result<Vec<Entity>, CatalogError> {
        try_join_all(ids.iter().map(|id| self.fetch_entity(*id))).await
    }
}
