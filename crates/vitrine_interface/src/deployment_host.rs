//! Deployment provider seam.

use async_trait::async_trait;
use vitrine_core::{DeploymentOrder, DeploymentRecord};
use vitrine_error::VitrineResult;

/// A hosting provider that accepts a file manifest and returns a live
/// deployment record.
///
/// One synchronous POST per call; a non-success response is an error
/// carrying the provider's status code and raw body.
#[async_trait]
pub trait DeploymentHost: Send + Sync {
    /// Publishes the order and returns what the provider reported.
    async fn deploy(&self, order: &DeploymentOrder) -> VitrineResult<DeploymentRecord>;
}
