//! Boundary contracts for the hosted commerce backend.
//!
//! Each trait covers one concern so views only receive the collaborators they
//! use. Implementations must be cheap to share behind `Arc`.

use async_trait::async_trait;
use sandtrail_model::{
    CartLine, CheckoutRef, Collection, Excursion, ExcursionId, MediaId,
};
use std::fmt::Debug;
use url::Url;

use crate::error::BackendResult;

/// Read-only product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync + Debug {
    /// Full snapshot of the catalog. No pagination contract.
    async fn list(&self) -> BackendResult<Vec<Excursion>>;

    /// Single excursion lookup; `Ok(None)` when the id is unknown.
    async fn get(&self, id: &ExcursionId) -> BackendResult<Option<Excursion>>;

    /// Curated collections with their products and banner media.
    async fn collections(&self) -> BackendResult<Vec<Collection>>;
}

/// Turns media node ids into displayable URLs.
#[async_trait]
pub trait MediaResolver: Send + Sync + Debug {
    async fn resolve(&self, ids: &[MediaId]) -> BackendResult<Vec<Url>>;
}

/// Hosted cart mutation.
#[async_trait]
pub trait CartGateway: Send + Sync + Debug {
    /// Add a line, creating a checkout when `current` is `None`.
    async fn add_item(
        &self,
        line: &CartLine,
        current: Option<&CheckoutRef>,
    ) -> BackendResult<CheckoutRef>;
}
