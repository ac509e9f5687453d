//! Trait surfaces that describe interactions with Sandtrail data models and
//! the external commerce backend.

pub mod backend;
pub mod error;
pub mod listing;

/// Frequently used trait combinators for views and adapters.
pub mod prelude {
    pub use super::backend::{CartGateway, CatalogSource, MediaResolver};
    pub use super::error::{BackendError, BackendResult};
    pub use super::listing::Listing;
}
