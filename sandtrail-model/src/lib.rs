//! Core data model definitions shared across Sandtrail crates.
#![allow(missing_docs)]

pub mod cart;
pub mod collection;
pub mod error;
pub mod excursion;
pub mod filter_types;
pub mod ids;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use cart::{CartLine, CartSummary, CheckoutRef};
pub use collection::{BANNER_HANDLE, BEST_CITIES_HANDLE, Collection};
pub use error::{ModelError, Result as ModelResult};
pub use excursion::{Excursion, ExcursionBuilder, Variant};
pub use filter_types::{FilterCriteria, SortKey};
pub use ids::{ExcursionId, MediaId, VariantId};
