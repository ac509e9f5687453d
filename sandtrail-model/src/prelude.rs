//! UI focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in views or other presentation layers.

pub use super::cart::{CartLine, CartSummary, CheckoutRef};
pub use super::collection::{BANNER_HANDLE, BEST_CITIES_HANDLE, Collection};
pub use super::excursion::{Excursion, ExcursionBuilder, Variant};
pub use super::filter_types::{FilterCriteria, SortKey};
pub use super::ids::{ExcursionId, MediaId, VariantId};
