use std::sync::Arc;

use sandtrail_model::{CartSummary, Collection, Excursion};

use crate::pricing::PriceFormatter;

/// Progress of the most recent catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last load failed; the previous snapshot (possibly empty) is kept.
    Failed(String),
}

/// Immutable catalog snapshot shared with views.
///
/// `generation` increases every time `items` is replaced and keys the
/// listing memo.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub items: Arc<[Excursion]>,
    pub generation: u64,
    pub status: LoadStatus,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            generation: 0,
            status: LoadStatus::Idle,
        }
    }
}

/// Signed-in customer as reported by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Default)]
pub(crate) struct AppState {
    pub(crate) catalog: CatalogSnapshot,
    pub(crate) collections: Arc<[Collection]>,
    pub(crate) cart: CartSummary,
    /// Selected display currency.
    pub(crate) prices: PriceFormatter,
    pub(crate) customer: Option<Customer>,
}
