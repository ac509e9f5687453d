use std::sync::Arc;

use sandtrail_model::{Excursion, FilterCriteria, SortKey};

use crate::query::FilterCache;
use crate::storefront::{LoadStatus, Storefront};

/// Listing page: search box, destination facet and sort selector over the
/// catalog snapshot.
#[derive(Debug)]
pub struct ListingView {
    storefront: Arc<Storefront>,
    criteria: FilterCriteria,
    cache: FilterCache<Excursion>,
}

impl ListingView {
    /// `location` is the navigation parameter the page was opened with.
    pub fn new(storefront: Arc<Storefront>, location: Option<&str>) -> Self {
        Self {
            storefront,
            criteria: FilterCriteria::seeded(location),
            cache: FilterCache::new(),
        }
    }

    pub async fn mount(&mut self) -> LoadStatus {
        self.storefront.load_catalog().await.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.storefront.catalog().status, LoadStatus::Loading)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.criteria.set_location(location);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
    }

    /// Reset search, destination and sort.
    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_filter_count()
    }

    /// Filtered, sorted listing; recomputed only when the catalog or the
    /// criteria changed since the last call.
    pub fn results(&mut self) -> Arc<[Excursion]> {
        let catalog = self.storefront.catalog();
        self.cache
            .get_or_compute(catalog.generation, &catalog.items, &self.criteria)
    }

    /// Options for the destination facet.
    pub fn locations(&self) -> Vec<String> {
        self.storefront.locations()
    }

    /// `"3 safaris available"`
    pub fn summary(&mut self) -> String {
        let count = self.results().len();
        let noun = if count == 1 { "safari" } else { "safaris" };
        match self.criteria.location() {
            Some(location) => format!("{count} {noun} available in {location}"),
            None => format!("{count} {noun} available"),
        }
    }

    pub fn recomputations(&self) -> u64 {
        self.cache.recomputations()
    }
}
