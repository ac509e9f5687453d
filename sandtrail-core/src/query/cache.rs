//! Memoised listing derivation.
//!
//! Views recompute their listing on every render. The cache keys the last
//! result on the catalog generation and the criteria so repeated renders with
//! unchanged inputs reuse the previous vector.

use std::sync::Arc;

use sandtrail_contracts::listing::Listing;
use sandtrail_model::FilterCriteria;
use tracing::debug;

use super::filtering::apply;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    generation: u64,
    criteria: FilterCriteria,
}

/// Single-entry memo for [`apply`].
#[derive(Debug)]
pub struct FilterCache<T> {
    key: Option<CacheKey>,
    result: Arc<[T]>,
    recomputations: u64,
}

impl<T> Default for FilterCache<T> {
    fn default() -> Self {
        Self {
            key: None,
            result: Arc::from(Vec::new()),
            recomputations: 0,
        }
    }
}

impl<T: Listing + Clone> FilterCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the listing for `(generation, criteria)`, recomputing only when
    /// either differs from the previous call.
    ///
    /// `generation` must change whenever `items` is replaced.
    pub fn get_or_compute(
        &mut self,
        generation: u64,
        items: &[T],
        criteria: &FilterCriteria,
    ) -> Arc<[T]> {
        let fresh = self.key.as_ref().is_some_and(|key| {
            key.generation == generation && key.criteria == *criteria
        });

        if !fresh {
            self.result = Arc::from(apply(items, criteria));
            self.key = Some(CacheKey {
                generation,
                criteria: criteria.clone(),
            });
            self.recomputations += 1;
            debug!(
                generation,
                sort = criteria.sort.query_value(),
                results = self.result.len(),
                "recomputed catalog listing"
            );
        }

        Arc::clone(&self.result)
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// How many times the listing was actually recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
