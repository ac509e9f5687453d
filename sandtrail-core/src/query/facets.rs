use std::collections::HashSet;

use sandtrail_contracts::listing::Listing;

/// Default size of the home page "popular" strip.
pub const DEFAULT_POPULAR_COUNT: usize = 10;

/// Distinct, non-empty locations in first-seen order.
///
/// Drives the destination facet; entries compare exactly as the backend
/// spells them.
pub fn unique_locations<T: Listing>(items: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.location())
        .filter(|location| !location.is_empty())
        .filter(|location| seen.insert(*location))
        .map(str::to_string)
        .collect()
}

/// Leading `count` entries of the catalog, in backend order.
pub fn popular<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    items.iter().take(count).cloned().collect()
}
