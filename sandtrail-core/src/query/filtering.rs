//! Search and destination filtering over an in-memory catalog.
//!
//! [`apply`] is the single entry point used by views. It runs search, then
//! destination, then ordering, and always returns a fresh vector so the
//! caller's catalog snapshot is never reordered in place.

use sandtrail_contracts::listing::Listing;
use sandtrail_model::FilterCriteria;

use super::sorting::sort_listings;

/// Case-insensitive substring match against title, description or location.
///
/// `needle` must already be lower-cased.
pub fn matches_search<T: Listing + ?Sized>(item: &T, needle: &str) -> bool {
    item.title().to_lowercase().contains(needle)
        || item.description().to_lowercase().contains(needle)
        || item.location().to_lowercase().contains(needle)
}

/// Case-insensitive exact match on the location label.
///
/// `location` must already be lower-cased.
pub fn matches_location<T: Listing + ?Sized>(item: &T, location: &str) -> bool {
    item.location().to_lowercase() == location
}

/// Derive the visible listing for `criteria` from a catalog snapshot.
pub fn apply<T>(items: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: Listing + Clone,
{
    let needle = criteria.has_search().then(|| criteria.search.to_lowercase());
    let location = criteria.location().map(str::to_lowercase);

    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(*item, needle))
        })
        .filter(|item| {
            location
                .as_deref()
                .is_none_or(|location| matches_location(*item, location))
        })
        .cloned()
        .collect();

    sort_listings(&mut filtered, criteria.sort);
    filtered
}
