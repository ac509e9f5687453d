use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use sandtrail_contracts::listing::Listing;
use sandtrail_model::SortKey;

/// Compare two listings under `key`.
///
/// Ratings and prices are validated on construction, so `OrderedFloat` only
/// has to provide a total order, not NaN handling.
pub fn compare_listings<T: Listing + ?Sized>(
    a: &T,
    b: &T,
    key: SortKey,
) -> Ordering {
    match key {
        SortKey::RatingDesc => {
            OrderedFloat(b.rating()).cmp(&OrderedFloat(a.rating()))
        }
        SortKey::PriceAsc => {
            OrderedFloat(a.price()).cmp(&OrderedFloat(b.price()))
        }
        SortKey::PriceDesc => {
            OrderedFloat(b.price()).cmp(&OrderedFloat(a.price()))
        }
    }
}

/// Stable in-place sort. Equal keys keep their input order.
pub fn sort_listings<T: Listing>(items: &mut [T], key: SortKey) {
    items.sort_by(|a, b| compare_listings(a, b, key));
}
