//! View-state handles driven by a presentation layer.
//!
//! Each view borrows the shared [`Storefront`](crate::storefront::Storefront)
//! and keeps only its own local state (criteria, carousel, booking draft).
//! `mount` loads what the view needs; dropping a view releases its timers.

pub mod banner;
pub mod detail;
pub mod listing;

pub use banner::BannerView;
pub use detail::DetailView;
pub use listing::ListingView;

/// Route of the full listing page.
pub const LISTING_ROUTE: &str = "/safaris";

/// Listing route pre-filtered to `location`.
pub fn listing_route(location: Option<&str>) -> String {
    match location.map(str::trim).filter(|loc| !loc.is_empty()) {
        Some(location) => {
            format!("{LISTING_ROUTE}?location={}", urlencoding::encode(location))
        }
        None => LISTING_ROUTE.to_string(),
    }
}
