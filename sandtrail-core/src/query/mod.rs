//! Client-side catalog querying: search, destination filter, ordering and
//! the facets the listing page derives from the catalog.

pub mod cache;
pub mod facets;
pub mod filtering;
pub mod sorting;

pub use cache::FilterCache;
pub use facets::{DEFAULT_POPULAR_COUNT, popular, unique_locations};
pub use filtering::{apply, matches_location, matches_search};
pub use sorting::{compare_listings, sort_listings};
