//! # Sandtrail Core
//!
//! Client-side core of the Sandtrail desert-safari storefront: everything the
//! pages compute, independent of how they are rendered.
//!
//! ## Overview
//!
//! - **Catalog querying**: search, destination filter and ordering over the
//!   excursion catalog, memoised per catalog generation ([`query`])
//! - **Carousels**: the rotating home banner and the manual detail gallery
//!   ([`carousel`])
//! - **Booking**: guest counts and subtotal, the hosted-cart line and the
//!   messaging enquiry ([`booking`])
//! - **Application state**: the [`Storefront`](storefront::Storefront) handle
//!   holding the catalog, collections, cart and session ([`storefront`])
//! - **Views**: listing, banner and detail view-state handles ([`views`])
//! - **Backend adapter**: the GraphQL storefront client ([`infra`])
//!
//! ## Examples
//!
//! ```no_run
//! use sandtrail_core::prelude::*;
//!
//! fn dubai_by_price(catalog: &[Excursion]) -> Vec<Excursion> {
//!     let criteria = FilterCriteria::seeded(Some("Dubai")).with_sort(SortKey::PriceAsc);
//!     apply(catalog, &criteria)
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Booking draft, cart line and messaging enquiry
pub mod booking;
/// Carousel state machine and its tokio driver
pub mod carousel;
/// Item detail helpers
pub mod detail;
pub mod error;
/// Backend adapters
pub mod infra;
pub mod pricing;
/// Catalog filtering, sorting and facets
pub mod query;
/// Shared application state
pub mod storefront;
pub mod views;

pub mod prelude;

pub use error::{Result, StorefrontError};
