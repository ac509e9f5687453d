//! Commonly used types for presentation layers.

pub use crate::booking::{BookingDraft, BookingQuote, Enquiry, build_cart_line};
pub use crate::carousel::{CarouselController, CarouselError, CarouselState, TimerCommand};
pub use crate::detail::DetailState;
pub use crate::error::{Result, StorefrontError};
pub use crate::infra::HttpStorefront;
pub use crate::pricing::PriceFormatter;
pub use crate::query::{FilterCache, apply, popular, unique_locations};
pub use crate::storefront::{CatalogSnapshot, LoadStatus, Storefront, StorefrontSettings};
pub use crate::views::{BannerView, DetailView, ListingView};

pub use sandtrail_contracts::prelude::*;
pub use sandtrail_model::prelude::*;
