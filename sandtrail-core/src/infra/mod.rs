//! Backend adapters.

pub mod storefront_api;

pub use storefront_api::HttpStorefront;
