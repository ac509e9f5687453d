use std::sync::Arc;

use sandtrail_model::Excursion;
use tokio::sync::watch;
use url::Url;

use crate::carousel::{CarouselController, CarouselError};
use crate::storefront::Storefront;
use crate::views::listing_route;

/// Home banner: auto-rotating hero images plus the city picker.
#[derive(Debug)]
pub struct BannerView {
    storefront: Arc<Storefront>,
    carousel: CarouselController<Url>,
    selected_location: Option<String>,
}

impl BannerView {
    pub fn new(storefront: Arc<Storefront>) -> Self {
        let interval = storefront.settings().banner_interval;
        Self {
            storefront,
            carousel: CarouselController::new(interval),
            selected_location: None,
        }
    }

    /// Load collections, resolve the banner media and start rotating.
    ///
    /// Must be called from within a tokio runtime. When a newer mount
    /// superseded this one the carousel is left untouched.
    pub async fn mount(&mut self) {
        self.storefront.load_collections().await;
        if let Some(urls) = self.storefront.resolve_banner().await {
            self.carousel.start(urls);
        }
    }

    /// Stop rotating. Dropping the view does the same.
    pub fn unmount(&mut self) {
        self.carousel.stop();
    }

    pub fn current(&self) -> Option<Url> {
        self.carousel.current()
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn slide_count(&self) -> usize {
        self.carousel.len()
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.carousel.subscribe()
    }

    pub fn next(&mut self) {
        self.carousel.next();
    }

    pub fn previous(&mut self) {
        self.carousel.previous();
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        self.carousel.go_to(index)
    }

    pub fn cities(&self) -> Vec<Excursion> {
        self.storefront.best_cities()
    }

    pub fn locations(&self) -> Vec<String> {
        self.storefront.locations()
    }

    /// Pick a destination; returns the listing route to navigate to.
    pub fn select_location(&mut self, location: &str) -> String {
        let location = location.trim();
        self.selected_location = (!location.is_empty()).then(|| location.to_string());
        listing_route(self.selected_location.as_deref())
    }

    pub fn selected_location(&self) -> Option<&str> {
        self.selected_location.as_deref()
    }
}
