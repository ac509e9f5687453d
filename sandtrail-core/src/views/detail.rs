use std::sync::Arc;

use sandtrail_model::{CheckoutRef, Excursion, ExcursionId};

use crate::booking::{BookingDraft, BookingQuote, Enquiry};
use crate::carousel::{CarouselError, CarouselState};
use crate::detail::{DetailState, display_inclusions, safety_guide};
use crate::error::{Result, StorefrontError};
use crate::storefront::Storefront;

/// Item detail page: gallery, booking panel and the two booking paths
/// (hosted cart or messaging enquiry).
#[derive(Debug)]
pub struct DetailView {
    storefront: Arc<Storefront>,
    id: ExcursionId,
    state: DetailState,
    gallery: CarouselState<String>,
    draft: BookingDraft,
    adding_to_cart: bool,
}

impl DetailView {
    /// `route_id` may be the bare numeric id from the route or a global id.
    pub fn new(storefront: Arc<Storefront>, route_id: &str) -> Result<Self> {
        let id = ExcursionId::from_route(route_id)?;
        Ok(Self {
            storefront,
            id,
            state: DetailState::Loading,
            gallery: CarouselState::manual(),
            draft: BookingDraft::default(),
            adding_to_cart: false,
        })
    }

    pub fn id(&self) -> &ExcursionId {
        &self.id
    }

    pub async fn mount(&mut self) -> &DetailState {
        self.state = self.storefront.fetch_excursion(&self.id).await;
        let images = self
            .state
            .excursion()
            .map(|excursion| excursion.images().to_vec())
            .unwrap_or_default();
        self.gallery.start(images);
        &self.state
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    fn excursion(&self) -> Result<&Arc<Excursion>> {
        self.state
            .excursion()
            .ok_or_else(|| StorefrontError::NotFound(self.id.to_string()))
    }

    pub fn inclusions(&self) -> Vec<String> {
        self.state
            .excursion()
            .map(|excursion| display_inclusions(excursion))
            .unwrap_or_default()
    }

    pub fn safety_guide(&self) -> Option<&'static str> {
        self.state.excursion().and_then(|excursion| safety_guide(excursion))
    }

    // ----- gallery -----

    pub fn image(&self) -> Option<&str> {
        self.gallery.current().map(String::as_str)
    }

    pub fn image_index(&self) -> usize {
        self.gallery.index()
    }

    pub fn next_image(&mut self) {
        self.gallery.next();
    }

    pub fn previous_image(&mut self) {
        self.gallery.previous();
    }

    pub fn select_image(&mut self, index: usize) -> std::result::Result<(), CarouselError> {
        self.gallery.go_to(index).map(|_| ())
    }

    // ----- booking -----

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    pub fn quote(&self) -> Option<BookingQuote> {
        self.state
            .excursion()
            .map(|excursion| self.draft.quote(excursion.price()))
    }

    /// Per-person price in the selected currency.
    pub fn price_label(&self) -> Option<String> {
        let prices = self.storefront.prices();
        self.state
            .excursion()
            .map(|excursion| prices.format(excursion.price()))
    }

    /// Subtotal for the current draft in the selected currency.
    pub fn subtotal_label(&self) -> Option<String> {
        self.quote()
            .map(|quote| self.storefront.prices().format(quote.subtotal))
    }

    pub fn is_adding_to_cart(&self) -> bool {
        self.adding_to_cart
    }

    /// Submit the booking to the hosted cart.
    pub async fn book(&mut self) -> Result<CheckoutRef> {
        let excursion = Arc::clone(self.excursion()?);
        self.adding_to_cart = true;
        let outcome = self.storefront.add_to_cart(&excursion, &self.draft).await;
        self.adding_to_cart = false;
        outcome
    }

    pub fn enquiry(&self) -> Result<Enquiry> {
        let excursion = self.excursion()?;
        self.storefront.enquiry(excursion, &self.draft)
    }
}
