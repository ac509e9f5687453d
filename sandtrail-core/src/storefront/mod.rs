//! Application-state handle.
//!
//! [`Storefront`] owns the backend collaborators and the shared state the
//! views read: catalog snapshot, collections, cart summary, the selected
//! display currency and the signed-in customer. Collaborators are injected at construction; nothing here is a
//! process-wide singleton.

pub mod state;
pub mod tickets;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use sandtrail_contracts::backend::{CartGateway, CatalogSource, MediaResolver};
use sandtrail_model::{
    BANNER_HANDLE, BEST_CITIES_HANDLE, CartSummary, CheckoutRef, Collection,
    Excursion, ExcursionId,
};
use tracing::{debug, info, warn};
use url::Url;

use crate::booking::{BookingDraft, Enquiry, build_cart_line};
use crate::carousel::DEFAULT_ROTATION_INTERVAL;
use crate::detail::DetailState;
use crate::error::Result;
use crate::pricing::PriceFormatter;
use crate::query::{self, DEFAULT_POPULAR_COUNT};

pub use state::{CatalogSnapshot, Customer, LoadStatus};
pub use tickets::{LoadKind, LoadTickets, Ticket};

use state::AppState;

/// Presentation settings resolved from configuration.
#[derive(Debug, Clone)]
pub struct StorefrontSettings {
    /// Messaging number used for booking enquiries.
    pub contact_number: String,
    /// Formatter for the configured currency; the starting selection.
    pub prices: PriceFormatter,
    pub banner_interval: Duration,
    pub popular_count: usize,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            contact_number: String::new(),
            prices: PriceFormatter::default(),
            banner_interval: DEFAULT_ROTATION_INTERVAL,
            popular_count: DEFAULT_POPULAR_COUNT,
        }
    }
}

/// Shared storefront state plus the injected backend collaborators.
#[derive(Debug)]
pub struct Storefront {
    catalog_source: Arc<dyn CatalogSource>,
    media: Arc<dyn MediaResolver>,
    cart_gateway: Arc<dyn CartGateway>,
    settings: StorefrontSettings,
    state: RwLock<AppState>,
    tickets: LoadTickets,
}

impl Storefront {
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        media: Arc<dyn MediaResolver>,
        cart_gateway: Arc<dyn CartGateway>,
        settings: StorefrontSettings,
    ) -> Self {
        Self {
            catalog_source,
            media,
            cart_gateway,
            state: RwLock::new(AppState {
                prices: settings.prices.clone(),
                ..AppState::default()
            }),
            settings,
            tickets: LoadTickets::new(),
        }
    }

    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    pub fn tickets(&self) -> &LoadTickets {
        &self.tickets
    }

    // ----- catalog -----

    /// Current catalog snapshot without touching the backend.
    pub fn catalog(&self) -> CatalogSnapshot {
        self.state.read().catalog.clone()
    }

    /// Fetch the full catalog and publish it as a new snapshot.
    ///
    /// On failure the previous snapshot is kept and marked
    /// [`LoadStatus::Failed`]. A response that lands after a newer load was
    /// issued is dropped.
    pub async fn load_catalog(&self) -> CatalogSnapshot {
        let ticket = self.tickets.issue(LoadKind::Catalog);
        self.state.write().catalog.status = LoadStatus::Loading;

        let outcome = self.catalog_source.list().await;

        if !self.tickets.is_current(ticket) {
            debug!(?ticket, "discarding superseded catalog load");
            return self.catalog();
        }

        let mut state = self.state.write();
        match outcome {
            Ok(items) => {
                let catalog = &mut state.catalog;
                catalog.items = Arc::from(items);
                catalog.generation += 1;
                catalog.status = LoadStatus::Ready;
                debug!(
                    generation = catalog.generation,
                    count = catalog.items.len(),
                    "catalog loaded"
                );
            }
            Err(err) => {
                warn!(error = %err, "failed to load catalog");
                state.catalog.status = LoadStatus::Failed(err.to_string());
            }
        }
        state.catalog.clone()
    }

    /// First `popular_count` entries of the current snapshot.
    pub fn popular(&self) -> Vec<Excursion> {
        let catalog = self.catalog();
        query::popular(&catalog.items, self.settings.popular_count)
    }

    /// Distinct locations of the current snapshot, first-seen order.
    pub fn locations(&self) -> Vec<String> {
        query::unique_locations(&self.catalog().items)
    }

    /// Fetch a single excursion for the detail view.
    ///
    /// Returns `None` when a newer detail load on this handle superseded this
    /// one. Backend failures degrade to [`DetailState::NotFound`].
    pub async fn load_excursion(&self, id: &ExcursionId) -> Option<DetailState> {
        let ticket = self.tickets.issue(LoadKind::Detail);
        let state = self.fetch_excursion(id).await;

        if !self.tickets.is_current(ticket) {
            debug!(%id, "discarding superseded detail load");
            return None;
        }
        Some(state)
    }

    /// Fetch a single excursion without taking a detail ticket.
    ///
    /// Used by callers that sequence their own loads, such as one
    /// [`DetailView`](crate::views::DetailView) among several sharing this
    /// handle.
    pub async fn fetch_excursion(&self, id: &ExcursionId) -> DetailState {
        match self.catalog_source.get(id).await {
            Ok(Some(excursion)) => DetailState::Ready(Arc::new(excursion)),
            Ok(None) => {
                debug!(%id, "excursion not found");
                DetailState::NotFound
            }
            Err(err) => {
                warn!(%id, error = %err, "failed to load excursion");
                DetailState::NotFound
            }
        }
    }

    // ----- collections / banner -----

    pub fn collections(&self) -> Arc<[Collection]> {
        Arc::clone(&self.state.read().collections)
    }

    /// Fetch collections; failures keep whatever was loaded before.
    pub async fn load_collections(&self) -> Arc<[Collection]> {
        let ticket = self.tickets.issue(LoadKind::Collections);
        let outcome = self.catalog_source.collections().await;

        if !self.tickets.is_current(ticket) {
            debug!(?ticket, "discarding superseded collections load");
            return self.collections();
        }

        match outcome {
            Ok(collections) => {
                let collections: Arc<[Collection]> = Arc::from(collections);
                self.state.write().collections = Arc::clone(&collections);
                collections
            }
            Err(err) => {
                warn!(error = %err, "failed to load collections");
                self.collections()
            }
        }
    }

    /// Cities shown in the home page picker.
    pub fn best_cities(&self) -> Vec<Excursion> {
        Collection::find(&self.collections(), BEST_CITIES_HANDLE)
            .map(|collection| collection.products.clone())
            .unwrap_or_default()
    }

    /// Resolve the home banner media into URLs.
    ///
    /// Reads the `banner` collection from already-loaded collections. A
    /// missing collection or a resolver failure yields an empty list; `None`
    /// means a newer banner load superseded this one.
    pub async fn resolve_banner(&self) -> Option<Vec<Url>> {
        let ticket = self.tickets.issue(LoadKind::Banner);
        let media_ids = Collection::find(&self.collections(), BANNER_HANDLE)
            .map(|collection| collection.banner_media_ids.clone())
            .unwrap_or_default();

        if media_ids.is_empty() {
            debug!("no banner media configured");
            return self.tickets.is_current(ticket).then(Vec::new);
        }

        let outcome = self.media.resolve(&media_ids).await;
        if !self.tickets.is_current(ticket) {
            debug!(?ticket, "discarding superseded banner load");
            return None;
        }

        Some(match outcome {
            Ok(urls) => urls,
            Err(err) => {
                warn!(error = %err, "failed to resolve banner media");
                Vec::new()
            }
        })
    }

    // ----- booking -----

    /// Add the booking to the hosted cart.
    ///
    /// On success the cart summary is updated and the checkout reference is
    /// returned so the caller can navigate to the cart. Failures are returned
    /// as-is; nothing is retried.
    pub async fn add_to_cart(
        &self,
        excursion: &Excursion,
        draft: &BookingDraft,
    ) -> Result<CheckoutRef> {
        let line = build_cart_line(excursion, draft)?;
        let current = self.state.read().cart.checkout.clone();

        let checkout = self
            .cart_gateway
            .add_item(&line, current.as_ref())
            .await?;

        let mut state = self.state.write();
        state.cart.lines.push(line);
        state.cart.checkout = Some(checkout.clone());
        info!(
            excursion = %excursion.id(),
            guests = draft.total_guests(),
            items = state.cart.item_count(),
            "added booking to cart"
        );
        Ok(checkout)
    }

    /// Compose the messaging enquiry using the configured contact number and
    /// the selected currency.
    pub fn enquiry(&self, excursion: &Excursion, draft: &BookingDraft) -> Result<Enquiry> {
        Enquiry::compose(
            excursion,
            draft,
            &self.settings.contact_number,
            &self.prices(),
        )
    }

    pub fn cart(&self) -> CartSummary {
        self.state.read().cart.clone()
    }

    /// Badge count: sum of line quantities.
    pub fn cart_count(&self) -> u32 {
        self.state.read().cart.item_count()
    }

    // ----- currency -----

    /// Formatter for the currently selected display currency.
    pub fn prices(&self) -> PriceFormatter {
        self.state.read().prices.clone()
    }

    pub fn currency_code(&self) -> String {
        self.state.read().prices.currency_code().to_string()
    }

    /// Switch the display currency. Codes are upper-cased; a blank code
    /// restores the configured currency.
    pub fn set_currency(&self, code: &str) {
        let code = code.trim();
        let prices = if code.is_empty() {
            self.settings.prices.clone()
        } else {
            PriceFormatter::new(code.to_ascii_uppercase())
        };
        debug!(currency = prices.currency_code(), "display currency changed");
        self.state.write().prices = prices;
    }

    // ----- session -----

    pub fn customer(&self) -> Option<Customer> {
        self.state.read().customer.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().customer.is_some()
    }

    /// Record a customer signed in by the auth backend.
    pub fn sign_in(&self, customer: Customer) {
        self.state.write().customer = Some(customer);
    }

    /// Forget the customer and their cart.
    pub fn sign_out(&self) {
        let mut state = self.state.write();
        state.customer = None;
        state.cart = CartSummary::default();
    }
}
