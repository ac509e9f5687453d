#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use sandtrail_contracts::prelude::*;
use sandtrail_core::storefront::{Storefront, StorefrontSettings};
use sandtrail_model::prelude::*;
use tokio::sync::Notify;
use url::Url;

pub fn excursion(id: u32, title: &str, location: &str, price: f64, rating: f64) -> Excursion {
    Excursion::builder(
        ExcursionId::from_route(&id.to_string()).unwrap(),
        title,
        price,
    )
    .description(format!("{title} with pickup"))
    .location(location)
    .rating(rating)
    .images([
        format!("https://cdn.example.com/{id}/1.jpg"),
        format!("https://cdn.example.com/{id}/2.jpg"),
    ])
    .variant(Variant {
        id: VariantId(format!("gid://shopify/ProductVariant/{id}")),
        price,
    })
    .build()
    .unwrap()
}

/// `[Dubai, Dubai, Abu Dhabi, Sharjah, Dubai]`
pub fn emirates_catalog() -> Vec<Excursion> {
    vec![
        excursion(1, "Evening Desert Safari", "Dubai", 250.0, 4.6),
        excursion(2, "Dune Buggy Adventure", "Dubai", 600.0, 4.9),
        excursion(3, "Grand Mosque Tour", "Abu Dhabi", 180.0, 4.7),
        excursion(4, "Mleiha Stargazing", "Sharjah", 320.0, 4.4),
        excursion(5, "Hot Air Balloon", "Dubai", 1250.0, 4.8),
    ]
}

/// Scripted response, optionally held until the test opens its gate.
struct Scripted<T> {
    result: BackendResult<T>,
    gate: Option<Gate>,
}

#[derive(Clone)]
pub struct Gate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

async fn play<T>(queue: &Mutex<VecDeque<Scripted<T>>>, fallback: BackendResult<T>) -> BackendResult<T> {
    let next = queue.lock().pop_front();
    match next {
        Some(Scripted { result, gate }) => {
            if let Some(gate) = gate {
                gate.entered.notify_one();
                gate.release.notified().await;
            }
            result
        }
        None => fallback,
    }
}

#[derive(Default)]
pub struct StubCatalog {
    pub items: Mutex<Vec<Excursion>>,
    pub collections: Mutex<Vec<Collection>>,
    list_script: Mutex<VecDeque<Scripted<Vec<Excursion>>>>,
    get_script: Mutex<VecDeque<Scripted<Option<Excursion>>>>,
    pub fail_get: Mutex<Option<BackendError>>,
}

impl std::fmt::Debug for StubCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubCatalog").finish_non_exhaustive()
    }
}

impl StubCatalog {
    pub fn with_items(items: Vec<Excursion>) -> Self {
        let stub = Self::default();
        *stub.items.lock() = items;
        stub
    }

    pub fn script_list(&self, result: BackendResult<Vec<Excursion>>, gate: Option<Gate>) {
        self.list_script.lock().push_back(Scripted { result, gate });
    }

    pub fn script_get(&self, result: BackendResult<Option<Excursion>>, gate: Option<Gate>) {
        self.get_script.lock().push_back(Scripted { result, gate });
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    async fn list(&self) -> BackendResult<Vec<Excursion>> {
        let fallback = Ok(self.items.lock().clone());
        play(&self.list_script, fallback).await
    }

    async fn get(&self, id: &ExcursionId) -> BackendResult<Option<Excursion>> {
        if let Some(err) = self.fail_get.lock().clone() {
            return Err(err);
        }
        let fallback = Ok(self.items.lock().iter().find(|item| item.id() == id).cloned());
        play(&self.get_script, fallback).await
    }

    async fn collections(&self) -> BackendResult<Vec<Collection>> {
        Ok(self.collections.lock().clone())
    }
}

#[derive(Debug, Default)]
pub struct StubMedia {
    pub fail: Mutex<Option<BackendError>>,
    pub calls: Mutex<Vec<Vec<MediaId>>>,
}

#[async_trait]
impl MediaResolver for StubMedia {
    async fn resolve(&self, ids: &[MediaId]) -> BackendResult<Vec<Url>> {
        self.calls.lock().push(ids.to_vec());
        if let Some(err) = self.fail.lock().clone() {
            return Err(err);
        }
        Ok(ids
            .iter()
            .map(|id| {
                let tail = id.as_str().rsplit('/').next().unwrap_or_default();
                Url::parse(&format!("https://cdn.example.com/banner/{tail}.jpg")).unwrap()
            })
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct StubCart {
    pub fail: Mutex<Option<BackendError>>,
    pub submitted: Mutex<Vec<(CartLine, Option<CheckoutRef>)>>,
}

#[async_trait]
impl CartGateway for StubCart {
    async fn add_item(
        &self,
        line: &CartLine,
        current: Option<&CheckoutRef>,
    ) -> BackendResult<CheckoutRef> {
        self.submitted.lock().push((line.clone(), current.cloned()));
        if let Some(err) = self.fail.lock().clone() {
            return Err(err);
        }
        Ok(current.cloned().unwrap_or_else(|| CheckoutRef {
            id: "gid://shopify/Cart/1".into(),
            web_url: Url::parse("https://shop.example.com/cart/c/1").ok(),
        }))
    }
}

pub struct Harness {
    pub catalog: Arc<StubCatalog>,
    pub media: Arc<StubMedia>,
    pub cart: Arc<StubCart>,
    pub storefront: Arc<Storefront>,
}

impl Harness {
    pub fn new(items: Vec<Excursion>) -> Self {
        Self::with_settings(items, StorefrontSettings {
            contact_number: "+971 50 123 4567".into(),
            ..StorefrontSettings::default()
        })
    }

    pub fn with_settings(items: Vec<Excursion>, settings: StorefrontSettings) -> Self {
        let catalog = Arc::new(StubCatalog::with_items(items));
        let media = Arc::new(StubMedia::default());
        let cart = Arc::new(StubCart::default());
        let storefront = Arc::new(Storefront::new(
            catalog.clone(),
            media.clone(),
            cart.clone(),
            settings,
        ));
        Self {
            catalog,
            media,
            cart,
            storefront,
        }
    }
}

pub fn banner_collection(media: &[&str]) -> Collection {
    Collection {
        handle: BANNER_HANDLE.into(),
        title: "Banner".into(),
        products: Vec::new(),
        banner_media_ids: media.iter().map(|id| MediaId::from(*id)).collect(),
    }
}
