//! [`HttpStorefront`]: the catalog, media and cart contracts backed by a
//! hosted GraphQL storefront API.

mod queries;
mod wire;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use sandtrail_contracts::backend::{CartGateway, CatalogSource, MediaResolver};
use sandtrail_contracts::error::{BackendError, BackendResult};
use sandtrail_model::{CartLine, CheckoutRef, Collection, Excursion, ExcursionId, MediaId};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use wire::{
    CartCreateData, CartLineInput, CartLinesAddData, CollectionsData, GraphQlResponse,
    MediaData, ProductData, ProductsData,
};

/// Header carrying the public storefront token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

const CATALOG_PAGE_SIZE: u32 = 100;
const COLLECTION_PAGE_SIZE: u32 = 20;
const COLLECTION_PRODUCTS: u32 = 50;

/// GraphQL storefront client.
#[derive(Clone)]
pub struct HttpStorefront {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl fmt::Debug for HttpStorefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpStorefront")
            .field("endpoint", &self.endpoint.as_str())
            .field("has_token", &!self.access_token.is_empty())
            .finish()
    }
}

impl HttpStorefront {
    pub fn new(
        endpoint: Url,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| BackendError::Transport(format!("failed to build HTTP client: {err}")))?;

        info!("[HttpStorefront] Using storefront endpoint {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> BackendResult<T> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|err| BackendError::Decode(err.to_string()))?;
        body.into_data()
    }
}

fn transport_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Transport(format!("request timed out: {err}"))
    } else {
        BackendError::Transport(err.to_string())
    }
}

#[async_trait]
impl CatalogSource for HttpStorefront {
    async fn list(&self) -> BackendResult<Vec<Excursion>> {
        let data: ProductsData = self
            .execute(&queries::products(), json!({ "first": CATALOG_PAGE_SIZE }))
            .await?;
        let excursions = data.products.into_excursions();
        debug!(count = excursions.len(), "fetched catalog");
        Ok(excursions)
    }

    async fn get(&self, id: &ExcursionId) -> BackendResult<Option<Excursion>> {
        let data: ProductData = self
            .execute(&queries::product(), json!({ "id": id.as_str() }))
            .await?;
        data.product.map(|node| node.into_excursion()).transpose()
    }

    async fn collections(&self) -> BackendResult<Vec<Collection>> {
        let data: CollectionsData = self
            .execute(
                &queries::collections(),
                json!({ "first": COLLECTION_PAGE_SIZE, "products": COLLECTION_PRODUCTS }),
            )
            .await?;
        Ok(data
            .collections
            .edges
            .into_iter()
            .map(|edge| edge.node.into_collection())
            .collect())
    }
}

#[async_trait]
impl MediaResolver for HttpStorefront {
    async fn resolve(&self, ids: &[MediaId]) -> BackendResult<Vec<Url>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<&str> = ids.iter().map(MediaId::as_str).collect();
        let data: MediaData = self.execute(queries::MEDIA, json!({ "ids": ids })).await?;
        Ok(data.into_urls())
    }
}

#[async_trait]
impl CartGateway for HttpStorefront {
    async fn add_item(
        &self,
        line: &CartLine,
        current: Option<&CheckoutRef>,
    ) -> BackendResult<CheckoutRef> {
        let lines = vec![CartLineInput::from(line)];
        let payload = match current {
            Some(checkout) => {
                let data: CartLinesAddData = self
                    .execute(
                        queries::CART_LINES_ADD,
                        json!({ "cartId": checkout.id, "lines": lines }),
                    )
                    .await?;
                data.cart_lines_add
            }
            None => {
                let data: CartCreateData = self
                    .execute(queries::CART_CREATE, json!({ "lines": lines }))
                    .await?;
                data.cart_create
            }
        };
        payload.into_checkout()
    }
}
