//! Response shapes of the storefront GraphQL API and their mapping into the
//! model.

use sandtrail_contracts::error::{BackendError, BackendResult};
use sandtrail_model::{
    CartLine, CheckoutRef, Collection, Excursion, ExcursionId, MediaId, Variant,
    VariantId,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    pub fn into_data(self) -> BackendResult<T> {
        if !self.errors.is_empty() {
            let messages: Vec<_> =
                self.errors.into_iter().map(|err| err.message).collect();
            return Err(BackendError::Rejected(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| BackendError::Decode("response carried no data".into()))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

impl Connection<ProductNode> {
    /// Products that fail to decode are logged and left out of the result.
    pub fn into_excursions(self) -> Vec<Excursion> {
        self.into_nodes()
            .filter_map(|node| {
                let id = node.id.clone();
                match node.into_excursion() {
                    Ok(excursion) => Some(excursion),
                    Err(err) => {
                        warn!(product = %id, "skipping undecodable product: {err}");
                        None
                    }
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Money {
    pub amount: String,
}

impl Money {
    fn value(&self) -> BackendResult<f64> {
        self.amount.trim().parse().map_err(|_| {
            BackendError::Decode(format!("invalid amount {:?}", self.amount))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PriceRange {
    pub min_variant_price: Money,
}

#[derive(Debug, Deserialize)]
pub(super) struct ImageNode {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct VariantNode {
    pub id: String,
    pub price: Money,
}

#[derive(Debug, Deserialize)]
pub(super) struct Metafield {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProductNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    pub price_range: PriceRange,
    pub compare_at_price_range: Option<PriceRange>,
    pub images: Connection<ImageNode>,
    pub variants: Connection<VariantNode>,
    /// Unset metafields come back as `null` entries.
    #[serde(default)]
    pub metafields: Vec<Option<Metafield>>,
}

impl ProductNode {
    fn metafield(&self, key: &str) -> Option<&str> {
        self.metafields
            .iter()
            .flatten()
            .find(|field| field.key == key)
            .map(|field| field.value.trim())
    }

    pub fn into_excursion(self) -> BackendResult<Excursion> {
        let price = self.price_range.min_variant_price.value()?;
        // A compare-at price of zero means "no discount".
        let original_price = match &self.compare_at_price_range {
            Some(range) => Some(range.min_variant_price.value()?)
                .filter(|original| *original > 0.0),
            None => None,
        };
        let rating = self
            .metafield("rating")
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(0.0);
        let reviews_count = self
            .metafield("reviews_count")
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(0);
        let location = self.metafield("location").unwrap_or_default().to_string();
        let duration = self.metafield("duration").unwrap_or_default().to_string();
        let group_size = self.metafield("group_size").unwrap_or_default().to_string();
        let inclusions = self
            .metafield("inclusions")
            .map(parse_list)
            .unwrap_or_default();

        let id = ExcursionId::new(self.id).map_err(|err| BackendError::Decode(err.to_string()))?;
        let mut builder = Excursion::builder(id, self.title, price)
            .description(self.description)
            .description_html(self.description_html)
            .original_price(original_price)
            .images(self.images.into_nodes().map(|image| image.url))
            .location(location)
            .duration(duration)
            .rating(rating)
            .reviews_count(reviews_count)
            .group_size(group_size)
            .inclusions(inclusions);
        for variant in self.variants.into_nodes() {
            builder = builder.variant(Variant {
                price: variant.price.value()?,
                id: VariantId(variant.id),
            });
        }
        builder
            .build()
            .map_err(|err| BackendError::Decode(err.to_string()))
    }
}

/// List metafields are either a JSON array or one entry per line.
fn parse_list(value: &str) -> Vec<String> {
    if value.starts_with('[')
        && let Ok(items) = serde_json::from_str::<Vec<String>>(value)
    {
        return items;
    }
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Deserialize)]
pub(super) struct ProductsData {
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProductData {
    pub product: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ValueField {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CollectionNode {
    pub handle: String,
    pub title: String,
    pub metafield: Option<ValueField>,
    pub products: Connection<ProductNode>,
}

impl CollectionNode {
    pub fn into_collection(self) -> Collection {
        let banner_media_ids = self
            .metafield
            .map(|field| parse_list(field.value.trim()))
            .unwrap_or_default()
            .into_iter()
            .map(MediaId)
            .collect();
        Collection {
            handle: self.handle,
            title: self.title,
            products: self.products.into_excursions(),
            banner_media_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CollectionsData {
    pub collections: Connection<CollectionNode>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MediaNode {
    pub image: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MediaData {
    pub nodes: Vec<Option<MediaNode>>,
}

impl MediaData {
    /// Unknown ids and non-image media are skipped.
    pub fn into_urls(self) -> Vec<Url> {
        self.nodes
            .into_iter()
            .flatten()
            .filter_map(|node| node.image)
            .filter_map(|image| Url::parse(&image.url).ok())
            .collect()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartLineInput {
    pub merchandise_id: String,
    pub quantity: u32,
    pub attributes: Vec<AttributeInput>,
}

#[derive(Debug, Serialize)]
pub(super) struct AttributeInput {
    pub key: String,
    pub value: String,
}

impl From<&CartLine> for CartLineInput {
    fn from(line: &CartLine) -> Self {
        Self {
            merchandise_id: line.variant_id.as_str().to_string(),
            quantity: line.quantity,
            attributes: line
                .attributes
                .iter()
                .map(|(key, value)| AttributeInput {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartNode {
    pub id: String,
    pub checkout_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartPayload {
    pub cart: Option<CartNode>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

impl CartPayload {
    pub fn into_checkout(self) -> BackendResult<CheckoutRef> {
        if !self.user_errors.is_empty() {
            let messages: Vec<_> =
                self.user_errors.into_iter().map(|err| err.message).collect();
            return Err(BackendError::Rejected(messages.join("; ")));
        }
        let cart = self
            .cart
            .ok_or_else(|| BackendError::Decode("cart missing from payload".into()))?;
        Ok(CheckoutRef {
            id: cart.id,
            web_url: cart.checkout_url.and_then(|url| Url::parse(&url).ok()),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartCreateData {
    pub cart_create: CartPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartLinesAddData {
    pub cart_lines_add: CartPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_json() -> serde_json::Value {
        json!({
            "id": "gid://shopify/Product/42",
            "title": "Evening Desert Safari",
            "description": "Dune bashing and BBQ dinner",
            "descriptionHtml": "<p>Dune bashing and BBQ dinner</p>",
            "priceRange": { "minVariantPrice": { "amount": "250.0", "currencyCode": "AED" } },
            "compareAtPriceRange": { "minVariantPrice": { "amount": "0.0", "currencyCode": "AED" } },
            "images": { "edges": [
                { "node": { "url": "https://cdn.example.com/a.jpg" } },
                { "node": { "url": "https://cdn.example.com/b.jpg" } }
            ] },
            "variants": { "edges": [
                { "node": { "id": "gid://shopify/ProductVariant/7", "price": { "amount": "250.0", "currencyCode": "AED" } } }
            ] },
            "metafields": [
                { "key": "location", "value": "Dubai" },
                { "key": "duration", "value": "6 hours" },
                { "key": "rating", "value": "4.8" },
                { "key": "reviews_count", "value": "128" },
                null,
                { "key": "inclusions", "value": "[\"BBQ dinner\",\"Henna\"]" }
            ]
        })
    }

    #[test]
    fn product_maps_into_excursion() {
        let node: ProductNode = serde_json::from_value(product_json()).unwrap();
        let excursion = node.into_excursion().unwrap();

        assert_eq!(excursion.id().as_str(), "gid://shopify/Product/42");
        assert_eq!(excursion.price(), 250.0);
        assert_eq!(excursion.original_price(), None);
        assert_eq!(excursion.location(), "Dubai");
        assert_eq!(excursion.rating(), 4.8);
        assert_eq!(excursion.reviews_count(), 128);
        assert_eq!(excursion.group_size(), "");
        assert_eq!(excursion.images().len(), 2);
        assert_eq!(excursion.inclusions(), ["BBQ dinner", "Henna"]);
        assert_eq!(excursion.variants()[0].id.as_str(), "gid://shopify/ProductVariant/7");
    }

    #[test]
    fn out_of_range_rating_is_a_decode_error() {
        let mut value = product_json();
        value["metafields"][2] = json!({ "key": "rating", "value": "7" });
        let node: ProductNode = serde_json::from_value(value).unwrap();

        assert!(matches!(node.into_excursion(), Err(BackendError::Decode(_))));
    }

    #[test]
    fn list_metafields_accept_lines() {
        assert_eq!(parse_list("Water\n\n  Tea \n"), ["Water", "Tea"]);
        assert_eq!(parse_list("[\"a\",\"b\"]"), ["a", "b"]);
    }

    #[test]
    fn graphql_errors_become_rejections() {
        let response: GraphQlResponse<ProductsData> = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "Throttled" }]
        }))
        .unwrap();

        assert_eq!(
            response.into_data().unwrap_err(),
            BackendError::Rejected("Throttled".into())
        );
    }

    #[test]
    fn media_skips_missing_nodes() {
        let data: MediaData = serde_json::from_value(json!({
            "nodes": [
                { "image": { "url": "https://cdn.example.com/banner-1.jpg" } },
                null,
                { "image": null }
            ]
        }))
        .unwrap();

        let urls = data.into_urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].as_str(), "https://cdn.example.com/banner-1.jpg");
    }

    #[test]
    fn cart_user_errors_are_rejections() {
        let payload: CartPayload = serde_json::from_value(json!({
            "cart": null,
            "userErrors": [{ "field": ["lines"], "message": "Variant is sold out" }]
        }))
        .unwrap();

        assert_eq!(
            payload.into_checkout().unwrap_err(),
            BackendError::Rejected("Variant is sold out".into())
        );
    }

    #[test]
    fn collection_reads_banner_media() {
        let node: CollectionNode = serde_json::from_value(json!({
            "handle": "banner",
            "title": "Banner",
            "metafield": { "value": "[\"gid://shopify/MediaImage/1\",\"gid://shopify/MediaImage/2\"]" },
            "products": { "edges": [] }
        }))
        .unwrap();

        let collection = node.into_collection();
        assert_eq!(collection.banner_media_ids.len(), 2);
        assert_eq!(collection.banner_media_ids[0].as_str(), "gid://shopify/MediaImage/1");
    }

    #[test]
    fn undecodable_products_are_skipped() {
        let mut unparsable = product_json();
        unparsable["id"] = json!("gid://shopify/Product/2");
        unparsable["priceRange"]["minVariantPrice"]["amount"] = json!("call us");
        let mut out_of_range = product_json();
        out_of_range["id"] = json!("gid://shopify/Product/3");
        out_of_range["metafields"][2] = json!({ "key": "rating", "value": "5.5" });

        let data: ProductsData = serde_json::from_value(json!({
            "products": { "edges": [
                { "node": product_json() },
                { "node": unparsable },
                { "node": out_of_range }
            ] }
        }))
        .unwrap();

        let excursions = data.products.into_excursions();
        assert_eq!(excursions.len(), 1);
        assert_eq!(excursions[0].id().as_str(), "gid://shopify/Product/42");
    }

    #[test]
    fn collection_keeps_decodable_products() {
        let mut broken = product_json();
        broken["metafields"][2] = json!({ "key": "rating", "value": "9" });
        let node: CollectionNode = serde_json::from_value(json!({
            "handle": "best-cities-to-visit",
            "title": "Best cities",
            "metafield": null,
            "products": { "edges": [{ "node": product_json() }, { "node": broken }] }
        }))
        .unwrap();

        let collection = node.into_collection();
        assert_eq!(collection.products.len(), 1);
        assert!(collection.banner_media_ids.is_empty());
    }
}
