//! GraphQL documents sent to the storefront endpoint.

const PRODUCT_FIELDS: &str = r#"
fragment ProductFields on Product {
  id
  title
  description
  descriptionHtml
  priceRange { minVariantPrice { amount currencyCode } }
  compareAtPriceRange { minVariantPrice { amount currencyCode } }
  images(first: 10) { edges { node { url } } }
  variants(first: 5) { edges { node { id price { amount currencyCode } } } }
  metafields(identifiers: [
    { namespace: "custom", key: "location" }
    { namespace: "custom", key: "duration" }
    { namespace: "custom", key: "rating" }
    { namespace: "custom", key: "reviews_count" }
    { namespace: "custom", key: "group_size" }
    { namespace: "custom", key: "inclusions" }
  ]) { key value }
}
"#;

pub(super) fn products() -> String {
    format!(
        "query Products($first: Int!) {{ products(first: $first) {{ edges {{ node {{ ...ProductFields }} }} }} }}{PRODUCT_FIELDS}"
    )
}

pub(super) fn product() -> String {
    format!(
        "query Product($id: ID!) {{ product(id: $id) {{ ...ProductFields }} }}{PRODUCT_FIELDS}"
    )
}

pub(super) fn collections() -> String {
    format!(
        "query Collections($first: Int!, $products: Int!) {{ collections(first: $first) {{ edges {{ node {{ handle title metafield(namespace: \"custom\", key: \"banner_media\") {{ value }} products(first: $products) {{ edges {{ node {{ ...ProductFields }} }} }} }} }} }} }}{PRODUCT_FIELDS}"
    )
}

pub(super) const MEDIA: &str = r#"
query Media($ids: [ID!]!) {
  nodes(ids: $ids) {
    ... on MediaImage { image { url } }
  }
}
"#;

pub(super) const CART_CREATE: &str = r#"
mutation CartCreate($lines: [CartLineInput!]!) {
  cartCreate(input: { lines: $lines }) {
    cart { id checkoutUrl }
    userErrors { field message }
  }
}
"#;

pub(super) const CART_LINES_ADD: &str = r#"
mutation CartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!) {
  cartLinesAdd(cartId: $cartId, lines: $lines) {
    cart { id checkoutUrl }
    userErrors { field message }
  }
}
"#;
