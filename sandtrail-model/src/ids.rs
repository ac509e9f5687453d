use crate::error::ModelError;

/// Resource prefix used by the storefront for product global ids.
pub const PRODUCT_GID_PREFIX: &str = "gid://shopify/Product/";

/// Strongly typed id for excursions.
///
/// Always stored in global-id form (`gid://shopify/Product/<n>`). Routes use
/// the bare numeric tail, see [`ExcursionId::route_segment`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcursionId(String);

impl ExcursionId {
    /// Wrap an id exactly as the backend returned it.
    pub fn new(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId("empty excursion id".into()));
        }
        Ok(ExcursionId(trimmed.to_string()))
    }

    /// Accept either a route segment (`12345`) or a global id and normalise
    /// to the global form.
    pub fn from_route(segment: &str) -> Result<Self, ModelError> {
        let trimmed = segment.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId("empty route segment".into()));
        }
        if trimmed.starts_with("gid://") {
            return Self::new(trimmed);
        }
        Ok(ExcursionId(format!("{PRODUCT_GID_PREFIX}{trimmed}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing path component used in `/excursion/<id>` routes.
    pub fn route_segment(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl AsRef<str> for ExcursionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExcursionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id of a media node (banner image, gallery image) awaiting URL resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaId(pub String);

impl MediaId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MediaId {
    fn from(value: &str) -> Self {
        MediaId(value.to_string())
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Purchasable variant id; the cart operates on variants, not products.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantId(pub String);

impl VariantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VariantId {
    fn from(value: &str) -> Self {
        VariantId(value.to_string())
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
