//! Excursion records as served by the commerce backend.
//!
//! Records are read-only once built. [`ExcursionBuilder::build`] enforces the
//! two numeric invariants the rest of the storefront relies on: a finite,
//! non-negative price and a rating inside `[0, 5]`.

use crate::error::{ModelError, Result};
use crate::ids::{ExcursionId, VariantId};

/// Upper bound of the review scale.
pub const MAX_RATING: f64 = 5.0;

/// A purchasable variant of an excursion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub id: VariantId,
    pub price: f64,
}

/// A bookable tour or activity.
///
/// Deserialized records go through the same checks as
/// [`ExcursionBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "de::RawExcursion"))]
pub struct Excursion {
    id: ExcursionId,
    title: String,
    description: String,
    description_html: String,
    price: f64,
    original_price: Option<f64>,
    images: Vec<String>,
    location: String,
    duration: String,
    rating: f64,
    reviews_count: u32,
    group_size: String,
    variants: Vec<Variant>,
    inclusions: Vec<String>,
}

impl Excursion {
    pub fn builder(
        id: ExcursionId,
        title: impl Into<String>,
        price: f64,
    ) -> ExcursionBuilder {
        ExcursionBuilder::new(id, title, price)
    }

    pub fn id(&self) -> &ExcursionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn description_html(&self) -> &str {
        &self.description_html
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn original_price(&self) -> Option<f64> {
        self.original_price
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// First image, used as the card thumbnail and cart line image.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn reviews_count(&self) -> u32 {
        self.reviews_count
    }

    pub fn group_size(&self) -> &str {
        &self.group_size
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn inclusions(&self) -> &[String] {
        &self.inclusions
    }

    /// Discount shown as a strike-through price, if the backend supplied a
    /// higher original price.
    pub fn discount(&self) -> Option<f64> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }
}

/// Incremental constructor for [`Excursion`].
#[derive(Debug, Clone)]
pub struct ExcursionBuilder {
    inner: Excursion,
}

impl ExcursionBuilder {
    pub fn new(id: ExcursionId, title: impl Into<String>, price: f64) -> Self {
        Self {
            inner: Excursion {
                id,
                title: title.into(),
                description: String::new(),
                description_html: String::new(),
                price,
                original_price: None,
                images: Vec::new(),
                location: String::new(),
                duration: String::new(),
                rating: 0.0,
                reviews_count: 0,
                group_size: String::new(),
                variants: Vec::new(),
                inclusions: Vec::new(),
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    pub fn description_html(mut self, html: impl Into<String>) -> Self {
        self.inner.description_html = html.into();
        self
    }

    pub fn original_price(mut self, original_price: Option<f64>) -> Self {
        self.inner.original_price = original_price;
        self
    }

    pub fn images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.inner.location = location.into();
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.inner.duration = duration.into();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.inner.rating = rating;
        self
    }

    pub fn reviews_count(mut self, reviews_count: u32) -> Self {
        self.inner.reviews_count = reviews_count;
        self
    }

    pub fn group_size(mut self, group_size: impl Into<String>) -> Self {
        self.inner.group_size = group_size.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.inner.variants.push(variant);
        self
    }

    pub fn inclusions<I, S>(mut self, inclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.inclusions =
            inclusions.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<Excursion> {
        let excursion = self.inner;
        if !excursion.price.is_finite() || excursion.price < 0.0 {
            return Err(ModelError::InvalidExcursion(format!(
                "{}: price must be a non-negative number, got {}",
                excursion.id, excursion.price
            )));
        }
        if let Some(original) = excursion.original_price
            && (!original.is_finite() || original < 0.0)
        {
            return Err(ModelError::InvalidExcursion(format!(
                "{}: original price must be a non-negative number, got {}",
                excursion.id, original
            )));
        }
        if !(0.0..=MAX_RATING).contains(&excursion.rating) {
            return Err(ModelError::InvalidExcursion(format!(
                "{}: rating must be within [0, {MAX_RATING}], got {}",
                excursion.id, excursion.rating
            )));
        }
        Ok(excursion)
    }
}

#[cfg(feature = "serde")]
mod de {
    use serde::Deserialize;

    use super::{Excursion, ExcursionBuilder, Variant};
    use crate::error::ModelError;
    use crate::ids::ExcursionId;

    #[derive(Deserialize)]
    pub(super) struct RawExcursion {
        id: ExcursionId,
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        description_html: String,
        price: f64,
        #[serde(default)]
        original_price: Option<f64>,
        #[serde(default)]
        images: Vec<String>,
        #[serde(default)]
        location: String,
        #[serde(default)]
        duration: String,
        #[serde(default)]
        rating: f64,
        #[serde(default)]
        reviews_count: u32,
        #[serde(default)]
        group_size: String,
        #[serde(default)]
        variants: Vec<Variant>,
        #[serde(default)]
        inclusions: Vec<String>,
    }

    impl TryFrom<RawExcursion> for Excursion {
        type Error = ModelError;

        fn try_from(raw: RawExcursion) -> Result<Self, Self::Error> {
            let mut builder = ExcursionBuilder::new(raw.id, raw.title, raw.price)
                .description(raw.description)
                .description_html(raw.description_html)
                .original_price(raw.original_price)
                .images(raw.images)
                .location(raw.location)
                .duration(raw.duration)
                .rating(raw.rating)
                .reviews_count(raw.reviews_count)
                .group_size(raw.group_size)
                .inclusions(raw.inclusions);
            for variant in raw.variants {
                builder = builder.variant(variant);
            }
            builder.build()
        }
    }
}
