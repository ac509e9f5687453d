use std::fmt;
use std::str::FromStr;

/// Ordering applied to a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SortKey {
    #[default]
    RatingDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[RatingDesc, PriceAsc, PriceDesc]
    }

    /// Value carried in the listing's `sort` selector.
    pub fn query_value(&self) -> &'static str {
        match self {
            SortKey::RatingDesc => "rating",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::RatingDesc => "Highest Rated",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }

    /// Parse a selector value, falling back to the default ordering for
    /// anything unrecognised.
    pub fn from_query_lossy(value: &str) -> SortKey {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "rating" | "rating-desc" => Ok(SortKey::RatingDesc),
            "price-low" | "price-asc" => Ok(SortKey::PriceAsc),
            "price-high" | "price-desc" => Ok(SortKey::PriceDesc),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

/// Search, destination and ordering selected on the listing page.
///
/// Lives for a single page view. An empty location means "all destinations".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterCriteria {
    pub search: String,
    /// Trimmed and never empty; only set through [`FilterCriteria::set_location`].
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::location"))]
    location: Option<String>,
    pub sort: SortKey,
}

fn normalize_location(location: Option<&str>) -> Option<String> {
    location
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(feature = "serde")]
mod de {
    use serde::{Deserialize, Deserializer};

    pub(super) fn location<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(super::normalize_location(raw.as_deref()))
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria for a page reached with `?location=<value>`.
    pub fn seeded(location: Option<&str>) -> Self {
        let mut criteria = Self::default();
        criteria.set_location(location);
        criteria
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_location(mut self, location: impl AsRef<str>) -> Self {
        self.set_location(Some(location.as_ref()));
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.location = normalize_location(location);
    }

    /// Selected location, if any. Empty strings never reach this point.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Number of narrowing filters in effect (sort order is not counted).
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.has_search()) + usize::from(self.location.is_some())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_values_fall_back_to_rating() {
        assert_eq!(SortKey::from_query_lossy("newest"), SortKey::RatingDesc);
        assert_eq!(SortKey::from_query_lossy("price-high"), SortKey::PriceDesc);
    }

    #[test]
    fn query_values_parse_back() {
        for key in SortKey::all() {
            assert_eq!(key.query_value().parse::<SortKey>().unwrap(), *key);
        }
    }

    #[test]
    fn blank_location_means_all() {
        let criteria = FilterCriteria::seeded(Some("   "));
        assert_eq!(criteria.location(), None);
        assert_eq!(criteria.active_filter_count(), 0);
    }

    #[test]
    fn location_is_trimmed_on_every_path() {
        let criteria = FilterCriteria::new().with_location("  Dubai ");
        assert_eq!(criteria.location(), Some("Dubai"));

        let mut criteria = criteria;
        criteria.set_location(Some(""));
        assert_eq!(criteria.location(), None);
        assert_eq!(FilterCriteria::new().with_location("\t").location(), None);
    }

    #[test]
    fn active_filters_count_search_and_location() {
        let mut criteria = FilterCriteria::new()
            .with_search("dune")
            .with_location("Dubai")
            .with_sort(SortKey::PriceAsc);
        assert_eq!(criteria.active_filter_count(), 2);

        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
