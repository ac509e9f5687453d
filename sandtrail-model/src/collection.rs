use crate::excursion::Excursion;
use crate::ids::MediaId;

/// Handle of the collection whose media feeds the home banner.
pub const BANNER_HANDLE: &str = "banner";

/// Handle of the curated "best cities to visit" collection.
pub const BEST_CITIES_HANDLE: &str = "best-cities-to-visit";

/// Curated group of excursions as configured in the backend.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection {
    pub handle: String,
    pub title: String,
    pub products: Vec<Excursion>,
    pub banner_media_ids: Vec<MediaId>,
}

impl Collection {
    /// Find a collection by handle in a backend snapshot.
    pub fn find<'a>(
        collections: &'a [Collection],
        handle: &str,
    ) -> Option<&'a Collection> {
        collections.iter().find(|collection| collection.handle == handle)
    }
}
