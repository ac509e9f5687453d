//! Item detail page helpers.

use std::sync::Arc;

use sandtrail_model::Excursion;

/// Shown when the backend has no usable inclusions for an excursion.
pub const DEFAULT_INCLUSIONS: [&str; 3] =
    ["Refreshment drink", "Tea & Coffee", "Bottled water"];

/// Safety briefing linked from skydiving excursions.
pub const SKYDIVE_SAFETY_GUIDE: &str =
    "https://d1i3enf1i5tb1f.cloudfront.net/assets/pdf/SkydiveImportantInfo.pdf";

/// What the detail page can currently show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    NotFound,
    Ready(Arc<Excursion>),
}

impl DetailState {
    pub fn excursion(&self) -> Option<&Arc<Excursion>> {
        match self {
            DetailState::Ready(excursion) => Some(excursion),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }
}

/// Non-blank backend inclusions, or the house defaults when there are none.
pub fn display_inclusions(excursion: &Excursion) -> Vec<String> {
    let provided: Vec<String> = excursion
        .inclusions()
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect();

    if provided.is_empty() {
        DEFAULT_INCLUSIONS.iter().map(|s| s.to_string()).collect()
    } else {
        provided
    }
}

/// Safety guide for excursions that need one.
pub fn safety_guide(excursion: &Excursion) -> Option<&'static str> {
    excursion
        .title()
        .to_lowercase()
        .contains("skydive")
        .then_some(SKYDIVE_SAFETY_GUIDE)
}
