use std::collections::BTreeMap;

use url::Url;

use crate::ids::{ExcursionId, VariantId};

/// One line submitted to the hosted cart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartLine {
    pub variant_id: VariantId,
    pub quantity: u32,
    pub title: String,
    pub unit_price: f64,
    pub image: Option<String>,
    pub product_id: ExcursionId,
    /// Free-form attributes echoed back on the order (booking date, guests).
    pub attributes: BTreeMap<String, String>,
}

/// Handle to the hosted checkout the cart lines live in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckoutRef {
    pub id: String,
    pub web_url: Option<Url>,
}

/// Local mirror of the cart contents used by the navigation badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub checkout: Option<CheckoutRef>,
}

impl CartSummary {
    /// Total number of units across lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
