use std::collections::BTreeMap;

use sandtrail_model::{CartLine, Excursion};

use crate::booking::draft::BookingDraft;
use crate::error::{Result, StorefrontError};

/// Build the hosted-cart line for booking `excursion` with `draft`.
///
/// The cart is quantity-per-guest on the first variant; the booking date and
/// guest split travel as line attributes.
pub fn build_cart_line(
    excursion: &Excursion,
    draft: &BookingDraft,
) -> Result<CartLine> {
    let variant = excursion.variants().first().ok_or_else(|| {
        StorefrontError::InvalidInput(format!(
            "excursion {} has no purchasable variant",
            excursion.id()
        ))
    })?;

    let date = draft.date().format("%Y-%m-%d").to_string();
    let total_guests = draft.total_guests();

    let mut attributes = BTreeMap::new();
    attributes.insert("date".to_string(), date.clone());
    attributes.insert("adults".to_string(), draft.adults().to_string());
    attributes.insert("children".to_string(), draft.children().to_string());
    attributes.insert("totalGuests".to_string(), total_guests.to_string());

    Ok(CartLine {
        variant_id: variant.id.clone(),
        quantity: total_guests,
        title: format!("{} - {}", excursion.title(), date),
        unit_price: excursion.price(),
        image: excursion.cover_image().map(str::to_string),
        product_id: excursion.id().clone(),
        attributes,
    })
}
